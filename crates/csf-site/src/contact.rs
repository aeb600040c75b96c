//! Contact form state. Submissions are accepted and discarded: nothing is
//! validated, stored or transmitted.

use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnquiryType {
    CourseInfo,
    Admissions,
    International,
    Agents,
    Fees,
    CurrentStudent,
    Other,
}

impl EnquiryType {
    pub const ALL: [Self; 7] = [
        Self::CourseInfo,
        Self::Admissions,
        Self::International,
        Self::Agents,
        Self::Fees,
        Self::CurrentStudent,
        Self::Other,
    ];

    /// Form value posted by the `<select>`.
    pub const fn value(self) -> &'static str {
        match self {
            Self::CourseInfo => "course-info",
            Self::Admissions => "admissions",
            Self::International => "international",
            Self::Agents => "agents",
            Self::Fees => "fees",
            Self::CurrentStudent => "current-student",
            Self::Other => "other",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::CourseInfo => "Course Information",
            Self::Admissions => "Admissions",
            Self::International => "International Students",
            Self::Agents => "Education Agents",
            Self::Fees => "Fees & Scholarships",
            Self::CurrentStudent => "Current Student Support",
            Self::Other => "Other",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.value() == value.trim())
    }
}

/// Posted form fields. Anything missing or unrecognised falls back to its
/// default so a submission is never rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactSubmission {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    #[serde(deserialize_with = "de_enquiry_type")]
    pub enquiry_type: Option<EnquiryType>,
    pub message: String,
}

fn de_enquiry_type<'de, D>(deserializer: D) -> Result<Option<EnquiryType>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(EnquiryType::from_value))
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ContactView {
    #[default]
    Editing,
    /// Terminal; the confirmation shows none of the submitted values.
    Submitted,
}

impl ContactView {
    pub fn submit(self, submission: ContactSubmission) -> Self {
        tracing::info!(
            enquiry_type = submission.enquiry_type.map(EnquiryType::value).unwrap_or("unspecified"),
            "contact form submitted; not forwarded"
        );
        drop(submission);
        Self::Submitted
    }

    pub fn is_submitted(self) -> bool {
        self == Self::Submitted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enquiry_values_round_trip_through_lookup() {
        for kind in EnquiryType::ALL {
            assert_eq!(EnquiryType::from_value(kind.value()), Some(kind));
        }
        assert_eq!(EnquiryType::from_value(""), None);
        assert_eq!(EnquiryType::from_value("sales"), None);
    }

    #[test]
    fn submission_tolerates_missing_and_unknown_fields() {
        let parsed: ContactSubmission = serde_json::from_str(
            r#"{"firstName": "Jane", "enquiryType": "", "favouriteColour": "blue"}"#,
        )
        .expect("lenient parse");

        assert_eq!(parsed.first_name, "Jane");
        assert_eq!(parsed.enquiry_type, None);
        assert!(parsed.message.is_empty());
    }

    #[test]
    fn submit_always_reaches_submitted() {
        let empty = ContactView::Editing.submit(ContactSubmission::default());
        assert!(empty.is_submitted());

        let filled = ContactView::default().submit(ContactSubmission {
            first_name: "Jane".into(),
            email: "not-an-email".into(),
            enquiry_type: Some(EnquiryType::Fees),
            ..ContactSubmission::default()
        });
        assert_eq!(filled, ContactView::Submitted);
        assert_eq!(filled.submit(ContactSubmission::default()), ContactView::Submitted);
    }
}
