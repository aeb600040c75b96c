use super::{HeroCopy, LabeledValue};

pub const TITLE: &str = "Contact Us";
pub const DESCRIPTION: &str = "Get in touch with the College of Sport & Fitness Australia. Contact us for course enquiries, admissions information, or student support.";

pub const HERO: HeroCopy = HeroCopy::inner(
    "Contact Us",
    "Get in Touch",
    "Have a question about our courses or admissions? We'd love to hear from you.",
);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Channel {
    pub label: &'static str,
    /// May span several lines; rendered with line breaks preserved.
    pub value: &'static str,
    pub href: Option<&'static str>,
}

pub const ADDRESS_LINES: [&str; 3] = ["123 Fitness Street", "Sydney NSW 2000", "Australia"];
pub const PHONE: &str = "+61 2 9999 9999";
pub const PHONE_HREF: &str = "tel:+61299999999";
pub const EMAIL: &str = "info@csf.edu.au";

pub const CHANNELS: [Channel; 4] = [
    Channel {
        label: "Address",
        value: "123 Fitness Street\nSydney NSW 2000\nAustralia",
        href: None,
    },
    Channel {
        label: "Phone",
        value: PHONE,
        href: Some(PHONE_HREF),
    },
    Channel {
        label: "General Enquiries",
        value: EMAIL,
        href: Some("mailto:info@csf.edu.au"),
    },
    Channel {
        label: "Agent Enquiries",
        value: "agents@csf.edu.au",
        href: Some("mailto:agents@csf.edu.au"),
    },
];

pub const OFFICE_HOURS: [LabeledValue; 3] = [
    LabeledValue::new("Monday – Friday", "9:00am – 5:00pm"),
    LabeledValue::new("Saturday", "10:00am – 2:00pm"),
    LabeledValue::new("Sunday", "Closed"),
];

pub const CONFIRMATION_HEADING: &str = "Message Sent!";
pub const CONFIRMATION_BODY: &str = "Thank you for your enquiry. A member of our team will be in touch within 1–2 business days.";
