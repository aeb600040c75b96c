//! Static copy for every page that is not driven by the course catalog.
//!
//! Each page module exposes its metadata (`TITLE`, `DESCRIPTION`), a `HERO`
//! banner and the tables its sections iterate over. Nothing here is mutated
//! after startup.

pub mod about;
pub mod admissions;
pub mod agents;
pub mod contact;
pub mod home;
pub mod international;
pub mod students;

/// Link target with visible label, used for calls to action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cta {
    pub label: &'static str,
    pub href: &'static str,
}

/// Banner copy rendered at the top of a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroCopy {
    pub title: &'static str,
    pub subtitle: Option<&'static str>,
    pub description: Option<&'static str>,
    pub primary_cta: Option<Cta>,
    pub secondary_cta: Option<Cta>,
    /// Inner pages use a shorter banner than the home page.
    pub compact: bool,
}

impl HeroCopy {
    pub const fn inner(
        title: &'static str,
        subtitle: &'static str,
        description: &'static str,
    ) -> Self {
        Self {
            title,
            subtitle: Some(subtitle),
            description: Some(description),
            primary_cta: None,
            secondary_cta: None,
            compact: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
    pub note: Option<&'static str>,
}

impl Stat {
    pub const fn new(value: &'static str, label: &'static str) -> Self {
        Self {
            value,
            label,
            note: None,
        }
    }
}

/// Title plus a sentence or two; the most common card shape on the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub title: &'static str,
    pub description: &'static str,
}

impl Highlight {
    pub const fn new(title: &'static str, description: &'static str) -> Self {
        Self { title, description }
    }
}

/// Numbered step in an application or onboarding process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub number: u8,
    pub title: &'static str,
    pub description: &'static str,
}

impl Step {
    pub const fn new(number: u8, title: &'static str, description: &'static str) -> Self {
        Self {
            number,
            title,
            description,
        }
    }

    /// Two-digit label used as the large watermark on step cards.
    pub fn label(&self) -> String {
        format!("{:02}", self.number)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabeledValue {
    pub label: &'static str,
    pub value: &'static str,
}

impl LabeledValue {
    pub const fn new(label: &'static str, value: &'static str) -> Self {
        Self { label, value }
    }
}

/// Row of a domestic/international comparison table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateRow {
    pub label: &'static str,
    pub domestic: &'static str,
    pub international: &'static str,
}

impl RateRow {
    pub const fn new(
        label: &'static str,
        domestic: &'static str,
        international: &'static str,
    ) -> Self {
        Self {
            label,
            domestic,
            international,
        }
    }
}

/// Titled bullet list, e.g. a column of support services.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemGroup {
    pub title: &'static str,
    pub items: &'static [&'static str],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_label_is_zero_padded() {
        assert_eq!(Step::new(1, "a", "b").label(), "01");
        assert_eq!(Step::new(12, "a", "b").label(), "12");
    }

    #[test]
    fn every_page_has_metadata_and_a_hero() {
        let pages = [
            (home::TITLE, home::DESCRIPTION, home::HERO),
            (admissions::TITLE, admissions::DESCRIPTION, admissions::HERO),
            (
                international::TITLE,
                international::DESCRIPTION,
                international::HERO,
            ),
            (students::TITLE, students::DESCRIPTION, students::HERO),
            (about::TITLE, about::DESCRIPTION, about::HERO),
            (agents::TITLE, agents::DESCRIPTION, agents::HERO),
            (contact::TITLE, contact::DESCRIPTION, contact::HERO),
        ];

        for (title, description, hero) in pages {
            assert!(!title.is_empty());
            assert!(!description.is_empty());
            assert!(!hero.title.is_empty());
        }
        assert!(!home::HERO.compact);
        assert!(about::HERO.compact);
    }

    #[test]
    fn step_tables_are_numbered_in_order() {
        for steps in [
            &admissions::STEPS[..],
            &international::STEPS[..],
            &agents::PROCESS[..],
        ] {
            for (index, step) in steps.iter().enumerate() {
                assert_eq!(usize::from(step.number), index + 1);
            }
        }
    }

    #[test]
    fn agent_email_cta_points_at_the_agent_inbox() {
        assert!(agents::EMAIL_CTA.label.ends_with(agents::AGENT_EMAIL));
        assert_eq!(
            agents::EMAIL_CTA.href.strip_prefix("mailto:"),
            Some(agents::AGENT_EMAIL)
        );
    }
}
