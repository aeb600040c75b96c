use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

impl NavLink {
    const fn new(label: &'static str, href: &'static str) -> Self {
        Self { label, href }
    }
}

pub const PRIMARY_NAV: [NavLink; 7] = [
    NavLink::new("Courses", "/courses"),
    NavLink::new("Admissions", "/admissions"),
    NavLink::new("International", "/international"),
    NavLink::new("Students", "/students"),
    NavLink::new("About", "/about"),
    NavLink::new("Agents", "/agents"),
    NavLink::new("Contact", "/contact"),
];

/// Link column in the footer. The course column is built from the catalog
/// and is not listed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterColumn {
    pub title: &'static str,
    pub links: &'static [NavLink],
}

pub const FOOTER_COLUMNS: [FooterColumn; 2] = [
    FooterColumn {
        title: "Study at CSF",
        links: &[
            NavLink::new("Admissions", "/admissions"),
            NavLink::new("International Students", "/international"),
            NavLink::new("Fees & Scholarships", "/admissions#fees"),
            NavLink::new("Intake Dates", "/admissions#intakes"),
            NavLink::new("Student Portal", "/students"),
        ],
    },
    FooterColumn {
        title: "About CSF",
        links: &[
            NavLink::new("About Us", "/about"),
            NavLink::new("Accreditation", "/about#accreditation"),
            NavLink::new("Facilities", "/about#facilities"),
            NavLink::new("Education Agents", "/agents"),
            NavLink::new("Contact Us", "/contact"),
        ],
    },
];

pub const LEGAL_LINKS: [NavLink; 3] = [
    NavLink::new("Privacy Policy", "/privacy"),
    NavLink::new("Terms of Use", "/terms"),
    NavLink::new("Accessibility", "/accessibility"),
];

/// A link is active on its own page and on any page nested beneath it.
pub fn is_active(current_path: &str, href: &str) -> bool {
    if current_path == href {
        return true;
    }
    current_path
        .strip_prefix(href)
        .map(|rest| rest.starts_with('/'))
        .unwrap_or(false)
}

/// Query string accepted by every page for the small-screen menu.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MenuQuery {
    pub menu: Option<String>,
}

/// Small-screen navigation state, carried in the `menu` query parameter.
/// Navigation links never carry the parameter, so following one closes it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MobileMenu {
    #[default]
    Closed,
    Open,
}

impl MobileMenu {
    pub const QUERY_KEY: &'static str = "menu";

    pub fn from_query(query: &MenuQuery) -> Self {
        match query.menu.as_deref() {
            Some("open") => Self::Open,
            _ => Self::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }

    /// Target of the menu button on `current_path`. Anything that is not a
    /// plain site-local path collapses to a query-only link.
    pub fn toggle_href(self, current_path: &str) -> String {
        match (self.toggled(), local_path(current_path)) {
            (Self::Open, path) => format!("{path}?{}=open", Self::QUERY_KEY),
            (Self::Closed, "") => "?".to_string(),
            (Self::Closed, path) => path.to_string(),
        }
    }
}

fn local_path(path: &str) -> &str {
    let scheme_relative = path.starts_with("//") || path.starts_with("/\\");
    if path.starts_with('/') && !scheme_relative {
        path
    } else {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_on_exact_match_and_nested_paths() {
        assert!(is_active("/courses", "/courses"));
        assert!(is_active("/courses/diploma-of-sport", "/courses"));
        assert!(!is_active("/coursesx", "/courses"));
        assert!(!is_active("/", "/courses"));
        assert!(!is_active("/about", "/agents"));
    }

    #[test]
    fn at_most_one_primary_link_is_active() {
        for path in ["/", "/courses/certificate-iv-fitness", "/contact", "/missing"] {
            let active = PRIMARY_NAV
                .iter()
                .filter(|link| is_active(path, link.href))
                .count();
            assert!(active <= 1, "{path} activated {active} links");
        }
    }

    #[test]
    fn menu_toggles_through_query_parameter() {
        let closed = MobileMenu::from_query(&MenuQuery::default());
        assert_eq!(closed, MobileMenu::Closed);
        assert_eq!(closed.toggle_href("/about"), "/about?menu=open");

        let open = MobileMenu::from_query(&MenuQuery {
            menu: Some("open".into()),
        });
        assert!(open.is_open());
        assert_eq!(open.toggle_href("/about"), "/about");
        assert_eq!(open.toggled(), MobileMenu::Closed);

        let garbage = MobileMenu::from_query(&MenuQuery {
            menu: Some("sideways".into()),
        });
        assert_eq!(garbage, MobileMenu::Closed);
    }

    #[test]
    fn toggle_never_points_off_site() {
        let closed = MobileMenu::Closed;
        assert_eq!(closed.toggle_href("//evil.example/phish"), "?menu=open");
        assert_eq!(closed.toggle_href("/\\evil.example"), "?menu=open");
        assert_eq!(closed.toggle_href("https://evil.example"), "?menu=open");
        assert_eq!(closed.toggle_href(""), "?menu=open");
        assert_eq!(MobileMenu::Open.toggle_href("//evil.example"), "?");
    }
}
