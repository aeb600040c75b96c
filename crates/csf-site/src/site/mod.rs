//! Site structure: navigation, the route table and the sitemap built from it.

mod nav;
mod sitemap;

use crate::catalog::CourseCatalog;

pub use nav::{
    is_active, FooterColumn, MenuQuery, MobileMenu, NavLink, FOOTER_COLUMNS, LEGAL_LINKS,
    PRIMARY_NAV,
};
pub use sitemap::{Sitemap, SitemapEntry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFrequency {
    Weekly,
    Monthly,
    Yearly,
}

impl ChangeFrequency {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }
}

/// A statically rendered page and how crawlers should treat it.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteRoute {
    pub path: String,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
}

impl SiteRoute {
    fn fixed(path: &str, change_frequency: ChangeFrequency, priority: f32) -> Self {
        Self {
            path: path.to_string(),
            change_frequency,
            priority,
        }
    }
}

pub const COURSE_CHANGE_FREQUENCY: ChangeFrequency = ChangeFrequency::Monthly;
pub const COURSE_PRIORITY: f32 = 0.8;

pub fn static_routes() -> Vec<SiteRoute> {
    use ChangeFrequency::{Monthly, Weekly, Yearly};

    vec![
        SiteRoute::fixed("/", Weekly, 1.0),
        SiteRoute::fixed("/courses", Weekly, 0.9),
        SiteRoute::fixed("/admissions", Monthly, 0.8),
        SiteRoute::fixed("/about", Monthly, 0.7),
        SiteRoute::fixed("/international", Monthly, 0.8),
        SiteRoute::fixed("/students", Monthly, 0.6),
        SiteRoute::fixed("/agents", Monthly, 0.7),
        SiteRoute::fixed("/contact", Yearly, 0.6),
    ]
}

/// Every page the site serves: the static routes followed by one route per
/// course, in catalog order.
pub fn routes(catalog: &CourseCatalog) -> Vec<SiteRoute> {
    let mut routes = static_routes();
    routes.extend(catalog.courses().iter().map(|course| SiteRoute {
        path: course.href(),
        change_frequency: COURSE_CHANGE_FREQUENCY,
        priority: COURSE_PRIORITY,
    }));
    routes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_table_lists_static_pages_then_courses() {
        let catalog = CourseCatalog::standard();
        let routes = routes(&catalog);

        assert_eq!(routes.len(), 8 + catalog.courses().len());
        assert_eq!(routes[0].path, "/");
        assert_eq!(routes[0].priority, 1.0);
        assert_eq!(routes[7].path, "/contact");
        assert_eq!(routes[7].change_frequency, ChangeFrequency::Yearly);
        assert_eq!(routes[8].path, "/courses/certificate-iii-fitness");
        assert_eq!(routes[8].change_frequency, ChangeFrequency::Monthly);
    }
}
