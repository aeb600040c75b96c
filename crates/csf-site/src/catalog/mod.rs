mod data;

use std::collections::BTreeMap;

/// Discipline tag shown as a badge on course cards and detail headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CourseCategory {
    Fitness,
    Sport,
    Coaching,
    Recreation,
}

impl CourseCategory {
    pub const fn ordered() -> [Self; 4] {
        [Self::Fitness, Self::Sport, Self::Coaching, Self::Recreation]
    }

    pub const fn slug(self) -> &'static str {
        match self {
            Self::Fitness => "fitness",
            Self::Sport => "sport",
            Self::Coaching => "coaching",
            Self::Recreation => "recreation",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Fitness => "Fitness",
            Self::Sport => "Sport",
            Self::Coaching => "Coaching",
            Self::Recreation => "Recreation",
        }
    }
}

/// Listing entry for a nationally recognised qualification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Course {
    pub id: &'static str,
    pub slug: &'static str,
    pub name: &'static str,
    pub code: &'static str,
    pub duration: &'static str,
    pub category: CourseCategory,
    pub description: &'static str,
    pub level: Option<&'static str>,
}

impl Course {
    pub fn href(&self) -> String {
        format!("/courses/{}", self.slug)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitKind {
    Core,
    Elective,
}

impl UnitKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Core => "Core",
            Self::Elective => "Elective",
        }
    }
}

/// Unit of competency packaged into a qualification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unit {
    pub code: &'static str,
    pub name: &'static str,
    pub kind: UnitKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeeLine {
    pub label: &'static str,
    pub amount: &'static str,
}

/// Everything the course detail page needs beyond the listing entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseDetail {
    pub course: Course,
    pub overview: &'static str,
    pub outcomes: &'static [&'static str],
    pub units: &'static [Unit],
    pub entry_requirements: &'static [&'static str],
    pub career_outcomes: &'static [&'static str],
    pub fees: &'static [FeeLine],
    pub delivery_mode: &'static str,
    pub location: &'static str,
}

/// Units split for display. Source order is kept inside each group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitGroups<'a> {
    pub core: Vec<&'a Unit>,
    pub elective: Vec<&'a Unit>,
}

impl CourseDetail {
    pub fn unit_groups(&self) -> UnitGroups<'_> {
        let (core, elective) = self
            .units
            .iter()
            .partition(|unit| unit.kind == UnitKind::Core);
        UnitGroups { core, elective }
    }

    /// Meta description: the overview cut to 160 characters.
    pub fn summary(&self) -> String {
        self.overview.chars().take(160).collect()
    }
}

/// Read-only course tables, built once at startup and shared by every render.
#[derive(Debug, Clone)]
pub struct CourseCatalog {
    courses: Vec<Course>,
    details: BTreeMap<&'static str, CourseDetail>,
}

impl CourseCatalog {
    pub fn standard() -> Self {
        Self::new(data::COURSES.to_vec(), data::COURSE_DETAILS.to_vec())
    }

    pub fn new(courses: Vec<Course>, details: Vec<CourseDetail>) -> Self {
        let details = details
            .into_iter()
            .map(|detail| (detail.course.slug, detail))
            .collect();
        Self { courses, details }
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn featured(&self, count: usize) -> &[Course] {
        &self.courses[..count.min(self.courses.len())]
    }

    pub fn detail(&self, slug: &str) -> Option<&CourseDetail> {
        self.details.get(slug)
    }

    pub fn slugs(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.courses.iter().map(|course| course.slug)
    }

    /// Listed slugs that would land on the not-found page.
    pub fn missing_details(&self) -> Vec<&'static str> {
        self.slugs()
            .filter(|slug| !self.details.contains_key(slug))
            .collect()
    }
}

impl Default for CourseCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn standard_catalog_has_unique_ids_and_slugs() {
        let catalog = CourseCatalog::standard();
        let ids: HashSet<_> = catalog.courses().iter().map(|course| course.id).collect();
        let slugs: HashSet<_> = catalog.slugs().collect();

        assert_eq!(catalog.courses().len(), 5);
        assert_eq!(ids.len(), 5);
        assert_eq!(slugs.len(), 5);
    }

    #[test]
    fn every_listed_course_has_a_detail_entry() {
        let catalog = CourseCatalog::standard();
        assert!(catalog.missing_details().is_empty());

        for course in catalog.courses() {
            let detail = catalog.detail(course.slug).expect("detail present");
            assert_eq!(&detail.course, course);
        }
    }

    #[test]
    fn missing_details_reports_unbacked_slugs() {
        let standard = CourseCatalog::standard();
        let mut courses = standard.courses().to_vec();
        let template = courses[0];
        courses.push(Course {
            id: "99",
            slug: "diploma-of-underwater-basketry",
            ..template
        });
        let details = standard
            .courses()
            .iter()
            .filter_map(|course| standard.detail(course.slug).cloned())
            .collect();

        let catalog = CourseCatalog::new(courses, details);
        assert_eq!(
            catalog.missing_details(),
            vec!["diploma-of-underwater-basketry"]
        );
        assert!(catalog.detail("diploma-of-underwater-basketry").is_none());
    }

    #[test]
    fn featured_is_clamped_to_catalog_size() {
        let catalog = CourseCatalog::standard();
        assert_eq!(catalog.featured(3).len(), 3);
        assert_eq!(catalog.featured(3)[0].slug, "certificate-iii-fitness");
        assert_eq!(catalog.featured(50).len(), 5);
    }

    #[test]
    fn unit_groups_keep_source_order() {
        let catalog = CourseCatalog::standard();
        let detail = catalog
            .detail("certificate-iv-fitness")
            .expect("detail present");
        let groups = detail.unit_groups();

        let core: Vec<_> = groups.core.iter().map(|unit| unit.code).collect();
        let elective: Vec<_> = groups.elective.iter().map(|unit| unit.code).collect();
        assert_eq!(
            core,
            vec!["SISFFIT014", "SISFFIT015", "SISFFIT019", "BSBSMB401"]
        );
        assert_eq!(elective, vec!["SISFFIT016", "SISFFIT020"]);
    }

    #[test]
    fn unit_groups_allow_empty_electives() {
        static CORE_ONLY: [Unit; 2] = [
            Unit {
                code: "A1",
                name: "First",
                kind: UnitKind::Core,
            },
            Unit {
                code: "A2",
                name: "Second",
                kind: UnitKind::Core,
            },
        ];
        let catalog = CourseCatalog::standard();
        let mut detail = catalog
            .detail("diploma-of-sport")
            .cloned()
            .expect("detail present");
        detail.units = &CORE_ONLY;

        let groups = detail.unit_groups();
        assert_eq!(groups.core.len(), 2);
        assert!(groups.elective.is_empty());
    }

    #[test]
    fn summary_is_capped_at_160_chars() {
        let catalog = CourseCatalog::standard();
        let detail = catalog
            .detail("certificate-iii-fitness")
            .expect("detail present");
        let summary = detail.summary();
        assert_eq!(summary.chars().count(), 160);
        assert!(detail.overview.starts_with(&summary));
    }
}
