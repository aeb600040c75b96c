use super::{HeroCopy, Highlight};

pub const TITLE: &str = "Current Students";
pub const DESCRIPTION: &str = "Resources and information for current CSF Australia students. Access timetables, student policies, support services, and the student portal.";

pub const HERO: HeroCopy = HeroCopy::inner(
    "Current Students",
    "Student Hub",
    "Everything you need to succeed in your studies at CSF Australia.",
);

/// Quick-access card linking out to a student tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resource {
    pub title: &'static str,
    pub description: &'static str,
    pub href: &'static str,
    pub link_label: &'static str,
}

pub const RESOURCES: [Resource; 4] = [
    Resource {
        title: "Student Portal",
        description: "Access your course materials, assessments, timetables, and results through the online student portal.",
        href: "#",
        link_label: "Login to Portal",
    },
    Resource {
        title: "Timetables",
        description: "View your class schedule, room allocations, and upcoming assessment dates.",
        href: "#",
        link_label: "View Timetable",
    },
    Resource {
        title: "Library Resources",
        description: "Access textbooks, journal articles, and online learning resources through the CSF library.",
        href: "#",
        link_label: "Access Library",
    },
    Resource {
        title: "Academic Support",
        description: "Get help with your studies from our dedicated learning support team. Tutoring and writing assistance available.",
        href: "/contact",
        link_label: "Request Support",
    },
];

pub const SUPPORT_SERVICES: [Highlight; 3] = [
    Highlight::new(
        "Wellbeing & Counselling",
        "Free confidential counselling and wellbeing support for all students, both on-campus and online.",
    ),
    Highlight::new(
        "Career Services",
        "Resume assistance, interview coaching, and industry placement support to help launch your career.",
    ),
    Highlight::new(
        "Disability Support",
        "Reasonable adjustments and support plans for students with disabilities or health conditions.",
    ),
];

pub const POLICIES: [Highlight; 6] = [
    Highlight::new(
        "Student Code of Conduct",
        "Outlines expectations for student behaviour and academic integrity.",
    ),
    Highlight::new(
        "Assessment Policy",
        "Information on assessment procedures, submission requirements, and appeals.",
    ),
    Highlight::new(
        "Attendance Policy",
        "Requirements for course attendance and procedures for managing absences.",
    ),
    Highlight::new(
        "Complaints & Appeals",
        "How to raise a concern, make a formal complaint, or appeal a decision.",
    ),
    Highlight::new(
        "Refund Policy",
        "Information on course withdrawal, deferral, and fee refund procedures.",
    ),
    Highlight::new(
        "Privacy Policy",
        "How CSF collects, uses, and protects your personal information.",
    ),
];

pub const HELP_HOURS: &str = "Our Student Services team is available Monday–Friday, 9am–5pm AEST.";
