use std::fmt::{self, Write as _};

use super::hero;
use crate::catalog::{CourseCategory, CourseDetail, Unit, UnitKind};
use crate::content::HeroCopy;
use crate::views::{
    escape_html, render_document, Button, ButtonVariant, CourseCard, PageContext, PageMeta,
};

const LISTING_TITLE: &str = "Courses";
const LISTING_DESCRIPTION: &str = "Browse CSF Australia's nationally recognised vocational courses in fitness, sport coaching, and recreation. Certificate III, IV and Diploma qualifications available.";

const LISTING_HERO: HeroCopy = HeroCopy::inner(
    "Our Courses",
    "Nationally Recognised Qualifications",
    "Choose from a range of AQF-accredited vocational courses in fitness, sport, and recreation.",
);

const LISTING_NOTES: [(&str, &str); 3] = [
    (
        "Flexible Delivery",
        "Courses are delivered face-to-face, online, or in a blended format to suit your schedule.",
    ),
    (
        "Multiple Intakes",
        "New intakes start throughout the year. Contact us to find the next available start date.",
    ),
    (
        "RPL Available",
        "Recognition of Prior Learning (RPL) may be available for your existing skills and experience.",
    ),
];

pub(super) fn render_listing(ctx: &PageContext<'_>) -> Result<String, fmt::Error> {
    let meta = PageMeta::new(LISTING_TITLE, LISTING_DESCRIPTION);
    render_document(ctx, &meta, |out| {
        hero(out, &LISTING_HERO)?;
        writeln!(out, r#"<section class="section" aria-labelledby="courses-list-heading">"#)?;
        writeln!(out, r#"<div class="container">"#)?;

        // Display only; the listing is never filtered.
        writeln!(out, r#"<div class="category-bar" role="navigation" aria-label="Course categories">"#)?;
        writeln!(out, r#"<span class="chip chip-active">All Courses</span>"#)?;
        for category in CourseCategory::ordered() {
            writeln!(out, r#"<span class="chip">{}</span>"#, category.label())?;
        }
        writeln!(out, "</div>")?;

        writeln!(out, r#"<h2 id="courses-list-heading" class="sr-only">All Courses</h2>"#)?;
        writeln!(out, r#"<div class="grid grid-3">"#)?;
        for course in ctx.catalog.courses() {
            write!(out, "{}", CourseCard(course))?;
        }
        writeln!(out, "</div>")?;

        writeln!(out, r#"<div class="info-panel grid grid-3">"#)?;
        for (title, text) in LISTING_NOTES {
            writeln!(out, "<div><h3>{}</h3><p>{}</p></div>", escape_html(title), escape_html(text))?;
        }
        writeln!(out, "</div>")?;
        writeln!(out, "</div>")?;
        writeln!(out, "</section>")
    })
}

pub(super) fn render_detail(ctx: &PageContext<'_>, detail: &CourseDetail) -> Result<String, fmt::Error> {
    let course = &detail.course;
    let meta = PageMeta::new(format!("{} ({})", course.name, course.code), detail.summary());

    render_document(ctx, &meta, |out| {
        writeln!(out, r#"<div class="course-header">"#)?;
        writeln!(out, r#"<div class="container">"#)?;
        writeln!(out, r#"<nav class="breadcrumb" aria-label="Breadcrumb">"#)?;
        writeln!(out, r#"<a href="/">Home</a><span aria-hidden="true">/</span>"#)?;
        writeln!(out, r#"<a href="/courses">Courses</a><span aria-hidden="true">/</span>"#)?;
        writeln!(out, r#"<span aria-current="page">{}</span>"#, escape_html(course.name))?;
        writeln!(out, "</nav>")?;

        writeln!(out, r#"<div class="badges">"#)?;
        writeln!(out, r#"<span class="badge badge-muted">{}</span>"#, course.category.label())?;
        if let Some(level) = course.level {
            writeln!(out, r#"<span class="badge badge-accent">{}</span>"#, escape_html(level))?;
        }
        writeln!(out, "</div>")?;
        writeln!(out, "<h1>{}</h1>", escape_html(course.name))?;
        writeln!(out, r#"<p class="course-code">{}</p>"#, escape_html(course.code))?;
        writeln!(out, r#"<ul class="course-facts">"#)?;
        for fact in [course.duration, detail.location, detail.delivery_mode] {
            writeln!(out, "<li>{}</li>", escape_html(fact))?;
        }
        writeln!(out, "</ul>")?;
        writeln!(out, "</div>")?;
        writeln!(out, "</div>")?;

        writeln!(out, r#"<section class="section">"#)?;
        writeln!(out, r#"<div class="container detail-layout">"#)?;
        writeln!(out, r#"<div class="detail-main">"#)?;

        writeln!(out, "<h2>Course Overview</h2>")?;
        writeln!(out, "<p>{}</p>", escape_html(detail.overview))?;

        writeln!(out, "<h2>Learning Outcomes</h2>")?;
        super::bullet_list(out, "check-list", detail.outcomes)?;

        writeln!(out, "<h2>Units of Competency</h2>")?;
        let groups = detail.unit_groups();
        unit_group(out, "Core Units", &groups.core)?;
        unit_group(out, "Elective Units", &groups.elective)?;

        writeln!(out, "<h2>Entry Requirements</h2>")?;
        super::bullet_list(out, "check-list", detail.entry_requirements)?;

        writeln!(out, "<h2>Career Outcomes</h2>")?;
        writeln!(out, r#"<div class="pill-list">"#)?;
        for career in detail.career_outcomes {
            writeln!(out, r#"<span class="pill">{}</span>"#, escape_html(career))?;
        }
        writeln!(out, "</div>")?;
        writeln!(out, "</div>")?;

        writeln!(out, r#"<aside class="detail-sidebar" aria-label="Course details">"#)?;
        writeln!(out, r#"<div class="card">"#)?;
        writeln!(out, "<h3>Course Fees</h3>")?;
        writeln!(out, r#"<dl class="fee-list">"#)?;
        for fee in detail.fees {
            writeln!(
                out,
                "<div><dt>{}</dt><dd>{}</dd></div>",
                escape_html(fee.label),
                escape_html(fee.amount)
            )?;
        }
        writeln!(out, "</dl>")?;
        writeln!(out, "</div>")?;

        writeln!(out, r#"<div class="card card-dark center">"#)?;
        writeln!(out, "<h3>Ready to Apply?</h3>")?;
        writeln!(out, "<p>Take the next step in your career. Applications are open now.</p>")?;
        writeln!(
            out,
            "{}",
            Button::link("Apply Now", "/admissions")
                .variant(ButtonVariant::Secondary)
                .class("btn-block")
        )?;
        writeln!(out, r#"<a href="/contact" class="subtle-link">Have questions? Contact us</a>"#)?;
        writeln!(out, "</div>")?;

        writeln!(out, r#"<div class="card card-outline">"#)?;
        writeln!(out, "<h3>Related Links</h3>")?;
        writeln!(out, "<ul>")?;
        for (href, label) in [
            ("/admissions", "Admissions Information"),
            ("/admissions#fees", "Fees &amp; Scholarships"),
            ("/international", "International Students"),
            ("/courses", "All Courses"),
        ] {
            writeln!(out, r#"<li><a href="{href}">{label}</a></li>"#)?;
        }
        writeln!(out, "</ul>")?;
        writeln!(out, "</div>")?;
        writeln!(out, "</aside>")?;

        writeln!(out, "</div>")?;
        writeln!(out, "</section>")
    })
}

/// An empty group renders nothing, heading included.
fn unit_group(out: &mut String, heading: &str, units: &[&Unit]) -> fmt::Result {
    if units.is_empty() {
        return Ok(());
    }

    writeln!(out, r#"<div class="unit-group">"#)?;
    writeln!(out, "<h3>{}</h3>", escape_html(heading))?;
    writeln!(out, r#"<ul class="unit-list">"#)?;
    for unit in units {
        let kind_class = match unit.kind {
            UnitKind::Core => "unit-core",
            UnitKind::Elective => "unit-elective",
        };
        writeln!(
            out,
            r#"<li><span class="unit-code">{}</span><span class="unit-name">{}</span><span class="unit-kind {kind_class}">{}</span></li>"#,
            escape_html(unit.code),
            escape_html(unit.name),
            unit.kind.label()
        )?;
    }
    writeln!(out, "</ul>")?;
    writeln!(out, "</div>")
}
