use std::fmt::{self, Write as _};

use super::{cta_band, hero, section_intro, stat_strip};
use crate::announcements::{Announcement, LatestAnnouncements};
use crate::content::home::{
    DESCRIPTION, FEATURED_COURSES, HERO, STATS, TESTIMONIALS, TITLE, WHY_CSF,
};
use crate::content::Cta;
use crate::views::{escape_html, render_document, Button, ButtonVariant, CourseCard, PageContext, PageMeta};

pub(super) fn render(
    ctx: &PageContext<'_>,
    announcements: &LatestAnnouncements,
) -> Result<String, fmt::Error> {
    let meta = PageMeta::exact(TITLE, DESCRIPTION);
    render_document(ctx, &meta, |out| {
        hero(out, &HERO)?;
        announcement_strip(out, announcements.items())?;
        stat_strip(out, "Key statistics", &STATS)?;

        writeln!(out, r#"<section class="section" aria-labelledby="courses-heading">"#)?;
        writeln!(out, r#"<div class="container">"#)?;
        section_intro(
            out,
            Some("What We Offer"),
            "courses-heading",
            "Our Courses",
            Some("Nationally recognised qualifications to kickstart or advance your career in the fitness and sport industry."),
        )?;
        writeln!(out, r#"<div class="grid grid-3">"#)?;
        for course in ctx.catalog.featured(FEATURED_COURSES) {
            write!(out, "{}", CourseCard(course))?;
        }
        writeln!(out, "</div>")?;
        writeln!(
            out,
            r#"<div class="center">{}</div>"#,
            Button::link("View All Courses", "/courses").variant(ButtonVariant::Outline)
        )?;
        writeln!(out, "</div>")?;
        writeln!(out, "</section>")?;

        writeln!(out, r#"<section class="section section-muted" aria-labelledby="why-csf-heading">"#)?;
        writeln!(out, r#"<div class="container">"#)?;
        section_intro(out, Some("Our Difference"), "why-csf-heading", "Why Choose CSF?", None)?;
        writeln!(out, r#"<div class="grid grid-4">"#)?;
        for item in WHY_CSF {
            writeln!(out, r#"<div class="feature">"#)?;
            writeln!(out, "<h3>{}</h3>", escape_html(item.title))?;
            writeln!(out, "<p>{}</p>", escape_html(item.description))?;
            writeln!(out, "</div>")?;
        }
        writeln!(out, "</div>")?;
        writeln!(out, "</div>")?;
        writeln!(out, "</section>")?;

        writeln!(out, r#"<section class="section" aria-labelledby="testimonials-heading">"#)?;
        writeln!(out, r#"<div class="container">"#)?;
        section_intro(
            out,
            Some("Student Stories"),
            "testimonials-heading",
            "What Our Graduates Say",
            None,
        )?;
        writeln!(out, r#"<div class="grid grid-3">"#)?;
        for testimonial in TESTIMONIALS {
            writeln!(out, r#"<blockquote class="testimonial">"#)?;
            writeln!(out, "<p>{}</p>", escape_html(testimonial.quote))?;
            writeln!(
                out,
                r#"<footer><p class="testimonial-author">{}</p><p class="testimonial-role">{}</p></footer>"#,
                escape_html(testimonial.author),
                escape_html(testimonial.role)
            )?;
            writeln!(out, "</blockquote>")?;
        }
        writeln!(out, "</div>")?;
        writeln!(out, "</div>")?;
        writeln!(out, "</section>")?;

        cta_band(
            out,
            "Call to action",
            "Ready to Start Your Journey?",
            "Enrol in a nationally recognised course and take the first step toward your dream career.",
            Cta {
                label: "Apply Now",
                href: "/admissions",
            },
            Cta {
                label: "Contact Us",
                href: "/contact",
            },
        )
    })
}

/// Omitted entirely, heading included, when there is nothing to show.
fn announcement_strip(out: &mut String, items: &[Announcement]) -> fmt::Result {
    if items.is_empty() {
        return Ok(());
    }

    writeln!(out, r#"<section class="announcements" aria-label="Announcements">"#)?;
    writeln!(out, r#"<div class="container">"#)?;
    writeln!(out, "<h2>Latest Announcements</h2>")?;
    writeln!(out, r#"<div class="grid grid-3">"#)?;
    for item in items {
        writeln!(out, r#"<div class="announcement">"#)?;
        writeln!(
            out,
            r#"<p class="announcement-date"><time datetime="{}">{}</time></p>"#,
            item.published_at.format("%Y-%m-%d"),
            item.display_date()
        )?;
        writeln!(out, "<h3>{}</h3>", escape_html(&item.title))?;
        writeln!(out, r#"<p class="announcement-body">{}</p>"#, escape_html(&item.content))?;
        writeln!(out, "</div>")?;
    }
    writeln!(out, "</div>")?;
    writeln!(out, "</div>")?;
    writeln!(out, "</section>")
}
