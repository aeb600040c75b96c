use std::fmt::{self, Write as _};

use super::{cta_band, hero, section_intro};
use crate::content::about::{
    ACCREDITATION, DESCRIPTION, FACILITIES, HERO, MISSION, STAFF, TIMELINE, TITLE, VALUES, VISION,
};
use crate::content::Cta;
use crate::views::{escape_html, render_document, PageContext, PageMeta};

pub(super) fn render(ctx: &PageContext<'_>) -> Result<String, fmt::Error> {
    let meta = PageMeta::new(TITLE, DESCRIPTION);
    render_document(ctx, &meta, |out| {
        hero(out, &HERO)?;

        writeln!(out, r#"<section class="section" aria-labelledby="mission-heading">"#)?;
        writeln!(out, r#"<div class="container grid grid-2">"#)?;
        writeln!(out, "<div>")?;
        writeln!(out, r#"<p class="eyebrow">Our Purpose</p>"#)?;
        writeln!(out, r#"<h2 id="mission-heading">Mission &amp; Vision</h2>"#)?;
        writeln!(out, "<h3>Our Mission</h3>")?;
        writeln!(out, "<p>{}</p>", escape_html(MISSION))?;
        writeln!(out, "<h3>Our Vision</h3>")?;
        writeln!(out, "<p>{}</p>", escape_html(VISION))?;
        writeln!(out, "<h3>Our Values</h3>")?;
        writeln!(out, r#"<div class="pill-list">"#)?;
        for value in VALUES {
            writeln!(out, r#"<span class="pill">{}</span>"#, escape_html(value))?;
        }
        writeln!(out, "</div>")?;
        writeln!(out, "</div>")?;

        writeln!(out, r#"<div id="accreditation" class="card card-dark">"#)?;
        writeln!(out, "<h3>Accreditation &amp; RTO Status</h3>")?;
        writeln!(out, r#"<dl class="fact-list">"#)?;
        for fact in ACCREDITATION {
            writeln!(
                out,
                "<div><dt>{}</dt><dd>{}</dd></div>",
                escape_html(fact.label),
                escape_html(fact.value)
            )?;
        }
        writeln!(out, "</dl>")?;
        writeln!(out, "</div>")?;
        writeln!(out, "</div>")?;
        writeln!(out, "</section>")?;

        writeln!(out, r#"<section class="section section-muted" aria-labelledby="history-heading">"#)?;
        writeln!(out, r#"<div class="container">"#)?;
        section_intro(out, None, "history-heading", "Our History", None)?;
        writeln!(out, r#"<ol class="timeline">"#)?;
        for milestone in TIMELINE {
            writeln!(
                out,
                r#"<li><span class="timeline-year">{}</span><p>{}</p></li>"#,
                milestone.year,
                escape_html(milestone.event)
            )?;
        }
        writeln!(out, "</ol>")?;
        writeln!(out, "</div>")?;
        writeln!(out, "</section>")?;

        writeln!(out, r#"<section class="section" id="facilities" aria-labelledby="facilities-heading">"#)?;
        writeln!(out, r#"<div class="container">"#)?;
        section_intro(
            out,
            None,
            "facilities-heading",
            "Our Facilities",
            Some("Our Sydney CBD campus features modern, purpose-built facilities designed to support hands-on learning."),
        )?;
        writeln!(out, r#"<div class="grid grid-3">"#)?;
        for facility in FACILITIES {
            writeln!(out, r#"<div class="card">"#)?;
            writeln!(out, "<h3>{}</h3>", escape_html(facility.title))?;
            writeln!(out, "<p>{}</p>", escape_html(facility.description))?;
            writeln!(out, "</div>")?;
        }
        writeln!(out, "</div>")?;
        writeln!(out, "</div>")?;
        writeln!(out, "</section>")?;

        writeln!(out, r#"<section class="section section-muted" aria-labelledby="team-heading">"#)?;
        writeln!(out, r#"<div class="container">"#)?;
        section_intro(
            out,
            None,
            "team-heading",
            "Our Team",
            Some("Our dedicated team of industry professionals brings real-world experience to every training session."),
        )?;
        writeln!(out, r#"<div class="grid grid-4">"#)?;
        for member in STAFF {
            writeln!(out, r#"<div class="card center staff">"#)?;
            if let Some(initial) = member.initial() {
                writeln!(out, r#"<span class="avatar" aria-hidden="true">{initial}</span>"#)?;
            }
            writeln!(out, "<h3>{}</h3>", escape_html(member.name))?;
            writeln!(out, r#"<p class="staff-role">{}</p>"#, escape_html(member.role))?;
            writeln!(out, "<p>{}</p>", escape_html(member.bio))?;
            writeln!(out, "</div>")?;
        }
        writeln!(out, "</div>")?;
        writeln!(out, "</div>")?;
        writeln!(out, "</section>")?;

        cta_band(
            out,
            "Apply CTA",
            "Join the CSF Community",
            "Become part of a passionate community of fitness and sport professionals. Apply today.",
            Cta {
                label: "Explore Courses",
                href: "/courses",
            },
            Cta {
                label: "Get in Touch",
                href: "/contact",
            },
        )
    })
}
