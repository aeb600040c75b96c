use std::fmt::{self, Write as _};

use super::{bullet_list, hero, section_intro, step_cards};
use crate::content::admissions::{
    DESCRIPTION, DOMESTIC_REQUIREMENTS, FEES, FEES_NOTE, HERO, INTAKES, INTERNATIONAL_REQUIREMENTS,
    SCHOLARSHIPS, STEPS, TITLE,
};
use crate::views::{escape_html, render_document, Button, ButtonSize, ButtonVariant, PageContext, PageMeta};

pub(super) fn render(ctx: &PageContext<'_>) -> Result<String, fmt::Error> {
    let meta = PageMeta::new(TITLE, DESCRIPTION);
    render_document(ctx, &meta, |out| {
        hero(out, &HERO)?;

        writeln!(out, r#"<section class="section" aria-labelledby="apply-heading">"#)?;
        writeln!(out, r#"<div class="container">"#)?;
        section_intro(
            out,
            None,
            "apply-heading",
            "How to Apply",
            Some("Our application process is simple and straightforward. Follow these steps to secure your place."),
        )?;
        step_cards(out, &STEPS)?;
        writeln!(
            out,
            r#"<div class="center">{}</div>"#,
            Button::link("Apply Now", "/contact")
                .variant(ButtonVariant::Secondary)
                .size(ButtonSize::Lg)
        )?;
        writeln!(out, "</div>")?;
        writeln!(out, "</section>")?;

        writeln!(
            out,
            r#"<section class="section section-muted" id="requirements" aria-labelledby="requirements-heading">"#
        )?;
        writeln!(out, r#"<div class="container">"#)?;
        writeln!(out, r#"<h2 id="requirements-heading">Entry Requirements</h2>"#)?;
        writeln!(out, r#"<div class="grid grid-2">"#)?;
        for (badge, heading, items) in [
            ("AU", "Domestic Students", &DOMESTIC_REQUIREMENTS),
            ("INT", "International Students", &INTERNATIONAL_REQUIREMENTS),
        ] {
            writeln!(out, r#"<div class="card">"#)?;
            writeln!(
                out,
                r#"<h3><span class="tag" aria-hidden="true">{badge}</span> {heading}</h3>"#
            )?;
            bullet_list(out, "check-list", items)?;
            writeln!(out, "</div>")?;
        }
        writeln!(out, "</div>")?;
        writeln!(out, "</div>")?;
        writeln!(out, "</section>")?;

        writeln!(out, r#"<section class="section" id="fees" aria-labelledby="fees-heading">"#)?;
        writeln!(out, r#"<div class="container">"#)?;
        writeln!(out, r#"<h2 id="fees-heading">Tuition Fees</h2>"#)?;
        writeln!(out, r#"<div class="table-wrap">"#)?;
        writeln!(out, r#"<table class="data-table">"#)?;
        writeln!(out, "<thead><tr><th>Course</th><th>Domestic</th><th>International</th></tr></thead>")?;
        writeln!(out, "<tbody>")?;
        for row in FEES {
            writeln!(
                out,
                "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
                escape_html(row.label),
                escape_html(row.domestic),
                escape_html(row.international)
            )?;
        }
        writeln!(out, "</tbody>")?;
        writeln!(out, "</table>")?;
        writeln!(out, "</div>")?;
        writeln!(out, r#"<p class="fine-print">{}</p>"#, escape_html(FEES_NOTE))?;
        writeln!(out, "</div>")?;
        writeln!(out, "</section>")?;

        writeln!(
            out,
            r#"<section class="section section-muted" id="intakes" aria-labelledby="intakes-heading">"#
        )?;
        writeln!(out, r#"<div class="container">"#)?;
        writeln!(out, r#"<h2 id="intakes-heading">Intake Dates</h2>"#)?;
        writeln!(out, r#"<div class="grid grid-4">"#)?;
        for intake in INTAKES {
            writeln!(out, r#"<div class="card center">"#)?;
            writeln!(out, r#"<p class="intake-month">{}</p>"#, intake.month)?;
            writeln!(
                out,
                r#"<span class="status {}">{}</span>"#,
                intake.status.css_class(),
                intake.status.label()
            )?;
            writeln!(out, r#"<p class="fine-print">{}</p>"#, escape_html(intake.availability))?;
            writeln!(out, "</div>")?;
        }
        writeln!(out, "</div>")?;
        writeln!(out, "</div>")?;
        writeln!(out, "</section>")?;

        writeln!(out, r#"<section class="section" id="scholarships" aria-labelledby="scholarships-heading">"#)?;
        writeln!(out, r#"<div class="container grid grid-2">"#)?;
        writeln!(out, "<div>")?;
        writeln!(out, r#"<p class="eyebrow">Financial Support</p>"#)?;
        writeln!(out, r#"<h2 id="scholarships-heading">Scholarships &amp; Funding</h2>"#)?;
        writeln!(
            out,
            "<p>CSF Australia is committed to making education accessible. We offer a range of scholarships and payment options to help you achieve your goals.</p>"
        )?;
        writeln!(out, r#"<ul class="scholarship-list">"#)?;
        for scholarship in SCHOLARSHIPS {
            writeln!(
                out,
                r#"<li><p><strong>{}</strong> <span class="accent">{}</span></p><p>{}</p></li>"#,
                escape_html(scholarship.name),
                escape_html(scholarship.value),
                escape_html(scholarship.description)
            )?;
        }
        writeln!(out, "</ul>")?;
        writeln!(out, "</div>")?;
        writeln!(out, r#"<div class="card card-dark center">"#)?;
        writeln!(out, "<h3>Need Help Deciding?</h3>")?;
        writeln!(
            out,
            "<p>Our student advisors are available to guide you through the admissions process and help you find the right course and funding options.</p>"
        )?;
        writeln!(
            out,
            "{}",
            Button::link("Talk to an Advisor", "/contact")
                .variant(ButtonVariant::Secondary)
                .class("btn-block")
        )?;
        writeln!(out, "</div>")?;
        writeln!(out, "</div>")?;
        writeln!(out, "</section>")
    })
}
