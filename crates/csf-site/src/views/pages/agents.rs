use std::fmt::{self, Write as _};

use super::{cta_band, hero};
use crate::content::agents::{
    BENEFITS, COMMISSIONS, COMMISSION_NOTE, DESCRIPTION, EMAIL_CTA, HERO, INTRO, INTRO_BENEFITS,
    PROCESS, TITLE,
};
use crate::content::{Cta, Highlight};
use crate::views::{escape_html, render_document, Button, ButtonSize, ButtonVariant, PageContext, PageMeta};

pub(super) fn render(ctx: &PageContext<'_>) -> Result<String, fmt::Error> {
    let meta = PageMeta::new(TITLE, DESCRIPTION);
    render_document(ctx, &meta, |out| {
        hero(out, &HERO)?;

        writeln!(out, r#"<section class="section" aria-labelledby="agents-intro-heading">"#)?;
        writeln!(out, r#"<div class="container grid grid-2">"#)?;
        writeln!(out, "<div>")?;
        writeln!(out, r#"<p class="eyebrow">Our Partnership</p>"#)?;
        writeln!(out, r#"<h2 id="agents-intro-heading">Why Partner With CSF?</h2>"#)?;
        for paragraph in INTRO {
            writeln!(out, "<p>{}</p>", escape_html(paragraph))?;
        }
        writeln!(out, "</div>")?;
        benefit_grid(out, "grid grid-2", &BENEFITS[..INTRO_BENEFITS])?;
        writeln!(out, "</div>")?;
        writeln!(out, "</section>")?;

        writeln!(out, r#"<section class="section section-dark" aria-labelledby="commission-heading">"#)?;
        writeln!(out, r#"<div class="container narrow">"#)?;
        writeln!(out, r#"<div class="section-intro">"#)?;
        writeln!(out, r#"<h2 id="commission-heading">Commission Structure</h2>"#)?;
        writeln!(
            out,
            r#"<p class="lead">Earn competitive commissions on every enrolled student. Rates are based on course level and student type.</p>"#
        )?;
        writeln!(out, "</div>")?;
        writeln!(out, r#"<table class="data-table data-table-dark">"#)?;
        writeln!(
            out,
            "<thead><tr><th>Qualification Level</th><th>Domestic Referral</th><th>International Referral</th></tr></thead>"
        )?;
        writeln!(out, "<tbody>")?;
        for row in COMMISSIONS {
            writeln!(
                out,
                r#"<tr><td>{}</td><td>{}</td><td class="accent">{}</td></tr>"#,
                escape_html(row.label),
                escape_html(row.domestic),
                escape_html(row.international)
            )?;
        }
        writeln!(out, "</tbody>")?;
        writeln!(out, "</table>")?;
        writeln!(out, r#"<p class="fine-print center">{}</p>"#, escape_html(COMMISSION_NOTE))?;
        writeln!(out, "</div>")?;
        writeln!(out, "</section>")?;

        writeln!(out, r#"<section class="section" aria-labelledby="how-to-partner-heading">"#)?;
        writeln!(out, r#"<div class="container">"#)?;
        writeln!(out, r#"<div class="section-intro"><h2 id="how-to-partner-heading">How to Become an Agent</h2></div>"#)?;
        writeln!(out, r#"<ol class="grid grid-5 process">"#)?;
        for step in PROCESS {
            writeln!(
                out,
                r#"<li class="center"><span class="step-dot" aria-hidden="true">{}</span><h3>{}</h3><p>{}</p></li>"#,
                step.number,
                escape_html(step.title),
                escape_html(step.description)
            )?;
        }
        writeln!(out, "</ol>")?;
        writeln!(
            out,
            r#"<div class="center">{}</div>"#,
            Button::link("Register as an Agent", "/contact")
                .variant(ButtonVariant::Secondary)
                .size(ButtonSize::Lg)
        )?;
        writeln!(out, "</div>")?;
        writeln!(out, "</section>")?;

        writeln!(out, r#"<section class="section section-muted" aria-labelledby="benefits-heading">"#)?;
        writeln!(out, r#"<div class="container">"#)?;
        writeln!(out, r#"<h2 id="benefits-heading" class="center">All Agent Benefits</h2>"#)?;
        benefit_grid(out, "grid grid-3", &BENEFITS)?;
        writeln!(out, "</div>")?;
        writeln!(out, "</section>")?;

        cta_band(
            out,
            "Agent enquiry CTA",
            "Ready to Partner With Us?",
            "Contact our agent relations team to discuss partnership opportunities and start the registration process.",
            Cta {
                label: "Contact Agent Team",
                href: "/contact",
            },
            EMAIL_CTA,
        )
    })
}

fn benefit_grid(out: &mut String, class: &str, benefits: &[Highlight]) -> fmt::Result {
    writeln!(out, r#"<div class="{class}">"#)?;
    for benefit in benefits {
        writeln!(out, r#"<div class="card">"#)?;
        writeln!(out, "<h3>{}</h3>", escape_html(benefit.title))?;
        writeln!(out, "<p>{}</p>", escape_html(benefit.description))?;
        writeln!(out, "</div>")?;
    }
    writeln!(out, "</div>")
}
