use std::fmt::{self, Write as _};

use super::{bullet_list, cta_band, hero, section_intro, stat_strip, step_cards};
use crate::content::international::{
    DESCRIPTION, ENGLISH_TESTS, FAQS, HERO, KEY_FACTS, OSHC_SUMMARY, STEPS, SUPPORT, TITLE,
    VISA_CONDITIONS, VISA_SUMMARY,
};
use crate::content::Cta;
use crate::views::{escape_html, render_document, Button, ButtonSize, ButtonVariant, PageContext, PageMeta};

pub(super) fn render(ctx: &PageContext<'_>) -> Result<String, fmt::Error> {
    let meta = PageMeta::new(TITLE, DESCRIPTION);
    render_document(ctx, &meta, |out| {
        hero(out, &HERO)?;
        stat_strip(out, "International student key facts", &KEY_FACTS)?;

        writeln!(out, r#"<section class="section" aria-labelledby="intl-apply-heading">"#)?;
        writeln!(out, r#"<div class="container">"#)?;
        section_intro(
            out,
            None,
            "intl-apply-heading",
            "How to Apply as an International Student",
            Some("Follow these steps to start your journey at CSF Australia. Our international admissions team is here to support you throughout."),
        )?;
        step_cards(out, &STEPS)?;
        writeln!(
            out,
            r#"<div class="center">{}</div>"#,
            Button::link("Start Application", "/admissions")
                .variant(ButtonVariant::Secondary)
                .size(ButtonSize::Lg)
        )?;
        writeln!(out, "</div>")?;
        writeln!(out, "</section>")?;

        writeln!(out, r#"<section class="section section-dark" aria-labelledby="visa-heading">"#)?;
        writeln!(out, r#"<div class="container grid grid-2">"#)?;
        writeln!(out, "<div>")?;
        writeln!(out, r#"<h2 id="visa-heading">Visa &amp; OSHC Information</h2>"#)?;
        writeln!(out, r#"<div class="panel">"#)?;
        writeln!(out, "<h3>Student Visa (Subclass 500)</h3>")?;
        writeln!(out, "<p>{}</p>", escape_html(VISA_SUMMARY))?;
        bullet_list(out, "check-list", &VISA_CONDITIONS)?;
        writeln!(out, "</div>")?;
        writeln!(out, r#"<div class="panel">"#)?;
        writeln!(out, "<h3>Overseas Student Health Cover (OSHC)</h3>")?;
        writeln!(out, "<p>{}</p>", escape_html(OSHC_SUMMARY))?;
        writeln!(out, "</div>")?;
        writeln!(out, "</div>")?;

        writeln!(out, "<div>")?;
        writeln!(out, "<h3>English Requirements</h3>")?;
        writeln!(out, r#"<table class="data-table data-table-dark">"#)?;
        writeln!(out, "<thead><tr><th>Test</th><th>Minimum Score</th></tr></thead>")?;
        writeln!(out, "<tbody>")?;
        for test in ENGLISH_TESTS {
            writeln!(
                out,
                "<tr><td>{}</td><td>{}</td></tr>",
                escape_html(test.label),
                escape_html(test.value)
            )?;
        }
        writeln!(out, "</tbody>")?;
        writeln!(out, "</table>")?;
        writeln!(
            out,
            r#"<p class="fine-print">English requirements may vary by course. Please contact admissions for specific requirements.</p>"#
        )?;
        writeln!(out, "</div>")?;
        writeln!(out, "</div>")?;
        writeln!(out, "</section>")?;

        writeln!(out, r#"<section class="section" aria-labelledby="intl-support-heading">"#)?;
        writeln!(out, r#"<div class="container">"#)?;
        section_intro(
            out,
            None,
            "intl-support-heading",
            "International Student Support",
            Some("We understand that moving to a new country is a big step. Our dedicated international student support team is with you every step of the way."),
        )?;
        writeln!(out, r#"<div class="grid grid-3">"#)?;
        for group in SUPPORT {
            writeln!(out, r#"<div class="card">"#)?;
            writeln!(out, "<h3>{}</h3>", escape_html(group.title))?;
            bullet_list(out, "check-list", group.items)?;
            writeln!(out, "</div>")?;
        }
        writeln!(out, "</div>")?;
        writeln!(out, "</div>")?;
        writeln!(out, "</section>")?;

        writeln!(out, r#"<section class="section section-muted" aria-labelledby="intl-faq-heading">"#)?;
        writeln!(out, r#"<div class="container narrow">"#)?;
        writeln!(out, r#"<h2 id="intl-faq-heading">Frequently Asked Questions</h2>"#)?;
        for faq in FAQS {
            writeln!(out, r#"<details class="faq">"#)?;
            writeln!(out, "<summary>{}</summary>", escape_html(faq.question))?;
            writeln!(out, "<p>{}</p>", escape_html(faq.answer))?;
            writeln!(out, "</details>")?;
        }
        writeln!(out, "</div>")?;
        writeln!(out, "</section>")?;

        cta_band(
            out,
            "International apply CTA",
            "Ready to Study in Australia?",
            "Contact our international admissions team or speak to one of our authorised education agents in your country.",
            Cta {
                label: "Apply Now",
                href: "/admissions",
            },
            Cta {
                label: "Find an Agent",
                href: "/agents",
            },
        )
    })
}
