use std::fmt::{self, Write as _};

use super::{hero, section_intro};
use crate::content::contact::PHONE_HREF;
use crate::content::students::{
    DESCRIPTION, HELP_HOURS, HERO, POLICIES, RESOURCES, SUPPORT_SERVICES, TITLE,
};
use crate::views::{escape_html, render_document, Button, ButtonSize, ButtonVariant, PageContext, PageMeta};

pub(super) fn render(ctx: &PageContext<'_>) -> Result<String, fmt::Error> {
    let meta = PageMeta::new(TITLE, DESCRIPTION);
    render_document(ctx, &meta, |out| {
        hero(out, &HERO)?;

        writeln!(out, r#"<section class="section" aria-labelledby="resources-heading">"#)?;
        writeln!(out, r#"<div class="container">"#)?;
        section_intro(
            out,
            None,
            "resources-heading",
            "Student Resources",
            Some("Access all the tools and support you need for a successful learning experience."),
        )?;
        writeln!(out, r#"<div class="grid grid-4">"#)?;
        for resource in RESOURCES {
            writeln!(out, r#"<div class="card">"#)?;
            writeln!(out, "<h3>{}</h3>", escape_html(resource.title))?;
            writeln!(out, "<p>{}</p>", escape_html(resource.description))?;
            writeln!(
                out,
                "{}",
                Button::link(resource.link_label, resource.href)
                    .variant(ButtonVariant::Outline)
                    .size(ButtonSize::Sm)
            )?;
            writeln!(out, "</div>")?;
        }
        writeln!(out, "</div>")?;
        writeln!(out, "</div>")?;
        writeln!(out, "</section>")?;

        writeln!(out, r#"<section class="section section-dark" aria-labelledby="support-heading">"#)?;
        writeln!(out, r#"<div class="container">"#)?;
        section_intro(
            out,
            None,
            "support-heading",
            "Student Support Services",
            Some("We're committed to your wellbeing and success. Access our range of support services."),
        )?;
        writeln!(out, r#"<div class="grid grid-3">"#)?;
        for service in SUPPORT_SERVICES {
            writeln!(out, r#"<div class="panel">"#)?;
            writeln!(out, "<h3>{}</h3>", escape_html(service.title))?;
            writeln!(out, "<p>{}</p>", escape_html(service.description))?;
            writeln!(out, "</div>")?;
        }
        writeln!(out, "</div>")?;
        writeln!(out, "</div>")?;
        writeln!(out, "</section>")?;

        writeln!(out, r#"<section class="section" aria-labelledby="policies-heading">"#)?;
        writeln!(out, r#"<div class="container">"#)?;
        writeln!(out, r#"<h2 id="policies-heading">Student Policies</h2>"#)?;
        writeln!(out, r#"<div class="grid grid-2">"#)?;
        for policy in POLICIES {
            writeln!(out, r#"<div class="card policy">"#)?;
            writeln!(out, "<h3>{}</h3>", escape_html(policy.title))?;
            writeln!(out, "<p>{}</p>", escape_html(policy.description))?;
            writeln!(out, "</div>")?;
        }
        writeln!(out, "</div>")?;
        writeln!(
            out,
            r#"<p class="fine-print">For copies of all student policies and procedures, contact the Student Services team or visit the Student Portal.</p>"#
        )?;
        writeln!(out, "</div>")?;
        writeln!(out, "</section>")?;

        writeln!(out, r#"<section class="section section-muted" aria-label="Student support contact">"#)?;
        writeln!(out, r#"<div class="container split">"#)?;
        writeln!(
            out,
            "<div><h2>Need Help?</h2><p>{}</p></div>",
            escape_html(HELP_HOURS)
        )?;
        writeln!(out, r#"<div class="actions">"#)?;
        writeln!(
            out,
            "{}",
            Button::link("Call Us", PHONE_HREF)
                .variant(ButtonVariant::Outline)
                .size(ButtonSize::Sm)
        )?;
        writeln!(
            out,
            "{}",
            Button::link("Contact Support", "/contact").size(ButtonSize::Sm)
        )?;
        writeln!(out, "</div>")?;
        writeln!(out, "</div>")?;
        writeln!(out, "</section>")
    })
}
