use std::fmt::{self, Write as _};

use super::hero;
use crate::contact::{ContactView, EnquiryType};
use crate::content::contact::{
    CHANNELS, CONFIRMATION_BODY, CONFIRMATION_HEADING, DESCRIPTION, HERO, OFFICE_HOURS, TITLE,
};
use crate::views::{escape_html, render_document, Button, ButtonSize, ButtonVariant, PageContext, PageMeta};

pub(super) fn render(ctx: &PageContext<'_>, view: ContactView) -> Result<String, fmt::Error> {
    let meta = PageMeta::new(TITLE, DESCRIPTION);
    render_document(ctx, &meta, |out| {
        hero(out, &HERO)?;

        writeln!(out, r#"<section class="section">"#)?;
        writeln!(out, r#"<div class="container contact-layout">"#)?;
        writeln!(out, r#"<div class="card contact-panel">"#)?;
        match view {
            ContactView::Editing => enquiry_form(out)?,
            ContactView::Submitted => confirmation(out)?,
        }
        writeln!(out, "</div>")?;
        details(out)?;
        writeln!(out, "</div>")?;
        writeln!(out, "</section>")
    })
}

fn enquiry_form(out: &mut String) -> fmt::Result {
    writeln!(out, r#"<h2 id="enquiry-heading">Send Us a Message</h2>"#)?;
    writeln!(
        out,
        r#"<form class="enquiry-form" method="post" action="/contact" aria-labelledby="enquiry-heading">"#
    )?;
    writeln!(out, r#"<div class="form-row">"#)?;
    text_field(out, "firstName", "First Name", "text", true)?;
    text_field(out, "lastName", "Last Name", "text", true)?;
    writeln!(out, "</div>")?;
    writeln!(out, r#"<div class="form-row">"#)?;
    text_field(out, "email", "Email Address", "email", true)?;
    text_field(out, "phone", "Phone Number", "tel", false)?;
    writeln!(out, "</div>")?;

    writeln!(out, r#"<div class="field">"#)?;
    writeln!(out, r#"<label for="enquiryType">Enquiry Type</label>"#)?;
    writeln!(out, r#"<select id="enquiryType" name="enquiryType">"#)?;
    writeln!(out, r#"<option value="">Select an option</option>"#)?;
    for kind in EnquiryType::ALL {
        writeln!(
            out,
            r#"<option value="{}">{}</option>"#,
            kind.value(),
            escape_html(kind.label())
        )?;
    }
    writeln!(out, "</select>")?;
    writeln!(out, "</div>")?;

    text_field(out, "subject", "Subject", "text", true)?;

    writeln!(out, r#"<div class="field">"#)?;
    writeln!(out, r#"<label for="message">Message <span aria-hidden="true">*</span></label>"#)?;
    writeln!(out, r#"<textarea id="message" name="message" rows="5" required></textarea>"#)?;
    writeln!(out, "</div>")?;

    writeln!(
        out,
        "{}",
        Button::submit("Send Message")
            .variant(ButtonVariant::Secondary)
            .size(ButtonSize::Lg)
            .class("btn-block")
    )?;
    writeln!(out, "</form>")
}

fn text_field(out: &mut String, name: &str, label: &str, kind: &str, required: bool) -> fmt::Result {
    writeln!(out, r#"<div class="field">"#)?;
    if required {
        writeln!(out, r#"<label for="{name}">{label} <span aria-hidden="true">*</span></label>"#)?;
        writeln!(out, r#"<input id="{name}" name="{name}" type="{kind}" required>"#)?;
    } else {
        writeln!(out, r#"<label for="{name}">{label}</label>"#)?;
        writeln!(out, r#"<input id="{name}" name="{name}" type="{kind}">"#)?;
    }
    writeln!(out, "</div>")
}

fn confirmation(out: &mut String) -> fmt::Result {
    writeln!(out, r#"<div class="confirmation center" role="status">"#)?;
    writeln!(out, r#"<span class="confirmation-mark" aria-hidden="true">&#10003;</span>"#)?;
    writeln!(out, "<h2>{}</h2>", escape_html(CONFIRMATION_HEADING))?;
    writeln!(out, "<p>{}</p>", escape_html(CONFIRMATION_BODY))?;
    writeln!(out, "{}", Button::link("Back to Home", "/").variant(ButtonVariant::Outline))?;
    writeln!(out, "</div>")
}

fn details(out: &mut String) -> fmt::Result {
    writeln!(out, r#"<aside class="contact-details" aria-label="Contact details">"#)?;
    writeln!(out, "<h2>Contact Information</h2>")?;
    writeln!(out, r#"<ul class="channel-list">"#)?;
    for channel in CHANNELS {
        let value = channel
            .value
            .lines()
            .map(escape_html)
            .collect::<Vec<_>>()
            .join("<br>");
        match channel.href {
            Some(href) => writeln!(
                out,
                r#"<li><p class="channel-label">{}</p><a href="{href}">{value}</a></li>"#,
                channel.label
            )?,
            None => writeln!(
                out,
                r#"<li><p class="channel-label">{}</p><p>{value}</p></li>"#,
                channel.label
            )?,
        }
    }
    writeln!(out, "</ul>")?;

    writeln!(out, r#"<div class="card card-dark">"#)?;
    writeln!(out, "<h3>Office Hours</h3>")?;
    writeln!(out, r#"<dl class="fact-list">"#)?;
    for hours in OFFICE_HOURS {
        writeln!(
            out,
            "<div><dt>{}</dt><dd>{}</dd></div>",
            escape_html(hours.label),
            escape_html(hours.value)
        )?;
    }
    writeln!(out, "</dl>")?;
    writeln!(out, "</div>")?;

    writeln!(out, r#"<div class="map-placeholder" role="img" aria-label="Map showing the Sydney CBD campus">"#)?;
    writeln!(out, "<p>Sydney CBD Campus</p>")?;
    writeln!(out, "</div>")?;
    writeln!(out, "</aside>")
}
