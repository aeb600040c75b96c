mod about;
mod admissions;
mod agents;
mod contact;
mod courses;
mod home;
mod international;
mod students;

use std::fmt::{self, Write as _};

use super::{escape_html, render_document, Button, ButtonSize, ButtonVariant, Hero, PageContext, PageMeta};
use crate::announcements::LatestAnnouncements;
use crate::contact::ContactView;
use crate::content::{self, Cta, HeroCopy, Step};
use crate::error::AppError;

/// Every page the site can render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page<'a> {
    Home(&'a LatestAnnouncements),
    Courses,
    CourseDetail(&'a str),
    Admissions,
    International,
    Students,
    About,
    Agents,
    Contact(ContactView),
    NotFound,
}

impl<'a> Page<'a> {
    /// Resolves a request path. Unknown paths map to `NotFound`; unknown
    /// course slugs are only detected at render time.
    pub fn for_path(path: &'a str, announcements: &'a LatestAnnouncements) -> Self {
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };

        match path {
            "/" => Self::Home(announcements),
            "/courses" => Self::Courses,
            "/admissions" => Self::Admissions,
            "/international" => Self::International,
            "/students" => Self::Students,
            "/about" => Self::About,
            "/agents" => Self::Agents,
            "/contact" => Self::Contact(ContactView::Editing),
            other => match other.strip_prefix("/courses/") {
                Some(slug) if !slug.is_empty() && !slug.contains('/') => Self::CourseDetail(slug),
                _ => Self::NotFound,
            },
        }
    }

    pub fn render(&self, ctx: &PageContext<'_>) -> Result<String, AppError> {
        let html = match self {
            Self::Home(announcements) => home::render(ctx, announcements)?,
            Self::Courses => courses::render_listing(ctx)?,
            Self::CourseDetail(slug) => {
                let detail = ctx
                    .catalog
                    .detail(slug)
                    .ok_or_else(|| AppError::CourseNotFound((*slug).to_string()))?;
                courses::render_detail(ctx, detail)?
            }
            Self::Admissions => admissions::render(ctx)?,
            Self::International => international::render(ctx)?,
            Self::Students => students::render(ctx)?,
            Self::About => about::render(ctx)?,
            Self::Agents => agents::render(ctx)?,
            Self::Contact(view) => contact::render(ctx, *view)?,
            Self::NotFound => not_found(ctx)?,
        };
        Ok(html)
    }
}

pub(super) fn not_found(ctx: &PageContext<'_>) -> Result<String, fmt::Error> {
    let meta = PageMeta::new("Page Not Found", "The page you were looking for could not be found.");
    render_document(ctx, &meta, |out| {
        writeln!(out, r#"<section class="section not-found" aria-labelledby="not-found-heading">"#)?;
        writeln!(out, r#"<div class="container narrow center">"#)?;
        writeln!(out, r#"<p class="eyebrow">404</p>"#)?;
        writeln!(out, r#"<h1 id="not-found-heading">Page Not Found</h1>"#)?;
        writeln!(
            out,
            "<p>Sorry, we couldn&#39;t find the page you were looking for. It may have moved, or the link may be out of date.</p>"
        )?;
        writeln!(out, r#"<div class="actions">"#)?;
        writeln!(out, "{}", Button::link("Back to Home", "/"))?;
        writeln!(out, "{}", Button::link("Browse Courses", "/courses").variant(ButtonVariant::Outline))?;
        writeln!(out, "</div>")?;
        writeln!(out, "</div>")?;
        writeln!(out, "</section>")
    })
}

/// Centred block of eyebrow, heading and lead paragraph above a section.
pub(super) fn section_intro(
    out: &mut String,
    eyebrow: Option<&str>,
    heading_id: &str,
    heading: &str,
    lead: Option<&str>,
) -> fmt::Result {
    writeln!(out, r#"<div class="section-intro">"#)?;
    if let Some(eyebrow) = eyebrow {
        writeln!(out, r#"<p class="eyebrow">{}</p>"#, escape_html(eyebrow))?;
    }
    writeln!(out, r#"<h2 id="{heading_id}">{}</h2>"#, escape_html(heading))?;
    if let Some(lead) = lead {
        writeln!(out, r#"<p class="lead">{}</p>"#, escape_html(lead))?;
    }
    writeln!(out, "</div>")
}

pub(super) fn bullet_list(out: &mut String, class: &str, items: &[&str]) -> fmt::Result {
    writeln!(out, r#"<ul class="{class}">"#)?;
    for item in items {
        writeln!(out, "<li>{}</li>", escape_html(item))?;
    }
    writeln!(out, "</ul>")
}

pub(super) fn step_cards(out: &mut String, steps: &[Step]) -> fmt::Result {
    writeln!(out, r#"<div class="grid grid-3">"#)?;
    for step in steps {
        writeln!(out, r#"<div class="card step-card">"#)?;
        writeln!(out, r#"<span class="step-number" aria-hidden="true">{}</span>"#, step.label())?;
        writeln!(out, "<h3>{}</h3>", escape_html(step.title))?;
        writeln!(out, "<p>{}</p>", escape_html(step.description))?;
        writeln!(out, "</div>")?;
    }
    writeln!(out, "</div>")
}

/// Full-width closing band with a heading, a sentence and two actions.
pub(super) fn cta_band(
    out: &mut String,
    label: &str,
    heading: &str,
    text: &str,
    primary: Cta,
    secondary: Cta,
) -> fmt::Result {
    writeln!(out, r#"<section class="cta-band" aria-label="{}">"#, escape_html(label))?;
    writeln!(out, r#"<div class="container center">"#)?;
    writeln!(out, "<h2>{}</h2>", escape_html(heading))?;
    writeln!(out, "<p>{}</p>", escape_html(text))?;
    writeln!(out, r#"<div class="actions">"#)?;
    writeln!(
        out,
        "{}",
        Button::link(primary.label, primary.href)
            .variant(ButtonVariant::Primary)
            .size(ButtonSize::Lg)
    )?;
    writeln!(
        out,
        "{}",
        Button::link(secondary.label, secondary.href)
            .size(ButtonSize::Lg)
            .class("btn-inverse")
    )?;
    writeln!(out, "</div>")?;
    writeln!(out, "</div>")?;
    writeln!(out, "</section>")
}

pub(super) fn hero(out: &mut String, copy: &HeroCopy) -> fmt::Result {
    write!(out, "{}", Hero(copy))
}

pub(super) fn stat_strip(out: &mut String, label: &str, stats: &[content::Stat]) -> fmt::Result {
    writeln!(out, r#"<section class="stat-strip" aria-label="{}">"#, escape_html(label))?;
    writeln!(out, r#"<div class="container grid grid-4">"#)?;
    for stat in stats {
        writeln!(out, r#"<div class="stat">"#)?;
        writeln!(out, r#"<p class="stat-value">{}</p>"#, escape_html(stat.value))?;
        writeln!(out, r#"<p class="stat-label">{}</p>"#, escape_html(stat.label))?;
        if let Some(note) = stat.note {
            writeln!(out, r#"<p class="stat-note">{}</p>"#, escape_html(note))?;
        }
        writeln!(out, "</div>")?;
    }
    writeln!(out, "</div>")?;
    writeln!(out, "</section>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_paths() {
        let none = LatestAnnouncements::Disabled;
        assert_eq!(Page::for_path("/", &none), Page::Home(&none));
        assert_eq!(Page::for_path("/courses/", &none), Page::Courses);
        assert_eq!(
            Page::for_path("/courses/diploma-of-sport", &none),
            Page::CourseDetail("diploma-of-sport")
        );
        assert_eq!(
            Page::for_path("/contact", &none),
            Page::Contact(ContactView::Editing)
        );
        assert_eq!(Page::for_path("/courses/a/b", &none), Page::NotFound);
        assert_eq!(Page::for_path("/blog", &none), Page::NotFound);
    }
}
