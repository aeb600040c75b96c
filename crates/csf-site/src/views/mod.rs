//! Server-side HTML. Components implement `Display`; pages write into a
//! `String` and every fallible write is propagated as `fmt::Error`.

mod components;
mod pages;

use std::borrow::Cow;
use std::fmt::{self, Write as _};

use chrono::{Datelike, Utc};

use crate::catalog::CourseCatalog;
use crate::site::MobileMenu;

pub use components::{Button, ButtonSize, ButtonVariant, CourseCard, Footer, Header, Hero};
pub use pages::Page;

pub const SITE_NAME: &str = "College of Sport & Fitness Australia";
pub const TITLE_SUFFIX: &str = "CSF Australia";
pub const DEFAULT_TITLE: &str = "College of Sport & Fitness Australia | RTO Courses";
pub const DEFAULT_DESCRIPTION: &str = "College of Sport & Fitness (CSF) Australia is a Registered Training Organisation offering vocational courses in fitness, sport, and health.";

pub const STYLESHEET_PATH: &str = "/assets/site.css";
pub const STYLESHEET: &str = include_str!("../../assets/site.css");
/// Path every not-found page renders under, whatever was requested.
pub const NOT_FOUND_PATH: &str = "";

/// `<title>` and meta description for one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMeta {
    title: Option<Cow<'static, str>>,
    description: Cow<'static, str>,
    templated: bool,
}

impl PageMeta {
    /// Title is shown as `"{title} | CSF Australia"`.
    pub fn new(title: impl Into<Cow<'static, str>>, description: impl Into<Cow<'static, str>>) -> Self {
        Self {
            title: Some(title.into()),
            description: description.into(),
            templated: true,
        }
    }

    /// Title is used as given.
    pub fn exact(title: impl Into<Cow<'static, str>>, description: impl Into<Cow<'static, str>>) -> Self {
        Self {
            title: Some(title.into()),
            description: description.into(),
            templated: false,
        }
    }

    pub fn site_default() -> Self {
        Self {
            title: None,
            description: Cow::Borrowed(DEFAULT_DESCRIPTION),
            templated: false,
        }
    }

    pub fn document_title(&self) -> String {
        match (&self.title, self.templated) {
            (Some(title), true) => format!("{title} | {TITLE_SUFFIX}"),
            (Some(title), false) => title.to_string(),
            (None, _) => DEFAULT_TITLE.to_string(),
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Per-request inputs shared by the layout and every page.
#[derive(Debug, Clone, Copy)]
pub struct PageContext<'a> {
    pub catalog: &'a CourseCatalog,
    pub path: &'a str,
    pub menu: MobileMenu,
    pub year: i32,
}

impl<'a> PageContext<'a> {
    pub fn new(catalog: &'a CourseCatalog, path: &'a str) -> Self {
        Self {
            catalog,
            path,
            menu: MobileMenu::Closed,
            year: Utc::now().year(),
        }
    }

    pub fn with_menu(mut self, menu: MobileMenu) -> Self {
        self.menu = menu;
        self
    }
}

/// Wraps a page body in the shared document shell.
pub fn render_document<F>(ctx: &PageContext<'_>, meta: &PageMeta, body: F) -> Result<String, fmt::Error>
where
    F: FnOnce(&mut String) -> fmt::Result,
{
    let mut html = String::with_capacity(16 * 1024);
    writeln!(html, "<!DOCTYPE html>")?;
    writeln!(html, r#"<html lang="en">"#)?;
    writeln!(html, "<head>")?;
    writeln!(html, r#"<meta charset="utf-8">"#)?;
    writeln!(
        html,
        r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#
    )?;
    writeln!(html, "<title>{}</title>", escape_html(&meta.document_title()))?;
    writeln!(
        html,
        r#"<meta name="description" content="{}">"#,
        escape_html(meta.description())
    )?;
    writeln!(html, r#"<meta property="og:site_name" content="{}">"#, escape_html(SITE_NAME))?;
    writeln!(html, r#"<meta property="og:locale" content="en_AU">"#)?;
    writeln!(html, r#"<link rel="stylesheet" href="{STYLESHEET_PATH}">"#)?;
    writeln!(html, "</head>")?;
    writeln!(html, "<body>")?;
    write!(html, "{}", Header::new(ctx.path, ctx.menu))?;
    writeln!(html, r#"<main id="main-content" tabindex="-1">"#)?;
    body(&mut html)?;
    writeln!(html, "</main>")?;
    write!(html, "{}", Footer::new(ctx.catalog, ctx.year))?;
    writeln!(html, "</body>")?;
    writeln!(html, "</html>")?;
    Ok(html)
}

/// Stand-alone not-found document for error paths that have no request
/// state to hand.
pub fn not_found_document() -> Result<String, fmt::Error> {
    let catalog = CourseCatalog::standard();
    let ctx = PageContext::new(&catalog, NOT_FOUND_PATH);
    pages::not_found(&ctx)
}

pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_significant_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn titles_follow_the_template() {
        assert_eq!(
            PageMeta::new("Admissions", "d").document_title(),
            "Admissions | CSF Australia"
        );
        assert_eq!(
            PageMeta::exact("Study Sport & Fitness in Australia | CSF Australia", "d")
                .document_title(),
            "Study Sport & Fitness in Australia | CSF Australia"
        );
        assert_eq!(PageMeta::site_default().document_title(), DEFAULT_TITLE);
    }

    #[test]
    fn document_shell_wraps_body() {
        let catalog = CourseCatalog::standard();
        let ctx = PageContext::new(&catalog, "/about");
        let html = render_document(&ctx, &PageMeta::new("About", "About us"), |out| {
            out.push_str("<p>body marker</p>");
            Ok(())
        })
        .expect("renders");

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>About | CSF Australia</title>"));
        assert!(html.contains("<p>body marker</p>"));
        assert!(html.contains(r#"id="main-content""#));
        assert!(html.trim_end().ends_with("</html>"));
    }
}
