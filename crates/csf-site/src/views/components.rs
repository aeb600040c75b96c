use std::fmt;

use super::escape_html;
use crate::catalog::{Course, CourseCatalog};
use crate::content::contact::{ADDRESS_LINES, EMAIL, PHONE, PHONE_HREF};
use crate::content::HeroCopy;
use crate::site::{is_active, MobileMenu, FOOTER_COLUMNS, LEGAL_LINKS, PRIMARY_NAV};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
}

impl ButtonVariant {
    const fn class(self) -> &'static str {
        match self {
            Self::Primary => "btn-primary",
            Self::Secondary => "btn-secondary",
            Self::Outline => "btn-outline",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ButtonSize {
    const fn class(self) -> &'static str {
        match self {
            Self::Sm => "btn-sm",
            Self::Md => "btn-md",
            Self::Lg => "btn-lg",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ButtonTarget<'a> {
    Link(&'a str),
    Submit,
}

/// Styled call to action, rendered as `<a>` when it has a target and as a
/// submit `<button>` otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Button<'a> {
    label: &'a str,
    target: ButtonTarget<'a>,
    variant: ButtonVariant,
    size: ButtonSize,
    extra_class: Option<&'static str>,
}

impl<'a> Button<'a> {
    pub fn link(label: &'a str, href: &'a str) -> Self {
        Self {
            label,
            target: ButtonTarget::Link(href),
            variant: ButtonVariant::default(),
            size: ButtonSize::default(),
            extra_class: None,
        }
    }

    pub fn submit(label: &'a str) -> Self {
        Self {
            target: ButtonTarget::Submit,
            ..Self::link(label, "")
        }
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    pub fn class(mut self, class: &'static str) -> Self {
        self.extra_class = Some(class);
        self
    }
}

impl fmt::Display for Button<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut classes = format!("btn {} {}", self.variant.class(), self.size.class());
        if let Some(extra) = self.extra_class {
            classes.push(' ');
            classes.push_str(extra);
        }
        let label = escape_html(self.label);

        match self.target {
            ButtonTarget::Link(href) => write!(
                f,
                r#"<a href="{}" class="{}">{}</a>"#,
                escape_html(href),
                classes,
                label
            ),
            ButtonTarget::Submit => {
                write!(f, r#"<button type="submit" class="{}">{}</button>"#, classes, label)
            }
        }
    }
}

/// Page banner. The primary action is a filled button, the secondary one a
/// white outline link.
#[derive(Debug, Clone, Copy)]
pub struct Hero<'a>(pub &'a HeroCopy);

impl fmt::Display for Hero<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hero = self.0;
        let size_class = if hero.compact { " hero-compact" } else { "" };
        writeln!(f, r#"<section class="hero{size_class}" aria-label="Hero section">"#)?;
        writeln!(f, r#"<div class="container hero-inner">"#)?;
        if let Some(subtitle) = hero.subtitle {
            writeln!(f, r#"<p class="eyebrow">{}</p>"#, escape_html(subtitle))?;
        }
        writeln!(f, "<h1>{}</h1>", escape_html(hero.title))?;
        if let Some(description) = hero.description {
            writeln!(f, r#"<p class="hero-lead">{}</p>"#, escape_html(description))?;
        }
        if hero.primary_cta.is_some() || hero.secondary_cta.is_some() {
            writeln!(f, r#"<div class="hero-actions">"#)?;
            if let Some(cta) = hero.primary_cta {
                writeln!(
                    f,
                    "{}",
                    Button::link(cta.label, cta.href)
                        .variant(ButtonVariant::Secondary)
                        .size(ButtonSize::Lg)
                )?;
            }
            if let Some(cta) = hero.secondary_cta {
                writeln!(
                    f,
                    r#"<a href="{}" class="btn btn-ghost btn-lg">{}</a>"#,
                    escape_html(cta.href),
                    escape_html(cta.label)
                )?;
            }
            writeln!(f, "</div>")?;
        }
        writeln!(f, "</div>")?;
        writeln!(f, "</section>")
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CourseCard<'a>(pub &'a Course);

impl fmt::Display for CourseCard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let course = self.0;
        let href = course.href();
        writeln!(f, r#"<article class="course-card">"#)?;
        writeln!(f, r#"<div class="card-accent" aria-hidden="true"></div>"#)?;
        writeln!(f, r#"<div class="card-body">"#)?;
        writeln!(f, r#"<div class="badges">"#)?;
        writeln!(
            f,
            r#"<span class="badge badge-{}">{}</span>"#,
            course.category.slug(),
            course.category.label()
        )?;
        if let Some(level) = course.level {
            writeln!(f, r#"<span class="badge badge-level">{}</span>"#, escape_html(level))?;
        }
        writeln!(f, "</div>")?;
        writeln!(
            f,
            r#"<h3 class="card-title"><a href="{}">{}</a></h3>"#,
            escape_html(&href),
            escape_html(course.name)
        )?;
        writeln!(f, r#"<p class="course-code">{}</p>"#, escape_html(course.code))?;
        writeln!(f, r#"<p class="card-text">{}</p>"#, escape_html(course.description))?;
        writeln!(f, r#"<p class="course-duration">{}</p>"#, escape_html(course.duration))?;
        writeln!(
            f,
            "{}",
            Button::link("View Course Details", &href)
                .size(ButtonSize::Sm)
                .class("btn-block")
        )?;
        writeln!(f, "</div>")?;
        writeln!(f, "</article>")
    }
}

/// Sticky site header with desktop navigation and the small-screen menu.
#[derive(Debug, Clone, Copy)]
pub struct Header<'a> {
    path: &'a str,
    menu: MobileMenu,
}

impl<'a> Header<'a> {
    pub fn new(path: &'a str, menu: MobileMenu) -> Self {
        Self { path, menu }
    }

    fn nav_links(&self, f: &mut fmt::Formatter<'_>, link_class: &str) -> fmt::Result {
        for link in PRIMARY_NAV {
            if is_active(self.path, link.href) {
                writeln!(
                    f,
                    r#"<a href="{}" class="{link_class} is-active" aria-current="page">{}</a>"#,
                    link.href,
                    escape_html(link.label)
                )?;
            } else {
                writeln!(
                    f,
                    r#"<a href="{}" class="{link_class}">{}</a>"#,
                    link.href,
                    escape_html(link.label)
                )?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for Header<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let apply = Button::link("Apply Now", "/admissions")
            .variant(ButtonVariant::Secondary)
            .size(ButtonSize::Sm);

        writeln!(f, r#"<header class="site-header">"#)?;
        writeln!(f, r##"<a href="#main-content" class="skip-link">Skip to main content</a>"##)?;
        writeln!(f, r#"<div class="container header-bar">"#)?;
        writeln!(f, r#"<a href="/" class="logo" aria-label="CSF Home">"#)?;
        writeln!(f, r#"<span class="logo-mark" aria-hidden="true">CSF</span>"#)?;
        writeln!(
            f,
            r#"<span class="logo-text"><span class="logo-name">College of Sport</span><span class="logo-tagline">&amp; Fitness Australia</span></span>"#
        )?;
        writeln!(f, "</a>")?;

        writeln!(f, r#"<nav class="nav-desktop" aria-label="Main navigation">"#)?;
        self.nav_links(f, "nav-link")?;
        writeln!(f, "</nav>")?;
        writeln!(f, r#"<div class="header-cta">{apply}</div>"#)?;

        let open = self.menu.is_open();
        writeln!(
            f,
            r#"<a href="{}" class="menu-toggle" aria-label="{}" aria-expanded="{}" aria-controls="mobile-menu">{}</a>"#,
            escape_html(&self.menu.toggle_href(self.path)),
            if open { "Close menu" } else { "Open menu" },
            open,
            if open { "&#x2715;" } else { "&#x2630;" }
        )?;
        writeln!(f, "</div>")?;

        if open {
            writeln!(f, r#"<div id="mobile-menu" class="nav-mobile">"#)?;
            writeln!(f, r#"<nav aria-label="Mobile navigation">"#)?;
            self.nav_links(f, "nav-mobile-link")?;
            writeln!(f, r#"<div class="nav-mobile-cta">{}</div>"#, apply.class("btn-block"))?;
            writeln!(f, "</nav>")?;
            writeln!(f, "</div>")?;
        }

        writeln!(f, "</header>")
    }
}

/// Footer with link columns, contact strip and copyright line.
#[derive(Debug, Clone, Copy)]
pub struct Footer<'a> {
    catalog: &'a CourseCatalog,
    year: i32,
}

impl<'a> Footer<'a> {
    pub fn new(catalog: &'a CourseCatalog, year: i32) -> Self {
        Self { catalog, year }
    }
}

impl fmt::Display for Footer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, r#"<footer class="site-footer" aria-label="Site footer">"#)?;
        writeln!(f, r#"<div class="container footer-grid">"#)?;

        writeln!(f, r#"<div class="footer-brand">"#)?;
        writeln!(
            f,
            r#"<a href="/" class="logo logo-inverse" aria-label="CSF Home"><span class="logo-mark" aria-hidden="true">CSF</span><span class="logo-text"><span class="logo-name">College of Sport</span><span class="logo-tagline">&amp; Fitness Australia</span></span></a>"#
        )?;
        writeln!(
            f,
            "<p>Registered Training Organisation (RTO) providing high-quality vocational education in fitness, sport, and health across Australia.</p>"
        )?;
        writeln!(
            f,
            r#"<div class="rto-box"><p class="rto-label">RTO Number</p><p class="rto-value">XXXXX</p></div>"#
        )?;
        writeln!(f, "</div>")?;

        writeln!(f, r#"<div class="footer-column">"#)?;
        writeln!(f, "<h3>Courses</h3>")?;
        writeln!(f, "<ul>")?;
        for course in self.catalog.courses() {
            writeln!(
                f,
                r#"<li><a href="{}">{}</a></li>"#,
                escape_html(&course.href()),
                escape_html(course.name)
            )?;
        }
        writeln!(f, r#"<li><a href="/courses">View All Courses</a></li>"#)?;
        writeln!(f, "</ul>")?;
        writeln!(f, "</div>")?;

        for column in FOOTER_COLUMNS {
            writeln!(f, r#"<div class="footer-column">"#)?;
            writeln!(f, "<h3>{}</h3>", escape_html(column.title))?;
            writeln!(f, "<ul>")?;
            for link in column.links {
                writeln!(
                    f,
                    r#"<li><a href="{}">{}</a></li>"#,
                    link.href,
                    escape_html(link.label)
                )?;
            }
            writeln!(f, "</ul>")?;
            writeln!(f, "</div>")?;
        }
        writeln!(f, "</div>")?;

        writeln!(f, r#"<div class="container footer-contact">"#)?;
        writeln!(
            f,
            r#"<div><p class="footer-contact-label">Address</p><p>{}</p></div>"#,
            escape_html(&ADDRESS_LINES.join(", "))
        )?;
        writeln!(
            f,
            r#"<div><p class="footer-contact-label">Phone</p><a href="{PHONE_HREF}">{PHONE}</a></div>"#
        )?;
        writeln!(
            f,
            r#"<div><p class="footer-contact-label">Email</p><a href="mailto:{EMAIL}">{EMAIL}</a></div>"#
        )?;
        writeln!(f, "</div>")?;

        writeln!(f, r#"<div class="footer-bottom">"#)?;
        writeln!(f, r#"<div class="container footer-bottom-bar">"#)?;
        writeln!(
            f,
            "<p>&copy; {} College of Sport &amp; Fitness Australia. All rights reserved.</p>",
            self.year
        )?;
        writeln!(f, r#"<div class="legal-links">"#)?;
        for link in LEGAL_LINKS {
            writeln!(f, r#"<a href="{}">{}</a>"#, link.href, escape_html(link.label))?;
        }
        writeln!(f, "</div>")?;
        writeln!(f, "</div>")?;
        writeln!(f, "</div>")?;
        writeln!(f, "</footer>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::home;

    #[test]
    fn button_renders_link_and_submit_forms() {
        let link = Button::link("Apply Now", "/admissions")
            .variant(ButtonVariant::Secondary)
            .size(ButtonSize::Lg)
            .to_string();
        assert_eq!(
            link,
            r#"<a href="/admissions" class="btn btn-secondary btn-lg">Apply Now</a>"#
        );

        let submit = Button::submit("Send Message").to_string();
        assert_eq!(
            submit,
            r#"<button type="submit" class="btn btn-primary btn-md">Send Message</button>"#
        );
    }

    #[test]
    fn header_marks_only_the_current_section() {
        let html = Header::new("/courses/diploma-of-sport", MobileMenu::Closed).to_string();
        assert_eq!(html.matches(r#"aria-current="page""#).count(), 1);
        assert!(html.contains(r#"<a href="/courses" class="nav-link is-active" aria-current="page">Courses</a>"#));
        assert!(!html.contains(r#"id="mobile-menu""#));
        assert!(html.contains(r#"href="/courses/diploma-of-sport?menu=open""#));
    }

    #[test]
    fn open_menu_renders_mobile_links_without_the_parameter() {
        let html = Header::new("/about", MobileMenu::Open).to_string();
        assert!(html.contains(r#"id="mobile-menu""#));
        assert!(html.contains(r#"aria-expanded="true""#));
        assert!(html.contains(r#"<a href="/contact" class="nav-mobile-link">Contact</a>"#));
        assert!(!html.contains("/contact?menu"));
        assert_eq!(html.matches(r#"aria-current="page""#).count(), 2);
    }

    #[test]
    fn footer_links_every_course_and_shows_year() {
        let catalog = CourseCatalog::standard();
        let html = Footer::new(&catalog, 2031).to_string();
        for course in catalog.courses() {
            assert!(html.contains(&format!(r#"href="{}""#, course.href())));
        }
        assert!(html.contains("&copy; 2031 College of Sport"));
    }

    #[test]
    fn hero_renders_both_calls_to_action() {
        let html = Hero(&home::HERO).to_string();
        assert!(html.contains("<h1>Study Sport &amp; Fitness in Australia</h1>"));
        assert!(html.contains(r#"<a href="/courses" class="btn btn-secondary btn-lg">Explore Courses</a>"#));
        assert!(html.contains(r#"class="btn btn-ghost btn-lg">Apply Now</a>"#));
        assert!(!html.contains("hero-compact"));
    }

    #[test]
    fn course_card_escapes_and_links_to_detail() {
        let catalog = CourseCatalog::standard();
        let course = &catalog.courses()[4];
        let html = CourseCard(course).to_string();
        assert!(html.contains(r#"<a href="/courses/certificate-iii-sport-recreation">Certificate III in Sport and Recreation</a>"#));
        assert!(html.contains(r#"class="badge badge-recreation">Recreation</span>"#));
        assert!(html.contains("View Course Details"));
    }
}
