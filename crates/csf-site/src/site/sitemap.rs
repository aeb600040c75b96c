use std::collections::HashSet;
use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};

use super::{routes, ChangeFrequency};
use crate::catalog::CourseCatalog;
use crate::views::escape_html;

#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
    pub loc: String,
    pub last_modified: DateTime<Utc>,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
}

/// sitemaps.org `urlset`; render it with `to_string()`.
#[derive(Debug, Clone, PartialEq)]
pub struct Sitemap {
    entries: Vec<SitemapEntry>,
}

impl Sitemap {
    /// `base_url` must not end with a slash. The home page is listed as the
    /// bare origin.
    pub fn build(base_url: &str, catalog: &CourseCatalog, last_modified: DateTime<Utc>) -> Self {
        let mut seen = HashSet::new();
        let entries = routes(catalog)
            .into_iter()
            .filter(|route| seen.insert(route.path.clone()))
            .map(|route| SitemapEntry {
                loc: if route.path == "/" {
                    base_url.to_string()
                } else {
                    format!("{base_url}{}", route.path)
                },
                last_modified,
                change_frequency: route.change_frequency,
                priority: route.priority,
            })
            .collect();

        Self { entries }
    }

    pub fn entries(&self) -> &[SitemapEntry] {
        &self.entries
    }

    pub fn to_xml(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Sitemap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
        writeln!(
            f,
            r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#
        )?;
        for entry in &self.entries {
            writeln!(f, "  <url>")?;
            writeln!(f, "    <loc>{}</loc>", escape_html(&entry.loc))?;
            writeln!(
                f,
                "    <lastmod>{}</lastmod>",
                entry
                    .last_modified
                    .to_rfc3339_opts(SecondsFormat::Secs, true)
            )?;
            writeln!(
                f,
                "    <changefreq>{}</changefreq>",
                entry.change_frequency.as_str()
            )?;
            writeln!(f, "    <priority>{:.1}</priority>", entry.priority)?;
            writeln!(f, "  </url>")?;
        }
        writeln!(f, "</urlset>")
    }
}
