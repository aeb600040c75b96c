use chrono::Utc;
use clap::Args;
use csf_site::announcements::{AnnouncementFeed, LatestAnnouncements};
use csf_site::catalog::CourseCatalog;
use csf_site::config::{AppConfig, SiteConfig};
use csf_site::error::AppError;
use csf_site::site::{routes, Sitemap};
use csf_site::telemetry;
use csf_site::views::{Page, PageContext, NOT_FOUND_PATH, STYLESHEET, STYLESHEET_PATH};
use std::io::Write as _;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

pub const NOT_FOUND_FILE: &str = "404.html";
pub const SITEMAP_FILE: &str = "sitemap.xml";

#[derive(Args, Debug)]
pub(crate) struct ExportArgs {
    /// Directory that receives the rendered site
    #[arg(long, default_value = "dist")]
    pub(crate) out: PathBuf,
}

/// Counts of what an export wrote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportSummary {
    pub pages: usize,
    pub assets: usize,
}

pub(crate) fn run_sitemap() -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let catalog = CourseCatalog::standard();
    let sitemap = Sitemap::build(config.site.base_url(), &catalog, Utc::now());

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(sitemap.to_xml().as_bytes())?;
    stdout.flush()?;
    Ok(())
}

pub(crate) async fn run_export(args: ExportArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let catalog = CourseCatalog::standard();
    let feed = AnnouncementFeed::from_config(&config.announcements);
    let announcements = feed.latest().await;
    if matches!(announcements, LatestAnnouncements::Unavailable) {
        warn!("exporting home page without announcements");
    }

    let summary = export_site(&args.out, &catalog, &announcements, &config.site).await?;
    info!(
        pages = summary.pages,
        assets = summary.assets,
        out = %args.out.display(),
        "site exported"
    );
    Ok(())
}

/// Renders every routable page to `<out>/<path>/index.html`, plus the
/// not-found page, the sitemap, and the stylesheet.
pub async fn export_site(
    out: &Path,
    catalog: &CourseCatalog,
    announcements: &LatestAnnouncements,
    site: &SiteConfig,
) -> Result<ExportSummary, AppError> {
    let mut pages = 0;
    for route in routes(catalog) {
        let page = Page::for_path(&route.path, announcements);
        if matches!(page, Page::NotFound) {
            return Err(AppError::PageNotFound(route.path.clone()));
        }

        let ctx = PageContext::new(catalog, &route.path);
        let html = page.render(&ctx)?;
        write_file(&page_file(out, &route.path), html.as_bytes()).await?;
        pages += 1;
    }

    let ctx = PageContext::new(catalog, NOT_FOUND_PATH);
    let html = Page::NotFound.render(&ctx)?;
    write_file(&out.join(NOT_FOUND_FILE), html.as_bytes()).await?;
    pages += 1;

    let sitemap = Sitemap::build(site.base_url(), catalog, Utc::now());
    write_file(&out.join(SITEMAP_FILE), sitemap.to_xml().as_bytes()).await?;
    write_file(&asset_file(out, STYLESHEET_PATH), STYLESHEET.as_bytes()).await?;

    Ok(ExportSummary { pages, assets: 2 })
}

/// `/` maps to `index.html`; `/courses/x` maps to `courses/x/index.html`.
pub fn page_file(out: &Path, route_path: &str) -> PathBuf {
    let mut target = asset_file(out, route_path);
    target.push("index.html");
    target
}

fn asset_file(out: &Path, url_path: &str) -> PathBuf {
    url_path
        .split('/')
        .filter(|segment| !segment.is_empty())
        .fold(out.to_path_buf(), |mut target, segment| {
            target.push(segment);
            target
        })
}

async fn write_file(path: &Path, contents: &[u8]) -> Result<(), AppError> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(path, contents).await?;
    debug!(path = %path.display(), bytes = contents.len(), "wrote file");
    Ok(())
}
