mod cli;
mod export;
mod infra;
mod routes;
mod server;

pub use export::{export_site, page_file, ExportSummary, NOT_FOUND_FILE, SITEMAP_FILE};
pub use infra::AppState;
pub use routes::router;

use csf_site::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
