use crate::export::{run_export, run_sitemap, ExportArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use csf_site::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "csf-site",
    about = "Serve or pre-render the College of Sport & Fitness Australia website",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP server (default command)
    Serve(ServeArgs),
    /// Print the sitemap XML to stdout
    Sitemap,
    /// Pre-render every page, the sitemap, and the stylesheet into a directory
    Export(ExportArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Sitemap => run_sitemap(),
        Command::Export(args) => run_export(args).await,
    }
}
