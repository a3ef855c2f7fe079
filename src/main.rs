use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use edgar_downloader::{DownloadOptions, Downloader, EdgarConfig, forms};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "edgar-dl")]
#[command(about = "Download SEC EDGAR filings for a ticker or CIK")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Download filings and save them to disk
    Get {
        /// Filing type, e.g. 10-K, 8-K, "SC 13G"
        filing_type: String,

        /// Ticker or CIK of the filer
        ticker_or_cik: String,

        /// Maximum number of filings to download (default: all)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Only filings on or after this date (YYYY-MM-DD)
        #[arg(long)]
        after: Option<String>,

        /// Only filings on or before this date (YYYY-MM-DD)
        #[arg(long)]
        before: Option<String>,

        /// Also download amended filings (e.g. 8-K/A)
        #[arg(long)]
        include_amends: bool,

        /// Skip the primary document and save only the full submission
        #[arg(long)]
        no_details: bool,

        /// Download root (default: the user's Downloads folder)
        #[arg(short, long, env = "SEC_EDGAR_DOWNLOAD_FOLDER")]
        download_folder: Option<PathBuf>,

        /// User agent sent to SEC.gov, e.g. "Company Name admin@company.com"
        #[arg(long, env = "SEC_EDGAR_USER_AGENT")]
        user_agent: Option<String>,
    },

    /// List the supported filing types
    Forms,
}

fn default_download_folder() -> PathBuf {
    directories::UserDirs::new()
        .and_then(|dirs| dirs.download_dir().map(|dir| dir.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."))
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("edgar_downloader=info,edgar_dl=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Get {
            filing_type,
            ticker_or_cik,
            limit,
            after,
            before,
            include_amends,
            no_details,
            download_folder,
            user_agent,
        } => {
            let user_agent = user_agent.unwrap_or_else(|| EdgarConfig::default().user_agent);
            let download_folder = download_folder.unwrap_or_else(default_download_folder);
            let downloader = Downloader::new(&user_agent, download_folder)
                .context("Failed to create EDGAR client")?;

            let mut options = DownloadOptions::new()
                .with_include_amendments(include_amends)
                .with_include_filing_details(!no_details);
            options.limit = limit;
            options.after_date = after;
            options.before_date = before;

            let count = downloader
                .get(&filing_type, &ticker_or_cik, options)
                .await
                .with_context(|| format!("Failed to download {filing_type} filings for {ticker_or_cik}"))?;

            tracing::info!(
                "Downloaded {} filings to {}",
                count,
                downloader.download_folder().display()
            );
            println!("{count}");
        }

        Commands::Forms => {
            for form in forms::supported_filings() {
                println!("{form}");
            }
        }
    }

    Ok(())
}
