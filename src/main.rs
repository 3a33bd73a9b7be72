//! RAX FTP listing - Entry Point
//!
//! Prints FTP listing output for the given paths to stdout.

use clap::Parser;
use log::{error, info};
use std::path::PathBuf;
use std::process::ExitCode;

use rax_ftp_listing::utils::logging::setup_logging;
use rax_ftp_listing::{FileEntry, ListFormat, ListFormatter, ListingConfig, ListingError, send_listing};

/// Command-line arguments
#[derive(Parser, Debug)]
#[clap(
    name = "rax-ftp-listing",
    version = env!("CARGO_PKG_VERSION"),
    about = "Render FTP directory listings (NLST, LIST, MLSD) for the given paths"
)]
struct Args {
    /// Listing command whose output format to use (NLST, LIST, MLSD, MLST)
    #[clap(long, short, default_value = "LIST")]
    command: ListFormat,

    /// Path to a TOML configuration file (defaults to ./listing.toml if present)
    #[clap(long)]
    config: Option<PathBuf>,

    /// Paths to describe, listed in the order given
    #[clap(required = true)]
    paths: Vec<PathBuf>,
}

async fn run(args: Args) -> Result<(), ListingError> {
    let config = ListingConfig::load(args.config.as_deref())?;

    let mut entries = Vec::with_capacity(args.paths.len());
    for path in &args.paths {
        entries.push(FileEntry::load(path, &config).await?);
    }

    info!("Rendering {} entries as {}", entries.len(), args.command);
    let listing = ListFormatter::new(&entries).render(args.command);

    let mut stdout = tokio::io::stdout();
    send_listing(&mut stdout, &listing).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    setup_logging();

    let args = Args::parse();
    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("rax-ftp-listing: {}", e);
            ExitCode::FAILURE
        }
    }
}
