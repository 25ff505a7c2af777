//! Stall Gallery CLI
//!
//! Thin wrapper around stallgallery-core for maintaining a gallery site.
//!
//! ## Usage
//!
//! ```bash
//! # Regenerate photos.json from the photos/ folders
//! stallgallery scan
//!
//! # Scan every sub-folder instead of the default categories
//! stallgallery scan --discover
//!
//! # Shrink all photos for the web (1200px, JPEG quality 85)
//! stallgallery compress
//!
//! # Serve the site with a live photos.json on http://localhost:8000
//! stallgallery serve
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use stallgallery_core::{
    compress_all, scan_photos, write_manifest, CompressOptions, GalleryConfig,
};
use stallgallery_cli::server::run_server;

/// Stall Gallery - photo gallery tooling
#[derive(Parser)]
#[command(name = "stallgallery")]
#[command(version)]
#[command(about = "Stall Gallery - scan, compress and serve gallery photos")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Site root containing photos/ and photos.json (default: current directory)
    #[arg(short, long, global = true)]
    root: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan photos/ and write the manifest
    Scan {
        /// Categories to scan, in display order (comma separated)
        #[arg(short, long, value_delimiter = ',', conflicts_with = "discover")]
        categories: Option<Vec<String>>,

        /// Scan every sub-folder of photos/ in alphabetical order
        #[arg(long)]
        discover: bool,

        /// Manifest path (default: <root>/photos.json)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the manifest instead of writing it
        #[arg(long)]
        print: bool,
    },

    /// Resize and re-encode every photo in place
    Compress {
        /// Longest side in pixels
        #[arg(long, default_value_t = stallgallery_core::compress::DEFAULT_MAX_SIZE)]
        max_size: u32,

        /// JPEG quality (1-100)
        #[arg(long, default_value_t = stallgallery_core::compress::DEFAULT_QUALITY,
              value_parser = clap::value_parser!(u8).range(1..=100))]
        quality: u8,
    },

    /// Serve the site, generating photos.json on every request
    Serve {
        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to listen on
        #[arg(short, long, default_value_t = 8000)]
        port: u16,

        /// Categories to scan, in display order (comma separated)
        #[arg(short, long, value_delimiter = ',', conflicts_with = "discover")]
        categories: Option<Vec<String>>,

        /// Scan every sub-folder of photos/ in alphabetical order
        #[arg(long)]
        discover: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let root = cli.root.unwrap_or_else(|| PathBuf::from("."));
    let config = GalleryConfig::new(root);

    match cli.command {
        Commands::Scan {
            categories,
            discover,
            output,
            print,
        } => {
            let config = with_categories(config, categories, discover);
            let photos_dir = config.photos_dir();
            let categories = config.resolve_categories()?;

            let photos = tokio::task::spawn_blocking(move || scan_photos(&photos_dir, &categories))
                .await??;

            if print {
                println!("{}", photos.to_json_pretty()?);
                return Ok(());
            }

            for category in photos.categories() {
                println!("Found {} photos in {}", category.files.len(), category.name);
            }

            let output = output.unwrap_or_else(|| config.manifest_path());
            write_manifest(&photos, &output)
                .with_context(|| format!("Failed to write {}", output.display()))?;

            println!();
            println!(
                "Success! Generated {} with {} total photos",
                output.display(),
                photos.photo_count()
            );
        }

        Commands::Compress { max_size, quality } => {
            let options = CompressOptions { max_size, quality };
            let photos_dir = config.photos_dir();

            println!("Starting photo compression...");
            let report =
                tokio::task::spawn_blocking(move || compress_all(&photos_dir, &options)).await??;

            for stats in &report.compressed {
                println!(
                    "  {}: {:.1} KB -> {:.1} KB ({:.1}%)",
                    stats.path.display(),
                    stats.original_bytes as f64 / 1024.0,
                    stats.compressed_bytes as f64 / 1024.0,
                    stats.reduction_percent()
                );
            }
            for (path, reason) in &report.failures {
                println!("  {}: failed ({})", path.display(), reason);
            }

            println!();
            println!("Compression complete!");
            println!("Total photos processed: {}", report.compressed.len());
            println!("Failed: {}", report.failures.len());
            println!("Total original size: {:.2} MB", megabytes(report.total_original()));
            println!("Total compressed size: {:.2} MB", megabytes(report.total_compressed()));
            println!("Overall reduction: {:.1}%", report.reduction_percent());
        }

        Commands::Serve {
            host,
            port,
            categories,
            discover,
        } => {
            let config = with_categories(config, categories, discover);
            let addr: SocketAddr = format!("{}:{}", host, port)
                .parse()
                .with_context(|| format!("Invalid address {}:{}", host, port))?;

            println!("Server started at http://{}", addr);
            println!("Photos are rescanned on every page load");
            println!("Press Ctrl+C to stop the server");

            run_server(config, addr).await?;
        }
    }

    Ok(())
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Apply `--categories` / `--discover`; neither keeps the defaults
fn with_categories(
    config: GalleryConfig,
    categories: Option<Vec<String>>,
    discover: bool,
) -> GalleryConfig {
    if discover {
        config.with_categories(None)
    } else if let Some(categories) = categories {
        config.with_categories(Some(categories))
    } else {
        config
    }
}

fn megabytes(bytes: u64) -> f64 {
    bytes as f64 / (1024.0 * 1024.0)
}
