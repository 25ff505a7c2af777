#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use stallgallery_core::GalleryConfig;

/// Global gallery settings, set from command line
static SETTINGS: OnceLock<AppSettings> = OnceLock::new();

/// Where the desktop app reads its photos from
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub gallery: GalleryConfig,
    /// Manifest file read at startup
    pub manifest: PathBuf,
    /// Scan photos/ directly instead of reading the manifest
    pub live: bool,
}

/// Get the gallery settings (set from command line or default)
pub fn get_settings() -> AppSettings {
    SETTINGS.get().cloned().unwrap_or_else(|| {
        let gallery = GalleryConfig::default();
        AppSettings {
            manifest: gallery.manifest_path(),
            gallery,
            live: false,
        }
    })
}

/// Stall Gallery - Artisan market photo gallery
#[derive(Parser, Debug)]
#[command(name = "stallgallery-desktop")]
#[command(about = "Stall Gallery - browse the market stall photos")]
struct Args {
    /// Site root containing photos/ and photos.json
    #[arg(short, long)]
    root: Option<PathBuf>,

    /// Manifest to load (default: <root>/photos.json)
    #[arg(short, long)]
    manifest: Option<PathBuf>,

    /// Scan photos/ on startup instead of reading the manifest
    #[arg(long)]
    live: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    // Resolve the manifest before moving into the site root
    let manifest = match args.manifest {
        Some(path) => Some(std::env::current_dir()?.join(path)),
        None => None,
    };

    // Photos are referenced as relative `photos/...` paths, which the webview
    // resolves against the working directory.
    if let Some(ref root) = args.root {
        std::env::set_current_dir(root)?;
    }

    let gallery = GalleryConfig::new(".");
    let manifest = manifest.unwrap_or_else(|| gallery.manifest_path());

    tracing::info!(
        "Starting gallery in {:?} ({})",
        std::env::current_dir()?,
        if args.live { "live scan" } else { "manifest" }
    );

    let _ = SETTINGS.set(AppSettings {
        gallery,
        manifest,
        live: args.live,
    });

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Artisan Market Stall")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1100.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
