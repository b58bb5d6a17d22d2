#![allow(non_snake_case)]

mod app;
mod clipboard;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use promptgallery_core::GalleryConfig;

/// Global configuration, resolved from the command line
static CONFIG: OnceLock<GalleryConfig> = OnceLock::new();

/// Get the resolved configuration (defaults if never set)
pub fn get_config() -> GalleryConfig {
    CONFIG.get().cloned().unwrap_or_default()
}

/// Prompt Gallery - browse, filter and copy AI image prompts
#[derive(Parser, Debug)]
#[command(name = "promptgallery-desktop")]
#[command(about = "Prompt Gallery - browse, filter and copy AI image prompts")]
struct Args {
    /// Record collection: an http(s) URL or a local JSON file
    #[arg(short, long)]
    source: Option<String>,

    /// Home page of the wiki viewer
    #[arg(long)]
    wiki_url: Option<String>,

    /// JSON file with the wiki sidebar entries
    #[arg(long)]
    wiki_nav: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    promptgallery_core::logging::init_logging(args.verbose);

    let config = GalleryConfig::resolve(
        args.source.as_deref(),
        args.wiki_url.as_deref(),
        args.wiki_nav.as_deref(),
    )?;

    tracing::info!(
        "Starting with source {} and wiki {}",
        config.source,
        config.wiki.home_url
    );
    let _ = CONFIG.set(config);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Prompt Gallery")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1200.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
