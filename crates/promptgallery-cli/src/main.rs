//! Prompt Gallery CLI
//!
//! Thin wrapper around promptgallery-core for command-line usage.
//!
//! ## Usage
//!
//! ```bash
//! # Convert the upstream markdown collection into the gallery JSON
//! promptgallery import --input README.md --output data/prompts.json
//!
//! # Filter a collection the same way the gallery does
//! promptgallery search --data data/prompts.json --query neon --category poster
//!
//! # List the category catalog
//! promptgallery categories
//! ```

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use promptgallery_core::catalog::{self, CATALOG};
use promptgallery_core::importer::DEFAULT_IMAGE_BASE;
use promptgallery_core::{filter_records, CategoryFilter, MarkdownImporter, RecordSource};

/// Prompt Gallery - import, search and list AI image prompts
#[derive(Parser)]
#[command(name = "promptgallery")]
#[command(version = "0.1.0")]
#[command(about = "Prompt Gallery - import, search and list AI image prompts")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert the upstream markdown collection to JSON
    Import {
        /// Markdown file (default: stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// JSON output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Base URL prepended to image paths
        #[arg(long, default_value = DEFAULT_IMAGE_BASE)]
        image_base: String,
    },

    /// Filter a record collection by text and category
    Search {
        /// Record collection: an http(s) URL or a local JSON file
        #[arg(short, long, default_value = promptgallery_core::source::DEFAULT_SOURCE)]
        data: String,

        /// Case-insensitive text matched against title, prompt and categories
        #[arg(short, long, default_value = "")]
        query: String,

        /// Category id ("all" for no restriction)
        #[arg(short, long, default_value = catalog::ALL_CATEGORY)]
        category: String,

        /// Print matching records as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the category catalog
    Categories,
}

fn read_input(input: Option<&PathBuf>) -> Result<String> {
    match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    promptgallery_core::logging::init_logging(cli.verbose);

    match cli.command {
        Commands::Import {
            input,
            output,
            image_base,
        } => {
            let markdown = read_input(input.as_ref())?;
            let importer = MarkdownImporter::new(image_base)?;
            let records = importer.parse(&markdown);
            if records.is_empty() {
                tracing::warn!("No prompt sections found in input");
            }
            let json = serde_json::to_string_pretty(&records)?;

            match output {
                Some(path) => {
                    std::fs::write(&path, json)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    tracing::info!(count = records.len(), path = %path.display(), "Wrote prompts");
                    println!("Imported {} prompts into {}", records.len(), path.display());
                }
                None => println!("{}", json),
            }
        }

        Commands::Search {
            data,
            query,
            category,
            json,
        } => {
            let source = RecordSource::parse(&data);
            tracing::info!(%source, "Searching prompts");
            let records = source
                .load()
                .await
                .with_context(|| format!("Failed to load prompts from {}", source))?;
            let filter = CategoryFilter::parse(&category);
            let matches = filter_records(&records, &query, &filter);

            if json {
                println!("{}", serde_json::to_string_pretty(&matches)?);
            } else if matches.is_empty() {
                println!("No prompts match");
            } else {
                for record in &matches {
                    let tags: Vec<String> = record
                        .categories
                        .iter()
                        .map(|c| format!("{} {}", catalog::icon_for(c), c))
                        .collect();
                    println!("[{}] {}  {}", record.id, record.title, tags.join(" "));
                }
                println!();
                println!("{} of {} prompts", matches.len(), records.len());
            }
        }

        Commands::Categories => {
            for category in CATALOG {
                println!("{:<14} {:<3} {}", category.id, category.icon, category.name);
            }
        }
    }

    Ok(())
}
