//! Polaroid CLI
//!
//! Renders the same card as the desktop editor, without a window.
//!
//! ## Usage
//!
//! ```bash
//! # Random photo, default alignment, writes ./polaroid.png
//! polaroid render --quote "Several people are typing." --name Ben
//!
//! # Local photo, quote in the top-left corner, into ./out
//! polaroid render --image beach.jpg --align top-left --out-dir out
//!
//! # List the nine alignment pairs and their layout directives
//! polaroid alignments
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use polaroid_core::logging::setup_logging;
use polaroid_core::{
    Alignment, DirectorySaveTarget, EditorState, ExportOutcome, Exporter, FetchedImage,
    ImageSource, ImageState, PicsumSource, PolaroidConfig, DEFAULT_AUTHOR, DEFAULT_ENDPOINT,
    DEFAULT_IMAGE_SIZE, DEFAULT_QUOTE,
};

/// Polaroid - quote cards over random photos
#[derive(Parser)]
#[command(name = "polaroid")]
#[command(version = "0.1.0")]
#[command(about = "Polaroid - put a quote on a random photo and save it as a PNG")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compose a card and save it as polaroid.png
    Render(RenderArgs),

    /// List the nine alignment pairs
    Alignments {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(clap::Args)]
struct RenderArgs {
    /// Quote text (empty renders the placeholder)
    #[arg(short, long, default_value = DEFAULT_QUOTE)]
    quote: String,

    /// Author name (empty renders the placeholder)
    #[arg(short, long, default_value = DEFAULT_AUTHOR)]
    name: String,

    /// Quote position: top-left, top, top-right, left, center, right,
    /// bottom-left, bottom, bottom-right (or compass: nw, n, ne, ...)
    #[arg(short, long, default_value = "center")]
    align: Alignment,

    /// Use a local photo instead of fetching a random one
    #[arg(short, long, conflicts_with = "endpoint")]
    image: Option<PathBuf>,

    /// Random photo endpoint; the photo size is appended as a path segment
    #[arg(long)]
    endpoint: Option<String>,

    /// Edge length of the square photo in pixels
    #[arg(long, default_value_t = DEFAULT_IMAGE_SIZE)]
    image_size: u32,

    /// Output directory
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// TrueType/OpenType font for quote and name
    #[arg(long)]
    font: Option<PathBuf>,
}

impl RenderArgs {
    fn config(&self) -> PolaroidConfig {
        PolaroidConfig {
            endpoint: self
                .endpoint
                .clone()
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            image_size: self.image_size,
            font_path: self.font.clone(),
            save_dir: Some(self.out_dir.clone()),
            ..PolaroidConfig::default()
        }
    }
}

async fn render(args: RenderArgs) -> Result<()> {
    let config = args.config();
    config.validate()?;

    let mut state = EditorState::new();
    state.update_quote_text(args.quote.clone());
    state.update_author_name(args.name.clone());
    state.set_alignment_pair(args.align);

    let ticket = state.begin_image_request();
    let result = match &args.image {
        Some(path) => FetchedImage::from_path(path),
        None => PicsumSource::new(&config)?.fetch().await,
    };
    state.complete_image_request(ticket, result);

    match state.image() {
        ImageState::Ready(image) => {
            tracing::info!(url = %image.url(), "Using photo");
            println!("Photo: {}", image.url());
        }
        ImageState::Failed(reason) => bail!("Could not load a photo: {}", reason),
        ImageState::Idle | ImageState::Loading => bail!("Photo request did not complete"),
    }

    let renderer = config.renderer().context("Failed to load font")?;
    let exporter = Exporter::new(Arc::new(renderer)).with_file_name(config.output_file_name.clone());
    let target = DirectorySaveTarget::new(&args.out_dir);
    let snapshot = state.snapshot();

    let outcome = tokio::task::spawn_blocking(move || exporter.export(Some(&snapshot), &target))
        .await
        .context("Export task failed")??;

    match outcome {
        ExportOutcome::Saved(path) => {
            println!("Alignment: {}", args.align);
            println!("Saved polaroid to {}", path.display());
            Ok(())
        }
        ExportOutcome::Skipped | ExportOutcome::Cancelled => bail!("Nothing was saved"),
    }
}

fn alignments(json: bool) -> Result<()> {
    if json {
        let rows: Vec<serde_json::Value> = Alignment::all()
            .map(|a| {
                let d = a.directives();
                serde_json::json!({
                    "name": a.name(),
                    "vertical": a.vertical,
                    "horizontal": a.horizontal,
                    "align_items": d.align_items,
                    "justify_content": d.justify_content,
                    "text_align": d.text_align,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    for a in Alignment::all() {
        println!("{:<13} {}", a.name(), a.directives().to_css());
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match cli.command {
        Commands::Render(args) => render(args).await,
        Commands::Alignments { json } => alignments(json),
    }
}
