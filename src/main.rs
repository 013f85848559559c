#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod save_dialog;
mod theme;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use polaroid_core::logging::setup_logging;
use polaroid_core::{
    DirectorySaveTarget, Exporter, PicsumSource, PolaroidConfig, SaveTarget, DEFAULT_ENDPOINT,
    DEFAULT_IMAGE_SIZE,
};

use crate::context::AppServices;
use crate::save_dialog::DialogSaveTarget;

/// Polaroid - quote cards over random photos
#[derive(Parser, Debug)]
#[command(name = "polaroid-desktop")]
#[command(about = "Polaroid - put a quote on a random photo and save it as a PNG")]
struct Args {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Random photo endpoint; the photo size is appended as a path segment
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Edge length of the square photo in pixels
    #[arg(long, default_value_t = DEFAULT_IMAGE_SIZE)]
    image_size: u32,

    /// Save exports into this directory instead of asking every time
    #[arg(short, long)]
    save_dir: Option<PathBuf>,

    /// TrueType/OpenType font used for the exported card
    #[arg(long)]
    font: Option<PathBuf>,
}

impl Args {
    fn into_config(self) -> PolaroidConfig {
        PolaroidConfig {
            endpoint: self.endpoint,
            image_size: self.image_size,
            font_path: self.font,
            save_dir: self.save_dir,
            ..PolaroidConfig::default()
        }
    }
}

fn build_services(config: PolaroidConfig) -> anyhow::Result<AppServices> {
    config.validate()?;

    let source = PicsumSource::new(&config)?;
    let exporter = Exporter::new(Arc::new(config.renderer()?))
        .with_file_name(config.output_file_name.clone());

    let save_target: Arc<dyn SaveTarget> = match &config.save_dir {
        Some(dir) => Arc::new(DirectorySaveTarget::new(dir)),
        None => Arc::new(DialogSaveTarget::new(dirs::picture_dir())),
    };

    Ok(AppServices {
        source,
        exporter: Arc::new(exporter),
        save_target,
    })
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    let config = args.into_config();
    tracing::info!("Starting with photo source {}", config.image_url());
    let services = build_services(config)?;

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Polaroid")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1200.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .with_context(services)
        .launch(app::App);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_defaults_map_to_default_config() {
        let args = Args::parse_from(["polaroid-desktop"]);
        assert_eq!(args.into_config(), PolaroidConfig::default());
    }

    #[test]
    fn args_override_config() {
        let args = Args::parse_from([
            "polaroid-desktop",
            "--endpoint",
            "http://localhost:9000",
            "--image-size",
            "300",
            "--save-dir",
            "/tmp/cards",
        ]);
        let config = args.into_config();
        assert_eq!(config.image_url(), "http://localhost:9000/300");
        assert_eq!(config.save_dir, Some(PathBuf::from("/tmp/cards")));
    }

    #[test]
    fn build_services_rejects_invalid_config() {
        let config = PolaroidConfig {
            image_size: 0,
            ..PolaroidConfig::default()
        };
        assert!(build_services(config).is_err());
    }

    #[test]
    fn build_services_with_save_dir() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = PolaroidConfig {
            save_dir: Some(dir.path().to_path_buf()),
            ..PolaroidConfig::default()
        };
        let services = build_services(config).unwrap();
        assert_eq!(services.exporter.file_name(), "polaroid.png");
        assert_eq!(services.source.request_url(), "https://picsum.photos/700");
    }
}
