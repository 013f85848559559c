//! Polaroid Core Library
//!
//! State model, photo source and PNG rendering for quote cards: a random
//! photo, a quote placed by a 3×3 alignment grid, and the author's name
//! underneath, exported as `polaroid.png`.
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use polaroid_core::{
//!     DirectorySaveTarget, EditorState, Exporter, ImageSource, PicsumSource, PolaroidConfig,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = PolaroidConfig::default();
//!     let source = PicsumSource::new(&config)?;
//!
//!     let (mut state, ticket) = EditorState::mounted();
//!     let result = source.fetch().await;
//!     state.complete_image_request(ticket, result);
//!     state.update_quote_text("Hello");
//!
//!     let exporter = Exporter::new(Arc::new(config.renderer()?));
//!     exporter.export(Some(&state.snapshot()), &DirectorySaveTarget::new("."))?;
//!     Ok(())
//! }
//! ```

pub mod alignment;
pub mod config;
pub mod editor;
pub mod error;
pub mod export;
pub mod fonts;
pub mod logging;
pub mod render;
pub mod source;

// Re-exports
pub use alignment::{Alignment, Anchor, Direction, HorizontalAlign, LayoutDirectives, VerticalAlign};
pub use config::{PolaroidConfig, DEFAULT_ENDPOINT, DEFAULT_IMAGE_SIZE, OUTPUT_FILE_NAME};
pub use editor::{
    CardSnapshot, EditorState, ImageState, RequestTicket, DEFAULT_AUTHOR, DEFAULT_QUOTE,
    NAME_PLACEHOLDER, QUOTE_PLACEHOLDER,
};
pub use error::{PolaroidError, PolaroidResult};
pub use export::{DirectorySaveTarget, ExportOutcome, Exporter, SaveTarget};
pub use fonts::Typeface;
pub use render::{CardLayout, CardRenderer, CardStyle, PlacedLine, Rect, TextRole};
pub use source::{FetchedImage, ImageSource, PicsumSource};
