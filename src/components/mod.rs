//! Editor components for Polaroid.

mod alignment_grid;
mod card_editor;
mod polaroid_preview;

pub use alignment_grid::AlignmentGrid;
pub use card_editor::CardEditor;
pub use polaroid_preview::{CardCss, PolaroidPreview};
