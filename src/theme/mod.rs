//! Visual theme for the editor window.

mod styles;

pub use styles::GLOBAL_STYLES;
