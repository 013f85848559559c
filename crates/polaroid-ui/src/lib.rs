//! Polaroid UI Components
//!
//! Dioxus components for the quote card editor: labeled buttons, text
//! fields, the direction glyphs of the alignment grid and a loading
//! spinner, plus the inline-style merge the buttons use.
//!
//! ## Palette
//!
//! - **Indigo (#4338ca / #3730a3)**: page and panel backgrounds
//! - **Indigo accent (#4f46e5 / #6366f1)**: buttons and focus rings
//! - **Zinc (#f4f4f5)**: card paper and input fields

pub mod components;
pub mod style;

pub use components::*;
pub use style::{merge_styles, StyleDeclarations};
