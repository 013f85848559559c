//! Reusable UI components for the card editor

mod button;
mod icons;
mod input;
mod spinner;

pub use button::*;
pub use icons::*;
pub use input::*;
pub use spinner::*;
