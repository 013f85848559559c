//! Direction glyphs for the alignment grid.
//!
//! Eight arrows plus a "+" for the center cell.

use dioxus::prelude::*;
use polaroid_core::Direction;

pub fn direction_glyph(direction: Direction) -> &'static str {
    match direction {
        Direction::NorthWest => "\u{2196}",
        Direction::North => "\u{2191}",
        Direction::NorthEast => "\u{2197}",
        Direction::West => "\u{2190}",
        Direction::Center => "+",
        Direction::East => "\u{2192}",
        Direction::SouthWest => "\u{2199}",
        Direction::South => "\u{2193}",
        Direction::SouthEast => "\u{2198}",
    }
}

/// Accessible label, e.g. "Align top-left"
pub fn direction_label(direction: Direction) -> String {
    format!("Align {}", direction.name())
}

#[component]
pub fn DirectionIcon(direction: Direction) -> Element {
    let glyph = direction_glyph(direction);

    rsx! {
        span {
            class: "direction-icon",
            "aria-hidden": "true",
            "{glyph}"
        }
    }
}
