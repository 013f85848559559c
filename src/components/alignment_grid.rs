//! 3×3 grid of directional controls for placing the quote.

use dioxus::prelude::*;
use polaroid_core::{Alignment, Direction};
use polaroid_ui::{direction_label, DirectionIcon, IconButton};

#[component]
pub fn AlignmentGrid(
    /// Currently selected pair (highlighted)
    current: Alignment,
    /// Called with the pair of the clicked control
    on_select: EventHandler<Alignment>,
) -> Element {
    rsx! {
        div { class: "alignment-grid", role: "group", "aria-label": "Quote position",
            for (name, direction) in Direction::GRID.map(|d| (d.name(), d)) {
                IconButton {
                    key: "{name}",
                    aria_label: direction_label(direction),
                    active: direction.alignment() == current,
                    onclick: move |_| on_select.call(direction.alignment()),
                    DirectionIcon { direction }
                }
            }
        }
    }
}
