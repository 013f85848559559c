use dioxus::prelude::*;

use crate::components::CardEditor;
use crate::context::use_services;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles, registers the card typefaces and hosts the
/// card editor.
#[component]
pub fn App() -> Element {
    let services = use_services();
    let font_faces = use_hook(|| services.exporter.renderer().font_face_css());

    rsx! {
        style { {GLOBAL_STYLES} }
        style { {font_faces} }
        main { class: "page",
            CardEditor {}
        }
    }
}
