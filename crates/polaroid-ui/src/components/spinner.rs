//! Loading indicator shown while a photo request is in flight

use dioxus::prelude::*;

#[component]
pub fn LoadingSpinner(
    /// Text under the spinner
    #[props(default = "Loading...".to_string())]
    label: String,
) -> Element {
    rsx! {
        div {
            class: "loading",
            role: "status",
            div { class: "loading-spinner" }
            span { class: "loading__label", "{label}" }
        }
    }
}
