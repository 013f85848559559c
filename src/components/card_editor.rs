//! Card editor: text fields, alignment grid, actions and live preview.
//!
//! All editor state lives in one `EditorState` signal. Photo requests run
//! as spawned tasks and commit through their request ticket, so a slow
//! response never overwrites a newer photo. Export rasterizes the current
//! card on a blocking thread and reports the outcome in a status line.

use dioxus::prelude::*;
use polaroid_core::{EditorState, ExportOutcome, ImageSource, PicsumSource};
use polaroid_ui::{Button, Input, TextArea};

use crate::components::{AlignmentGrid, CardCss, PolaroidPreview};
use crate::context::use_services;

/// Fixed action labels; loading is shown by the preview spinner only
const NEW_IMAGE_LABEL: &str = "New Image";
const SAVE_LABEL: &str = "Save PNG";

/// Enter `Loading` and fetch a new photo in the background.
fn request_image(mut state: Signal<EditorState>, source: PicsumSource) {
    let ticket = state.write().begin_image_request();
    spawn(async move {
        let result = source.fetch().await;
        if !state.write().complete_image_request(ticket, result) {
            tracing::debug!(ticket = ticket.id(), "Photo response superseded");
        }
    });
}

#[component]
pub fn CardEditor() -> Element {
    let services = use_services();
    let mut state = use_signal(EditorState::new);
    let mut preview_mounted = use_signal(|| false);
    let mut status = use_signal(|| Option::<String>::None);

    // Fetch the first photo on mount
    let source = services.source.clone();
    use_effect(move || {
        request_image(state, source.clone());
    });

    let card_css = use_hook(|| CardCss::for_renderer(services.exporter.renderer()));
    let image_uri = use_memo(move || state.read().image().image().map(|image| image.data_uri()));

    let source = services.source.clone();
    let on_new_image = move |_: ()| {
        status.set(None);
        request_image(state, source.clone());
    };

    let exporter = services.exporter.clone();
    let save_target = services.save_target.clone();
    let on_save = move |_: ()| {
        let preview = preview_mounted().then(|| state.read().snapshot());
        let exporter = exporter.clone();
        let target = save_target.clone();
        status.set(Some("Rendering...".to_string()));

        spawn(async move {
            let outcome =
                tokio::task::spawn_blocking(move || exporter.export(preview.as_ref(), target.as_ref()))
                    .await;
            match outcome {
                Ok(Ok(ExportOutcome::Saved(path))) => {
                    status.set(Some(format!("Saved {}", path.display())));
                }
                Ok(Ok(ExportOutcome::Skipped | ExportOutcome::Cancelled)) => status.set(None),
                Ok(Err(e)) => {
                    tracing::error!("Export failed: {}", e);
                    status.set(Some("Export failed".to_string()));
                }
                Err(e) => {
                    tracing::error!("Export task failed: {}", e);
                    status.set(Some("Export failed".to_string()));
                }
            }
        });
    };

    let editor = state.read();

    rsx! {
        section { class: "panel",
            div { class: "editor",
                div { class: "editor__quote-row",
                    TextArea {
                        id: "quote".to_string(),
                        label: "Quote".to_string(),
                        value: editor.quote_text().to_string(),
                        rows: 5,
                        oninput: move |text: String| state.write().update_quote_text(text),
                    }
                    AlignmentGrid {
                        current: editor.alignment(),
                        on_select: move |alignment: polaroid_core::Alignment| {
                            state.write().set_alignment(alignment.vertical, alignment.horizontal);
                        },
                    }
                }
                Input {
                    id: "name".to_string(),
                    label: "Name".to_string(),
                    value: editor.author_name().to_string(),
                    oninput: move |text: String| state.write().update_author_name(text),
                }
                div { class: "editor__actions",
                    Button {
                        label: NEW_IMAGE_LABEL.to_string(),
                        onclick: on_new_image,
                    }
                    Button {
                        label: SAVE_LABEL.to_string(),
                        onclick: on_save,
                    }
                }
                if let Some(message) = status() {
                    p { class: "status-line", "{message}" }
                }
            }
            div { class: "preview",
                PolaroidPreview {
                    image: editor.image().clone(),
                    image_uri: image_uri(),
                    quote: editor.display_quote().to_string(),
                    name: editor.display_name().to_string(),
                    alignment: editor.alignment(),
                    css: card_css,
                    on_mounted: move |_| preview_mounted.set(true),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_labels_are_fixed() {
        assert_eq!(NEW_IMAGE_LABEL, "New Image");
        assert_eq!(SAVE_LABEL, "Save PNG");
    }
}
