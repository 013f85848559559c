//! Live preview of the card.
//!
//! Photo area with the quote overlaid at the chosen alignment, and the
//! author's name right-aligned underneath. The photo area shows a spinner
//! while no photo is ready and a notice when the last request failed.
//!
//! Sizes and font families come from the exporter's [`CardStyle`] and
//! typefaces, so the preview wraps text exactly like the saved PNG.

use dioxus::prelude::*;
use polaroid_core::{Alignment, CardRenderer, CardStyle, ImageState, TextRole};
use polaroid_ui::LoadingSpinner;

/// Inline styles pinning the preview to the exported card geometry
#[derive(Debug, Clone, PartialEq)]
pub struct CardCss {
    pub card: String,
    pub photo: String,
    pub overlay: String,
    pub quote: String,
    pub name: String,
}

impl CardCss {
    pub fn new(style: &CardStyle, quote_family: &str, name_family: &str) -> Self {
        Self {
            card: format!(
                "width: {}px; padding: {}px; gap: {}px;",
                style.card_width(),
                style.padding,
                style.gap
            ),
            photo: format!("width: {0}px; height: {0}px;", style.photo_size),
            overlay: format!(
                "padding: {}px {}px; font-family: '{}'; font-size: {}px; line-height: {};",
                style.overlay_padding_y, style.overlay_padding_x, quote_family, style.quote_px, style.quote_line_height
            ),
            quote: format!("max-width: {}px;", style.quote_max_width),
            name: format!(
                "margin: 0 {}px; font-family: '{}'; font-size: {}px; line-height: {};",
                style.name_inset, name_family, style.name_px, style.name_line_height
            ),
        }
    }

    pub fn for_renderer(renderer: &CardRenderer) -> Self {
        Self::new(
            renderer.style(),
            renderer.typeface(TextRole::Quote).family(),
            renderer.typeface(TextRole::Name).family(),
        )
    }
}

#[component]
pub fn PolaroidPreview(
    /// Photo lifecycle
    image: ImageState,
    /// Data URI of the ready photo
    #[props(!optional)]
    image_uri: Option<String>,
    /// Quote with the placeholder already applied
    quote: String,
    /// Name with the placeholder already applied
    name: String,
    alignment: Alignment,
    css: CardCss,
    /// Fired once the card's root element is in the page
    on_mounted: EventHandler<()>,
) -> Element {
    let overlay_style = format!("{} {}", css.overlay, alignment.directives().to_css());
    let phase = image.phase();

    rsx! {
        div {
            id: "polaroid",
            class: "polaroid",
            style: "{css.card}",
            onmounted: move |_| on_mounted.call(()),

            div { class: "polaroid__photo", style: "{css.photo}", "data-phase": phase,
                if let (ImageState::Ready(_), Some(uri)) = (&image, &image_uri) {
                    img { class: "polaroid__img", src: "{uri}", alt: "" }
                } else if let ImageState::Failed(reason) = &image {
                    div { class: "polaroid__error",
                        "Could not load a photo. Try \"New Image\" again."
                        span { class: "polaroid__error-detail", "{reason}" }
                    }
                } else {
                    LoadingSpinner {}
                }
                div { class: "polaroid__overlay", style: "{overlay_style}",
                    p { class: "polaroid__quote", style: "{css.quote}", "{quote}" }
                }
            }
            p { class: "polaroid__name", style: "{css.name}", "–{name}" }
        }
    }
}
