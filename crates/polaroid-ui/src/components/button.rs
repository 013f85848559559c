//! Button Components
//!
//! - `Button`: labeled action button with an optional leading icon
//! - `IconButton`: compact glyph-only button with an accessible label

use dioxus::prelude::*;

use crate::style::merge_styles;

/// Inline style every labeled button starts from
pub const BUTTON_BASE_STYLE: &str = "min-width: 8rem; padding: 0.25rem 1rem; \
    border: 2px solid #6366f1; background: #4f46e5; color: #f4f4f5; \
    transition: background-color 75ms;";

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Text shown on the button
    pub label: String,
    /// Optional leading icon
    #[props(default)]
    pub icon: Option<Element>,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Whether the button is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Optional additional CSS classes, appended after `btn`
    #[props(default)]
    pub class: Option<String>,
    /// Inline style merged over [`BUTTON_BASE_STYLE`]; caller wins
    #[props(default)]
    pub style: Option<String>,
}

/// Labeled button
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         label: "New Image".to_string(),
///         onclick: move |_| request_image(),
///     }
///
///     Button {
///         label: "Save PNG".to_string(),
///         style: "background: #312e81".to_string(),
///         onclick: move |_| export(),
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = button_class(props.class.as_deref());
    let style = merge_styles(BUTTON_BASE_STYLE, props.style.as_deref().unwrap_or(""));

    rsx! {
        button {
            class: "{full_class}",
            style: "{style}",
            r#type: "button",
            disabled: props.disabled,
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            if let Some(icon) = props.icon.clone() {
                span { class: "btn__icon", {icon} }
            }
            "{props.label}"
        }
    }
}

fn button_class(extra: Option<&str>) -> String {
    match extra.map(str::trim).filter(|c| !c.is_empty()) {
        Some(extra) => format!("btn {}", extra),
        None => "btn".to_string(),
    }
}

/// Icon button for compact actions (alignment grid cells)
#[derive(Clone, PartialEq, Props)]
pub struct IconButtonProps {
    /// The icon content (character or element)
    pub children: Element,
    /// Click handler
    pub onclick: EventHandler<()>,
    /// Accessible label for screen readers
    pub aria_label: String,
    /// Marks the button as the current choice
    #[props(default = false)]
    pub active: bool,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn IconButton(props: IconButtonProps) -> Element {
    let mut full_class = "icon-btn".to_string();
    if props.active {
        full_class.push_str(" icon-btn--active");
    }
    if let Some(extra) = props.class.as_deref().filter(|c| !c.is_empty()) {
        full_class.push(' ');
        full_class.push_str(extra);
    }

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            title: "{props.aria_label}",
            "aria-label": "{props.aria_label}",
            "aria-pressed": if props.active { "true" } else { "false" },
            onclick: move |_| props.onclick.call(()),
            {props.children}
        }
    }
}
