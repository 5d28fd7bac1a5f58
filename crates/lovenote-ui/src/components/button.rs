//! Button Components
//!
//! Button styles used across the card:
//! - Pill: Main call to action, rose fill with a soft glow
//! - Soft: Small pale-pink badge button
//! - Link: Text-only secondary action

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Rose pill, used for every "next step" action
    #[default]
    Pill,
    /// Pale pink rounded badge
    Soft,
    /// Plain text link
    Link,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Pill => "btn-pill",
            ButtonVariant::Soft => "btn-soft",
            ButtonVariant::Link => "btn-link",
        }
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Button content (text, emoji, etc.)
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Accessible label, when the visible text is mostly emoji
    #[props(default)]
    pub aria_label: Option<String>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Styled button component
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Pill,
///         aria_label: "Open my heart".to_string(),
///         onclick: move |_| open_gift(),
///         "Open My Heart 💖"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = join_classes(props.variant.class(), props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            "aria-label": props.aria_label.clone(),
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

/// Base class followed by optional extra classes.
pub fn join_classes(base: &str, extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("{} {}", base, extra),
        _ => base.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_variant_classes() {
        assert_eq!(ButtonVariant::Pill.class(), "btn-pill");
        assert_eq!(ButtonVariant::Soft.class(), "btn-soft");
        assert_eq!(ButtonVariant::Link.class(), "btn-link");
    }

    #[test]
    fn button_variant_default() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Pill);
    }

    #[test]
    fn extra_classes_are_appended() {
        assert_eq!(join_classes("btn-pill", None), "btn-pill");
        assert_eq!(join_classes("btn-pill", Some("")), "btn-pill");
        assert_eq!(join_classes("btn-pill", Some("wide")), "btn-pill wide");
    }
}
