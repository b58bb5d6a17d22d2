//! Button styling and the icon-only buttons.
//!
//! Text buttons are plain `button` elements styled through
//! [`ButtonVariant::class`] and [`class_list`].

use dioxus::prelude::*;

/// Visual style of a text button
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Main action (copy prompt)
    #[default]
    Primary,
    /// Category bar pill
    Tag,
    /// Floating or secondary control
    Ghost,
}

impl ButtonVariant {
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Tag => "category-tag",
            ButtonVariant::Ghost => "btn-ghost",
        }
    }
}

/// Join a base class with optional extra classes
pub fn class_list(base: &str, extra: Option<&str>) -> String {
    match extra.map(str::trim) {
        Some(extra) if !extra.is_empty() => format!("{} {}", base, extra),
        _ => base.to_string(),
    }
}

/// Square button holding a single glyph.
#[component]
pub fn IconButton(
    /// Glyph shown on the button
    icon: &'static str,
    /// Accessible label, since the glyph carries no text
    label: &'static str,
    #[props(default)] class: String,
    onclick: EventHandler<()>,
) -> Element {
    let full_class = class_list("icon-btn", Some(&class));

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            title: label,
            "aria-label": label,
            onclick: move |_| onclick.call(()),
            "{icon}"
        }
    }
}

/// The "×" that dismisses the detail modal
#[component]
pub fn CloseButton(onclick: EventHandler<()>) -> Element {
    rsx! {
        IconButton {
            icon: "\u{00D7}",
            label: "Close",
            class: "modal-close".to_string(),
            onclick: onclick,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_map_to_stylesheet_classes() {
        assert_eq!(ButtonVariant::default().class(), "btn-primary");
        assert_eq!(ButtonVariant::Tag.class(), "category-tag");
        assert_eq!(ButtonVariant::Ghost.class(), "btn-ghost");
    }

    #[test]
    fn class_list_skips_blank_extras() {
        assert_eq!(class_list("a", None), "a");
        assert_eq!(class_list("a", Some("  ")), "a");
        assert_eq!(class_list("a", Some("b c")), "a b c");
    }
}
