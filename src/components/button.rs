//! Styled button with variant and size presets.
//!
//! DESIGN
//! ======
//! Class composition is a pure function so every variant/size pairing can be
//! checked without a DOM. The component itself is stateless: attributes set
//! on `<Button>` (e.g. `attr:r#type="submit"`, `on:click`) are spread onto the
//! rendered `<button>` by Leptos.

#[cfg(test)]
#[path = "button_test.rs"]
mod button_test;

use leptos::html;
use leptos::prelude::*;

const BASE_CLASSES: &str = "inline-flex items-center justify-center gap-2 rounded-md font-medium \
     transition-colors focus-visible:outline-none focus-visible:ring-2 \
     disabled:pointer-events-none disabled:opacity-50";

/// Visual style of a [`Button`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Default,
    Secondary,
    Ghost,
    Link,
}

impl ButtonVariant {
    pub const ALL: [Self; 4] = [Self::Default, Self::Secondary, Self::Ghost, Self::Link];

    pub fn classes(self) -> &'static str {
        match self {
            Self::Default => "bg-primary text-primary-foreground hover:bg-primary/90",
            Self::Secondary => "bg-secondary text-secondary-foreground hover:bg-secondary/80",
            Self::Ghost => "hover:bg-accent hover:text-accent-foreground",
            Self::Link => "text-primary underline-offset-4 hover:underline",
        }
    }
}

/// Height, padding and text size of a [`Button`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ButtonSize {
    pub const ALL: [Self; 3] = [Self::Sm, Self::Md, Self::Lg];

    pub fn classes(self) -> &'static str {
        match self {
            Self::Sm => "h-8 px-3 text-xs",
            Self::Md => "h-10 px-4 text-sm",
            Self::Lg => "h-12 px-6 text-base",
        }
    }
}

/// Full class list for a button.
///
/// Base, variant, size and caller classes in that order; whitespace is
/// normalized and repeated tokens keep only their first occurrence.
pub fn button_class(variant: ButtonVariant, size: ButtonSize, extra: &str) -> String {
    let mut tokens: Vec<&str> = Vec::new();
    for token in [BASE_CLASSES, variant.classes(), size.classes(), extra]
        .into_iter()
        .flat_map(str::split_whitespace)
    {
        if !tokens.contains(&token) {
            tokens.push(token);
        }
    }
    tokens.join(" ")
}

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    /// Extra classes appended after the preset ones.
    #[prop(optional, into)]
    class: String,
    /// Reference to the rendered `<button>`, e.g. for focusing.
    #[prop(optional)]
    node_ref: NodeRef<html::Button>,
    #[prop(optional, into)] disabled: Signal<bool>,
    children: Children,
) -> impl IntoView {
    let class = button_class(variant, size, &class);
    view! {
        <button class=class node_ref=node_ref disabled=move || disabled.get()>
            {children()}
        </button>
    }
}
