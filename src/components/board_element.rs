//! Absolutely positioned rendering of a single board element.

#[cfg(test)]
#[path = "board_element_test.rs"]
mod board_element_test;

use leptos::prelude::*;

use crate::net::types::{BoardElement, ElementType};
use crate::state::text_editor::{DEFAULT_FONT_SIZE, DEFAULT_STICKY_BACKGROUND, DEFAULT_TEXT_COLOR};

/// Inline CSS placing `element` on the board surface.
pub fn element_style(element: &BoardElement) -> String {
    let mut style = format!(
        "left: {}px; top: {}px; width: {}px; height: {}px; z-index: {};",
        element.position_x, element.position_y, element.width, element.height, element.z_index
    );
    if element.rotation.abs() > f64::EPSILON {
        style.push_str(&format!(" transform: rotate({}deg);", element.rotation));
    }
    if element.element_type.is_text_bearing() {
        let font_size = element.style_f64("fontSize").unwrap_or(DEFAULT_FONT_SIZE);
        let color = element.style_str("color").unwrap_or(DEFAULT_TEXT_COLOR);
        style.push_str(&format!(" font-size: {font_size}px; color: {color};"));
    }
    if element.element_type == ElementType::StickyNote {
        let background = element
            .style_str("backgroundColor")
            .unwrap_or(DEFAULT_STICKY_BACKGROUND);
        style.push_str(&format!(" background: {background};"));
    }
    style
}

/// CSS modifier class for an element kind.
pub fn element_class(kind: ElementType) -> &'static str {
    match kind {
        ElementType::Text => "board-element board-element--text",
        ElementType::StickyNote => "board-element board-element--sticky",
        _ => "board-element",
    }
}

/// One element; double-click asks the parent to open the text editor.
#[component]
pub fn BoardElementView(element: BoardElement, on_edit: Callback<String>) -> impl IntoView {
    let style = element_style(&element);
    let class = element_class(element.element_type);
    let text = element.text().to_owned();
    let id = element.id.clone();
    view! {
        <div
            class=class
            style=style
            data-element-id=element.id.clone()
            on:dblclick=move |ev: leptos::ev::MouseEvent| {
                ev.stop_propagation();
                on_edit.run(id.clone());
            }
        >
            {text}
        </div>
    }
}
