//! Inline text-editor overlay state for the board view.
//!
//! SYSTEM CONTEXT
//! ==============
//! Double-clicking a text or sticky-note element opens the overlay at the
//! element's screen position. Keystrokes and drags mutate the open editor;
//! commit hands back a [`TextCommit`] and closes it, cancel just closes it.
//!
//! DESIGN
//! ======
//! The element id lives inside [`TextEditorState::Open`], so an open editor
//! without a target element is unrepresentable. Sticky-note-only fields
//! (background, dimensions) live on [`EditorKind::StickyNote`].

#[cfg(test)]
#[path = "text_editor_test.rs"]
mod text_editor_test;

use crate::net::types::{BoardElement, ElementType, UpdateBoardElementRequest};

pub const DEFAULT_FONT_SIZE: f64 = 16.0;
pub const DEFAULT_TEXT_COLOR: &str = "#1f2937";
pub const DEFAULT_STICKY_BACKGROUND: &str = "#fef08a";

/// Editor overlay lifecycle.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum TextEditorState {
    #[default]
    Closed,
    Open(OpenTextEditor),
}

/// Element-kind specific editor presentation.
#[derive(Clone, Debug, PartialEq)]
pub enum EditorKind {
    Text,
    StickyNote {
        background: String,
        width: f64,
        height: f64,
    },
}

/// An editor bound to one element.
#[derive(Clone, Debug, PartialEq)]
pub struct OpenTextEditor {
    /// Element being edited.
    pub element_id: String,
    /// Left edge of the overlay in screen coordinates.
    pub x: f64,
    /// Top edge of the overlay in screen coordinates.
    pub y: f64,
    /// Current (uncommitted) text.
    pub value: String,
    pub font_size: f64,
    pub color: String,
    pub kind: EditorKind,
}

impl OpenTextEditor {
    /// Seed an editor from `element`, placed at screen position (`x`, `y`).
    ///
    /// Returns `None` for element kinds that carry no text.
    pub fn for_element(element: &BoardElement, x: f64, y: f64) -> Option<Self> {
        let kind = match element.element_type {
            ElementType::Text => EditorKind::Text,
            ElementType::StickyNote => EditorKind::StickyNote {
                background: element
                    .style_str("backgroundColor")
                    .unwrap_or(DEFAULT_STICKY_BACKGROUND)
                    .to_owned(),
                width: element.width,
                height: element.height,
            },
            _ => return None,
        };
        Some(Self {
            element_id: element.id.clone(),
            x,
            y,
            value: element.text().to_owned(),
            font_size: element
                .style_f64("fontSize")
                .filter(|size| size.is_finite() && *size > 0.0)
                .unwrap_or(DEFAULT_FONT_SIZE),
            color: element
                .style_str("color")
                .unwrap_or(DEFAULT_TEXT_COLOR)
                .to_owned(),
            kind,
        })
    }
}

impl TextEditorState {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    pub fn editor(&self) -> Option<&OpenTextEditor> {
        match self {
            Self::Open(editor) => Some(editor),
            Self::Closed => None,
        }
    }

    /// Target element id; `Some` exactly when the editor is open.
    pub fn element_id(&self) -> Option<&str> {
        self.editor().map(|editor| editor.element_id.as_str())
    }

    /// Open (or retarget) the editor. Any uncommitted text is discarded.
    pub fn open(&mut self, editor: OpenTextEditor) {
        *self = Self::Open(editor);
    }

    /// Replace the editor text. No-op while closed.
    pub fn set_value(&mut self, value: impl Into<String>) {
        if let Self::Open(editor) = self {
            editor.value = value.into();
        }
    }

    /// Move the overlay. No-op while closed.
    pub fn move_to(&mut self, x: f64, y: f64) {
        if let Self::Open(editor) = self {
            editor.x = x;
            editor.y = y;
        }
    }

    /// Close the editor and return the text to write back, if it was open.
    pub fn commit(&mut self) -> Option<TextCommit> {
        match std::mem::take(self) {
            Self::Open(editor) => Some(TextCommit {
                element_id: editor.element_id,
                text: editor.value,
            }),
            Self::Closed => None,
        }
    }

    /// Close the editor without writing anything back.
    pub fn cancel(&mut self) {
        *self = Self::Closed;
    }
}

/// Text produced by committing the editor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextCommit {
    pub element_id: String,
    pub text: String,
}

impl TextCommit {
    /// Element updater: `element` with `properties.text` replaced.
    ///
    /// Returns `None` (no change) for a different element or unchanged text.
    /// The version is left alone; the server bumps it when the patch lands.
    pub fn apply(&self, element: &BoardElement) -> Option<BoardElement> {
        if element.id != self.element_id || element.text() == self.text {
            return None;
        }
        let mut next = element.clone();
        if !next.properties.is_object() {
            next.properties = serde_json::Value::Object(serde_json::Map::new());
        }
        if let Some(props) = next.properties.as_object_mut() {
            props.insert("text".to_owned(), serde_json::Value::String(self.text.clone()));
        }
        Some(next)
    }
}

/// Patch payload persisting `updated` text against the pre-edit version.
pub fn text_patch_request(updated: &BoardElement, expected_version: i32) -> UpdateBoardElementRequest {
    UpdateBoardElementRequest {
        expected_version,
        properties: Some(updated.properties.clone()),
        ..UpdateBoardElementRequest::default()
    }
}
