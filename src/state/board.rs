//! Board-session state for the active workspace.
//!
//! SYSTEM CONTEXT
//! ==============
//! This model stores the local projection of one open board: its elements
//! keyed by id plus the inline text-editor overlay. Components never mutate
//! elements directly; they receive an [`ElementUpdater`] capability.

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use std::collections::HashMap;

use leptos::prelude::*;

use super::text_editor::TextEditorState;
use crate::net::types::BoardElement;

/// Board-level state: which board is open, its elements, and the editor.
#[derive(Clone, Debug, Default)]
pub struct BoardState {
    /// ID of the currently open board (UUID string).
    pub board_id: Option<String>,
    /// Display name of the open board.
    pub board_name: Option<String>,
    /// Elements keyed by element ID.
    pub elements: HashMap<String, BoardElement>,
    /// Inline text-editor overlay.
    pub editor: TextEditorState,
    /// True while board metadata is being fetched.
    pub loading: bool,
    /// Last request failure shown in the board header.
    pub error: Option<String>,
}

impl BoardState {
    /// Switch to `board_id`, dropping the previous board's elements.
    pub fn reset_for(&mut self, board_id: &str) {
        *self = Self {
            board_id: Some(board_id.to_owned()),
            loading: true,
            ..Self::default()
        };
    }

    /// Insert or replace an element by id.
    pub fn upsert_element(&mut self, element: BoardElement) {
        self.elements.insert(element.id.clone(), element);
    }

    /// Replace element `id` with `updater`'s result.
    ///
    /// `None` from the updater means "no change". Returns whether the
    /// element was replaced; unknown ids are ignored.
    pub fn update_element<F>(&mut self, id: &str, updater: F) -> bool
    where
        F: FnOnce(&BoardElement) -> Option<BoardElement>,
    {
        let Some(current) = self.elements.get(id) else {
            return false;
        };
        let Some(mut next) = updater(current) else {
            return false;
        };
        // The map key is authoritative.
        next.id = id.to_owned();
        self.elements.insert(id.to_owned(), next);
        true
    }

    /// Elements in paint order (z-index, then id for stability).
    pub fn sorted_elements(&self) -> Vec<BoardElement> {
        let mut out: Vec<BoardElement> = self.elements.values().cloned().collect();
        out.sort_by(|a, b| a.z_index.cmp(&b.z_index).then_with(|| a.id.cmp(&b.id)));
        out
    }

    /// z-index that places a new element above every existing one.
    pub fn next_z_index(&self) -> i32 {
        self.elements
            .values()
            .map(|e| e.z_index)
            .max()
            .map_or(0, |z| z.saturating_add(1))
    }
}

/// Capability handed to components for updating a single element.
///
/// Wraps the board signal so subscribers are only notified when an update
/// actually replaced an element.
#[derive(Clone, Copy, Debug)]
pub struct ElementUpdater {
    board: RwSignal<BoardState>,
}

impl ElementUpdater {
    pub fn new(board: RwSignal<BoardState>) -> Self {
        Self { board }
    }

    /// Apply `updater` to element `id`. Returns whether anything changed.
    pub fn apply<F>(&self, id: &str, updater: F) -> bool
    where
        F: FnOnce(&BoardElement) -> Option<BoardElement>,
    {
        self.board
            .try_maybe_update(|state| {
                let changed = state.update_element(id, updater);
                (changed, changed)
            })
            .unwrap_or(false)
    }
}
