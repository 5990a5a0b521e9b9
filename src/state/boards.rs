//! Board-list state for the dashboard.
//!
//! DESIGN
//! ======
//! Separating list state from active-board state avoids accidental coupling
//! between navigation inventory and in-board editing data.

#[cfg(test)]
#[path = "boards_test.rs"]
mod boards_test;

use crate::net::types::Board;

/// Shared board list state backed by the REST API.
#[derive(Clone, Debug, Default)]
pub struct BoardsState {
    pub items: Vec<Board>,
    pub loading: bool,
    pub create_pending: bool,
    pub error: Option<String>,
}

impl BoardsState {
    /// Replace the list with a fresh fetch result.
    pub fn set_loaded(&mut self, boards: Vec<Board>) {
        self.items = boards;
        self.loading = false;
        self.error = None;
    }

    /// Record a newly created board at the top of the list.
    pub fn push_created(&mut self, board: Board) {
        self.items.retain(|b| b.id != board.id);
        self.items.insert(0, board);
        self.create_pending = false;
        self.error = None;
    }

    /// Record a failed list or create request.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.create_pending = false;
        self.error = Some(message.into());
    }
}
