//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `board`, `boards`, `text_editor`) so
//! individual components can depend on small focused models.

pub mod auth;
pub mod board;
pub mod boards;
pub mod text_editor;
