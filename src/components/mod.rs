//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render board chrome and interaction surfaces while reading/writing
//! shared state passed in from pages.

pub mod board_element;
pub mod button;
pub mod text_editor_overlay;
