//! Inline textarea overlay for editing text and sticky-note elements.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted once by the board page. It renders only while the board's
//! `TextEditorState` is open and reports the committed text upward; the page
//! decides how to apply and persist it. The handle strip on top drags the
//! overlay through `TextEditorState::move_to`.

#[cfg(test)]
#[path = "text_editor_overlay_test.rs"]
mod text_editor_overlay_test;

use leptos::prelude::*;

use crate::state::board::BoardState;
use crate::state::text_editor::{EditorKind, OpenTextEditor, TextCommit};

/// Inline CSS for the overlay of an open editor.
pub fn overlay_style(editor: &OpenTextEditor) -> String {
    let mut style = format!(
        "left: {}px; top: {}px; font-size: {}px; color: {};",
        editor.x, editor.y, editor.font_size, editor.color
    );
    if let EditorKind::StickyNote {
        background,
        width,
        height,
    } = &editor.kind
    {
        style.push_str(&format!(
            " background: {background}; width: {width}px; height: {height}px;"
        ));
    }
    style
}

/// Pointer and overlay positions captured when a drag starts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragAnchor {
    pub pointer_x: f64,
    pub pointer_y: f64,
    pub origin_x: f64,
    pub origin_y: f64,
}

impl DragAnchor {
    /// Overlay position once the pointer has moved to `(pointer_x, pointer_y)`.
    pub fn position_for(&self, pointer_x: f64, pointer_y: f64) -> (f64, f64) {
        (
            self.origin_x + (pointer_x - self.pointer_x),
            self.origin_y + (pointer_y - self.pointer_y),
        )
    }
}

/// Keys that close the editor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditorKeyAction {
    Commit,
    Cancel,
    None,
}

/// Map a keydown to an editor action.
///
/// Escape cancels. Enter commits single-line text elements; sticky notes
/// take newlines, so they commit on Ctrl/Cmd+Enter. Shift+Enter always
/// inserts a newline.
pub fn key_action(key: &str, shift: bool, ctrl_or_meta: bool, kind: &EditorKind) -> EditorKeyAction {
    match key {
        "Escape" => EditorKeyAction::Cancel,
        "Enter" if shift => EditorKeyAction::None,
        "Enter" if ctrl_or_meta => EditorKeyAction::Commit,
        "Enter" if matches!(kind, EditorKind::Text) => EditorKeyAction::Commit,
        _ => EditorKeyAction::None,
    }
}

#[component]
pub fn TextEditorOverlay(board: RwSignal<BoardState>, on_commit: Callback<TextCommit>) -> impl IntoView {
    let is_open = Memo::new(move |_| board.with(|s| s.editor.is_open()));

    let commit = move || {
        let mut taken = None;
        board.update(|s| taken = s.editor.commit());
        if let Some(commit) = taken {
            on_commit.run(commit);
        }
    };

    let style = move || {
        board.with(|s| s.editor.editor().map(overlay_style).unwrap_or_default())
    };
    let value = move || {
        board.with(|s| s.editor.editor().map(|e| e.value.clone()).unwrap_or_default())
    };

    let drag = RwSignal::new(None::<DragAnchor>);

    let on_handle_pointer_down = move |ev: leptos::ev::PointerEvent| {
        let Some((origin_x, origin_y)) =
            board.with_untracked(|s| s.editor.editor().map(|e| (e.x, e.y)))
        else {
            return;
        };
        drag.set(Some(DragAnchor {
            pointer_x: f64::from(ev.client_x()),
            pointer_y: f64::from(ev.client_y()),
            origin_x,
            origin_y,
        }));
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;
            if let Some(target) = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            {
                let _ = target.set_pointer_capture(ev.pointer_id());
            }
        }
    };

    let on_handle_pointer_move = move |ev: leptos::ev::PointerEvent| {
        let Some(anchor) = drag.get_untracked() else {
            return;
        };
        let (x, y) = anchor.position_for(f64::from(ev.client_x()), f64::from(ev.client_y()));
        board.update(|s| s.editor.move_to(x, y));
    };

    let on_handle_pointer_up = move |_ev: leptos::ev::PointerEvent| {
        drag.set(None);
    };

    view! {
        <Show when=move || is_open.get()>
            <div class="text-editor-overlay" style=style>
                // Keeps focus in the textarea so grabbing the handle does not blur-commit.
                <div
                    class="text-editor-overlay__handle"
                    on:mousedown=|ev: leptos::ev::MouseEvent| ev.prevent_default()
                    on:pointerdown=on_handle_pointer_down
                    on:pointermove=on_handle_pointer_move
                    on:pointerup=on_handle_pointer_up
                    on:pointercancel=on_handle_pointer_up
                ></div>
                <textarea
                    class="text-editor-overlay__input"
                    prop:value=value
                    autofocus=true
                    on:input=move |ev| {
                        let next = event_target_value(&ev);
                        board.update(|s| s.editor.set_value(next));
                    }
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        let action = board.with_untracked(|s| {
                            s.editor.editor().map_or(EditorKeyAction::None, |e| {
                                key_action(&ev.key(), ev.shift_key(), ev.ctrl_key() || ev.meta_key(), &e.kind)
                            })
                        });
                        match action {
                            EditorKeyAction::Commit => {
                                ev.prevent_default();
                                commit();
                            }
                            EditorKeyAction::Cancel => {
                                ev.prevent_default();
                                board.update(|s| s.editor.cancel());
                            }
                            EditorKeyAction::None => {}
                        }
                    }
                    on:blur=move |_| commit()
                ></textarea>
            </div>
        </Show>
    }
}
