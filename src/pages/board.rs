//! Board page: a single board's element surface and text editing.
//!
//! ARCHITECTURE
//! ============
//! This component is the route-level coordinator between URL board identity,
//! the REST API, and the local `BoardState` projection. Element mutations go
//! through `ElementUpdater`; the page persists them afterwards.
//!
//! TRADE-OFFS
//! ==========
//! Edits are applied locally first and patched to the server with the
//! pre-edit version. A rejected patch leaves the local text in place and
//! surfaces the error in the header instead of rolling back.
//!
//! Only elements created or edited in this session are shown. The backend
//! has no REST listing for a board's elements; existing ones are delivered
//! over its realtime socket, which this client does not open.

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::board_element::BoardElementView;
use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::text_editor_overlay::TextEditorOverlay;
use crate::net::api::ApiClient;
use crate::net::types::{BoardElement, CreateBoardElementRequest, ElementType};
use crate::state::auth::AuthState;
use crate::state::board::{BoardState, ElementUpdater};
use crate::state::text_editor::{DEFAULT_STICKY_BACKGROUND, OpenTextEditor, TextCommit, text_patch_request};
use crate::util::auth::install_unauth_redirect;

/// Offset between successive new elements so they do not stack exactly.
const CASCADE_STEP: f64 = 24.0;
const CASCADE_SLOTS: i32 = 10;

/// A new element of `kind` placed in the cascade slot for `z_index`.
fn draft_element(id: String, board_id: &str, kind: ElementType, z_index: i32) -> BoardElement {
    let offset = f64::from(z_index.rem_euclid(CASCADE_SLOTS)) * CASCADE_STEP;
    let (width, height, style, text) = match kind {
        ElementType::StickyNote => (
            200.0,
            200.0,
            serde_json::json!({ "backgroundColor": DEFAULT_STICKY_BACKGROUND }),
            "",
        ),
        _ => (240.0, 40.0, serde_json::json!({}), "Text"),
    };
    BoardElement {
        id,
        board_id: board_id.to_owned(),
        element_type: kind,
        position_x: 80.0 + offset,
        position_y: 80.0 + offset,
        width,
        height,
        rotation: 0.0,
        z_index,
        style,
        properties: serde_json::json!({ "text": text }),
        version: 0,
    }
}

fn create_request(element: &BoardElement) -> CreateBoardElementRequest {
    CreateBoardElementRequest {
        id: Some(element.id.clone()),
        element_type: element.element_type,
        position_x: element.position_x,
        position_y: element.position_y,
        width: element.width,
        height: element.height,
        style: Some(element.style.clone()),
        properties: Some(element.properties.clone()),
    }
}

#[component]
pub fn BoardPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let board = expect_context::<RwSignal<BoardState>>();
    let params = use_params_map();
    let navigate = use_navigate();
    let updater = ElementUpdater::new(board);

    install_unauth_redirect(auth, navigate);

    let board_id = Memo::new(move |_| params.read().get("id").unwrap_or_default());

    // Load board metadata whenever the route id changes.
    let api_load = api.clone();
    Effect::new(move || {
        let id = board_id.get();
        if id.is_empty() {
            return;
        }
        board.update(|s| s.reset_for(&id));
        #[cfg(feature = "hydrate")]
        {
            let api = api_load.clone();
            leptos::task::spawn_local(async move {
                let result = api.fetch_board(&id).await;
                board.update(|s| {
                    if s.board_id.as_deref() != Some(id.as_str()) {
                        return;
                    }
                    s.loading = false;
                    match result {
                        Ok(meta) => s.board_name = Some(meta.name),
                        Err(e) => s.error = Some(e.to_string()),
                    }
                });
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &api_load;
        }
    });

    let api_add = api.clone();
    let add_element = move |kind: ElementType| {
        let id = board_id.get_untracked();
        if id.is_empty() {
            return;
        }
        let z_index = board.with_untracked(BoardState::next_z_index);
        let element = draft_element(uuid::Uuid::new_v4().to_string(), &id, kind, z_index);
        let request = create_request(&element);
        board.update(|s| s.upsert_element(element));
        #[cfg(feature = "hydrate")]
        {
            let api = api_add.clone();
            leptos::task::spawn_local(async move {
                match api.create_element(&id, &request).await {
                    Ok(saved) => board.update(|s| s.upsert_element(saved)),
                    Err(e) => board.update(|s| s.error = Some(e.to_string())),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&api_add, request);
        }
    };
    let add_text = add_element.clone();
    let add_sticky = add_element;

    let on_edit = Callback::new(move |element_id: String| {
        let editor = board.with_untracked(|s| {
            s.elements.get(&element_id).and_then(|element| {
                OpenTextEditor::for_element(element, element.position_x, element.position_y)
            })
        });
        if let Some(editor) = editor {
            board.update(|s| s.editor.open(editor));
        }
    });

    let api_commit = api.clone();
    let on_commit = Callback::new(move |commit: TextCommit| {
        let Some(expected_version) = board.with_untracked(|s| {
            s.elements.get(&commit.element_id).map(|element| element.version)
        }) else {
            return;
        };
        if !updater.apply(&commit.element_id, |element| commit.apply(element)) {
            return;
        }
        let Some(updated) = board.with_untracked(|s| s.elements.get(&commit.element_id).cloned()) else {
            return;
        };
        let patch = text_patch_request(&updated, expected_version);
        #[cfg(feature = "hydrate")]
        {
            let api = api_commit.clone();
            let board_id = updated.board_id.clone();
            leptos::task::spawn_local(async move {
                match api.update_element(&board_id, &updated.id, &patch).await {
                    Ok(saved) => board.update(|s| s.upsert_element(saved)),
                    Err(e) => board.update(|s| s.error = Some(e.to_string())),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&api_commit, patch);
        }
    });

    view! {
        <div class="board-page">
            <header class="board-page__header">
                <a class="board-page__back" href="/">"Boards"</a>
                <h1 class="board-page__title">
                    {move || board.get().board_name.unwrap_or_else(|| "Untitled board".to_owned())}
                </h1>
                <Button variant=ButtonVariant::Secondary size=ButtonSize::Sm on:click=move |_| add_text(ElementType::Text)>
                    "Add text"
                </Button>
                <Button variant=ButtonVariant::Secondary size=ButtonSize::Sm on:click=move |_| add_sticky(ElementType::StickyNote)>
                    "Add sticky note"
                </Button>
                <Show when=move || board.get().error.is_some()>
                    <span class="board-page__error">{move || board.get().error.unwrap_or_default()}</span>
                </Show>
            </header>
            <div class="board-page__surface">
                <For
                    each=move || board.get().sorted_elements()
                    key=|element| (element.id.clone(), element.version, element.text().to_owned())
                    children=move |element| view! { <BoardElementView element=element on_edit=on_edit/> }
                />
                <TextEditorOverlay board=board on_commit=on_commit/>
            </div>
        </div>
    }
}
