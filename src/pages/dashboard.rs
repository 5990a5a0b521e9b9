//! Dashboard page listing boards with create and open actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. It fetches the board inventory
//! over REST once auth has settled and coordinates create->navigate flow.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::board_path;
use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::net::api::ApiClient;
use crate::net::types::CreateBoardRequest;
use crate::state::auth::AuthState;
use crate::state::boards::BoardsState;
use crate::util::auth::install_unauth_redirect;

const MAX_BOARD_NAME_CHARS: usize = 120;

fn validate_board_name(raw: &str) -> Result<CreateBoardRequest, &'static str> {
    let name = raw.trim();
    if name.is_empty() {
        return Err("Board name is required.");
    }
    if name.chars().count() > MAX_BOARD_NAME_CHARS {
        return Err("Board name is too long.");
    }
    Ok(CreateBoardRequest {
        name: name.to_owned(),
        description: None,
    })
}

/// Dashboard page. Shows a board list and a create-board form.
/// Redirects to `/login` if the user is not authenticated.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let boards = expect_context::<RwSignal<BoardsState>>();
    let navigate = use_navigate();

    install_unauth_redirect(auth, navigate.clone());

    let requested_list = RwSignal::new(false);
    let api_list = api.clone();
    Effect::new(move || {
        if requested_list.get() || auth.get().user.is_none() {
            return;
        }
        requested_list.set(true);
        boards.update(|s| s.loading = true);
        #[cfg(feature = "hydrate")]
        {
            let api = api_list.clone();
            leptos::task::spawn_local(async move {
                match api.list_boards().await {
                    Ok(items) => boards.update(|s| s.set_loaded(items)),
                    Err(e) => boards.update(|s| s.fail(e.to_string())),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &api_list;
        }
    });

    let new_board_name = RwSignal::new(String::new());
    let api_create = api.clone();
    let navigate_create = navigate.clone();
    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if boards.get_untracked().create_pending {
            return;
        }
        let request = match validate_board_name(&new_board_name.get()) {
            Ok(request) => request,
            Err(message) => {
                boards.update(|s| s.error = Some(message.to_owned()));
                return;
            }
        };
        boards.update(|s| {
            s.create_pending = true;
            s.error = None;
        });
        #[cfg(feature = "hydrate")]
        {
            let api = api_create.clone();
            let navigate = navigate_create.clone();
            leptos::task::spawn_local(async move {
                match api.create_board(&request).await {
                    Ok(board) => {
                        let path = board_path(&board.id);
                        boards.update(|s| s.push_created(board));
                        new_board_name.set(String::new());
                        navigate(&path, NavigateOptions::default());
                    }
                    Err(e) => boards.update(|s| s.fail(e.to_string())),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&api_create, &navigate_create, request);
        }
    };

    let api_logout = api.clone();
    let navigate_logout = navigate.clone();
    let on_logout = move |_| {
        api_logout.logout();
        auth.update(|s| s.resolve(None));
        boards.set(BoardsState::default());
        navigate_logout("/login", NavigateOptions::default());
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Boards"</h1>
                <span class="dashboard-page__user">
                    {move || auth.get().user.map(|u| u.display_name).unwrap_or_default()}
                </span>
                <Button variant=ButtonVariant::Ghost size=ButtonSize::Sm on:click=on_logout>
                    "Log out"
                </Button>
            </header>

            <form class="dashboard-page__create" on:submit=on_create>
                <input
                    class="dashboard-page__input"
                    type="text"
                    placeholder="New board name"
                    prop:value=move || new_board_name.get()
                    on:input=move |ev| new_board_name.set(event_target_value(&ev))
                />
                <Button
                    disabled=Signal::derive(move || boards.get().create_pending)
                    attr:r#type="submit"
                >
                    "Create board"
                </Button>
            </form>

            <Show when=move || boards.get().error.is_some()>
                <p class="dashboard-page__error">{move || boards.get().error.unwrap_or_default()}</p>
            </Show>
            <Show when=move || boards.get().loading>
                <p class="dashboard-page__loading">"Loading boards..."</p>
            </Show>

            <ul class="dashboard-page__list">
                <For
                    each=move || boards.get().items
                    key=|board| board.id.clone()
                    children=move |board| {
                        let href = board_path(&board.id);
                        view! {
                            <li class="board-card">
                                <a class="board-card__name" href=href>{board.name}</a>
                                <span class="board-card__description">
                                    {board.description.unwrap_or_default()}
                                </span>
                            </li>
                        }
                    }
                />
            </ul>
        </div>
    }
}
