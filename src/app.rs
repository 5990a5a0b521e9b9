//! Root application component with routing and context providers.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::net::api::ApiClient;
use crate::pages::{about::AboutPage, board::BoardPage, dashboard::DashboardPage, login::LoginPage};
use crate::state::{auth::AuthState, board::BoardState, boards::BoardsState};
use crate::util::auth::bootstrap_session;

/// Top-level routes registered by [`App`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Dashboard,
    Login,
    About,
    Board,
}

impl AppRoute {
    pub const ALL: [Self; 4] = [Self::Dashboard, Self::Login, Self::About, Self::Board];

    /// Leading static path segment.
    pub fn segment(self) -> &'static str {
        match self {
            Self::Dashboard => "",
            Self::Login => "login",
            Self::About => "about",
            Self::Board => "board",
        }
    }

    /// Route that `path` lands on, or `None` for the not-found fallback.
    pub fn resolve(path: &str) -> Option<Self> {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Some(Self::Dashboard),
            ["login"] => Some(Self::Login),
            ["about"] => Some(Self::About),
            ["board", _] => Some(Self::Board),
            _ => None,
        }
    }
}

/// Client-side path of the board view for `board_id`.
pub fn board_path(board_id: &str) -> String {
    format!("/board/{board_id}")
}

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the API client and shared state contexts, restores the session
/// from the stored token, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let api = ApiClient::from_env();
    let auth = RwSignal::new(AuthState::default());
    let board = RwSignal::new(BoardState::default());
    let boards = RwSignal::new(BoardsState::default());

    provide_context(api.clone());
    provide_context(auth);
    provide_context(board);
    provide_context(boards);

    bootstrap_session(api, auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/whiteboard-client.css"/>
        <Title text="Whiteboard"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment(AppRoute::Login.segment()) view=LoginPage/>
                <Route path=StaticSegment(AppRoute::About.segment()) view=AboutPage/>
                <Route path=StaticSegment(AppRoute::Dashboard.segment()) view=DashboardPage/>
                <Route
                    path=(StaticSegment(AppRoute::Board.segment()), ParamSegment("id"))
                    view=BoardPage
                />
            </Routes>
        </Router>
    }
}
