//! Static about page.

use leptos::prelude::*;

/// Fixed greeting rendered at `/about`.
pub const ABOUT_GREETING: &str = "Hello from About!";

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="about-page">
            <h3>{ABOUT_GREETING}</h3>
        </div>
    }
}
