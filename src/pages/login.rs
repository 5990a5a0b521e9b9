//! Login page with email/password sign-in and account registration.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::net::api::ApiClient;
use crate::net::types::{LoginRequest, RegisterRequest};
use crate::state::auth::AuthState;

/// Which form the page shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Login => Self::Register,
            Self::Register => Self::Login,
        }
    }
}

/// Same rule the backend enforces: 8+ bytes with an uppercase letter and a digit.
pub fn is_strong_password(password: &str) -> bool {
    password.len() >= 8
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
}

/// A validated form submission.
#[derive(Clone, Debug, PartialEq)]
pub enum AuthSubmission {
    Login(LoginRequest),
    Register(RegisterRequest),
}

fn validate_login_input(email: &str, password: &str) -> Result<LoginRequest, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok(LoginRequest {
        email: email.to_owned(),
        password: password.to_owned(),
    })
}

fn validate_register_input(
    email: &str,
    password: &str,
    display_name: &str,
    username: &str,
) -> Result<RegisterRequest, &'static str> {
    let email = email.trim();
    let display_name = display_name.trim();
    let username = username.trim();
    if email.is_empty() || display_name.is_empty() || username.is_empty() {
        return Err("Fill in every field.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    if !is_strong_password(password) {
        return Err("Password must be at least 8 characters and include 1 uppercase letter and 1 number.");
    }
    // The backend hashes this field; it carries the password as typed.
    Ok(RegisterRequest {
        email: email.to_owned(),
        password_hash: password.to_owned(),
        display_name: display_name.to_owned(),
        username: username.to_owned(),
        invite_token: None,
    })
}

fn validate_submission(
    mode: AuthMode,
    email: &str,
    password: &str,
    display_name: &str,
    username: &str,
) -> Result<AuthSubmission, &'static str> {
    match mode {
        AuthMode::Login => validate_login_input(email, password).map(AuthSubmission::Login),
        AuthMode::Register => {
            validate_register_input(email, password, display_name, username).map(AuthSubmission::Register)
        }
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let mode = RwSignal::new(AuthMode::Login);
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let display_name = RwSignal::new(String::new());
    let username = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Already signed in: go straight to the dashboard.
    let navigate_home = navigate.clone();
    Effect::new(move || {
        if auth.get().user.is_some() {
            navigate_home("/", NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let current_mode = mode.get();
        let submission = match validate_submission(
            current_mode,
            &email.get(),
            &password.get(),
            &display_name.get(),
            &username.get(),
        ) {
            Ok(submission) => submission,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set(match current_mode {
            AuthMode::Login => "Signing in...".to_owned(),
            AuthMode::Register => "Creating account...".to_owned(),
        });

        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let result = match &submission {
                    AuthSubmission::Login(request) => api.login(request).await,
                    AuthSubmission::Register(request) => api.register(request).await,
                };
                match result {
                    Ok(response) => {
                        auth.update(|s| s.resolve(Some(response.user)));
                        navigate("/", NavigateOptions::default());
                    }
                    Err(e) => info.set(format!("Sign-in failed: {e}")),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&api, &navigate, submission);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Whiteboard"</h1>
                <p class="login-card__subtitle">
                    {move || match mode.get() {
                        AuthMode::Login => "Sign in to your account",
                        AuthMode::Register => "Create an account",
                    }}
                </p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <Show when=move || mode.get() == AuthMode::Register>
                        <input
                            class="login-input"
                            type="text"
                            placeholder="Display name"
                            prop:value=move || display_name.get()
                            on:input=move |ev| display_name.set(event_target_value(&ev))
                        />
                        <input
                            class="login-input"
                            type="text"
                            placeholder="Username"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                    </Show>
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <Button class="w-full" disabled=busy attr:r#type="submit">
                        {move || match mode.get() {
                            AuthMode::Login => "Sign in",
                            AuthMode::Register => "Create account",
                        }}
                    </Button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <Button
                    variant=ButtonVariant::Link
                    size=ButtonSize::Sm
                    on:click=move |_| {
                        mode.update(|m| *m = m.toggled());
                        info.set(String::new());
                    }
                >
                    {move || match mode.get() {
                        AuthMode::Login => "Need an account? Register",
                        AuthMode::Register => "Have an account? Sign in",
                    }}
                </Button>
                <a class="login-card__link" href="/about">"About"</a>
            </div>
        </div>
    }
}
