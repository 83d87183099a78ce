//! Registration page: `POST /users/register`, then back to `/login`.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::{ApiClient, register_error_message};
use crate::net::types::{RegisterRequest, RegisterResponse};

pub const REGISTER_SUCCESS_FALLBACK: &str = "Registration successful!";

/// Pause on the success message before moving to the login page.
#[cfg(feature = "csr")]
const LOGIN_REDIRECT_DELAY_MS: u32 = 1_000;

fn validate_register_input(username: &str, email: &str, password: &str) -> Result<RegisterRequest, &'static str> {
    let username = username.trim();
    let email = email.trim();
    if username.is_empty() || email.is_empty() || password.is_empty() {
        return Err("Fill in username, email, and password.");
    }
    Ok(RegisterRequest { username: username.to_owned(), email: email.to_owned(), password: password.to_owned() })
}

fn success_message(resp: &RegisterResponse) -> String {
    let message = resp.message.trim();
    if message.is_empty() { REGISTER_SUCCESS_FALLBACK.to_owned() } else { message.to_owned() }
}

#[component]
pub fn RegisterPage(api: ApiClient) -> impl IntoView {
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let success = RwSignal::new(None::<String>);
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        error.set(None);
        success.set(None);
        let request = match validate_register_input(
            &username.get_untracked(),
            &email.get_untracked(),
            &password.get_untracked(),
        ) {
            Ok(request) => request,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        busy.set(true);

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api.register(&request).await {
                Ok(resp) => {
                    success.set(Some(success_message(&resp)));
                    busy.set(false);
                    #[cfg(feature = "csr")]
                    gloo_timers::future::TimeoutFuture::new(LOGIN_REDIRECT_DELAY_MS).await;
                    navigate("/login", NavigateOptions::default());
                }
                Err(e) => {
                    log::warn!("registration failed: {e}");
                    error.set(Some(register_error_message(&e)));
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <Title text="Register · Pro-Tasker"/>
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__title">"Register"</h1>
                <Show when=move || error.get().is_some()>
                    <div class="alert alert--error">{move || error.get().unwrap_or_default()}</div>
                </Show>
                <Show when=move || success.get().is_some()>
                    <div class="alert alert--success">{move || success.get().unwrap_or_default()}</div>
                </Show>
                <form class="auth-form" on:submit=on_submit>
                    <label class="field">
                        <span class="field__label">"Username"</span>
                        <input
                            class="field__input"
                            type="text"
                            required=true
                            autocomplete="username"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        <span class="field__label">"Email"</span>
                        <input
                            class="field__input"
                            type="email"
                            required=true
                            autocomplete="email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        <span class="field__label">"Password"</span>
                        <input
                            class="field__input"
                            type="password"
                            required=true
                            autocomplete="new-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary btn--block" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Registering..." } else { "Register" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Already have an account? "
                    <a href="/login">"Login"</a>
                </p>
            </div>
        </div>
    }
}
