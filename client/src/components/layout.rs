//! Shared page chrome: header with brand, identity, and auth actions.

use leptos::prelude::*;

use crate::state::session::SessionStore;

#[component]
pub fn Layout(session: SessionStore, children: Children) -> impl IntoView {
    let username = move || session.user().map(|u| u.username).unwrap_or_default();

    view! {
        <div class="app-shell">
            <header class="app-header">
                <div class="app-header__inner">
                    <a href="/" class="app-header__brand">"Pro-Tasker"</a>
                    <nav class="app-header__nav">
                        <Show
                            when=move || session.is_authenticated()
                            fallback=|| {
                                view! {
                                    <a href="/login" class="btn btn--secondary">"Login"</a>
                                    <a href="/register" class="btn btn--outline">"Register"</a>
                                }
                            }
                        >
                            <span class="app-header__user">
                                "Logged in as "
                                <span class="app-header__username">{username}</span>
                            </span>
                            <button class="btn btn--secondary" on:click=move |_| session.logout()>
                                "Logout"
                            </button>
                        </Show>
                    </nav>
                </div>
            </header>
            <main class="app-main">
                <div class="app-main__inner">{children()}</div>
            </main>
        </div>
    }
}
