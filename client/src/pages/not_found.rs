//! Fallback page for unknown routes.

use leptos::prelude::*;
use leptos_meta::Title;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Title text="Not Found · Pro-Tasker"/>
        <div class="not-found-page">
            <h1 class="not-found-page__title">"404 - Page not found"</h1>
            <p class="muted">"The page you are looking for does not exist."</p>
            <a href="/" class="btn btn--primary">"Go to Dashboard"</a>
        </div>
    }
}
