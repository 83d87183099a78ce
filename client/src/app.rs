//! Root application component with routing and the injected session.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::components::{layout::Layout, require_auth::RequireAuth};
use crate::net::api::{ApiClient, api_base_url};
use crate::pages::{
    dashboard::DashboardPage, login::LoginPage, not_found::NotFoundPage, project::ProjectPage,
    register::RegisterPage,
};
use crate::state::session::SessionStore;
use crate::state::storage::LocalStorage;

/// Root application component.
///
/// Boot order: build the session store, restore any saved session, then mount
/// the router. Every consumer receives `session`/`api` as a prop.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionStore::new(Arc::new(LocalStorage::default()));
    session.restore();
    let api = ApiClient::new(api_base_url(), session);

    view! {
        <Title text="Pro-Tasker"/>

        <Router>
            <Routes fallback=move || view! { <Layout session=session><NotFoundPage/></Layout> }>
                <Route
                    path=StaticSegment("login")
                    view=move || view! { <Layout session=session><LoginPage session=session api=api/></Layout> }
                />
                <Route
                    path=StaticSegment("register")
                    view=move || view! { <Layout session=session><RegisterPage api=api/></Layout> }
                />
                <ParentRoute path=StaticSegment("") view=move || view! { <RequireAuth session=session/> }>
                    <Route path=StaticSegment("") view=move || view! { <DashboardPage api=api/> }/>
                    <Route
                        path=(StaticSegment("projects"), ParamSegment("id"))
                        view=move || view! { <ProjectPage api=api/> }
                    />
                </ParentRoute>
            </Routes>
        </Router>
    }
}
