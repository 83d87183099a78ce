//! Route guard component for protected routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted as the parent of every protected route. The decision comes from
//! `util::auth::authorize`; this component only applies it, rendering the
//! child route inside `Layout` or replacing history with `/login`.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::{Outlet, Redirect};
use leptos_router::hooks::use_location;

use crate::components::layout::Layout;
use crate::state::session::SessionStore;
use crate::util::auth::{Access, Navigation, authorize};

#[component]
pub fn RequireAuth(session: SessionStore) -> impl IntoView {
    let location = use_location();

    // Re-run on navigation and on login/logout; the Memo keeps the outlet
    // mounted while the outcome stays `Render`.
    let access = Memo::new(move |_| {
        let path = location.pathname.get();
        authorize(Navigation::to(&path), session.is_authenticated())
    });

    move || match access.get() {
        Access::Render => view! {
            <Layout session=session>
                <Outlet/>
            </Layout>
        }
        .into_any(),
        Access::Redirect { to, replace } => {
            log::debug!("guard redirecting to {to}");
            view! { <Redirect path=to options=NavigateOptions { replace, ..NavigateOptions::default() }/> }.into_any()
        }
    }
}
