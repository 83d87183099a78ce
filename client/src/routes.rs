//! Static route table.
//!
//! Whether a route needs a session is a property of the route, never of the
//! data behind it. `app::App` mounts the same table with `leptos_router`.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Login,
    Register,
    Dashboard,
    Project(String),
    NotFound,
}

impl AppRoute {
    /// Resolve a pathname (query and fragment ignored) to a route.
    #[must_use]
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Self::Dashboard,
            ["login"] => Self::Login,
            ["register"] => Self::Register,
            ["projects", id] => Self::Project((*id).to_owned()),
            _ => Self::NotFound,
        }
    }

    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Login => "/login".to_owned(),
            Self::Register => "/register".to_owned(),
            Self::Dashboard => "/".to_owned(),
            Self::Project(id) => format!("/projects/{id}"),
            Self::NotFound => "/404".to_owned(),
        }
    }

    #[must_use]
    pub fn requires_auth(&self) -> bool {
        matches!(self, Self::Dashboard | Self::Project(_))
    }
}
