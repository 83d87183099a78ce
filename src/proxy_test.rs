use super::*;

#[test]
fn backend_target_joins_base_and_path() {
    assert_eq!(
        backend_target("http://localhost:4000/api", "projects/42/tasks", None),
        "http://localhost:4000/api/projects/42/tasks"
    );
}

#[test]
fn backend_target_avoids_double_slashes() {
    assert_eq!(backend_target("http://backend/api/", "/users/login", None), "http://backend/api/users/login");
}

#[test]
fn backend_target_keeps_query_string() {
    assert_eq!(
        backend_target("http://backend/api", "projects", Some("page=2&limit=10")),
        "http://backend/api/projects?page=2&limit=10"
    );
}

#[test]
fn backend_target_drops_empty_query() {
    assert_eq!(backend_target("http://backend/api", "projects", Some("")), "http://backend/api/projects");
}

#[test]
fn forwarded_headers_include_bearer_authorization() {
    assert!(FORWARDED_HEADERS.contains(&header::AUTHORIZATION));
    assert!(!FORWARDED_HEADERS.contains(&header::COOKIE));
}
