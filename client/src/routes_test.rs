use super::*;

#[test]
fn parse_recognizes_every_route() {
    assert_eq!(AppRoute::parse("/"), AppRoute::Dashboard);
    assert_eq!(AppRoute::parse("/login"), AppRoute::Login);
    assert_eq!(AppRoute::parse("/register"), AppRoute::Register);
    assert_eq!(AppRoute::parse("/projects/42"), AppRoute::Project("42".to_owned()));
    assert_eq!(AppRoute::parse("/projects"), AppRoute::NotFound);
    assert_eq!(AppRoute::parse("/projects/42/extra"), AppRoute::NotFound);
    assert_eq!(AppRoute::parse("/nope"), AppRoute::NotFound);
}

#[test]
fn parse_ignores_trailing_slash_query_and_fragment() {
    assert_eq!(AppRoute::parse("/login/"), AppRoute::Login);
    assert_eq!(AppRoute::parse("/projects/42?tab=tasks#top"), AppRoute::Project("42".to_owned()));
    assert_eq!(AppRoute::parse(""), AppRoute::Dashboard);
}

#[test]
fn only_dashboard_and_project_require_auth() {
    assert!(AppRoute::Dashboard.requires_auth());
    assert!(AppRoute::Project("1".to_owned()).requires_auth());
    assert!(!AppRoute::Login.requires_auth());
    assert!(!AppRoute::Register.requires_auth());
    assert!(!AppRoute::NotFound.requires_auth());
}

#[test]
fn path_round_trips_through_parse() {
    for route in [AppRoute::Login, AppRoute::Register, AppRoute::Dashboard, AppRoute::Project("abc".to_owned())] {
        assert_eq!(AppRoute::parse(&route.path()), route);
    }
}
