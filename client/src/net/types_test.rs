use super::*;

// =============================================================
// Id aliases
// =============================================================

#[test]
fn user_accepts_mongo_style_id() {
    let user: User = serde_json::from_value(serde_json::json!({
        "_id": "u-1",
        "username": "alice",
        "email": "alice@example.com"
    }))
    .unwrap();
    assert_eq!(user.id, "u-1");
    assert_eq!(user.role, None);
}

#[test]
fn user_serializes_plain_id_and_skips_missing_role() {
    let user = User {
        id: "1".to_owned(),
        username: "alice".to_owned(),
        email: "alice@example.com".to_owned(),
        role: None,
    };
    let value = serde_json::to_value(&user).unwrap();
    assert_eq!(value, serde_json::json!({ "id": "1", "username": "alice", "email": "alice@example.com" }));
}

#[test]
fn project_accepts_both_id_spellings() {
    let a: Project = serde_json::from_str(r#"{"_id":"p1","name":"Alpha","description":"d","user":"u1"}"#).unwrap();
    let b: Project = serde_json::from_str(r#"{"id":"p1","name":"Alpha","description":"d","user":"u1"}"#).unwrap();
    assert_eq!(a, b);
}

// =============================================================
// TaskStatus
// =============================================================

#[test]
fn task_status_uses_kebab_case_on_the_wire() {
    assert_eq!(serde_json::to_value(TaskStatus::InProgress).unwrap(), serde_json::json!("in-progress"));
    let parsed: TaskStatus = serde_json::from_value(serde_json::json!("done")).unwrap();
    assert_eq!(parsed, TaskStatus::Done);
}

#[test]
fn task_status_parse_matches_as_str() {
    for status in TaskStatus::ALL {
        assert_eq!(TaskStatus::parse(status.as_str()), Some(status));
    }
    assert_eq!(TaskStatus::parse("blocked"), None);
}

#[test]
fn task_defaults_status_to_todo() {
    let task: Task = serde_json::from_str(r#"{"_id":"t1","name":"Write docs","project":"p1"}"#).unwrap();
    assert_eq!(task.status, TaskStatus::Todo);
    assert_eq!(task.description, "");
}

// =============================================================
// Auth bodies
// =============================================================

#[test]
fn login_response_accepts_legacy_db_user_field() {
    let resp: LoginResponse = serde_json::from_value(serde_json::json!({
        "token": "abc123",
        "dbUser": { "_id": "1", "username": "alice", "email": "a@example.com", "role": "admin" }
    }))
    .unwrap();
    assert_eq!(resp.token, "abc123");
    assert_eq!(resp.user.username, "alice");
    assert_eq!(resp.user.role.as_deref(), Some("admin"));
}

#[test]
fn login_response_accepts_user_field() {
    let resp: LoginResponse = serde_json::from_value(serde_json::json!({
        "token": "abc123",
        "user": { "id": "1", "username": "alice", "email": "a@example.com" }
    }))
    .unwrap();
    assert_eq!(resp.user.id, "1");
}

#[test]
fn task_input_serializes_status_name() {
    let input = TaskInput { name: "n".to_owned(), description: "d".to_owned(), status: TaskStatus::InProgress };
    assert_eq!(
        serde_json::to_value(&input).unwrap(),
        serde_json::json!({ "name": "n", "description": "d", "status": "in-progress" })
    );
}

#[test]
fn error_body_tolerates_missing_message() {
    let body: ErrorBody = serde_json::from_str("{}").unwrap();
    assert_eq!(body.message, None);
}
