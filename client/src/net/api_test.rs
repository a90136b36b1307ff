use super::*;

#[test]
fn collection_endpoint_adds_missing_trailing_slash() {
    assert_eq!(collection_endpoint("/api/tasks"), "/api/tasks/");
}

#[test]
fn collection_endpoint_collapses_repeated_slashes() {
    assert_eq!(collection_endpoint("/api/list//"), "/api/list/");
}

#[test]
fn collection_endpoint_keeps_absolute_urls() {
    assert_eq!(
        collection_endpoint("https://todo.example.com/api/tasks/"),
        "https://todo.example.com/api/tasks/"
    );
}

#[test]
fn task_endpoint_formats_numeric_id() {
    assert_eq!(task_endpoint("/api/tasks/", &TaskId::Number(12)), "/api/tasks/12/");
}

#[test]
fn task_endpoint_formats_string_id_without_double_slash() {
    assert_eq!(task_endpoint("/api/tasks", &TaskId::Text("x9".to_owned())), "/api/tasks/x9/");
}

#[test]
fn require_id_rejects_local_task() {
    let task = Task::new("local only");
    assert!(matches!(require_id(&task), Err(ApiError::MissingId)));
}

#[test]
fn require_id_returns_server_id() {
    let task = Task { id: Some(TaskId::Number(5)), text: "t".to_owned(), completed: false };
    assert_eq!(require_id(&task).unwrap(), &TaskId::Number(5));
}

#[test]
fn api_error_messages_are_readable() {
    assert_eq!(ApiError::Status(404).to_string(), "unexpected status: 404");
    assert_eq!(ApiError::MissingId.to_string(), "task has no server id");
    assert_eq!(ApiError::Unavailable.to_string(), "not available on server");
}
