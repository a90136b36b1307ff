use super::*;

// =============================================================
// Task
// =============================================================

#[test]
fn local_task_serializes_without_id() {
    let task = Task::new("buy milk");
    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json, serde_json::json!({ "text": "buy milk", "completed": false }));
}

#[test]
fn server_task_with_numeric_id_deserializes() {
    let task: Task = serde_json::from_str(r#"{"id":7,"text":"walk dog","completed":true}"#).unwrap();
    assert_eq!(task.id, Some(TaskId::Number(7)));
    assert_eq!(task.text, "walk dog");
    assert!(task.completed);
}

#[test]
fn server_task_with_negative_id_deserializes() {
    let tasks: Vec<Task> =
        serde_json::from_str(r#"[{"id":-1,"text":"a","completed":false},{"id":2,"text":"b","completed":true}]"#).unwrap();
    assert_eq!(tasks[0].id, Some(TaskId::Number(-1)));
    assert_eq!(tasks[0].id.as_ref().unwrap().to_string(), "-1");
    assert_eq!(tasks[1].id, Some(TaskId::Number(2)));
}

#[test]
fn server_task_with_string_id_deserializes() {
    let task: Task = serde_json::from_str(r#"{"id":"a1b2","text":"x","completed":false}"#).unwrap();
    assert_eq!(task.id, Some(TaskId::Text("a1b2".to_owned())));
}

#[test]
fn missing_completed_defaults_to_false() {
    let task: Task = serde_json::from_str(r#"{"text":"x"}"#).unwrap();
    assert!(!task.completed);
    assert_eq!(task.id, None);
}

#[test]
fn server_task_keeps_id_when_serialized() {
    let task = Task { id: Some(TaskId::Number(3)), text: "t".to_owned(), completed: true };
    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json, serde_json::json!({ "id": 3, "text": "t", "completed": true }));
}

// =============================================================
// TaskId
// =============================================================

#[test]
fn task_id_displays_verbatim() {
    assert_eq!(TaskId::Number(42).to_string(), "42");
    assert_eq!(TaskId::Text("abc".to_owned()).to_string(), "abc");
}

// =============================================================
// NewTask
// =============================================================

#[test]
fn new_task_payload_has_text_and_completed_only() {
    let payload = NewTask { text: "hello", completed: false };
    assert_eq!(
        serde_json::to_value(payload).unwrap(),
        serde_json::json!({ "text": "hello", "completed": false })
    );
}
