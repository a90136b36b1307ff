//! Shared wire DTOs for task records.
//!
//! DESIGN
//! ======
//! The same `Task` shape is used for the browser-storage array and the REST
//! collaborator's JSON, so local tasks simply omit `id`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Server-assigned task identifier.
///
/// Servers differ on whether ids are integers or strings; both are accepted
/// and echoed back unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TaskId {
    Number(i64),
    Text(String),
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// A to-do item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Present only when the task came from the REST collaborator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<TaskId>,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    /// A fresh, not-yet-completed local task.
    pub fn new(text: impl Into<String>) -> Self {
        Self { id: None, text: text.into(), completed: false }
    }
}

/// Body of `POST {base}`: a task without an id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewTask<'a> {
    pub text: &'a str,
    pub completed: bool,
}
