//! Task-list state and its transitions.
//!
//! DESIGN
//! ======
//! All mutations are plain methods on `TasksState` so components only
//! orchestrate (storage writes, REST calls) and the list rules stay unit
//! testable. Rows address tasks by their index in the full list, never by
//! their position in a filtered view; server responses are applied by id.

#[cfg(test)]
#[path = "tasks_test.rs"]
mod tasks_test;

use super::filter::Filter;
use crate::net::types::{Task, TaskId};

/// True for input that must not become a task (empty or whitespace only).
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// The ordered task list plus its load status.
#[derive(Clone, Debug, Default)]
pub struct TasksState {
    pub items: Vec<Task>,
    /// Set once the initial load from storage or the server has completed.
    /// Storage writes are suppressed until then so an empty first render
    /// never clobbers saved tasks.
    pub loaded: bool,
}

impl TasksState {
    /// Replace the whole list with a freshly loaded one.
    pub fn replace_all(&mut self, items: Vec<Task>) {
        self.items = items;
        self.loaded = true;
    }

    /// Append a new pending task. Blank text is rejected and returns `false`.
    pub fn add(&mut self, text: &str) -> bool {
        if is_blank(text) {
            return false;
        }
        self.items.push(Task::new(text));
        true
    }

    /// Append a task exactly as the server returned it.
    pub fn push(&mut self, task: Task) {
        self.items.push(task);
    }

    /// Flip `completed` on the task at `index`.
    pub fn toggle(&mut self, index: usize) -> bool {
        match self.items.get_mut(index) {
            Some(task) => {
                task.completed = !task.completed;
                true
            }
            None => false,
        }
    }

    /// Copy of the task at `index` with `completed` flipped, for a `PUT` body.
    pub fn toggled(&self, index: usize) -> Option<Task> {
        self.items.get(index).map(|task| Task { completed: !task.completed, ..task.clone() })
    }

    /// Copy of the task at `index` carrying `text`, unless `text` is blank.
    pub fn retitled(&self, index: usize, text: &str) -> Option<Task> {
        if is_blank(text) {
            return None;
        }
        self.items.get(index).map(|task| Task { text: text.to_owned(), ..task.clone() })
    }

    /// Replace the text of the task at `index`. Blank text leaves it unchanged.
    pub fn set_text(&mut self, index: usize, text: &str) -> bool {
        if is_blank(text) {
            return false;
        }
        match self.items.get_mut(index) {
            Some(task) => {
                task.text = text.to_owned();
                true
            }
            None => false,
        }
    }

    /// Remove the task at `index`, keeping the order of the rest.
    pub fn remove(&mut self, index: usize) -> Option<Task> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    /// Overwrite the task sharing `task.id` with the server's copy.
    pub fn replace_by_id(&mut self, task: Task) -> bool {
        let Some(id) = task.id.as_ref() else {
            return false;
        };
        match self.items.iter_mut().find(|t| t.id.as_ref() == Some(id)) {
            Some(slot) => {
                *slot = task;
                true
            }
            None => false,
        }
    }

    /// Remove the task with server id `id`, returning its former index.
    pub fn remove_by_id(&mut self, id: &TaskId) -> Option<(usize, Task)> {
        let index = self.items.iter().position(|t| t.id.as_ref() == Some(id))?;
        Some((index, self.items.remove(index)))
    }

    /// Tasks visible under `filter`, paired with their index in the full list.
    pub fn visible(&self, filter: Filter) -> Vec<(usize, Task)> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, task)| filter.matches(task))
            .map(|(index, task)| (index, task.clone()))
            .collect()
    }
}
