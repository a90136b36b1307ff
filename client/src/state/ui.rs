//! Local UI state (theme, filter, drafts, edit session).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of `TasksState` so the list
//! itself only changes through explicit task operations.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use super::filter::Filter;

/// An in-progress edit of one task's text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditSession {
    /// Index of the task in the full list.
    pub index: usize,
    /// Current contents of the edit input.
    pub draft: String,
}

/// UI state for the to-do page.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub dark_mode: bool,
    pub filter: Filter,
    /// Contents of the new-task input.
    pub new_task: String,
    /// `None` when no row is being edited.
    pub editing: Option<EditSession>,
}

impl UiState {
    /// Enter edit mode for `index`, seeding the draft with the current text.
    /// Replaces any other session in progress.
    pub fn start_edit(&mut self, index: usize, text: &str) {
        self.editing = Some(EditSession { index, draft: text.to_owned() });
    }

    /// Whether row `index` is the one being edited.
    pub fn is_editing(&self, index: usize) -> bool {
        self.editing.as_ref().is_some_and(|s| s.index == index)
    }

    /// Update the draft if a session is open.
    pub fn set_draft(&mut self, draft: String) {
        if let Some(session) = self.editing.as_mut() {
            session.draft = draft;
        }
    }

    /// Leave edit mode, returning the session so the caller can commit it.
    pub fn finish_edit(&mut self) -> Option<EditSession> {
        self.editing.take()
    }

    /// Keep the edit session pointing at the same task after the row at
    /// `index` was removed; editing the removed row ends the session.
    pub fn forget_row(&mut self, index: usize) {
        let Some(session) = self.editing.as_mut() else {
            return;
        };
        if session.index == index {
            self.editing = None;
        } else if session.index > index {
            session.index -= 1;
        }
    }

    /// Take the new-task draft, clearing the input.
    pub fn take_new_task(&mut self) -> String {
        std::mem::take(&mut self.new_task)
    }
}
