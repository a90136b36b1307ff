//! Visibility filter over the task list.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

use crate::net::types::Task;

/// Which tasks the list shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Filter {
    #[default]
    All,
    Completed,
    Pending,
}

impl Filter {
    /// Every filter, in the order the filter bar lists them.
    pub const ALL: [Self; 3] = [Self::All, Self::Completed, Self::Pending];

    /// Whether `task` is visible under this filter.
    pub fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Completed => task.completed,
            Self::Pending => !task.completed,
        }
    }

    /// Stable identifier, also used as a CSS modifier.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Completed => "completed",
            Self::Pending => "pending",
        }
    }

    /// Button caption.
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Completed => "Completed",
            Self::Pending => "Pending",
        }
    }
}
