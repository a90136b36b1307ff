//! One task in the list, with an inline edit mode.
//!
//! DESIGN
//! ======
//! Rows receive their index in the full task list (not in the filtered
//! view), so every callback addresses the task the user actually clicked.

#[cfg(test)]
#[path = "task_row_test.rs"]
mod task_row_test;

use leptos::prelude::*;

use crate::net::types::Task;
use crate::state::ui::UiState;

/// What a key press in the edit input does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum EditKey {
    Save,
    Cancel,
}

pub(crate) fn edit_key(key: &str) -> Option<EditKey> {
    match key {
        "Enter" => Some(EditKey::Save),
        "Escape" => Some(EditKey::Cancel),
        _ => None,
    }
}

/// A list row: checkbox, text, Edit and Delete; or the edit input and Save.
#[component]
pub fn TaskRow(
    index: usize,
    task: Task,
    on_toggle: Callback<usize>,
    on_delete: Callback<usize>,
    on_save: Callback<()>,
) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let editing = Memo::new(move |_| ui.with(|u| u.is_editing(index)));
    let edit_ref = NodeRef::<leptos::html::Input>::new();

    // Focus the edit input as soon as it is mounted.
    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        if editing.get() {
            if let Some(input) = edit_ref.get() {
                let _ = input.focus();
            }
        }
    });

    let completed = task.completed;
    let text = task.text;

    view! {
        <li class="task-row" class:completed=completed>
            <Show
                when=move || editing.get()
                fallback=move || {
                    let label = text.clone();
                    let seed = text.clone();
                    view! {
                        <input
                            class="task-row__check"
                            type="checkbox"
                            prop:checked=completed
                            on:change=move |_| on_toggle.run(index)
                        />
                        <span class="task-row__text">{label}</span>
                        <button class="btn task-row__edit" on:click=move |_| ui.update(|u| u.start_edit(index, &seed))>
                            "Edit"
                        </button>
                        <button class="btn task-row__delete" on:click=move |_| on_delete.run(index)>
                            "Delete"
                        </button>
                    }
                }
            >
                <input
                    class="task-row__edit-input"
                    type="text"
                    node_ref=edit_ref
                    prop:value=move || ui.with(|u| u.editing.as_ref().map(|s| s.draft.clone()).unwrap_or_default())
                    on:input=move |ev| ui.update(|u| u.set_draft(event_target_value(&ev)))
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| match edit_key(&ev.key()) {
                        Some(EditKey::Save) => {
                            ev.prevent_default();
                            on_save.run(());
                        }
                        Some(EditKey::Cancel) => {
                            ui.update(|u| {
                                u.finish_edit();
                            });
                        }
                        None => {}
                    }
                />
                <button class="btn task-row__save" on:click=move |_| on_save.run(())>
                    "Save"
                </button>
            </Show>
        </li>
    }
}
