//! To-do page: theme toggle, new-task input, filter bar, and the task list.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page owns backend orchestration. With the local backend it mutates
//! `TasksState` directly and an effect mirrors every change into
//! `localStorage`. With the remote backend each action issues one REST call
//! and applies the server's answer; failures are logged and otherwise
//! ignored; a failed update re-renders the list so controls the browser
//! already flipped show the unchanged state again.

#[cfg(test)]
#[path = "todo_test.rs"]
mod todo_test;

use leptos::prelude::*;

use crate::components::filter_bar::FilterBar;
use crate::components::task_input::TaskInput;
use crate::components::task_row::TaskRow;
use crate::components::theme_toggle::ThemeToggle;
use crate::config::{Backend, ClientConfig};
use crate::net::api::ApiError;
use crate::net::types::Task;
use crate::state::tasks::{TasksState, is_blank};
use crate::state::ui::UiState;
use crate::util::storage::{self, KeyValueStore, LocalStorage};
use crate::util::theme;

/// The single application screen.
#[component]
pub fn TodoPage() -> impl IntoView {
    let tasks = expect_context::<RwSignal<TasksState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let config = expect_context::<StoredValue<ClientConfig>>();

    // Restore the saved theme once mounted.
    Effect::new(move || restore_theme(ui, &LocalStorage));

    Effect::new(move || load_tasks(tasks, &config.get_value(), &LocalStorage));

    Effect::new(move || persist_tasks(tasks, &config.get_value(), &LocalStorage));

    let filter = Memo::new(move |_| ui.with(|u| u.filter));

    let on_add = Callback::new(move |()| add_task(tasks, ui, &config.get_value()));
    let on_toggle = Callback::new(move |index: usize| toggle_task(tasks, &config.get_value(), index));
    let on_delete = Callback::new(move |index: usize| delete_task(tasks, ui, &config.get_value(), index));
    let on_save = Callback::new(move |()| save_edit(tasks, ui, &config.get_value()));

    view! {
        <div class="container">
            <h1>"TODO App"</h1>
            <ThemeToggle/>
            <TaskInput on_add=on_add/>
            <FilterBar/>
            <ul class="task-list">
                {move || {
                    tasks
                        .with(|state| state.visible(filter.get()))
                        .into_iter()
                        .map(|(index, task)| {
                            view! {
                                <TaskRow
                                    index=index
                                    task=task
                                    on_toggle=on_toggle
                                    on_delete=on_delete
                                    on_save=on_save
                                />
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </ul>
        </div>
    }
}

fn restore_theme(ui: RwSignal<UiState>, store: &impl KeyValueStore) {
    let dark = theme::read_preference(store);
    theme::apply(dark);
    ui.update(|u| u.dark_mode = dark);
}

fn load_tasks(tasks: RwSignal<TasksState>, config: &ClientConfig, store: &impl KeyValueStore) {
    match config.backend {
        Backend::Local => {
            let items = storage::load_tasks(store);
            leptos::logging::log!("restored {} tasks from storage", items.len());
            tasks.update(|s| s.replace_all(items));
        }
        Backend::Remote => {
            #[cfg(feature = "hydrate")]
            {
                let base = config.api_base.clone();
                leptos::task::spawn_local(async move {
                    match crate::net::api::fetch_tasks(&base).await {
                        Ok(items) => tasks.update(|s| s.replace_all(items)),
                        Err(e) => leptos::logging::warn!("task list fetch failed: {e}"),
                    }
                });
            }
        }
    }
}

/// Mirror local tasks into storage, but never before the initial load.
fn persist_tasks(tasks: RwSignal<TasksState>, config: &ClientConfig, store: &impl KeyValueStore) {
    if config.backend != Backend::Local {
        return;
    }
    tasks.with(|state| {
        if state.loaded {
            storage::save_tasks(store, &state.items);
        }
    });
}

fn add_task(tasks: RwSignal<TasksState>, ui: RwSignal<UiState>, config: &ClientConfig) {
    if ui.with_untracked(|u| is_blank(&u.new_task)) {
        return;
    }
    let text = ui.try_update(UiState::take_new_task).unwrap_or_default();
    match config.backend {
        Backend::Local => {
            tasks.update(|s| {
                s.add(&text);
            });
        }
        Backend::Remote => {
            #[cfg(feature = "hydrate")]
            {
                let base = config.api_base.clone();
                leptos::task::spawn_local(async move {
                    match crate::net::api::create_task(&base, &text).await {
                        Ok(task) => tasks.update(|s| s.push(task)),
                        Err(e) => leptos::logging::warn!("task create failed: {e}"),
                    }
                });
            }
        }
    }
}

fn toggle_task(tasks: RwSignal<TasksState>, config: &ClientConfig, index: usize) {
    match config.backend {
        Backend::Local => {
            tasks.update(|s| {
                s.toggle(index);
            });
        }
        Backend::Remote => {
            if let Some(next) = tasks.with_untracked(|s| s.toggled(index)) {
                send_update(tasks, config, next);
            }
        }
    }
}

fn save_edit(tasks: RwSignal<TasksState>, ui: RwSignal<UiState>, config: &ClientConfig) {
    let Some(session) = ui.try_update(UiState::finish_edit).flatten() else {
        return;
    };
    match config.backend {
        Backend::Local => {
            tasks.update(|s| {
                s.set_text(session.index, &session.draft);
            });
        }
        Backend::Remote => {
            if let Some(next) = tasks.with_untracked(|s| s.retitled(session.index, &session.draft)) {
                send_update(tasks, config, next);
            }
        }
    }
}

fn delete_task(tasks: RwSignal<TasksState>, ui: RwSignal<UiState>, config: &ClientConfig, index: usize) {
    match config.backend {
        Backend::Local => {
            if tasks.try_update(|s| s.remove(index)).flatten().is_some() {
                ui.update(|u| u.forget_row(index));
            }
        }
        Backend::Remote => {
            let Some(id) = tasks.with_untracked(|s| s.items.get(index).and_then(|t| t.id.clone())) else {
                leptos::logging::warn!("task delete skipped: row {index} has no server id");
                return;
            };
            #[cfg(feature = "hydrate")]
            {
                let base = config.api_base.clone();
                leptos::task::spawn_local(async move {
                    match crate::net::api::delete_task(&base, &id).await {
                        Ok(()) => {
                            if let Some((removed_at, _)) = tasks.try_update(|s| s.remove_by_id(&id)).flatten() {
                                ui.update(|u| u.forget_row(removed_at));
                            }
                        }
                        Err(e) => leptos::logging::warn!("task delete failed: {e}"),
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (id, ui);
            }
        }
    }
}

/// `PUT` a changed task and swap in the server's copy by id.
fn send_update(tasks: RwSignal<TasksState>, config: &ClientConfig, next: Task) {
    #[cfg(feature = "hydrate")]
    {
        let base = config.api_base.clone();
        leptos::task::spawn_local(async move {
            settle_update(tasks, crate::net::api::update_task(&base, &next).await);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, next);
        settle_update(tasks, Err(ApiError::Unavailable));
    }
}

/// Apply the answer to a `PUT`. On failure the list keeps its state but is
/// re-rendered, since a checkbox click has already flipped the DOM.
fn settle_update(tasks: RwSignal<TasksState>, result: Result<Task, ApiError>) {
    match result {
        Ok(updated) => {
            tasks.update(|s| {
                s.replace_by_id(updated);
            });
        }
        Err(e) => {
            leptos::logging::warn!("task update failed: {e}");
            tasks.notify();
        }
    }
}
