//! New-task input with its "Add Task" button.

use leptos::prelude::*;

use crate::state::ui::UiState;

/// Text box bound to `UiState::new_task`. Enter or the button submits.
#[component]
pub fn TaskInput(on_add: Callback<()>) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <div class="input-section">
            <input
                class="input-section__text"
                type="text"
                placeholder="Add a new task..."
                prop:value=move || ui.with(|u| u.new_task.clone())
                on:input=move |ev| ui.update(|u| u.new_task = event_target_value(&ev))
                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        ev.prevent_default();
                        on_add.run(());
                    }
                }
            />
            <button class="btn input-section__add" on:click=move |_| on_add.run(())>
                "Add Task"
            </button>
        </div>
    }
}
