//! Light/dark theme toggle button.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::storage::LocalStorage;
use crate::util::theme;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <button
            class="btn theme-toggle"
            on:click=move |_| {
                let current = ui.with_untracked(|u| u.dark_mode);
                let next = theme::toggle(&LocalStorage, current);
                ui.update(|u| u.dark_mode = next);
            }
            title="Toggle dark mode"
        >
            {move || if ui.with(|u| u.dark_mode) { "🌞 Light Mode" } else { "🌙 Dark Mode" }}
        </button>
    }
}
