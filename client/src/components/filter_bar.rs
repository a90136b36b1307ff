//! Filter buttons (All / Completed / Pending).

use leptos::prelude::*;

use crate::state::filter::Filter;
use crate::state::ui::UiState;

#[component]
pub fn FilterBar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <div class="filter-section">
            {Filter::ALL
                .into_iter()
                .map(|filter| {
                    view! {
                        <button
                            class="btn filter-section__option"
                            class:filter-section__option--active=move || ui.with(|u| u.filter == filter)
                            data-filter=filter.as_str()
                            on:click=move |_| ui.update(|u| u.filter = filter)
                        >
                            {filter.label()}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
