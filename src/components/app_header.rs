//! App Header Component
//!
//! Page title and the button opening the creation dialog.

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn AppHeader() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <header class="app-header">
            <h1 class="app-title">"Project Manager"</h1>
            <button
                type="button"
                class="btn btn-add"
                on:click=move |_| ctx.open_create_dialog()
            >
                "Dodaj projekt"
            </button>
        </header>
        <div class="app-divider"></div>
    }
}
