//! Project Editor Component
//!
//! Inline editor shown in place of the card being edited.

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn ProjectEditor() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let title = move || {
        ctx.with(|board| board.edit_session().map(|s| s.title.clone()).unwrap_or_default())
    };
    let description = move || {
        ctx.with(|board| board.edit_session().map(|s| s.description.clone()).unwrap_or_default())
    };

    view! {
        <div class="project-card editing">
            <input
                type="text"
                class="input input-sm"
                autofocus=true
                prop:value=title
                on:input=move |ev| ctx.set_edit_title(event_target_value(&ev))
            />
            <textarea
                rows="3"
                class="input input-sm input-multiline"
                prop:value=description
                on:input=move |ev| ctx.set_edit_description(event_target_value(&ev))
            ></textarea>
            <div class="card-actions">
                <button
                    type="button"
                    class="btn btn-sm btn-primary"
                    on:click=move |_| ctx.save_edit()
                >
                    "Zapisz"
                </button>
                <button
                    type="button"
                    class="btn btn-sm btn-ghost"
                    on:click=move |_| ctx.cancel_edit()
                >
                    "Anuluj"
                </button>
            </div>
        </div>
    }
}
