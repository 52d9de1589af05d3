//! New Project Dialog Component
//!
//! Modal form for creating a project.

use leptos::html::Dialog;
use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn NewProjectDialog() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let dialog_ref = NodeRef::<Dialog>::new();

    let is_open = move || ctx.with(|board| board.create_dialog().open);
    let title = move || ctx.with(|board| board.create_dialog().title.clone());
    let description = move || ctx.with(|board| board.create_dialog().description.clone());

    // Keep the native dialog in step with the board
    Effect::new(move |_| {
        let open = is_open();
        if let Some(dialog) = dialog_ref.get() {
            if open && !dialog.open() {
                if let Err(e) = dialog.show_modal() {
                    log::warn!("[DIALOG] showModal failed: {:?}", e);
                }
            } else if !open && dialog.open() {
                dialog.close();
            }
        }
    });

    view! {
        <dialog
            class="new-project-dialog"
            node_ref=dialog_ref
            on:cancel=move |_: web_sys::Event| ctx.close_create_dialog()
        >
            <h2 class="dialog-title">"Nowy projekt"</h2>
            <div class="dialog-body">
                <input
                    type="text"
                    class="input"
                    placeholder="Tytuł projektu"
                    prop:value=title
                    on:input=move |ev| ctx.set_create_title(event_target_value(&ev))
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ctx.submit_create();
                        }
                    }
                />
                <textarea
                    rows="3"
                    class="input input-multiline"
                    placeholder="Opis"
                    prop:value=description
                    on:input=move |ev| ctx.set_create_description(event_target_value(&ev))
                ></textarea>
                <div class="dialog-actions">
                    <button
                        type="button"
                        class="btn btn-sm btn-ghost"
                        on:click=move |_| ctx.close_create_dialog()
                    >
                        "Anuluj"
                    </button>
                    <button
                        type="button"
                        class="btn btn-sm btn-primary"
                        on:click=move |_| ctx.submit_create()
                    >
                        "Dodaj"
                    </button>
                </div>
            </div>
        </dialog>
    }
}
