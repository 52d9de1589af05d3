//! Project Card Component
//!
//! Read-only card for a single project.

use leptos::prelude::*;
use project_store::Project;

use crate::context::AppContext;

#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let id = project.id().clone();
    let edit_id = id.clone();
    let title = project.title().to_string();
    let description = project.description().to_string();

    view! {
        <div class="project-card">
            <h2 class="project-title">{title}</h2>
            {(!description.is_empty()).then(|| view! {
                <p class="project-description">{description}</p>
            })}
            <div class="card-actions">
                <button
                    type="button"
                    class="btn btn-sm btn-ghost"
                    on:click=move |_| ctx.start_edit(&edit_id)
                >
                    "Edytuj"
                </button>
                <button
                    type="button"
                    class="btn btn-sm btn-danger"
                    on:click=move |_| ctx.delete(&id)
                >
                    "Usuń"
                </button>
            </div>
        </div>
    }
}
