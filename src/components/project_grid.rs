//! Project Grid Component
//!
//! All projects in stored order; the one under edit renders as an editor.

use leptos::prelude::*;
use project_store::Project;

use crate::components::{ProjectCard, ProjectEditor};
use crate::context::AppContext;

#[component]
pub fn ProjectGrid() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <section class="project-grid">
            <For
                each=move || ctx.projects()
                // Editable fields are part of the key so a saved edit re-renders the card
                key=|project: &Project| {
                    (
                        project.id().clone(),
                        project.title().to_string(),
                        project.description().to_string(),
                    )
                }
                children=move |project: Project| {
                    let id = project.id().clone();
                    view! {
                        <Show
                            when=move || ctx.is_editing(&id)
                            fallback=move || view! { <ProjectCard project=project.clone() /> }
                        >
                            <ProjectEditor />
                        </Show>
                    }
                }
            />
        </section>
    }
}
