//! Project Tracker App
//!
//! Root component: header, project grid and the creation dialog.

use leptos::prelude::*;
use project_store::{ProjectBoard, SlotRepository};

use crate::components::{AppHeader, NewProjectDialog, ProjectGrid};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::storage::BrowserStorage;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let repo = SlotRepository::from_config(BrowserStorage::probe(), &config.store);

    // Board starts empty; nothing is written until hydrated
    let ctx = AppContext::new(ProjectBoard::new(repo));
    provide_context(ctx);

    // Hydrate once on mount
    Effect::new(move |_| {
        ctx.hydrate();
    });

    view! {
        <div class="app-layout">
            <AppHeader />
            <ProjectGrid />
            <NewProjectDialog />
        </div>
    }
}
