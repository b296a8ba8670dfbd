use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::{ErrorPanel, NotFound, ResourceFetch};
use crate::config::AppConfig;
use crate::models::Locator;

/// Collection shown on the root route
pub const LECTURE_MATERIALS: &str = "/lecture-materials";

/// Root application component: loads configuration into context and routes
/// `/` to the lecture materials list.
#[component]
pub fn App() -> impl IntoView {
    provide_context(AppConfig::load());

    view! {
        <main class="app">
            <Router>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=LectureMaterialsPage />
                </Routes>
            </Router>
        </main>
    }
}

#[component]
fn LectureMaterialsPage() -> impl IntoView {
    match Locator::new(LECTURE_MATERIALS) {
        Ok(locator) => view! { <ResourceFetch locator=locator /> }.into_any(),
        Err(e) => {
            log::error!("Misconfigured route: {e}");
            view! { <ErrorPanel message=e.to_string() /> }.into_any()
        }
    }
}
