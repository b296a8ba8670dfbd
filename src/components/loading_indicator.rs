use leptos::prelude::*;

/// Shown while a fetch cycle has not settled.
#[component]
pub fn LoadingIndicator() -> impl IntoView {
    view! {
        <div class="loading-indicator" role="status" aria-live="polite">
            <span class="spinner"></span>
            <span class="loading-text">"Loading…"</span>
        </div>
    }
}
