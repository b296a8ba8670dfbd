use leptos::prelude::*;

/// Fallback for any path other than the root.
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"Page not found"</p>
            <a href="/">"Back to lecture materials"</a>
        </div>
    }
}
