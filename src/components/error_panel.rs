use leptos::prelude::*;

use crate::error::FailureKind;

/// Displays why a fetch failed. No partial content is rendered alongside it.
#[component]
pub fn ErrorPanel(message: String, #[prop(optional)] kind: Option<FailureKind>) -> impl IntoView {
    let class = kind.map_or_else(
        || "error-panel".to_string(),
        |kind| format!("error-panel {}", kind.css_class()),
    );

    view! {
        <div class=class role="alert">
            <span class="error-icon">"⚠️"</span>
            <span class="error-message">{message}</span>
        </div>
    }
}
