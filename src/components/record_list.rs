use leptos::prelude::*;

use crate::models::ListEntry;

/// Shown when a fetch succeeded with an empty collection
pub const EMPTY_MESSAGE: &str = "No lecture materials found.";

/// Renders fetched records in payload order.
#[component]
pub fn RecordList(entries: Vec<ListEntry>) -> impl IntoView {
    if entries.is_empty() {
        return view! { <p class="record-list-empty">{EMPTY_MESSAGE}</p> }.into_any();
    }

    view! {
        <ul class="record-list">
            {entries
                .into_iter()
                .map(|entry| {
                    view! {
                        <li class="record" data-key=entry.key>
                            {entry.label}
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
    .into_any()
}
