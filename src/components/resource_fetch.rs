use leptos::prelude::*;

use crate::components::{ErrorPanel, LoadingIndicator, RecordList};
use crate::fetch::use_fetch;
use crate::models::{FetchState, FetchView, LectureMaterial, Locator};

/// Fetches the collection at `locator` and shows it as a list, a loading
/// indicator, or an error, depending on where the current fetch cycle is.
#[component]
pub fn ResourceFetch(#[prop(into)] locator: Signal<Locator>) -> impl IntoView {
    let state = use_fetch::<Vec<LectureMaterial>>(locator);

    // Memo only notifies when the derived view actually differs
    let current = Memo::new(move |_| state.with(|state: &FetchState<_>| state.view()));

    view! {
        <section class="resource-fetch">
            {move || render(current.get())}
        </section>
    }
}

fn render(current: FetchView) -> AnyView {
    match current {
        FetchView::Loading => view! { <LoadingIndicator /> }.into_any(),
        FetchView::List(entries) => view! { <RecordList entries=entries /> }.into_any(),
        FetchView::Error { message, kind } => {
            view! { <ErrorPanel message=message kind=kind /> }.into_any()
        }
    }
}
