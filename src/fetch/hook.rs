use leptos::prelude::*;
use leptos::task::spawn_local;
use send_wrapper::SendWrapper;
use serde::de::DeserializeOwned;

use crate::config::AppConfig;
use crate::fetch::{BrowserTransport, FetchController, Transport};
use crate::models::{FetchState, Locator};

/// Fetch `locator` from the configured API and track the outcome.
///
/// A cycle starts on mount and again whenever the locator value changes;
/// setting the same locator again does not re-fetch. When the owning
/// component is cleaned up, any outstanding cycle is cancelled.
pub fn use_fetch<T>(locator: Signal<Locator>) -> ReadSignal<FetchState<T>>
where
    T: DeserializeOwned + Send + Sync + 'static,
{
    let config = use_context::<AppConfig>().unwrap_or_default();
    let state = RwSignal::new(FetchState::<T>::Idle);
    use_fetch_with(BrowserTransport::new(config.request_timeout_ms), locator, state);
    state.read_only()
}

/// Same as [`use_fetch`], over any transport and publishing into `state`.
pub fn use_fetch_with<T, Tr>(
    transport: Tr,
    locator: Signal<Locator>,
    state: RwSignal<FetchState<T>>,
) where
    T: DeserializeOwned + Send + Sync + 'static,
    Tr: Transport + 'static,
{
    let config = use_context::<AppConfig>().unwrap_or_default();
    let controller = FetchController::<T, Tr, _>::new(transport, state);

    Effect::new({
        let controller = controller.clone();
        move |previous: Option<Locator>| {
            let current = locator.get();
            if previous.as_ref() != Some(&current) {
                spawn_local(controller.start(config.resolve(&current)));
            }
            current
        }
    });

    // on_cleanup needs Send; the controller only ever lives on the UI thread
    let controller = SendWrapper::new(controller);
    on_cleanup(move || controller.cancel());
}
