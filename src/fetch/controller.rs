use std::future::Future;
use std::marker::PhantomData;
use std::rc::Rc;

use leptos::prelude::*;
use serde::de::DeserializeOwned;

use crate::fetch::{decode_response, CycleTracker, Transport};
use crate::models::FetchState;

/// Where a controller publishes state transitions.
pub trait StateSink<T> {
    fn replace(&self, state: FetchState<T>);
}

impl<T: Send + Sync + 'static> StateSink<T> for RwSignal<FetchState<T>> {
    fn replace(&self, state: FetchState<T>) {
        self.set(state);
    }
}

/// Drives fetch cycles for one component instance.
///
/// Each [`start`](Self::start) opens a new cycle and hands back the future that
/// performs the retrieval. Only the most recently started, not-cancelled cycle
/// can publish a terminal state; anything else settling later is dropped.
pub struct FetchController<T, Tr, S> {
    transport: Rc<Tr>,
    cycles: Rc<CycleTracker>,
    sink: S,
    payload: PhantomData<fn() -> T>,
}

impl<T, Tr, S: Clone> Clone for FetchController<T, Tr, S> {
    fn clone(&self) -> Self {
        Self {
            transport: Rc::clone(&self.transport),
            cycles: Rc::clone(&self.cycles),
            sink: self.sink.clone(),
            payload: PhantomData,
        }
    }
}

impl<T, Tr, S> FetchController<T, Tr, S>
where
    T: DeserializeOwned + 'static,
    Tr: Transport + 'static,
    S: StateSink<T> + Clone + 'static,
{
    pub fn new(transport: Tr, sink: S) -> Self {
        Self {
            transport: Rc::new(transport),
            cycles: Rc::new(CycleTracker::new()),
            sink,
            payload: PhantomData,
        }
    }

    /// Begin a cycle against `url`. `Pending` is published before this returns;
    /// the terminal state is published when the returned future completes.
    #[allow(clippy::future_not_send)]
    pub fn start(&self, url: String) -> impl Future<Output = ()> + 'static {
        let token = self.cycles.begin();
        log::debug!("fetch cycle {} started for {url}", token.get());
        self.sink.replace(FetchState::Pending);

        let this = self.clone();
        async move {
            let next: FetchState<T> = match this
                .transport
                .get(&url)
                .await
                .and_then(|raw| decode_response(&raw))
            {
                Ok(payload) => FetchState::Succeeded(payload),
                Err(e) => FetchState::Failed(e),
            };

            if this.cycles.is_current(token) {
                match &next {
                    FetchState::Failed(e) => {
                        log::warn!("fetch cycle {} for {url} failed: {e}", token.get());
                    }
                    _ => log::debug!("fetch cycle {} for {url} {}", token.get(), next.label()),
                }
                this.sink.replace(next);
            } else {
                log::debug!(
                    "discarding stale {} result of fetch cycle {} for {url}",
                    next.label(),
                    token.get()
                );
            }
        }
    }

    /// Stop the active cycle from publishing anything further
    pub fn cancel(&self) {
        self.cycles.invalidate();
    }
}
