use std::cell::Cell;
use std::rc::Rc;

use gloo_net::http::Request;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::AbortController;

use crate::error::FetchError;
use crate::fetch::{RawResponse, Transport};

/// `fetch()`-backed transport. Requests still outstanding after
/// `timeout_ms` are aborted and reported as [`FetchError::Timeout`].
#[derive(Debug, Clone, Copy)]
pub struct BrowserTransport {
    timeout_ms: u32,
}

impl BrowserTransport {
    pub const fn new(timeout_ms: u32) -> Self {
        Self { timeout_ms }
    }
}

impl Transport for BrowserTransport {
    async fn get(&self, url: &str) -> Result<RawResponse, FetchError> {
        let controller =
            AbortController::new().map_err(|e| FetchError::network(format!("{e:?}")))?;
        let timed_out = Rc::new(Cell::new(false));

        let on_timeout: Closure<dyn FnMut()> = Closure::new({
            let controller = controller.clone();
            let timed_out = Rc::clone(&timed_out);
            move || {
                timed_out.set(true);
                controller.abort();
            }
        });

        let window = web_sys::window();
        let timeout_handle = window.as_ref().and_then(|w| {
            w.set_timeout_with_callback_and_timeout_and_arguments_0(
                on_timeout.as_ref().unchecked_ref(),
                i32::try_from(self.timeout_ms).unwrap_or(i32::MAX),
            )
            .ok()
        });

        let signal = controller.signal();
        let result = match Request::get(url).abort_signal(Some(&signal)).send().await {
            Ok(response) => {
                let status = response.status();
                let status_text = response.status_text();
                response.text().await.map(|body| RawResponse {
                    status,
                    status_text,
                    body,
                })
            }
            Err(e) => Err(e),
        };

        // Disarm before the closure is dropped
        if let (Some(window), Some(handle)) = (window, timeout_handle) {
            window.clear_timeout_with_handle(handle);
        }
        drop(on_timeout);

        result.map_err(|e| {
            if timed_out.get() {
                FetchError::Timeout {
                    timeout_ms: self.timeout_ms,
                }
            } else {
                FetchError::network(e.to_string())
            }
        })
    }
}
