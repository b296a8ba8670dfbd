pub mod browser;
pub mod controller;
pub mod cycle;
pub mod hook;
pub mod transport;

pub use browser::BrowserTransport;
pub use controller::{FetchController, StateSink};
pub use cycle::{CycleToken, CycleTracker};
pub use hook::{use_fetch, use_fetch_with};
pub use transport::{decode_response, RawResponse, Transport};
