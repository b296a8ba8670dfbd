pub mod error_panel;
pub mod loading_indicator;
pub mod not_found;
pub mod record_list;
pub mod resource_fetch;

pub use error_panel::ErrorPanel;
pub use loading_indicator::LoadingIndicator;
pub use not_found::NotFound;
pub use record_list::RecordList;
pub use resource_fetch::ResourceFetch;
