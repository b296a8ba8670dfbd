pub mod fetch_state;
pub mod lecture_material;
pub mod locator;

pub use fetch_state::{FetchState, FetchView, ListEntry};
pub use lecture_material::{LectureMaterial, ListItem, RecordId};
pub use locator::Locator;
