use crate::error::{FailureKind, FetchError};
use crate::models::ListItem;

/// Lifecycle of one fetch cycle. Exactly one variant is active at a time and a
/// cycle only moves forward: `Idle -> Pending -> Succeeded | Failed`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchState<T> {
    /// No request issued yet
    #[default]
    Idle,
    /// Request issued, awaiting response
    Pending,
    /// Response received and parsed
    Succeeded(T),
    /// Request failed or the response was not acceptable
    Failed(FetchError),
}

impl<T> FetchState<T> {
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded(_) | Self::Failed(_))
    }

    pub const fn payload(&self) -> Option<&T> {
        match self {
            Self::Succeeded(payload) => Some(payload),
            _ => None,
        }
    }

    pub const fn error(&self) -> Option<&FetchError> {
        match self {
            Self::Failed(error) => Some(error),
            _ => None,
        }
    }

    /// Short name for log lines
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Pending => "pending",
            Self::Succeeded(_) => "succeeded",
            Self::Failed(_) => "failed",
        }
    }
}

impl<T: ListItem> FetchState<Vec<T>> {
    /// Derive what should be on screen. Pure: equal states give equal views.
    pub fn view(&self) -> FetchView {
        match self {
            Self::Idle | Self::Pending => FetchView::Loading,
            Self::Succeeded(items) => FetchView::List(
                items
                    .iter()
                    .map(|item| ListEntry {
                        key: item.item_key(),
                        label: item.label(),
                    })
                    .collect(),
            ),
            Self::Failed(error) => FetchView::Error {
                message: error.to_string(),
                kind: error.kind(),
            },
        }
    }
}

/// One rendered list row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    pub key: String,
    pub label: String,
}

/// The three mutually exclusive things the fetch component can show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchView {
    Loading,
    List(Vec<ListEntry>),
    Error { message: String, kind: FailureKind },
}
