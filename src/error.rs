use thiserror::Error;

/// Invalid values supplied by whoever configures the application.
/// These are the caller's responsibility and are never recovered inside a fetch cycle.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Resource locator is empty")]
    EmptyLocator,

    #[error("Resource locator must start with '/': {0:?}")]
    UnrootedLocator(String),

    #[error("Resource locator must not contain whitespace: {0:?}")]
    WhitespaceInLocator(String),

    #[error("API base must be an http(s) URL or empty: {0:?}")]
    InvalidApiBase(String),

    #[error("Request timeout must be a positive number of milliseconds")]
    ZeroTimeout,

    #[error("Request timeout is not a valid number of milliseconds: {0:?}")]
    InvalidTimeout(String),
}

/// Why a fetch cycle ended in `Failed`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Network error: {message}")]
    Network { message: String },

    #[error("Request timed out after {timeout_ms} ms")]
    Timeout { timeout_ms: u32 },

    #[error("{}", describe_status(.status, .reason))]
    Status { status: u16, reason: String },

    #[error("Could not parse response body: {message}")]
    Parse { message: String },
}

/// Coarse classification shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The request never produced an acceptable response
    Transport,
    /// A response arrived but its body was not the expected data
    Parse,
}

impl FailureKind {
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Transport => "error-transport",
            Self::Parse => "error-parse",
        }
    }
}

impl FetchError {
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// HTTP status of the response, when one was received
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Network { .. } | Self::Timeout { .. } | Self::Parse { .. } => None,
        }
    }

    pub const fn kind(&self) -> FailureKind {
        match self {
            Self::Network { .. } | Self::Timeout { .. } | Self::Status { .. } => {
                FailureKind::Transport
            }
            Self::Parse { .. } => FailureKind::Parse,
        }
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn describe_status(status: &u16, reason: &str) -> String {
    let summary = match status {
        500..=599 => "Server failure",
        400..=499 => "Request rejected",
        _ => "Unexpected response",
    };

    if reason.is_empty() {
        format!("{summary}: HTTP {status}")
    } else {
        format!("{summary}: HTTP {status} {reason}")
    }
}
