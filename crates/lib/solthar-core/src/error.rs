use std::{error::Error, fmt};

/// Structured failure for a remote service call.
///
/// Variants distinguish the cause for logging and diagnosis; the MCP layer
/// normalizes all of them into a single tool-execution failure.
#[derive(Debug)]
pub enum ClientError {
    /// Required base URL or API key missing from the endpoint configuration.
    Configuration(String),
    /// Malformed or missing request field, or an unreadable file path.
    Validation(String),
    /// The remote host could not be reached, or the request timed out.
    Connectivity(String),
    /// The remote responded with a non-2xx status.
    Application {
        status: Option<u16>,
        message: String,
    },
    /// The remote response was not valid JSON where JSON was expected.
    Decode(String),
}

impl ClientError {
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Configuration(_) => "configuration",
            Self::Validation(_) => "validation",
            Self::Connectivity(_) => "connectivity",
            Self::Application { .. } => "application",
            Self::Decode(_) => "decode",
        }
    }

    /// Classifies a request-send failure as a connectivity error.
    pub(crate) fn transport(context: &str, err: &reqwest::Error) -> Self {
        let cause = if err.is_timeout() {
            "request timed out"
        } else if err.is_connect() {
            "connection failed"
        } else {
            "network error"
        };
        Self::Connectivity(format!("{context}: {cause}"))
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration(message)
            | Self::Validation(message)
            | Self::Connectivity(message)
            | Self::Decode(message)
            | Self::Application { message, .. } => write!(f, "{message}"),
        }
    }
}

impl Error for ClientError {}
