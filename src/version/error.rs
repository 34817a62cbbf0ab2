use std::time::Duration;

use thiserror::Error;

/// Failure of a single request through [`HttpClient`](crate::version::client::HttpClient)
#[derive(Debug, Error)]
pub enum HttpError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Unexpected status: {0}")]
    Status(u16),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure of one stage of the update check.
///
/// `message` is the localized user-facing text; the underlying cause is kept
/// for diagnostics.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Local version marker unreachable or not successful
    #[error("{message}")]
    Local {
        message: String,
        #[source]
        source: HttpError,
    },

    /// Proxy mirror unreachable or not successful
    #[error("{message}")]
    Proxy {
        message: String,
        #[source]
        source: HttpError,
    },

    /// Proxy mirror did not answer within the timeout
    #[error("{message}")]
    ProxyTimeout { message: String, timeout: Duration },

    /// Direct source unreachable or not successful
    #[error("{message}")]
    Direct {
        message: String,
        #[source]
        source: HttpError,
    },

    /// Both remote paths failed
    #[error("{message}")]
    Aggregate {
        message: String,
        proxy: Box<FetchError>,
        #[source]
        direct: Box<FetchError>,
    },
}

impl FetchError {
    /// Full diagnostic text including underlying causes
    pub fn detail(&self) -> String {
        match self {
            FetchError::Local { message, source }
            | FetchError::Proxy { message, source }
            | FetchError::Direct { message, source } => format!("{message} ({source})"),
            FetchError::ProxyTimeout { message, timeout } => {
                format!("{message} ({} ms)", timeout.as_millis())
            }
            FetchError::Aggregate {
                message,
                proxy,
                direct,
            } => format!(
                "{message} (proxy: {}; direct: {})",
                proxy.detail(),
                direct.detail()
            ),
        }
    }
}
