//! Route building error types.
//!
//! Every failure aborts the whole route build. Errors raised while fetching
//! a window carry the provider name and the window index so a failed
//! multi-window route can be diagnosed without losing the upstream message.

/// The broad category of a [`RouteError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteErrorKind {
    InvalidRequest,
    Provider,
    NoRouteFound,
    Network,
}

/// Errors from building a route.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RouteError {
    /// Malformed point list or configuration
    #[error("invalid route request: {0}")]
    InvalidRequest(String),

    /// Upstream returned an error status or an error message
    #[error("{provider} error on window {window}: {message}")]
    Provider {
        provider: &'static str,
        window: usize,
        status: Option<u16>,
        message: String,
    },

    /// Upstream succeeded but had no usable path
    #[error("{provider} found no route for window {window}")]
    NoRouteFound {
        provider: &'static str,
        window: usize,
    },

    /// Transport failed before any HTTP reply arrived
    #[error("network error reaching {provider} on window {window}: {message}")]
    Network {
        provider: &'static str,
        window: usize,
        message: String,
    },
}

impl RouteError {
    pub fn kind(&self) -> RouteErrorKind {
        match self {
            RouteError::InvalidRequest(_) => RouteErrorKind::InvalidRequest,
            RouteError::Provider { .. } => RouteErrorKind::Provider,
            RouteError::NoRouteFound { .. } => RouteErrorKind::NoRouteFound,
            RouteError::Network { .. } => RouteErrorKind::Network,
        }
    }

    /// Index of the window that failed, if the failure came from a provider call.
    pub fn window(&self) -> Option<usize> {
        match self {
            RouteError::InvalidRequest(_) => None,
            RouteError::Provider { window, .. }
            | RouteError::NoRouteFound { window, .. }
            | RouteError::Network { window, .. } => Some(*window),
        }
    }
}
