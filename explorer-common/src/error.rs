use thiserror::Error;

/// Failure taxonomy shared by the validator, dispatcher, and adapters.
///
/// The variant decides the HTTP status the API layer responds with:
/// `Input` → 400, `NotFound` → 404, everything else → 500.
#[derive(Error, Debug)]
pub enum ExplorerError {
    /// Client sent an invalid or incomplete request.
    #[error("{0}")]
    Input(String),

    /// No handler mapped, or a required endpoint is not configured.
    #[error("{0}")]
    NotFound(String),

    /// Upstream call failed in transport or returned a non-2xx status.
    #[error("{0}")]
    Upstream(String),

    #[error("{0}")]
    Unknown(String),
}

impl ExplorerError {
    pub fn input(message: impl Into<String>) -> Self {
        Self::Input(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Upstream signalled failure after a completed exchange.
    pub fn upstream_status(api: &str, status: u16, body: &str) -> Self {
        Self::Upstream(format!("{} returned {}: {}", api, status, body))
    }
}
