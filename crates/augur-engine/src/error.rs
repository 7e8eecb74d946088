//! Error types for the divination engine.

use thiserror::Error;

/// Result type for dispatch operations.
pub type EngineResult<T> = Result<T, DispatchError>;

/// Errors that can occur while dispatching a divination request.
///
/// None of these are fatal; every variant maps to a user-facing message and
/// leaves the cooldown state unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// The caller has no user identity to rate-limit or respond to.
    #[error("only players can request a divination")]
    NotEligible,

    /// The query was blank after sanitization.
    #[error("the question must not be empty")]
    EmptyQuery,

    /// The caller is still inside the cooldown window.
    #[error("on cooldown, retry in {remaining_secs} seconds")]
    OnCooldown {
        /// Whole seconds until the window reopens.
        remaining_secs: u64,
    },
}
