//! Error types for parsing user-supplied panel settings.
//!
//! Panel operations themselves never fail: invalid input is ignored and the
//! state is left as it was. Errors only arise when turning a name typed on
//! the command line into one of the fixed option sets.

use thiserror::Error;

/// Errors that can occur while parsing companion settings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CompanionError {
    /// Likelihood label not in the fixed set.
    #[error("invalid likelihood: {0}")]
    InvalidLikelihood(String),

    /// Panel name not recognised.
    #[error("unknown panel: {0}")]
    UnknownPanel(String),
}
