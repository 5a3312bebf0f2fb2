use thiserror::Error;

/// Errors returned by report lifecycle transitions.
///
/// These map one-to-one onto the error kinds the API surfaces: a transition
/// attempted from the wrong phase is `InvalidState`; a guard failing on an
/// otherwise-valid transition is `PreconditionFailed`.
#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error("invalid state: {0}")]
    InvalidState(String),

    #[error("precondition failed: {0}")]
    PreconditionFailed(String),
}
