use crate::constant::FALLBACK_MESSAGE;
use std::fmt::{Debug, Formatter};

/// Why a lead never reached the `sent` state.
///
/// `Display` is the text shown to the visitor.
#[derive(thiserror::Error)]
pub enum SubmitError {
    // network failure or client-side timeout
    #[error("{}", FALLBACK_MESSAGE)]
    Transport(#[source] reqwest::Error),

    // non-2xx from the intake endpoint
    #[error("{message}")]
    Rejected { status: u16, message: String },

    // 2xx whose body marks the submission as failed
    #[error("{0}")]
    Failed(String),
}

impl SubmitError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, SubmitError::Transport(e) if e.is_timeout())
    }
}

impl Debug for SubmitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        crate::error::error_chain_fmt(self, f)
    }
}
