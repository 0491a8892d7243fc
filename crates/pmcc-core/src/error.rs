//! Error taxonomy for the simulation core.
//!
//! Only caller errors exist here. A bootstrap draw with zero variance is not
//! an error: it produces a NaN correlation value that the aggregation layer
//! handles through its documented policy (see [`crate::threshold`]).

use thiserror::Error;

/// Errors produced by the simulation core.
#[derive(Debug, Error)]
pub enum SimError {
    /// A caller-supplied parameter is out of its valid domain. Never
    /// retriable; surfaced immediately to the caller.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        /// Parameter name as the caller knows it.
        name: &'static str,
        /// Human-readable constraint violation.
        reason: String,
    },
}

impl SimError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}
