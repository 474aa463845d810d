//! Hook error types.
//!
//! None of the built-in hooks can fail; `HookError` exists so third-party
//! [`LifecycleHooks`](crate::hooks::LifecycleHooks) implementations can signal
//! failure. Bindings carry the error to the host verbatim, with no local
//! recovery.

use crate::hooks::HookStage;
use thiserror::Error;

/// Error raised by a lifecycle hook implementation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HookError {
    /// A hook implementation failed.
    #[error("{stage} hook failed: {message}")]
    Failed {
        /// Stage at which the hook ran.
        stage: HookStage,
        /// Message propagated unchanged to the host.
        message: String,
    },
}

impl HookError {
    /// Create a failure for the given stage.
    pub fn failed(stage: HookStage, message: impl Into<String>) -> Self {
        Self::Failed {
            stage,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_stage() {
        let err = HookError::failed(HookStage::WillParse, "boom");
        assert_eq!(err.to_string(), "will-parse hook failed: boom");
    }
}
