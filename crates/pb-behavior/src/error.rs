use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BehaviorError {
    /// A precondition on the input failed (negative weight, empty recipient…).
    #[error("{behavior}: invalid input: {reason}")]
    Validation {
        behavior: String,
        reason:   String,
    },

    /// The input was valid but the behavior could not complete.
    #[error("{behavior}: {reason}")]
    Failed {
        behavior: String,
        reason:   String,
    },
}

impl BehaviorError {
    pub fn validation(behavior: impl Into<String>, reason: impl Into<String>) -> Self {
        BehaviorError::Validation { behavior: behavior.into(), reason: reason.into() }
    }

    pub fn failed(behavior: impl Into<String>, reason: impl Into<String>) -> Self {
        BehaviorError::Failed { behavior: behavior.into(), reason: reason.into() }
    }

    /// Name of the behavior that raised the error.
    pub fn behavior(&self) -> &str {
        match self {
            BehaviorError::Validation { behavior, .. } | BehaviorError::Failed { behavior, .. } => {
                behavior
            }
        }
    }
}

pub type BehaviorResult<T> = Result<T, BehaviorError>;
