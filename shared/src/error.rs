use std::fmt;

use thiserror::Error;

use crate::shared_wheel_game::SpinState;

/// Engine operations that are only legal in some states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    RequestSpin,
    Settle,
    AcknowledgeAndRemove,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::RequestSpin => "spin",
            Self::Settle => "settle",
            Self::AcknowledgeAndRemove => "remove the winner",
        };
        f.write_str(name)
    }
}

/// Caller bugs surfaced by the engine. Neither kind is retryable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WheelError {
    #[error("cannot {operation} while the wheel is {state}")]
    InvalidState { operation: Operation, state: SpinState },
    #[error("cannot spin a wheel with no entries")]
    EmptyPool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = WheelError::InvalidState {
            operation: Operation::RequestSpin,
            state: SpinState::Spinning,
        };
        assert_eq!(err.to_string(), "cannot spin while the wheel is spinning");
        assert_eq!(WheelError::EmptyPool.to_string(), "cannot spin a wheel with no entries");
    }
}
