use std::{any::Any, fmt};

/// The failure caught at a guard boundary, see [`crate::Result::guard`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GuardError {
    /// The callback panicked.
    Panicked { message: String },
    /// The callback completed but returned an absent value.
    NoValue,
}

impl GuardError {
    /// Builds the error from the payload returned by `std::panic::catch_unwind`.
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let message = if let Some(message) = payload.downcast_ref::<&'static str>() {
            (*message).to_string()
        } else if let Some(message) = payload.downcast_ref::<String>() {
            message.clone()
        } else {
            "unknown panic payload".to_string()
        };
        GuardError::Panicked { message }
    }

    pub fn message(&self) -> &str {
        use GuardError::*;
        match self {
            Panicked { message } => message,
            NoValue => "callback produced no value",
        }
    }
}

impl fmt::Display for GuardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use GuardError::*;
        match self {
            Panicked { message } => write!(f, "Callback panicked: {}", message),
            NoValue => write!(f, "Callback produced no value"),
        }
    }
}

impl std::error::Error for GuardError {}
