//! Input Bridge Error Types
//!
//! Translation itself never fails: unmapped keys, unmapped buttons and a zero
//! wheel delta are normal "no signal" outcomes. Errors only arise at the edges,
//! when parsing host key names or when a sink refuses a message.

use thiserror::Error;

/// Result type for input bridge operations
pub type Result<T> = std::result::Result<T, InputError>;

/// Input bridge error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Key name not recognised
    #[error("Unknown key name: {0}")]
    UnknownKeyName(String),

    /// Mouse button name not recognised
    #[error("Unknown mouse button name: {0}")]
    UnknownButtonName(String),

    /// Downstream receiver is gone
    #[error("Message sink is closed")]
    SinkClosed,

    /// Bounded sink has no room left
    #[error("Message sink is full")]
    SinkFull,
}

impl InputError {
    /// True when the error came from the downstream sink
    pub fn is_sink_error(&self) -> bool {
        matches!(self, InputError::SinkClosed | InputError::SinkFull)
    }
}
