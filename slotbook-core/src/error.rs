//! Error types for the slotbook ecosystem.

use thiserror::Error;

/// Errors that can occur in slotbook operations.
///
/// Read paths on the store never produce these: absent or unparseable data
/// reads as empty. Errors come from writes that actually hit the filesystem
/// and from invalid caller input (an out-of-range slot index).
#[derive(Error, Debug)]
pub enum SlotBookError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("No slot at index {index} on {date}")]
    SlotOutOfRange { date: String, index: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for slotbook operations.
pub type SlotBookResult<T> = Result<T, SlotBookError>;
