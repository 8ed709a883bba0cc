//! Editor errors.
//!
//! Every variant is a recoverable rejection raised before any state is
//! touched. The `Display` text is suitable as a user-facing notice.

use crate::storage::StorageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EditorError {
    #[error("Enter a name for the floor plan before saving")]
    EmptyPlanName,
    #[error("Text cannot be empty")]
    EmptyText,
    #[error("No text entry is open")]
    NoTextEntry,
    #[error("Unknown equipment type: {0}")]
    UnknownEquipmentType(String),
    #[error("No equipment type is available")]
    NoEquipmentType,
    #[error("Could not save the floor plan: {0}")]
    Save(#[from] StorageError),
}

/// Result type for editor operations.
pub type EditorResult<T> = Result<T, EditorError>;
