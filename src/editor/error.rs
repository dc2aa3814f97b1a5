//! Error types for the editing core.

use thiserror::Error;

/// Failure of a structural buffer operation.
///
/// Every buffer operation takes explicit coordinates, and the cursor controller
/// is expected to clamp them before they reach the buffer. An `OutOfRange`
/// therefore always points at a caller bug rather than at bad user input.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EditError {
    #[error("position out of range: row {row}, column {col}")]
    OutOfRange { row: usize, col: usize },
}
