//! Error types for the farm simulation
//!
//! Illegal crop transitions are not errors; they are reported as `false`.
//! Only contract violations end up here.

/// Errors raised by the farm grid and its configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FarmError {
    /// A cell coordinate outside the grid.
    #[error("cell ({x}, {y}) is outside the {width}x{height} farm grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    /// Configuration that cannot produce a working farm.
    #[error("invalid farm configuration: {reason}")]
    InvalidConfig { reason: String },
}
