//! Error types for mesh construction and simulation calls.

use core::fmt;

/// Precondition violations reported by the mesh and the simulation.
///
/// Zero-length springs and zero-area normal sums are not errors; they are
/// skipped where they occur.
#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    /// A flat per-vertex array does not hold `3 * (lat+1) * (lon+1)` values.
    InvalidTopology { expected: usize, actual: usize },
    /// Node, spring or triangle-vertex index is out of bounds.
    IndexOutOfRange { index: usize, count: usize },
    /// Node mass must be positive and finite.
    InvalidMass,
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::InvalidTopology { expected, actual } => write!(
                f,
                "invalid topology: expected {} coordinates, got {}",
                expected, actual
            ),
            SimError::IndexOutOfRange { index, count } => {
                write!(f, "index {} out of range (count: {})", index, count)
            }
            SimError::InvalidMass => write!(f, "mass must be positive and finite"),
        }
    }
}

impl core::error::Error for SimError {}
