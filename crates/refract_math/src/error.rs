//! Geometry error types

use std::fmt;

use crate::Basis;

/// Error type for geometric operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    /// An operation received a point expressed in the wrong basis
    BasisMismatch {
        /// Basis the operation requires
        expected: Basis,
        /// Basis the point was tagged with
        found: Basis,
    },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::BasisMismatch { expected, found } => write!(
                f,
                "Basis mismatch: expected a point in {} basis, found {}",
                expected, found
            ),
        }
    }
}

impl std::error::Error for GeometryError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basis_mismatch_display() {
        let err = GeometryError::BasisMismatch {
            expected: Basis::World,
            found: Basis::ScreenPixel,
        };
        let msg = format!("{}", err);
        assert!(msg.contains("World"));
        assert!(msg.contains("ScreenPixel"));
    }
}
