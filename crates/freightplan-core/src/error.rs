//! Error handling for freightplan
//!
//! Provides error types for every layer of the planner:
//! - Grid errors (coordinates outside the grid, locked floors)
//! - Plan errors (floor capacity, structural invariants, lookups)
//! - Contract violations (invalid values passed to setters)
//!
//! All error types use `thiserror` for ergonomic error handling. Every error
//! is local and recoverable; callers typically surface it as a status
//! message.

use thiserror::Error;

/// Grid error type
///
/// Raised by placement, removal, and hover operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Grid coordinate outside `[0, dimension)` on either axis
    #[error("Grid position out of bounds: ({x}, {y}) not within a {dimension}x{dimension} grid")]
    BoundaryViolation {
        /// The X grid coordinate.
        x: i32,
        /// The Y grid coordinate.
        y: i32,
        /// The grid dimension.
        dimension: i32,
    },

    /// The floor does not accept changes
    #[error("Floor {floor} is locked")]
    FloorLocked {
        /// The locked floor's identifier.
        floor: u32,
    },
}

/// Plan error type
///
/// Represents errors related to floor and plan lifecycle.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    /// Too many floors
    #[error("Plan already holds the maximum of {max} floors")]
    CapacityExceeded {
        /// The maximum number of floors.
        max: usize,
    },

    /// A structural invariant would be broken
    #[error("Invariant violation: {reason}")]
    InvariantViolation {
        /// What would have been broken.
        reason: String,
    },

    /// Positional floor lookup out of range
    #[error("Floor index {index} out of range for plan with {len} floors")]
    FloorIndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The number of floors.
        len: usize,
    },

    /// No floor carries this identifier
    #[error("Floor {id} not found")]
    FloorNotFound {
        /// The requested floor identifier.
        id: u32,
    },

    /// No sector carries this identifier
    #[error("Sector {id} not found")]
    SectorNotFound {
        /// The requested sector identifier.
        id: u32,
    },

    /// No open plan carries this identifier
    #[error("Plan {id} is not open")]
    PlanNotFound {
        /// The requested plan identifier.
        id: String,
    },

    /// The operation has no defined behavior yet
    #[error("Operation not supported: {operation}")]
    Unsupported {
        /// The name of the operation.
        operation: String,
    },
}

/// An invalid value was passed where a constrained one is required.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid value for '{field}': {reason}")]
pub struct ContractViolation {
    /// The parameter or property name.
    pub field: String,
    /// Why the value was rejected.
    pub reason: String,
}

impl ContractViolation {
    /// Create a contract violation for a field
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Main error type for freightplan
///
/// A unified error type that can represent any error from all layers.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Grid error
    #[error(transparent)]
    Grid(#[from] GridError),

    /// Plan error
    #[error(transparent)]
    Plan(#[from] PlanError),

    /// Contract violation
    #[error(transparent)]
    Contract(#[from] ContractViolation),
}

impl Error {
    /// Create a contract violation error
    pub fn contract(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::Contract(ContractViolation::new(field, reason))
    }

    /// Create an unsupported-operation error
    pub fn unsupported(operation: impl Into<String>) -> Self {
        Error::Plan(PlanError::Unsupported {
            operation: operation.into(),
        })
    }

    /// Check if this is a boundary violation
    pub fn is_boundary_violation(&self) -> bool {
        matches!(self, Error::Grid(GridError::BoundaryViolation { .. }))
    }

    /// Check if this is a locked-floor rejection
    pub fn is_floor_locked(&self) -> bool {
        matches!(self, Error::Grid(GridError::FloorLocked { .. }))
    }

    /// Check if this is a capacity error
    pub fn is_capacity_exceeded(&self) -> bool {
        matches!(self, Error::Plan(PlanError::CapacityExceeded { .. }))
    }

    /// Check if this is an invariant violation
    pub fn is_invariant_violation(&self) -> bool {
        matches!(self, Error::Plan(PlanError::InvariantViolation { .. }))
    }

    /// Check if this is a contract violation
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, Error::Contract(_))
    }

    /// Check if this is an unsupported operation
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Error::Plan(PlanError::Unsupported { .. }))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_violation_message() {
        let err = GridError::BoundaryViolation {
            x: 64,
            y: 3,
            dimension: 64,
        };
        assert_eq!(
            err.to_string(),
            "Grid position out of bounds: (64, 3) not within a 64x64 grid"
        );
    }

    #[test]
    fn test_conversion_and_predicates() {
        let err: Error = PlanError::CapacityExceeded { max: 14 }.into();
        assert!(err.is_capacity_exceeded());
        assert!(!err.is_invariant_violation());

        let err: Error = GridError::FloorLocked { floor: 2 }.into();
        assert!(err.is_floor_locked());
        assert!(!err.is_boundary_violation());

        let err = Error::contract("level", "must be between 1 and 14");
        assert!(err.is_contract_violation());
        assert_eq!(
            err.to_string(),
            "Invalid value for 'level': must be between 1 and 14"
        );

        assert!(Error::unsupported("Floor::merge").is_unsupported());
    }
}
