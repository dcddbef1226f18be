//! Error types for volmesh_core.
//!
//! A plain enum with no external dependencies, usable under `no_std`. Cell processing itself
//! is total; these errors come from table validation and checked conversions.

use core::fmt;

/// Errors raised by volmesh_core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolmeshCoreError {
    /// A value outside `0..=255` was used as a case number.
    InvalidCaseNumber {
        /// The offending value.
        value: i32,
    },
    /// A triangle-table slot holds something other than -1 or an edge index 0-11.
    InvalidEdgeIndex {
        /// Case whose row holds the slot.
        case: u8,
        /// The offending slot value.
        value: i8,
    },
    /// A triangle-table row has a triangle after its -1 terminator, or a partial triangle.
    MalformedRow {
        /// The offending case.
        case: u8,
    },
}

impl fmt::Display for VolmeshCoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VolmeshCoreError::InvalidCaseNumber { value } => {
                write!(f, "case number {} is outside 0..=255", value)
            }
            VolmeshCoreError::InvalidEdgeIndex { case, value } => {
                write!(f, "triangle table row {} holds invalid edge index {}", case, value)
            }
            VolmeshCoreError::MalformedRow { case } => {
                write!(f, "triangle table row {} is not terminated correctly", case)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for VolmeshCoreError {}

/// Checked conversion of an integer into a case number.
pub fn case_from_i32(value: i32) -> Result<u8, VolmeshCoreError> {
    u8::try_from(value).map_err(|_| VolmeshCoreError::InvalidCaseNumber { value })
}
