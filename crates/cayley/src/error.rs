use crate::space::MAX_DIMENSION;

/// Everything that can go wrong while describing an algebra or building its tables.
///
/// All of these are structural errors in what the caller supplied.
/// None of them is transient, so retrying with the same input fails the same way.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("invalid dimension {dimension}, expected 1..={max}", max = MAX_DIMENSION)]
    InvalidDimension { dimension: usize },

    #[error("invalid grade {grade} for a {dimension}-dimensional space")]
    InvalidGrade { grade: usize, dimension: usize },

    #[error("invalid first basis vector index {first_index}")]
    InvalidFirstIndex { first_index: usize },

    #[error("component {index} lies outside of the basis vector range {first}..={last}")]
    ComponentOutOfRange {
        index: usize,
        first: usize,
        last: usize,
    },

    #[error("component {index} appears more than once")]
    RepeatedComponent { index: usize },

    #[error("blade not invertible: its factor is zero")]
    NotInvertible,

    #[error("the zero blade cannot be a basis element")]
    ZeroBlade,

    #[error("blade is already in the basis at position {position}")]
    DuplicateBlade { position: usize },

    #[error("incomplete basis: expected {expected} blades, found {found}")]
    IncompleteBasis { expected: usize, found: usize },

    #[error("the first basis blade must be the scalar, found one of grade {grade}")]
    ScalarNotFirst { grade: usize },

    #[error("precomputed {table} table has {found} entries, expected {expected}")]
    TableSize {
        table: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("precomputed {table} table has invalid entry {value} at position {position}")]
    TableEntry {
        table: &'static str,
        position: usize,
        value: i64,
    },

    #[error("an algebra with id {id} is already registered")]
    AlreadyRegistered { id: u32 },

    #[error("tables requested for algebra id {expected} belong to id {found}")]
    IdMismatch { expected: u32, found: u32 },
}

pub type Result<T, E = Error> = core::result::Result<T, E>;
