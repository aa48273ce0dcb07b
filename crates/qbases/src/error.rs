//! Error types for qbases

use thiserror::Error;

/// Result type for basis algebra operations
pub type Result<T> = std::result::Result<T, BasisError>;

/// Coarse classification of [`BasisError`] values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Out-of-domain parameter: a leaf basis argument, an overflowing
    /// dimension or a tensor power exponent of zero.
    InvalidParameter,
    /// An operation was given too few operands.
    Arity,
    /// Empty, out-of-range, duplicated or mismatched subsystem indices.
    InvalidIndexSet,
    /// Wrong length or non-bijective permutation vector.
    InvalidPermutation,
    /// A compatibility predicate failed while checks were enabled.
    IncompatibleBases,
    /// An error reported by a concrete operator implementation.
    Operator,
}

/// Errors that can occur during basis algebra
#[derive(Error, Debug)]
pub enum BasisError {
    /// Leaf basis constructed with out-of-domain parameters
    #[error("Invalid parameter: {0}")]
    InvalidParameter(&'static str),

    /// Dimension does not fit into `usize`
    #[error("Dimension overflow while building {0}")]
    DimensionOverflow(&'static str),

    /// Variadic operation called without operands
    #[error("{op} requires at least one operand")]
    EmptyOperands { op: &'static str },

    /// Tensor power with exponent zero
    #[error("Exponent must be a positive integer, got {0}")]
    InvalidExponent(usize),

    /// Subsystem selection is empty
    #[error("{op} requires at least one subsystem index")]
    EmptyIndexSet { op: &'static str },

    /// Partial trace over every subsystem
    #[error("Cannot trace out all {nsubsystems} subsystems")]
    FullTrace { nsubsystems: usize },

    /// Subsystem index outside `1..=nsubsystems`
    #[error("Subsystem index {index} out of range [1, {nsubsystems}]")]
    IndexOutOfRange { index: usize, nsubsystems: usize },

    /// Subsystem index named more than once
    #[error("Subsystem index {index} appears more than once")]
    DuplicateIndex { index: usize },

    /// Left and right bases disagree on the number of subsystems
    #[error("Subsystem count mismatch: left basis has {left}, right basis has {right}")]
    SubsystemCountMismatch { left: usize, right: usize },

    /// Index list and operator list have different lengths
    #[error("Got {indices} index entries for {operators} operators")]
    PieceCountMismatch { indices: usize, operators: usize },

    /// Permutation vector has the wrong length
    #[error("Permutation must have length {expected}, got {actual}")]
    PermutationLength { expected: usize, actual: usize },

    /// Permutation vector is not a bijection on `1..=n`
    #[error("{perm:?} is not a permutation of 1..={n}")]
    NotAPermutation { perm: Vec<usize>, n: usize },

    /// Compatibility predicate failed
    #[error("Incompatible bases in {op}: {left} vs {right}")]
    IncompatibleBases {
        op: &'static str,
        left: String,
        right: String,
    },

    /// Failure inside a concrete operator implementation
    #[error("Operator error: {0}")]
    Operator(anyhow::Error),
}

impl BasisError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            BasisError::InvalidParameter(_)
            | BasisError::DimensionOverflow(_)
            | BasisError::InvalidExponent(_) => ErrorKind::InvalidParameter,
            BasisError::EmptyOperands { .. } => ErrorKind::Arity,
            BasisError::EmptyIndexSet { .. }
            | BasisError::FullTrace { .. }
            | BasisError::IndexOutOfRange { .. }
            | BasisError::DuplicateIndex { .. }
            | BasisError::SubsystemCountMismatch { .. }
            | BasisError::PieceCountMismatch { .. } => ErrorKind::InvalidIndexSet,
            BasisError::PermutationLength { .. } | BasisError::NotAPermutation { .. } => {
                ErrorKind::InvalidPermutation
            }
            BasisError::IncompatibleBases { .. } => ErrorKind::IncompatibleBases,
            BasisError::Operator(_) => ErrorKind::Operator,
        }
    }

    pub(crate) fn incompatible(
        op: &'static str,
        left: &impl std::fmt::Debug,
        right: &impl std::fmt::Debug,
    ) -> Self {
        BasisError::IncompatibleBases {
            op,
            left: format!("{left:?}"),
            right: format!("{right:?}"),
        }
    }
}

// Operator implementations report through anyhow; a BasisError that went
// through that channel is recovered as itself.
impl From<anyhow::Error> for BasisError {
    fn from(err: anyhow::Error) -> Self {
        match err.downcast::<BasisError>() {
            Ok(inner) => inner,
            Err(other) => BasisError::Operator(other),
        }
    }
}
