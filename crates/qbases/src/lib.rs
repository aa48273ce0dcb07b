//! Basis algebra for composite quantum systems.
//!
//! A [`Basis`] describes the structure of a Hilbert space: its dimension
//! and, for tensor products, its decomposition into subsystems. This crate
//! combines bases ([`tensor`], [`tensor_pow`], [`directsum`]), checks
//! whether quantum objects living on them can be multiplied or added
//! ([`multiplicable`], [`addible`], [`samebases`] and their `check_*`
//! variants), and rearranges composite systems ([`ptrace`], [`reduced`],
//! [`permutesystems`], [`embed`]).
//!
//! Concrete states and operators live in other crates. They plug in
//! through [`HasBases`] and [`AbstractOperator`]; [`BasisOperator`] is a
//! placeholder that tracks only bases and a scalar coefficient.
//!
//! # Conventions
//!
//! Subsystem indices and permutation entries are 1-based.
//!
//! # Quick Start
//!
//! ```
//! use qbases::{ptrace, tensor_all, tensor_pow, Basis, GenericBasis};
//!
//! let b1: Basis = GenericBasis::new(5).unwrap().into();
//! let b2: Basis = GenericBasis::new(2).unwrap().into();
//!
//! let c = tensor_all([&b1, &b1, &b2]).unwrap();
//! assert_eq!(c.nsubsystems(), 3);
//! assert_eq!(c.dimension(), 50);
//!
//! assert_eq!(ptrace(&c, &[1]).unwrap(), tensor_all([&b1, &b2]).unwrap());
//! assert_eq!(tensor_pow(&b1, 3).unwrap(), tensor_all([&b1, &b1, &b1]).unwrap());
//! ```
//!
//! # Compatibility checks
//!
//! `check_*` functions fail with [`BasisError::IncompatibleBases`] unless
//! checks are disabled for the current thread:
//!
//! ```
//! use qbases::{check_multiplicable, without_checks, Basis, GenericBasis};
//!
//! let a: Basis = GenericBasis::new(2).unwrap().into();
//! let b: Basis = GenericBasis::new(3).unwrap().into();
//! assert!(check_multiplicable(&a, &b).is_err());
//! assert!(without_checks(|| check_multiplicable(&a, &b)).is_ok());
//! ```

mod basis;
mod check_mode;
mod compat;
mod composite;
mod dim;
mod embed;
mod error;
mod leaf;
pub mod merge;
mod operator;
mod permute;
mod scalar;
mod subsystems;
mod sum;
mod tensor;

pub use basis::{Basis, BasisKind};
pub use check_mode::{
    checks_enabled, set_check_mode, with_check_mode, without_checks, CheckGuard, CheckMode,
};
pub use compat::{
    addible, check_addible, check_multiplicable, check_samebases, multiplicable,
    multiplicable_bases, samebases, HasBases,
};
pub use composite::{normalize, CompositeBasis};
pub use dim::Dim;
pub use embed::{embed, embed_at, embed_sites, Site};
pub use error::{BasisError, ErrorKind, Result};
pub use leaf::{FockBasis, GenericBasis, NLevelBasis, PauliBasis, Spin, SpinBasis};
pub use operator::{AbstractOperator, BasisOperator};
pub use permute::{check_permutation, inverse_permutation, permutesystems, sortperm};
pub use scalar::Scalar;
pub use subsystems::{check_indices, complement, nsubsystems, ptrace, reduced};
pub use sum::SumBasis;
pub use tensor::{directsum, directsum_all, tensor, tensor_all, tensor_pow};
