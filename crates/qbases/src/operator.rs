//! Operator interface consumed by the embedding engine, and a basis-only
//! placeholder implementation.
//!
//! Concrete operator crates implement [`AbstractOperator`] for their own
//! storage types. Their errors travel as `anyhow::Error`; the core lifts
//! them back into [`crate::BasisError`].

use anyhow::Result;

use crate::basis::Basis;
use crate::compat::{check_addible, check_multiplicable, HasBases};
use crate::error::BasisError;
use crate::permute::permutesystems;
use crate::scalar::Scalar;
use crate::subsystems::ptrace;
use crate::tensor::tensor;

/// Operations the basis algebra needs from an operator type.
pub trait AbstractOperator: HasBases + Clone + Sized {
    /// Identity-like operator from `basis_r` to `basis_l`, in the
    /// representation of `Self`.
    fn identity(basis_l: &Basis, basis_r: &Basis) -> Result<Self>;

    /// Tensor product `self ⊗ other`.
    fn tensor(&self, other: &Self) -> Result<Self>;

    /// Reorder subsystems on both sides by a 1-based permutation.
    fn permute_systems(&self, perm: &[usize]) -> Result<Self>;

    /// Operator product `self * other`.
    fn compose(&self, other: &Self) -> Result<Self>;
}

/// Operator placeholder: a left basis, a right basis and a scalar
/// coefficient of number type `T`.
#[derive(Debug, Clone, PartialEq)]
pub struct BasisOperator<T: Scalar = f64> {
    basis_l: Basis,
    basis_r: Basis,
    coefficient: T,
}

impl<T: Scalar> BasisOperator<T> {
    /// Operator from `basis_r` to `basis_l` with unit coefficient.
    pub fn new(basis_l: Basis, basis_r: Basis) -> Self {
        Self {
            basis_l,
            basis_r,
            coefficient: T::one(),
        }
    }

    /// Square operator on `basis`.
    pub fn square(basis: Basis) -> Self {
        Self::new(basis.clone(), basis)
    }

    pub fn with_coefficient(mut self, coefficient: T) -> Self {
        self.coefficient = coefficient;
        self
    }

    pub fn coefficient(&self) -> T {
        self.coefficient
    }

    /// Adjoint: swaps the sides and conjugates the coefficient.
    pub fn dagger(&self) -> Self {
        Self {
            basis_l: self.basis_r.clone(),
            basis_r: self.basis_l.clone(),
            coefficient: self.coefficient.conj(),
        }
    }

    /// Sum of two operators on the same spaces.
    pub fn add(&self, other: &Self) -> crate::Result<Self> {
        check_addible(self, other)?;
        Ok(Self {
            basis_l: self.basis_l.clone(),
            basis_r: self.basis_r.clone(),
            coefficient: self.coefficient + other.coefficient,
        })
    }

    /// Trace out the same subsystems on both sides.
    pub fn ptrace(&self, indices: &[usize]) -> crate::Result<Self> {
        let (left, right) = (self.basis_l.nsubsystems(), self.basis_r.nsubsystems());
        if left != right {
            return Err(BasisError::SubsystemCountMismatch { left, right });
        }
        Ok(Self {
            basis_l: ptrace(&self.basis_l, indices)?,
            basis_r: ptrace(&self.basis_r, indices)?,
            coefficient: self.coefficient,
        })
    }
}

impl<T: Scalar> HasBases for BasisOperator<T> {
    fn basis_l(&self) -> &Basis {
        &self.basis_l
    }

    fn basis_r(&self) -> &Basis {
        &self.basis_r
    }
}

impl<T: Scalar> AbstractOperator for BasisOperator<T> {
    fn identity(basis_l: &Basis, basis_r: &Basis) -> Result<Self> {
        Ok(Self::new(basis_l.clone(), basis_r.clone()))
    }

    fn tensor(&self, other: &Self) -> Result<Self> {
        Ok(Self {
            basis_l: tensor(&self.basis_l, &other.basis_l)?,
            basis_r: tensor(&self.basis_r, &other.basis_r)?,
            coefficient: self.coefficient * other.coefficient,
        })
    }

    fn permute_systems(&self, perm: &[usize]) -> Result<Self> {
        Ok(Self {
            basis_l: permutesystems(&self.basis_l, perm)?,
            basis_r: permutesystems(&self.basis_r, perm)?,
            coefficient: self.coefficient,
        })
    }

    fn compose(&self, other: &Self) -> Result<Self> {
        check_multiplicable(self, other)?;
        Ok(Self {
            basis_l: self.basis_l.clone(),
            basis_r: other.basis_r.clone(),
            coefficient: self.coefficient * other.coefficient,
        })
    }
}
