//! Leaf basis kinds.
//!
//! Every leaf is an immutable value compared by its defining parameters.
//! `SpinBasis` and `PauliBasis` may describe several identical subsystems at
//! once (see [`crate::merge`]); the other kinds always describe exactly one.

use std::fmt;

use crate::dim::Dim;
use crate::error::{BasisError, Result};

/// Basis of unspecified structure, described only by its dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GenericBasis {
    dim: Dim,
}

impl GenericBasis {
    /// Create a finite generic basis. `dim` must be positive.
    pub fn new(dim: usize) -> Result<Self> {
        if dim == 0 {
            return Err(BasisError::InvalidParameter(
                "generic basis dimension must be positive",
            ));
        }
        Ok(Self {
            dim: Dim::Finite(dim),
        })
    }

    /// Create a countably infinite generic basis.
    pub fn infinite() -> Self {
        Self { dim: Dim::Infinite }
    }

    pub fn dimension(&self) -> Dim {
        self.dim
    }
}

/// Truncated Fock (number-state) basis with states `offset..=cutoff`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FockBasis {
    cutoff: usize,
    offset: usize,
}

impl FockBasis {
    /// Fock basis starting at the vacuum.
    pub fn new(cutoff: usize) -> Result<Self> {
        Self::with_offset(cutoff, 0)
    }

    /// Fock basis with the lowest `offset` number states removed.
    pub fn with_offset(cutoff: usize, offset: usize) -> Result<Self> {
        if cutoff <= offset {
            return Err(BasisError::InvalidParameter(
                "Fock cutoff must exceed offset",
            ));
        }
        if cutoff - offset == usize::MAX {
            return Err(BasisError::DimensionOverflow("FockBasis"));
        }
        Ok(Self { cutoff, offset })
    }

    pub fn cutoff(&self) -> usize {
        self.cutoff
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn dimension(&self) -> Dim {
        Dim::Finite(self.cutoff - self.offset + 1)
    }
}

/// Basis of an `N`-level system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NLevelBasis {
    levels: usize,
}

impl NLevelBasis {
    pub fn new(levels: usize) -> Result<Self> {
        if levels == 0 {
            return Err(BasisError::InvalidParameter(
                "number of levels must be a positive integer",
            ));
        }
        Ok(Self { levels })
    }

    pub fn levels(&self) -> usize {
        self.levels
    }

    pub fn dimension(&self) -> Dim {
        Dim::Finite(self.levels)
    }
}

/// Spin quantum number `S`, stored as `2S` so that half-integers are exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Spin {
    twice: u32,
}

impl Spin {
    /// Spin from `2S`: `from_twice(1)` is spin 1/2.
    pub const fn from_twice(twice: u32) -> Self {
        Self { twice }
    }

    /// Integer spin.
    pub const fn integer(s: u32) -> Self {
        Self { twice: 2 * s }
    }

    /// Spin 1/2.
    pub const fn half() -> Self {
        Self { twice: 1 }
    }

    /// Convert a floating point spin number, rejecting anything that is not
    /// a non-negative integer or half-integer.
    pub fn try_from_f64(s: f64) -> Result<Self> {
        let twice = 2.0 * s;
        if !s.is_finite() || s < 0.0 || twice.fract() != 0.0 || twice > u32::MAX as f64 {
            return Err(BasisError::InvalidParameter(
                "spin number must be a non-negative (half-)integer",
            ));
        }
        Ok(Self {
            twice: twice as u32,
        })
    }

    /// `2S`.
    pub fn twice(&self) -> u32 {
        self.twice
    }

    /// `S` as a float.
    pub fn value(&self) -> f64 {
        self.twice as f64 / 2.0
    }

    /// Number of states `2S + 1`.
    pub fn levels(&self) -> usize {
        self.twice as usize + 1
    }
}

impl fmt::Display for Spin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.twice % 2 == 0 {
            write!(f, "{}", self.twice / 2)
        } else {
            write!(f, "{}/2", self.twice)
        }
    }
}

/// Basis of `count` spins sharing the same spin number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpinBasis {
    spin: Spin,
    count: usize,
}

impl SpinBasis {
    /// A single spin.
    pub fn new(spin: Spin) -> Self {
        Self { spin, count: 1 }
    }

    /// `count` spins of the same spin number, as produced by merging.
    pub fn with_count(spin: Spin, count: usize) -> Result<Self> {
        if count == 0 {
            return Err(BasisError::InvalidParameter(
                "number of spins must be a positive integer",
            ));
        }
        checked_pow(spin.levels(), count).ok_or(BasisError::DimensionOverflow("SpinBasis"))?;
        Ok(Self { spin, count })
    }

    pub fn spin(&self) -> Spin {
        self.spin
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn dimension(&self) -> Dim {
        // validated at construction
        Dim::Finite(checked_pow(self.spin.levels(), self.count).unwrap_or(usize::MAX))
    }
}

/// Pauli operator basis on `qubits` qubits, dimension `4^qubits`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PauliBasis {
    qubits: usize,
}

impl PauliBasis {
    pub fn new(qubits: usize) -> Result<Self> {
        if qubits == 0 {
            return Err(BasisError::InvalidParameter(
                "number of qubits must be a positive integer",
            ));
        }
        checked_pow(4, qubits).ok_or(BasisError::DimensionOverflow("PauliBasis"))?;
        Ok(Self { qubits })
    }

    pub fn qubits(&self) -> usize {
        self.qubits
    }

    pub fn dimension(&self) -> Dim {
        Dim::Finite(checked_pow(4, self.qubits).unwrap_or(usize::MAX))
    }
}

fn checked_pow(base: usize, exp: usize) -> Option<usize> {
    let exp = u32::try_from(exp).ok()?;
    base.checked_pow(exp)
}
