//! Dimension of a (possibly countably infinite) state space.

use std::fmt;

/// Dimension of a basis.
///
/// `Infinite` absorbs every finite factor and summand. Finite arithmetic is
/// checked; `None` signals overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dim {
    Finite(usize),
    Infinite,
}

impl Dim {
    /// Returns `true` for finite dimensions.
    pub fn is_finite(self) -> bool {
        matches!(self, Dim::Finite(_))
    }

    /// The finite value, if any.
    pub fn finite(self) -> Option<usize> {
        match self {
            Dim::Finite(d) => Some(d),
            Dim::Infinite => None,
        }
    }

    /// Checked product (tensor product dimension).
    pub fn checked_mul(self, other: Dim) -> Option<Dim> {
        match (self, other) {
            (Dim::Finite(a), Dim::Finite(b)) => a.checked_mul(b).map(Dim::Finite),
            _ => Some(Dim::Infinite),
        }
    }

    /// Checked sum (direct sum dimension).
    pub fn checked_add(self, other: Dim) -> Option<Dim> {
        match (self, other) {
            (Dim::Finite(a), Dim::Finite(b)) => a.checked_add(b).map(Dim::Finite),
            _ => Some(Dim::Infinite),
        }
    }

    /// Checked product over an iterator; the empty product is 1.
    pub fn checked_product<I: IntoIterator<Item = Dim>>(dims: I) -> Option<Dim> {
        dims.into_iter()
            .try_fold(Dim::Finite(1), |acc, d| acc.checked_mul(d))
    }

    /// Checked sum over an iterator; the empty sum is 0.
    pub fn checked_sum<I: IntoIterator<Item = Dim>>(dims: I) -> Option<Dim> {
        dims.into_iter()
            .try_fold(Dim::Finite(0), |acc, d| acc.checked_add(d))
    }
}

impl From<usize> for Dim {
    fn from(d: usize) -> Self {
        Dim::Finite(d)
    }
}

impl PartialEq<usize> for Dim {
    fn eq(&self, other: &usize) -> bool {
        *self == Dim::Finite(*other)
    }
}

impl fmt::Display for Dim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dim::Finite(d) => write!(f, "{d}"),
            Dim::Infinite => write!(f, "inf"),
        }
    }
}
