//! Number types carried by operator placeholders.

use num_complex::{Complex32, Complex64};
use num_traits::{One, Zero};

/// Scalar coefficient type of a [`crate::BasisOperator`].
///
/// Identity fillers created during embedding use the same scalar type as
/// the caller's pieces.
pub trait Scalar:
    Clone
    + Copy
    + Zero
    + One
    + PartialEq
    + std::fmt::Debug
    + std::ops::Add<Output = Self>
    + std::ops::Mul<Output = Self>
    + Send
    + Sync
    + 'static
{
    /// Complex conjugate of the value.
    fn conj(self) -> Self;
}

impl Scalar for f64 {
    #[inline]
    fn conj(self) -> Self {
        self
    }
}

impl Scalar for f32 {
    #[inline]
    fn conj(self) -> Self {
        self
    }
}

impl Scalar for Complex64 {
    #[inline]
    fn conj(self) -> Self {
        Complex64::conj(&self)
    }
}

impl Scalar for Complex32 {
    #[inline]
    fn conj(self) -> Self {
        Complex32::conj(&self)
    }
}
