//! Compatibility predicates and their checking variants.
//!
//! The predicates are pure. The `check_*` functions consult the
//! thread-local [`CheckMode`] first and succeed without evaluating
//! anything while checks are disabled.

use tracing::trace;

use crate::basis::Basis;
use crate::check_mode::CheckMode;
use crate::error::{BasisError, Result};

/// Anything that lives on a left and a right basis.
///
/// States and square objects report the same basis on both sides.
pub trait HasBases {
    fn basis_l(&self) -> &Basis;
    fn basis_r(&self) -> &Basis;
}

impl HasBases for Basis {
    fn basis_l(&self) -> &Basis {
        self
    }

    fn basis_r(&self) -> &Basis {
        self
    }
}

impl<T: HasBases + ?Sized> HasBases for &T {
    fn basis_l(&self) -> &Basis {
        (**self).basis_l()
    }

    fn basis_r(&self) -> &Basis {
        (**self).basis_r()
    }
}

/// Both objects occupy exactly the same space on both sides.
pub fn samebases<A, B>(a: &A, b: &B) -> bool
where
    A: HasBases + ?Sized,
    B: HasBases + ?Sized,
{
    a.basis_l() == b.basis_l() && a.basis_r() == b.basis_r()
}

/// `a * b` is defined: the right basis of `a` matches the left basis of `b`.
pub fn multiplicable<A, B>(a: &A, b: &B) -> bool
where
    A: HasBases + ?Sized,
    B: HasBases + ?Sized,
{
    multiplicable_bases(a.basis_r(), b.basis_l())
}

/// Basis-level multiplicability, compared element by element for
/// composites rather than by total dimension.
pub fn multiplicable_bases(a: &Basis, b: &Basis) -> bool {
    match (a, b) {
        (Basis::Composite(a), Basis::Composite(b)) => {
            a.len() == b.len()
                && a
                    .bases()
                    .iter()
                    .zip(b.bases())
                    .all(|(x, y)| multiplicable_bases(x, y))
        }
        _ => a == b,
    }
}

/// `a + b` is defined: left bases agree and right bases agree.
pub fn addible<A, B>(a: &A, b: &B) -> bool
where
    A: HasBases + ?Sized,
    B: HasBases + ?Sized,
{
    a.basis_l() == b.basis_l() && a.basis_r() == b.basis_r()
}

fn check(
    op: &'static str,
    holds: impl FnOnce() -> bool,
    left: &Basis,
    right: &Basis,
) -> Result<()> {
    if !CheckMode::current().is_enabled() {
        trace!(op, "compatibility check skipped");
        return Ok(());
    }
    if holds() {
        Ok(())
    } else {
        Err(BasisError::incompatible(op, left, right))
    }
}

/// Fail with [`BasisError::IncompatibleBases`] unless [`samebases`] holds.
pub fn check_samebases<A, B>(a: &A, b: &B) -> Result<()>
where
    A: HasBases + ?Sized,
    B: HasBases + ?Sized,
{
    let pair = if a.basis_l() != b.basis_l() {
        (a.basis_l(), b.basis_l())
    } else {
        (a.basis_r(), b.basis_r())
    };
    check("samebases", || samebases(a, b), pair.0, pair.1)
}

/// Fail with [`BasisError::IncompatibleBases`] unless [`multiplicable`] holds.
pub fn check_multiplicable<A, B>(a: &A, b: &B) -> Result<()>
where
    A: HasBases + ?Sized,
    B: HasBases + ?Sized,
{
    check(
        "multiplicable",
        || multiplicable(a, b),
        a.basis_r(),
        b.basis_l(),
    )
}

/// Fail with [`BasisError::IncompatibleBases`] unless [`addible`] holds.
pub fn check_addible<A, B>(a: &A, b: &B) -> Result<()>
where
    A: HasBases + ?Sized,
    B: HasBases + ?Sized,
{
    let pair = if a.basis_l() != b.basis_l() {
        (a.basis_l(), b.basis_l())
    } else {
        (a.basis_r(), b.basis_r())
    };
    check("addible", || addible(a, b), pair.0, pair.1)
}
