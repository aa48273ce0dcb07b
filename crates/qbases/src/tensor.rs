//! Tensor product, tensor power and direct sum of bases.

use tracing::trace;

use crate::basis::Basis;
use crate::composite::{normalize, CompositeBasis};
use crate::error::{BasisError, Result};
use crate::merge::merge;
use crate::sum::SumBasis;

/// Tensor product of two bases.
///
/// Merge rules are tried first, so two spin-1/2 leaves become one spin
/// basis of multiplicity 2. Otherwise the operands are combined into a
/// normalized [`CompositeBasis`], concatenating the elements of composite
/// operands and merging at the boundary.
pub fn tensor(a: &Basis, b: &Basis) -> Result<Basis> {
    if let Some(merged) = merge(a, b)? {
        return Ok(merged);
    }
    from_factors([a.clone(), b.clone()])
}

/// N-ary tensor product, folded left to right.
///
/// A single operand is returned unchanged; no operands is an arity error.
pub fn tensor_all<'a, I>(bases: I) -> Result<Basis>
where
    I: IntoIterator<Item = &'a Basis>,
{
    let mut iter = bases.into_iter();
    let first = iter
        .next()
        .ok_or(BasisError::EmptyOperands { op: "tensor" })?;
    iter.try_fold(first.clone(), |acc, b| tensor(&acc, b))
}

/// `b ⊗ b ⊗ … ⊗ b` with `n` copies, by repeated squaring.
///
/// `n == 0` is rejected: there is no empty basis to serve as the identity.
pub fn tensor_pow(b: &Basis, n: usize) -> Result<Basis> {
    if n == 0 {
        return Err(BasisError::InvalidExponent(n));
    }
    let mut result: Option<Basis> = None;
    let mut square = b.clone();
    let mut remaining = n;
    loop {
        if remaining & 1 == 1 {
            result = Some(match result {
                None => square.clone(),
                Some(acc) => tensor(&acc, &square)?,
            });
        }
        remaining >>= 1;
        if remaining == 0 {
            break;
        }
        square = tensor(&square, &square)?;
        trace!(
            nsubsystems = square.nsubsystems(),
            remaining,
            "tensor_pow squared"
        );
    }
    // n >= 1 guarantees at least one set bit
    result.ok_or(BasisError::InvalidExponent(n))
}

/// Direct sum of two bases.
pub fn directsum(a: &Basis, b: &Basis) -> Result<Basis> {
    Ok(SumBasis::new([a.clone(), b.clone()])?.into())
}

/// N-ary direct sum. A single operand is returned unchanged.
pub fn directsum_all<'a, I>(bases: I) -> Result<Basis>
where
    I: IntoIterator<Item = &'a Basis>,
{
    let mut bases: Vec<Basis> = bases.into_iter().cloned().collect();
    match bases.len() {
        0 => Err(BasisError::EmptyOperands { op: "directsum" }),
        1 => Ok(bases.swap_remove(0)),
        _ => Ok(SumBasis::new(bases)?.into()),
    }
}

/// Normalize a factor list into a basis: a lone element is returned bare,
/// anything longer becomes a composite.
pub(crate) fn from_factors<I>(factors: I) -> Result<Basis>
where
    I: IntoIterator<Item = Basis>,
{
    let mut elements = normalize(factors)?;
    match elements.len() {
        0 => Err(BasisError::EmptyOperands { op: "tensor" }),
        1 => Ok(elements.swap_remove(0)),
        _ => Ok(CompositeBasis::new(elements)?.into()),
    }
}
