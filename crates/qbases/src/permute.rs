//! Subsystem permutations.
//!
//! Permutations are 1-based vectors: `perm[i]` names the input subsystem
//! that lands at position `i` of the result.

use crate::basis::Basis;
use crate::error::{BasisError, Result};
use crate::tensor::from_factors;

/// Verify that `perm` is a permutation of `1..=n`.
pub fn check_permutation(perm: &[usize], n: usize) -> Result<()> {
    if perm.len() != n {
        return Err(BasisError::PermutationLength {
            expected: n,
            actual: perm.len(),
        });
    }
    let mut seen = vec![false; n];
    for &p in perm {
        if p == 0 || p > n || seen[p - 1] {
            return Err(BasisError::NotAPermutation {
                perm: perm.to_vec(),
                n,
            });
        }
        seen[p - 1] = true;
    }
    Ok(())
}

/// Reorder the subsystems of `b` according to `perm`.
///
/// # Example
/// ```
/// use qbases::{permutesystems, tensor_all, Basis, GenericBasis};
///
/// let b1: Basis = GenericBasis::new(5).unwrap().into();
/// let b2: Basis = GenericBasis::new(2).unwrap().into();
/// let b3: Basis = GenericBasis::new(6).unwrap().into();
/// let c = tensor_all([&b1, &b2, &b3]).unwrap();
/// let p = permutesystems(&c, &[2, 1, 3]).unwrap();
/// assert_eq!(p, tensor_all([&b2, &b1, &b3]).unwrap());
/// ```
pub fn permutesystems(b: &Basis, perm: &[usize]) -> Result<Basis> {
    let n = b.nsubsystems();
    check_permutation(perm, n)?;
    let factors = perm
        .iter()
        .map(|&p| {
            b.subsystem(p).ok_or(BasisError::NotAPermutation {
                perm: perm.to_vec(),
                n,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    from_factors(factors)
}

/// The inverse of a 1-based permutation.
pub fn inverse_permutation(perm: &[usize]) -> Result<Vec<usize>> {
    check_permutation(perm, perm.len())?;
    let mut inverse = vec![0; perm.len()];
    for (i, &p) in perm.iter().enumerate() {
        inverse[p - 1] = i + 1;
    }
    Ok(inverse)
}

/// 1-based permutation that stably sorts `keys` in ascending order:
/// `keys[sortperm(keys)[i] - 1]` is non-decreasing in `i`.
pub fn sortperm(keys: &[usize]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..keys.len()).collect();
    order.sort_by_key(|&i| keys[i]);
    order.into_iter().map(|i| i + 1).collect()
}
