//! Subsystem selection and elimination.
//!
//! All subsystem indices are 1-based.

use std::collections::HashSet;

use crate::basis::Basis;
use crate::error::{BasisError, Result};
use crate::tensor::from_factors;

/// Number of subsystems of `b`: 1 for a plain leaf.
pub fn nsubsystems(b: &Basis) -> usize {
    b.nsubsystems()
}

/// Verify that every index lies in `1..=n` and none repeats.
///
/// # Example
/// ```
/// use qbases::check_indices;
///
/// assert!(check_indices(3, &[3, 1]).is_ok());
/// assert!(check_indices(3, &[4]).is_err());
/// assert!(check_indices(3, &[2, 2]).is_err());
/// ```
pub fn check_indices(n: usize, indices: &[usize]) -> Result<()> {
    let mut seen = HashSet::with_capacity(indices.len());
    for &index in indices {
        if index == 0 || index > n {
            return Err(BasisError::IndexOutOfRange {
                index,
                nsubsystems: n,
            });
        }
        if !seen.insert(index) {
            return Err(BasisError::DuplicateIndex { index });
        }
    }
    Ok(())
}

/// The indices in `1..=n` that are not named, in ascending order.
pub fn complement(n: usize, indices: &[usize]) -> Vec<usize> {
    let named: HashSet<usize> = indices.iter().copied().collect();
    (1..=n).filter(|i| !named.contains(i)).collect()
}

/// Trace out the named subsystems, keeping the rest in their original order.
///
/// Tracing out every subsystem is rejected.
pub fn ptrace(b: &Basis, indices: &[usize]) -> Result<Basis> {
    let n = b.nsubsystems();
    check_indices(n, indices)?;
    let kept = complement(n, indices);
    if kept.is_empty() {
        return Err(BasisError::FullTrace { nsubsystems: n });
    }
    reduced(b, &kept)
}

/// Keep only the named subsystems, in the order given by `indices`.
///
/// A single index returns that subsystem's basis directly.
pub fn reduced(b: &Basis, indices: &[usize]) -> Result<Basis> {
    if indices.is_empty() {
        return Err(BasisError::EmptyIndexSet { op: "reduced" });
    }
    let n = b.nsubsystems();
    check_indices(n, indices)?;
    let factors = indices
        .iter()
        .map(|&i| {
            b.subsystem(i).ok_or(BasisError::IndexOutOfRange {
                index: i,
                nsubsystems: n,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    from_factors(factors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leaf::{GenericBasis, Spin, SpinBasis};
    use crate::tensor::tensor_all;

    fn g(d: usize) -> Basis {
        GenericBasis::new(d).unwrap().into()
    }

    #[test]
    fn test_complement() {
        assert_eq!(complement(5, &[4, 2]), vec![1, 3, 5]);
        assert_eq!(complement(2, &[1, 2]), Vec::<usize>::new());
        assert_eq!(complement(3, &[]), vec![1, 2, 3]);
    }

    #[test]
    fn test_reduced_keeps_given_order() {
        let c = tensor_all([&g(2), &g(3), &g(4)]).unwrap();
        let r = reduced(&c, &[3, 1]).unwrap();
        assert_eq!(r, tensor_all([&g(4), &g(2)]).unwrap());
        assert_eq!(reduced(&c, &[2]).unwrap(), g(3));
    }

    #[test]
    fn test_reduced_empty_rejected() {
        let c = tensor_all([&g(2), &g(3)]).unwrap();
        assert!(matches!(
            reduced(&c, &[]),
            Err(BasisError::EmptyIndexSet { .. })
        ));
    }

    #[test]
    fn test_ptrace_full_trace_rejected() {
        let c = tensor_all([&g(2), &g(3)]).unwrap();
        assert!(matches!(
            ptrace(&c, &[2, 1]),
            Err(BasisError::FullTrace { nsubsystems: 2 })
        ));
        assert!(matches!(
            ptrace(&g(2), &[1]),
            Err(BasisError::FullTrace { nsubsystems: 1 })
        ));
    }

    #[test]
    fn test_ptrace_bad_indices() {
        let c = tensor_all([&g(2), &g(3), &g(4)]).unwrap();
        assert!(matches!(
            ptrace(&c, &[0]),
            Err(BasisError::IndexOutOfRange { index: 0, .. })
        ));
        assert!(matches!(
            ptrace(&c, &[1, 1]),
            Err(BasisError::DuplicateIndex { index: 1 })
        ));
    }

    #[test]
    fn test_ptrace_through_merged_spins() {
        let spins: Basis = SpinBasis::with_count(Spin::half(), 3).unwrap().into();
        let c = tensor_all([&spins, &g(5)]).unwrap();
        assert_eq!(c.nsubsystems(), 4);
        let traced = ptrace(&c, &[2]).unwrap();
        let two_spins: Basis = SpinBasis::with_count(Spin::half(), 2).unwrap().into();
        assert_eq!(traced, tensor_all([&two_spins, &g(5)]).unwrap());
        assert_eq!(ptrace(&c, &[1, 2, 3]).unwrap(), g(5));
    }
}
