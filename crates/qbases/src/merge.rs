//! Merge rules applied when two leaves become adjacent in a tensor product.
//!
//! Rules are looked up by the ordered pair of [`BasisKind`]s. A rule may
//! decline (return `Ok(None)`), in which case the operands stay separate
//! elements of a [`crate::CompositeBasis`]. New kinds that should fuse under
//! the tensor product add an entry to [`MERGE_RULES`].

use crate::basis::{Basis, BasisKind};
use crate::error::Result;
use crate::leaf::{PauliBasis, SpinBasis};

/// Signature of a merge rule.
pub type MergeFn = fn(&Basis, &Basis) -> Result<Option<Basis>>;

/// A registered merge rule for an ordered pair of kinds.
#[derive(Clone, Copy)]
pub struct MergeRule {
    pub left: BasisKind,
    pub right: BasisKind,
    pub apply: MergeFn,
}

/// All registered merge rules.
pub const MERGE_RULES: &[MergeRule] = &[
    MergeRule {
        left: BasisKind::Spin,
        right: BasisKind::Spin,
        apply: merge_spins,
    },
    MergeRule {
        left: BasisKind::Pauli,
        right: BasisKind::Pauli,
        apply: merge_paulis,
    },
];

/// Try to fuse `a ⊗ b` into a single leaf.
///
/// Returns `Ok(None)` when no rule applies. Errors only when the merged
/// leaf would overflow its dimension.
pub fn merge(a: &Basis, b: &Basis) -> Result<Option<Basis>> {
    let (left, right) = (a.kind(), b.kind());
    match MERGE_RULES
        .iter()
        .find(|rule| rule.left == left && rule.right == right)
    {
        Some(rule) => (rule.apply)(a, b),
        None => Ok(None),
    }
}

fn merge_spins(a: &Basis, b: &Basis) -> Result<Option<Basis>> {
    let (Basis::Spin(a), Basis::Spin(b)) = (a, b) else {
        return Ok(None);
    };
    if a.spin() != b.spin() {
        return Ok(None);
    }
    let merged = SpinBasis::with_count(a.spin(), a.count() + b.count())?;
    Ok(Some(merged.into()))
}

fn merge_paulis(a: &Basis, b: &Basis) -> Result<Option<Basis>> {
    let (Basis::Pauli(a), Basis::Pauli(b)) = (a, b) else {
        return Ok(None);
    };
    let merged = PauliBasis::new(a.qubits() + b.qubits())?;
    Ok(Some(merged.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leaf::{GenericBasis, Spin};

    #[test]
    fn test_same_spin_merges() {
        let a: Basis = SpinBasis::new(Spin::half()).into();
        let b: Basis = SpinBasis::with_count(Spin::half(), 2).unwrap().into();
        let merged = merge(&a, &b).unwrap().unwrap();
        assert_eq!(merged, SpinBasis::with_count(Spin::half(), 3).unwrap().into());
    }

    #[test]
    fn test_different_spin_declines() {
        let a: Basis = SpinBasis::new(Spin::half()).into();
        let b: Basis = SpinBasis::new(Spin::integer(1)).into();
        assert!(merge(&a, &b).unwrap().is_none());
    }

    #[test]
    fn test_paulis_merge() {
        let a: Basis = PauliBasis::new(2).unwrap().into();
        let b: Basis = PauliBasis::new(1).unwrap().into();
        assert_eq!(
            merge(&a, &b).unwrap(),
            Some(PauliBasis::new(3).unwrap().into())
        );
    }

    #[test]
    fn test_unregistered_pair() {
        let g: Basis = GenericBasis::new(2).unwrap().into();
        let p: Basis = PauliBasis::new(1).unwrap().into();
        assert!(merge(&g, &g).unwrap().is_none());
        assert!(merge(&g, &p).unwrap().is_none());
    }
}
