//! The closed set of basis kinds.

use crate::composite::CompositeBasis;
use crate::dim::Dim;
use crate::leaf::{FockBasis, GenericBasis, NLevelBasis, PauliBasis, SpinBasis};
use crate::error::Result;
use crate::sum::SumBasis;
use crate::tensor::from_factors;

/// Discriminant of [`Basis`], used as the key of the merge-rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BasisKind {
    Generic,
    Fock,
    NLevel,
    Spin,
    Pauli,
    Composite,
    Sum,
}

/// A description of a Hilbert space's structure.
///
/// Equality is structural: two bases are equal iff they are the same kind
/// with equal defining parameters (for composites and sums, pairwise equal
/// sub-bases in the same order).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Basis {
    Generic(GenericBasis),
    Fock(FockBasis),
    NLevel(NLevelBasis),
    Spin(SpinBasis),
    Pauli(PauliBasis),
    Composite(CompositeBasis),
    Sum(SumBasis),
}

impl Basis {
    /// Tensor product of an ordered, non-empty sequence of bases.
    ///
    /// Equivalent to folding [`crate::tensor`] over `bases`: nested
    /// composites are flattened, neighbours merge, and a sequence that
    /// collapses to one element yields that element rather than a
    /// one-element composite.
    pub fn composite<I>(bases: I) -> Result<Basis>
    where
        I: IntoIterator<Item = Basis>,
    {
        from_factors(bases)
    }

    pub fn kind(&self) -> BasisKind {
        match self {
            Basis::Generic(_) => BasisKind::Generic,
            Basis::Fock(_) => BasisKind::Fock,
            Basis::NLevel(_) => BasisKind::NLevel,
            Basis::Spin(_) => BasisKind::Spin,
            Basis::Pauli(_) => BasisKind::Pauli,
            Basis::Composite(_) => BasisKind::Composite,
            Basis::Sum(_) => BasisKind::Sum,
        }
    }

    /// Total dimension of the space.
    pub fn dimension(&self) -> Dim {
        match self {
            Basis::Generic(b) => b.dimension(),
            Basis::Fock(b) => b.dimension(),
            Basis::NLevel(b) => b.dimension(),
            Basis::Spin(b) => b.dimension(),
            Basis::Pauli(b) => b.dimension(),
            Basis::Composite(b) => b.dimension(),
            Basis::Sum(b) => b.dimension(),
        }
    }

    /// Number of tensor factors this basis decomposes into.
    ///
    /// 1 for plain leaves and direct sums; the multiplicity for merged
    /// spin/Pauli leaves; the total over all elements for composites.
    pub fn nsubsystems(&self) -> usize {
        match self {
            Basis::Spin(b) => b.count(),
            Basis::Pauli(b) => b.qubits(),
            Basis::Composite(b) => b.nsubsystems(),
            _ => 1,
        }
    }

    /// The `k`-th subsystem factor (1-based), or `None` when out of range.
    pub fn subsystem(&self, k: usize) -> Option<Basis> {
        if k == 0 || k > self.nsubsystems() {
            return None;
        }
        match self {
            Basis::Spin(b) => Some(Basis::Spin(SpinBasis::new(b.spin()))),
            // a single qubit always fits
            Basis::Pauli(_) => PauliBasis::new(1).ok().map(Basis::Pauli),
            Basis::Composite(b) => b.subsystem(k),
            _ => Some(self.clone()),
        }
    }

    /// All subsystem factors in order; `subsystems().len() == nsubsystems()`.
    pub fn subsystems(&self) -> Vec<Basis> {
        (1..=self.nsubsystems())
            .filter_map(|k| self.subsystem(k))
            .collect()
    }

    /// Dimensions of the immediate elements: the element shape for
    /// composites and sums, `[dimension]` otherwise.
    pub fn shape(&self) -> Vec<Dim> {
        match self {
            Basis::Composite(b) => b.shape().to_vec(),
            Basis::Sum(b) => b.shape().to_vec(),
            _ => vec![self.dimension()],
        }
    }

    /// Dimension of every subsystem, in order;
    /// `subsystem_shape().len() == nsubsystems()`.
    pub fn subsystem_shape(&self) -> Vec<Dim> {
        self.subsystems().iter().map(Basis::dimension).collect()
    }

    pub fn is_composite(&self) -> bool {
        matches!(self, Basis::Composite(_))
    }

    pub fn as_composite(&self) -> Option<&CompositeBasis> {
        match self {
            Basis::Composite(b) => Some(b),
            _ => None,
        }
    }
}

macro_rules! impl_from_basis {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for Basis {
                fn from(b: $ty) -> Self {
                    Basis::$variant(b)
                }
            }
        )*
    };
}

impl_from_basis!(
    Generic(GenericBasis),
    Fock(FockBasis),
    NLevel(NLevelBasis),
    Spin(SpinBasis),
    Pauli(PauliBasis),
    Composite(CompositeBasis),
    Sum(SumBasis),
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leaf::Spin;

    #[test]
    fn test_leaf_is_self_indexing() {
        let b: Basis = GenericBasis::new(5).unwrap().into();
        assert_eq!(b.nsubsystems(), 1);
        assert_eq!(b.subsystem(1), Some(b.clone()));
        assert_eq!(b.subsystem(2), None);
        assert_eq!(b.subsystem(0), None);
        assert_eq!(b.shape(), vec![Dim::Finite(5)]);
    }

    #[test]
    fn test_merged_spin_subsystems() {
        let b: Basis = SpinBasis::with_count(Spin::half(), 3).unwrap().into();
        assert_eq!(b.nsubsystems(), 3);
        let single: Basis = SpinBasis::new(Spin::half()).into();
        assert_eq!(b.subsystems(), vec![single.clone(), single.clone(), single]);
    }

    #[test]
    fn test_subsystem_shape_resolves_merged_leaves() {
        let spins: Basis = SpinBasis::with_count(Spin::half(), 2).unwrap().into();
        let g3: Basis = GenericBasis::new(3).unwrap().into();
        let c = Basis::composite([spins, g3]).unwrap();
        assert_eq!(c.shape(), vec![Dim::Finite(4), Dim::Finite(3)]);
        assert_eq!(
            c.subsystem_shape(),
            vec![Dim::Finite(2), Dim::Finite(2), Dim::Finite(3)]
        );
        assert_eq!(c.subsystem_shape().len(), c.nsubsystems());
    }

    #[test]
    fn test_composite_constructor_matches_tensor() {
        let s: Basis = SpinBasis::new(Spin::half()).into();
        let explicit = Basis::composite([s.clone(), s.clone()]).unwrap();
        let product = crate::tensor::tensor(&s, &s).unwrap();
        assert_eq!(explicit, product);
        assert!(!explicit.is_composite());
        assert!(crate::compat::multiplicable(&explicit, &product));
    }

    #[test]
    fn test_different_kinds_never_equal() {
        let g: Basis = GenericBasis::new(3).unwrap().into();
        let n: Basis = NLevelBasis::new(3).unwrap().into();
        let f: Basis = FockBasis::new(2).unwrap().into();
        assert_eq!(g.dimension(), n.dimension());
        assert_ne!(g, n);
        assert_ne!(n, f);
    }
}
