//! Direct-sum aggregation.

use std::hash::{Hash, Hasher};

use crate::basis::Basis;
use crate::dim::Dim;
use crate::error::{BasisError, Result};

/// Direct sum (block-diagonal combination) of an ordered sequence of bases.
///
/// Nested sums are flattened since the direct sum is associative. A sum is
/// a single subsystem as far as the tensor algebra is concerned, and it is
/// never equal to a [`crate::CompositeBasis`], even over the same factors.
#[derive(Debug, Clone)]
pub struct SumBasis {
    bases: Vec<Basis>,
    shape: Vec<Dim>,
    dimension: Dim,
}

impl SumBasis {
    /// Build a direct sum from a non-empty sequence of summands.
    pub fn new<I>(bases: I) -> Result<Self>
    where
        I: IntoIterator<Item = Basis>,
    {
        let mut flat = Vec::new();
        for b in bases {
            match b {
                Basis::Sum(s) => flat.extend(s.bases),
                other => flat.push(other),
            }
        }
        if flat.is_empty() {
            return Err(BasisError::EmptyOperands { op: "SumBasis" });
        }
        let shape: Vec<Dim> = flat.iter().map(Basis::dimension).collect();
        let dimension = Dim::checked_sum(shape.iter().copied())
            .ok_or(BasisError::DimensionOverflow("SumBasis"))?;
        Ok(Self {
            bases: flat,
            shape,
            dimension,
        })
    }

    /// The summands, in order.
    pub fn bases(&self) -> &[Basis] {
        &self.bases
    }

    /// Dimension of each summand.
    pub fn shape(&self) -> &[Dim] {
        &self.shape
    }

    pub fn len(&self) -> usize {
        self.bases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }

    pub fn dimension(&self) -> Dim {
        self.dimension
    }
}

impl PartialEq for SumBasis {
    fn eq(&self, other: &Self) -> bool {
        self.bases == other.bases
    }
}

impl Eq for SumBasis {}

impl Hash for SumBasis {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bases.hash(state);
    }
}
