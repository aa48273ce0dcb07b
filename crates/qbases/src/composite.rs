//! Tensor-product aggregation.

use std::hash::{Hash, Hasher};

use crate::basis::Basis;
use crate::dim::Dim;
use crate::error::{BasisError, Result};
use crate::merge::merge;

/// Flatten one level of composite nesting and fuse adjacent mergeable
/// leaves, left to right.
///
/// The output never contains a [`Basis::Composite`] and never contains two
/// adjacent elements for which a merge rule fires.
pub fn normalize<I>(factors: I) -> Result<Vec<Basis>>
where
    I: IntoIterator<Item = Basis>,
{
    let mut out: Vec<Basis> = Vec::new();
    for factor in factors {
        match factor {
            Basis::Composite(c) => {
                for element in c.bases {
                    push_merged(&mut out, element)?;
                }
            }
            other => push_merged(&mut out, other)?,
        }
    }
    Ok(out)
}

fn push_merged(out: &mut Vec<Basis>, next: Basis) -> Result<()> {
    if let Some(last) = out.last_mut() {
        if let Some(merged) = merge(last, &next)? {
            *last = merged;
            return Ok(());
        }
    }
    out.push(next);
    Ok(())
}

/// Tensor product of an ordered sequence of bases.
///
/// Elements are normalized on construction (see [`normalize`]), so a
/// composite never directly contains another composite. Subsystem indices
/// run over the atomic factors of all elements: an element that is itself
/// a merged leaf (e.g. three spin-1/2s) contributes several subsystems.
#[derive(Debug, Clone)]
pub struct CompositeBasis {
    pub(crate) bases: Vec<Basis>,
    shape: Vec<Dim>,
    lengths: Vec<usize>,
    nsubsystems: usize,
    dimension: Dim,
}

impl CompositeBasis {
    /// Build a composite from a non-empty sequence of sub-bases.
    ///
    /// Callers go through [`Basis::composite`], which never wraps a lone
    /// element.
    pub(crate) fn new<I>(bases: I) -> Result<Self>
    where
        I: IntoIterator<Item = Basis>,
    {
        let bases = normalize(bases)?;
        if bases.is_empty() {
            return Err(BasisError::EmptyOperands {
                op: "CompositeBasis",
            });
        }
        let shape: Vec<Dim> = bases.iter().map(Basis::dimension).collect();
        let dimension = Dim::checked_product(shape.iter().copied())
            .ok_or(BasisError::DimensionOverflow("CompositeBasis"))?;
        let lengths: Vec<usize> = bases.iter().map(Basis::nsubsystems).collect();
        let nsubsystems = lengths.iter().sum();
        Ok(Self {
            bases,
            shape,
            lengths,
            nsubsystems,
            dimension,
        })
    }

    /// The normalized elements.
    pub fn bases(&self) -> &[Basis] {
        &self.bases
    }

    /// Dimension of each element.
    ///
    /// A merged leaf is one element, so for `Spin(1/2) ⊗ Spin(1/2) ⊗ G(3)`
    /// this is `[4, 3]` while there are three subsystems. Per-subsystem
    /// dimensions come from [`Basis::subsystem_shape`].
    pub fn shape(&self) -> &[Dim] {
        &self.shape
    }

    /// Subsystem count of each element.
    pub fn lengths(&self) -> &[usize] {
        &self.lengths
    }

    /// Number of elements (not subsystems).
    pub fn len(&self) -> usize {
        self.bases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }

    pub fn nsubsystems(&self) -> usize {
        self.nsubsystems
    }

    pub fn dimension(&self) -> Dim {
        self.dimension
    }

    /// The `k`-th subsystem factor (1-based).
    pub fn subsystem(&self, k: usize) -> Option<Basis> {
        let (element, inner) = self.locate(k)?;
        self.bases[element].subsystem(inner)
    }

    /// Map a 1-based subsystem index to `(element position, 1-based index
    /// inside that element)`.
    fn locate(&self, k: usize) -> Option<(usize, usize)> {
        if k == 0 {
            return None;
        }
        let mut remaining = k;
        for (pos, &len) in self.lengths.iter().enumerate() {
            if remaining <= len {
                return Some((pos, remaining));
            }
            remaining -= len;
        }
        None
    }
}

impl PartialEq for CompositeBasis {
    fn eq(&self, other: &Self) -> bool {
        self.bases == other.bases
    }
}

impl Eq for CompositeBasis {}

impl Hash for CompositeBasis {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bases.hash(state);
    }
}
