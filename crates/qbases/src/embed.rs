//! Embedding operator pieces into a full composite system.
//!
//! Pieces are placed at named subsystems (or blocks of subsystems) and every
//! other subsystem is filled with an identity of the caller's operator type.
//! When every block is an ascending run of consecutive indices the result
//! is assembled in a single left-to-right tensor product. Otherwise the
//! pieces and fillers are tensored in a fixed order and the subsystems are
//! permuted back into natural order.

use std::collections::HashMap;

use tracing::debug;

use crate::basis::Basis;
use crate::check_mode::checks_enabled;
use crate::compat::{check_samebases, HasBases};
use crate::error::{BasisError, Result};
use crate::operator::AbstractOperator;
use crate::permute::sortperm;
use crate::subsystems::{check_indices, complement, reduced};

/// Where a piece in [`embed_sites`] acts.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Site {
    /// A single subsystem.
    Single(usize),
    /// Several subsystems acted on jointly, in the piece's own order.
    Joint(Vec<usize>),
}

impl Site {
    pub fn indices(&self) -> &[usize] {
        match self {
            Site::Single(i) => std::slice::from_ref(i),
            Site::Joint(block) => block,
        }
    }
}

impl From<usize> for Site {
    fn from(i: usize) -> Self {
        Site::Single(i)
    }
}

impl From<Vec<usize>> for Site {
    fn from(block: Vec<usize>) -> Self {
        Site::Joint(block)
    }
}

/// Bases a piece must have to fit its block.
struct Slot {
    basis_l: Basis,
    basis_r: Basis,
}

impl HasBases for Slot {
    fn basis_l(&self) -> &Basis {
        &self.basis_l
    }

    fn basis_r(&self) -> &Basis {
        &self.basis_r
    }
}

/// Embed pieces keyed by subsystem blocks into the system `basis_l ← basis_r`.
///
/// Each block names the subsystems (1-based) its piece acts on, in the
/// order of the piece's own factors. Blocks must be non-empty, and no
/// subsystem may be named twice. While checks are enabled, every piece must
/// live on exactly the reduced system bases of its block. An empty piece
/// list yields the identity on the full system.
pub fn embed<T: AbstractOperator>(
    basis_l: &Basis,
    basis_r: &Basis,
    pieces: &[(Vec<usize>, T)],
) -> Result<T> {
    let n = matching_subsystems(basis_l, basis_r)?;
    if pieces.is_empty() {
        return Ok(T::identity(basis_l, basis_r)?);
    }
    if pieces.iter().any(|(block, _)| block.is_empty()) {
        return Err(BasisError::EmptyIndexSet { op: "embed" });
    }
    let named: Vec<usize> = pieces
        .iter()
        .flat_map(|(block, _)| block.iter().copied())
        .collect();
    check_indices(n, &named)?;
    for (block, op) in pieces {
        check_piece(basis_l, basis_r, block, op)?;
    }

    let fillers = complement(n, &named);
    if pieces.iter().all(|(block, _)| is_ascending_run(block)) {
        debug!(
            nsubsystems = n,
            pieces = pieces.len(),
            "embed: contiguous blocks, tensoring in place"
        );
        let starts: HashMap<usize, &(Vec<usize>, T)> =
            pieces.iter().map(|piece| (piece.0[0], piece)).collect();
        let mut factors = Vec::with_capacity(pieces.len() + fillers.len());
        let mut i = 1;
        while i <= n {
            match starts.get(&i) {
                Some((block, op)) => {
                    factors.push(op.clone());
                    i += block.len();
                }
                None => {
                    factors.push(identity_at(basis_l, basis_r, i)?);
                    i += 1;
                }
            }
        }
        return tensor_ops(&factors);
    }

    debug!(
        nsubsystems = n,
        pieces = pieces.len(),
        "embed: scattered blocks, tensoring then permuting"
    );
    let mut factors: Vec<T> = pieces.iter().map(|(_, op)| op.clone()).collect();
    for &i in &fillers {
        factors.push(identity_at(basis_l, basis_r, i)?);
    }
    let order: Vec<usize> = named.iter().chain(fillers.iter()).copied().collect();
    let perm = sortperm(&order);
    Ok(tensor_ops(&factors)?.permute_systems(&perm)?)
}

/// Embed a single piece at subsystem `index`.
pub fn embed_at<T: AbstractOperator>(
    basis_l: &Basis,
    basis_r: &Basis,
    index: usize,
    op: &T,
) -> Result<T> {
    embed(basis_l, basis_r, &[(vec![index], op.clone())])
}

/// Embed a list of pieces given as parallel site and operator lists.
///
/// Single-site pieces are combined into one tensor product with identity
/// fillers. Each joint piece is embedded on its own, and the results are
/// composed as `joint_1 * … * joint_k * singles`, so for non-square systems
/// `basis_r` must be multiplicable with `basis_l` whenever joint pieces are
/// present.
pub fn embed_sites<T: AbstractOperator>(
    basis_l: &Basis,
    basis_r: &Basis,
    sites: &[Site],
    ops: &[T],
) -> Result<T> {
    if sites.len() != ops.len() {
        return Err(BasisError::PieceCountMismatch {
            indices: sites.len(),
            operators: ops.len(),
        });
    }
    let n = matching_subsystems(basis_l, basis_r)?;
    if sites.is_empty() {
        return Ok(T::identity(basis_l, basis_r)?);
    }
    if sites.iter().any(|site| site.indices().is_empty()) {
        return Err(BasisError::EmptyIndexSet { op: "embed" });
    }
    let named: Vec<usize> = sites
        .iter()
        .flat_map(|site| site.indices().iter().copied())
        .collect();
    check_indices(n, &named)?;

    let mut embedded = Vec::new();
    let mut singles = Vec::new();
    for (site, op) in sites.iter().zip(ops) {
        match site {
            Site::Single(i) => singles.push((vec![*i], op.clone())),
            Site::Joint(block) => {
                embedded.push(embed(basis_l, basis_r, &[(block.clone(), op.clone())])?)
            }
        }
    }
    if !singles.is_empty() {
        embedded.push(embed(basis_l, basis_r, &singles)?);
    }

    let mut iter = embedded.into_iter();
    let first = iter
        .next()
        .ok_or(BasisError::EmptyIndexSet { op: "embed" })?;
    iter.try_fold(first, |acc, op| Ok(acc.compose(&op)?))
}

fn matching_subsystems(basis_l: &Basis, basis_r: &Basis) -> Result<usize> {
    let (left, right) = (basis_l.nsubsystems(), basis_r.nsubsystems());
    if left != right {
        return Err(BasisError::SubsystemCountMismatch { left, right });
    }
    Ok(left)
}

fn check_piece<T: HasBases>(
    basis_l: &Basis,
    basis_r: &Basis,
    block: &[usize],
    op: &T,
) -> Result<()> {
    if !checks_enabled() {
        return Ok(());
    }
    let slot = Slot {
        basis_l: reduced(basis_l, block)?,
        basis_r: reduced(basis_r, block)?,
    };
    check_samebases(op, &slot)
}

fn is_ascending_run(block: &[usize]) -> bool {
    block.windows(2).all(|w| w[1] == w[0] + 1)
}

fn identity_at<T: AbstractOperator>(basis_l: &Basis, basis_r: &Basis, i: usize) -> Result<T> {
    let n = basis_l.nsubsystems();
    let out_of_range = || BasisError::IndexOutOfRange {
        index: i,
        nsubsystems: n,
    };
    let left = basis_l.subsystem(i).ok_or_else(out_of_range)?;
    let right = basis_r.subsystem(i).ok_or_else(out_of_range)?;
    Ok(T::identity(&left, &right)?)
}

fn tensor_ops<T: AbstractOperator>(factors: &[T]) -> Result<T> {
    let (first, rest) = factors
        .split_first()
        .ok_or(BasisError::EmptyOperands { op: "tensor" })?;
    rest.iter()
        .try_fold(first.clone(), |acc, op| Ok(acc.tensor(op)?))
}
