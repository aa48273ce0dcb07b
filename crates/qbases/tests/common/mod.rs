#![allow(dead_code)]

use qbases::{Basis, GenericBasis};

/// Generic basis of dimension `d`.
pub fn g(d: usize) -> Basis {
    GenericBasis::new(d).unwrap().into()
}

/// The `b1, b2, b3` bases of dimensions 5, 2, 6.
pub fn b123() -> (Basis, Basis, Basis) {
    (g(5), g(2), g(6))
}
