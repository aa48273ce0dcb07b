mod common;

use common::{b123, g};
use qbases::{
    addible, directsum_all, multiplicable, tensor, tensor_all, tensor_pow, Basis, BasisError,
    CompositeBasis, Dim, ErrorKind, FockBasis, GenericBasis, NLevelBasis, PauliBasis, Spin,
    SpinBasis, SumBasis,
};

#[test]
fn test_shapes_of_scenario_bases() {
    let (b1, b2, _) = b123();
    let t = tensor(&b1, &b2).unwrap();
    assert_eq!(t.shape(), vec![Dim::Finite(5), Dim::Finite(2)]);
    let t3 = tensor_all([&b1, &b1, &b2]).unwrap();
    assert_eq!(
        t3.shape(),
        vec![Dim::Finite(5), Dim::Finite(5), Dim::Finite(2)]
    );
    assert_eq!(t3.dimension(), 50);
}

#[test]
fn test_associativity_with_mixed_kinds() {
    let s: Basis = SpinBasis::new(Spin::half()).into();
    let f: Basis = FockBasis::new(3).unwrap().into();
    let n: Basis = NLevelBasis::new(4).unwrap().into();
    let cases = [
        (s.clone(), s.clone(), s.clone()),
        (s.clone(), f.clone(), s.clone()),
        (f.clone(), s.clone(), s.clone()),
        (n.clone(), f.clone(), s.clone()),
    ];
    for (a, b, c) in cases {
        let left = tensor(&tensor(&a, &b).unwrap(), &c).unwrap();
        let right = tensor(&a, &tensor(&b, &c).unwrap()).unwrap();
        assert_eq!(left, right);
        let expected = Dim::checked_product([a.dimension(), b.dimension(), c.dimension()]);
        assert_eq!(Some(left.dimension()), expected);
    }
}

#[test]
fn test_composite_tensor_concatenates() {
    let ab = tensor(&g(2), &g(3)).unwrap();
    let cd = tensor(&g(4), &g(5)).unwrap();
    let abcd = tensor(&ab, &cd).unwrap();
    let composite = abcd.as_composite().unwrap();
    assert_eq!(composite.bases(), &[g(2), g(3), g(4), g(5)]);
    assert_eq!(abcd.nsubsystems(), 4);
}

#[test]
fn test_boundary_merge_between_composites() {
    let s: Basis = SpinBasis::new(Spin::half()).into();
    let left = tensor(&g(3), &s).unwrap();
    let right = tensor(&s, &g(4)).unwrap();
    let joined = tensor(&left, &right).unwrap();
    let two_spins: Basis = SpinBasis::with_count(Spin::half(), 2).unwrap().into();
    assert_eq!(joined.as_composite().unwrap().bases(), &[g(3), two_spins, g(4)]);
    assert_eq!(joined.nsubsystems(), 4);
}

#[test]
fn test_different_spins_stay_separate() {
    let half: Basis = SpinBasis::new(Spin::half()).into();
    let one: Basis = SpinBasis::new(Spin::integer(1)).into();
    let t = tensor(&half, &one).unwrap();
    assert!(t.is_composite());
    assert_eq!(t.dimension(), 6);
}

#[test]
fn test_pow_scenarios() {
    let (b1, _, _) = b123();
    let err = tensor_pow(&b1, 0).unwrap_err();
    assert!(matches!(err, BasisError::InvalidExponent(0)));
    assert_eq!(err.kind(), ErrorKind::InvalidParameter);
    let none: Vec<&Basis> = Vec::new();
    assert_eq!(tensor_all(none).unwrap_err().kind(), ErrorKind::Arity);
    assert_eq!(
        tensor_pow(&b1, 3).unwrap(),
        tensor_all([&b1, &b1, &b1]).unwrap()
    );
    assert_eq!(tensor_pow(&b1, 1).unwrap(), b1);
}

#[test]
fn test_pauli_pow() {
    let p: Basis = PauliBasis::new(1).unwrap().into();
    let p4 = tensor_pow(&p, 4).unwrap();
    assert_eq!(p4, PauliBasis::new(4).unwrap().into());
    assert_eq!(p4.dimension(), 256);
    assert_eq!(p4.nsubsystems(), 4);
}

#[test]
fn test_infinite_dimension_propagates() {
    let inf: Basis = GenericBasis::infinite().into();
    let t = tensor(&inf, &g(3)).unwrap();
    assert_eq!(t.dimension(), Dim::Infinite);
    assert_eq!(t.shape(), vec![Dim::Infinite, Dim::Finite(3)]);
}

#[test]
fn test_explicit_composite_never_wraps_a_lone_element() {
    assert_eq!(Basis::composite([g(4)]).unwrap(), g(4));

    let s: Basis = SpinBasis::new(Spin::half()).into();
    let explicit = Basis::composite([s.clone(), s.clone()]).unwrap();
    let product = tensor(&s, &s).unwrap();
    assert_eq!(explicit, product);
    assert!(multiplicable(&explicit, &product));
    assert!(addible(&explicit, &product));

    let none: Vec<Basis> = Vec::new();
    assert_eq!(Basis::composite(none).unwrap_err().kind(), ErrorKind::Arity);
}

#[test]
fn test_composite_element_bookkeeping() {
    let s: Basis = SpinBasis::new(Spin::half()).into();
    let c = Basis::composite([s.clone(), s.clone(), g(3), s.clone()]).unwrap();
    let comp: &CompositeBasis = c.as_composite().unwrap();
    assert!(!comp.is_empty());
    assert_eq!(comp.len(), 3);
    assert_eq!(comp.lengths(), &[2, 1, 1]);
    assert_eq!(comp.lengths().iter().sum::<usize>(), c.nsubsystems());
    assert_eq!(
        c.subsystem_shape(),
        vec![Dim::Finite(2), Dim::Finite(2), Dim::Finite(3), Dim::Finite(2)]
    );
    assert_eq!(c.shape().len(), comp.len());
}

#[test]
fn test_composite_and_sum_never_equal() {
    let (b1, b2, _) = b123();
    let c = Basis::composite([b1.clone(), b2.clone()]).unwrap();
    let sum = SumBasis::new([b1.clone(), b2.clone()]).unwrap();
    assert!(!sum.is_empty());
    assert_eq!(sum.len(), 2);
    let s: Basis = sum.into();
    assert_eq!(c.shape(), s.shape());
    assert_ne!(c, s);
    assert_eq!(s.dimension(), 7);
    assert_eq!(directsum_all([&b1, &b2]).unwrap(), s);
}

#[test]
fn test_empty_tensor_is_arity_error() {
    let none: Vec<&Basis> = Vec::new();
    assert!(matches!(
        tensor_all(none),
        Err(BasisError::EmptyOperands { .. })
    ));
}
