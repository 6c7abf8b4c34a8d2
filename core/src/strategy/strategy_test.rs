//! Unit tests for the evaluation strategies.

use core::cell::Cell;

use super::*;
use crate::{
    ScenarioOptions,
    expr::ops::{Add, FnOp},
    test_utils::init_test_logging,
    validate::{DEFAULT_MARGIN, check_equivalent},
};
use pretty_assertions::assert_eq;

fn five_element_inputs() -> KernelInputs {
    let radii = Field::from_vec(vec![0.12, 0.57, 0.93, 0.0, 0.31]);
    KernelInputs::from_radii(&radii)
}

#[test]
fn test_all_strategies_match_closed_form() {
    init_test_logging();
    let inputs = five_element_inputs();

    for kind in StrategyKind::ALL {
        let vf = kind.evaluate(&inputs).unwrap();
        assert_eq!(vf.len(), 5, "{kind}");
        for i in 0..5 {
            let expected = inputs.expected(i);
            assert!(
                (vf[i] - expected).abs() <= DEFAULT_MARGIN,
                "{kind}: element {i} is {}, expected {expected}",
                vf[i]
            );
        }
    }
}

#[test]
fn test_lazy_matches_eager() {
    let inputs = KernelInputs::random(&ScenarioOptions {
        len: 257,
        ..ScenarioOptions::default()
    });
    let eager = Eager.evaluate(&inputs).unwrap();

    Lazy.with_result(&inputs, |lazy| {
        assert_eq!(check_equivalent(&eager, lazy, DEFAULT_MARGIN), Ok(()));
    })
    .unwrap();
}

#[test]
fn test_pairwise_matches_lazy_bit_for_bit() {
    // Same operators in the same order, so results are identical.
    let inputs = KernelInputs::random(&ScenarioOptions {
        len: 64,
        seed: 9,
        ..ScenarioOptions::default()
    });
    let lazy = Lazy.evaluate(&inputs).unwrap();
    let pairwise = Pairwise.evaluate(&inputs).unwrap();

    let lazy_bits: Vec<u64> = lazy.iter().map(f64::to_bits).collect();
    let pairwise_bits: Vec<u64> = pairwise.iter().map(f64::to_bits).collect();
    assert_eq!(lazy_bits, pairwise_bits);
}

#[test]
fn test_pairwise_view_is_indexable() {
    let inputs = five_element_inputs();
    Pairwise
        .with_result(&inputs, |view| {
            assert_eq!(view.len(), 5);
            for i in (0..5).rev() {
                assert_eq!(view.at(i), inputs.expected(i));
            }
            assert_eq!(view.get(5), None);
        })
        .unwrap();
}

#[test]
fn test_element_reads_single_index() {
    let inputs = five_element_inputs();
    for kind in StrategyKind::ALL {
        assert_eq!(
            kind.element(&inputs, 3).unwrap(),
            Some(inputs.expected(3)),
            "{kind}"
        );
        assert_eq!(kind.element(&inputs, 5).unwrap(), None, "{kind}");
    }
}

#[test]
fn test_mismatched_inputs_are_rejected_by_every_strategy() {
    let inputs = KernelInputs {
        rho: Field::with_value(5, 1.0),
        m: Field::with_value(5, 0.5),
        w: Field::with_value(4, 1.0),
    };
    for kind in StrategyKind::ALL {
        assert_eq!(
            kind.evaluate(&inputs),
            Err(ExprError::SizeMismatch { left: 5, right: 4 }),
            "{kind}"
        );
        assert_eq!(
            kind.with_result(&inputs, |_| ()),
            Err(ExprError::SizeMismatch { left: 5, right: 4 }),
            "{kind}"
        );
    }
}

#[test]
fn test_empty_inputs() {
    let inputs = KernelInputs::from_radii(&Field::from_vec(vec![]));
    assert!(inputs.is_empty());
    for kind in StrategyKind::ALL {
        assert!(kind.evaluate(&inputs).unwrap().is_empty(), "{kind}");
    }
}

#[test]
fn test_names() {
    let names: Vec<String> = StrategyKind::ALL.iter().map(|k| k.to_string()).collect();
    assert_eq!(names, vec!["eager", "lazy", "pairwise"]);
    assert_eq!(Eager.name(), StrategyKind::Eager.name());
}

#[test]
fn test_pairwise_rejects_mismatched_operands() {
    let a = Field::with_value(3, 1.0);
    let b = Field::with_value(2, 1.0);
    assert_eq!(
        pairwise(&a, &b, Add).err(),
        Some(ExprError::SizeMismatch { left: 3, right: 2 })
    );
}

#[test]
fn test_pairwise_read_applies_op_once_per_level() {
    let calls = Cell::new(0);
    let counting_add = |x: f64, y: f64| {
        calls.set(calls.get() + 1);
        x + y
    };
    let a = Field::from_fn(1000, |i| i as f64);
    let b = Field::with_value(1000, 1.0);

    let sum = pairwise(&a, &b, FnOp(counting_add)).unwrap();
    assert_eq!(sum.at(999), 1000.0);
    assert_eq!(calls.get(), 1);

    calls.set(0);
    let nested = pairwise(sum, &b, FnOp(counting_add)).unwrap();
    assert_eq!(nested.at(500), 502.0);
    assert_eq!(nested.depth(), 2);
    assert_eq!(calls.get(), 2);
}

#[test]
fn test_pairwise_iter_streams_each_element_once() {
    let calls = Cell::new(0);
    let a = Field::from_fn(4, |i| i as f64);
    let b = Field::with_value(4, 2.0);
    let product = pairwise(
        &a,
        &b,
        FnOp(|x: f64, y: f64| {
            calls.set(calls.get() + 1);
            x * y
        }),
    )
    .unwrap();

    let streamed: Vec<f64> = product.iter().collect();
    assert_eq!(streamed, vec![0.0, 2.0, 4.0, 6.0]);
    assert_eq!(calls.get(), 4);
}
