//! Benchmarks comparing eager, lazy-node and pairwise-iterator evaluation.
//!
//! Run with: `cargo bench` in the core/ directory.
//!
//! Benchmark groups:
//! 1. evaluate: Builds the kernel expression and materializes the result
//! 2. single_element: Builds the kernel expression and reads one element
//! 3. chain_depth: Reads every element of arena chains of increasing depth

use bumpalo::Bump;
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use fieldexpr_core::{
    Field, Operand, ScenarioOptions,
    expr::{DynOperand, ExprArena, ops::Add},
    kernel::KernelInputs,
    strategy::{Strategy, StrategyKind},
};
use pprof::criterion::{Output, PProfProfiler};

/// Benchmark: full evaluation into a result field.
///
/// The eager strategy pays for five intermediate fields on top of the result.
fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");

    for len in [5, 64, 1024, 16384] {
        group.throughput(Throughput::Elements(len as u64));
        let inputs = KernelInputs::random(&ScenarioOptions {
            len,
            ..ScenarioOptions::default()
        });

        for kind in StrategyKind::ALL {
            group.bench_with_input(BenchmarkId::new(kind.name(), len), &inputs, |b, inputs| {
                b.iter(|| {
                    let vf = kind.evaluate(black_box(inputs)).expect("Evaluation failed");
                    black_box(vf)
                });
            });
        }
    }

    group.finish();
}

/// Benchmark: reading a single element.
///
/// Deferred strategies only compute the requested element; the eager one
/// still computes every element of every intermediate.
fn bench_single_element(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_element");
    let len = 16384;
    let inputs = KernelInputs::random(&ScenarioOptions {
        len,
        ..ScenarioOptions::default()
    });

    for kind in StrategyKind::ALL {
        group.bench_function(kind.name(), |b| {
            b.iter(|| {
                let value = kind
                    .element(black_box(&inputs), black_box(len / 2))
                    .expect("Evaluation failed");
                black_box(value)
            });
        });
    }

    group.finish();
}

/// Benchmark: full reads of `x + 1 + 1 + ... + 1` built in an arena.
///
/// Cost grows with `len * depth` since nodes do not cache.
fn bench_chain_depth(c: &mut Criterion) {
    let mut group = c.benchmark_group("chain_depth");
    let len = 1024;

    for depth in [1, 8, 64, 256] {
        group.throughput(Throughput::Elements((len * depth) as u64));

        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            let arena = Bump::new();
            let exprs = ExprArena::new(&arena);
            let one = Field::with_value(len, 1.0);
            let one: &DynOperand<'_, f64> = &one;
            let chain = exprs
                .fold(one, std::iter::repeat(one).take(depth), Add)
                .expect("Chain construction failed");

            b.iter(|| {
                let total: f64 = (0..chain.len()).map(|i| chain.at(black_box(i))).sum();
                black_box(total)
            });
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = bench_evaluate, bench_single_element, bench_chain_depth
}
criterion_main!(benches);
