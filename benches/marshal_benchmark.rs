//! Marshaling and prediction throughput benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use svm_bridge::boundary::{FlatProblem, NodeBuffer};
use svm_bridge::{Node, Problem, SVM, TrainingVector};

fn sparse_nodes(n: usize) -> Vec<Node> {
    (0..n)
        .map(|i| Node::new(i as u32 * 3 + 1, (i as f64 * 0.7).sin()))
        .collect()
}

fn bench_node_marshal(c: &mut Criterion) {
    let mut group = c.benchmark_group("node_marshal");

    for &size in &[10usize, 100, 1000] {
        let nodes = sparse_nodes(size);
        group.bench_function(format!("nodes_{size}"), |b| {
            b.iter(|| NodeBuffer::marshal(black_box(&nodes)).unwrap())
        });
    }

    group.finish();
}

fn bench_problem_marshal(c: &mut Criterion) {
    let mut problem = Problem::new();
    for i in 0..200 {
        let label = if i % 2 == 0 { 1.0 } else { -1.0 };
        problem
            .add_training_vector(TrainingVector::new(label, sparse_nodes(50)))
            .unwrap();
    }

    c.bench_function("problem_marshal_200x50", |b| {
        b.iter(|| FlatProblem::marshal(black_box(&problem)).unwrap())
    });
}

fn bench_predict(c: &mut Criterion) {
    let mut problem = Problem::new();
    for i in 0..200 {
        let label = if i % 2 == 0 { 1.0 } else { -1.0 };
        let mut nodes = sparse_nodes(50);
        for node in &mut nodes {
            node.value += label;
        }
        problem.add_training_vector(TrainingVector::new(label, nodes)).unwrap();
    }

    let model = SVM::new().train(&problem).unwrap();
    let input = sparse_nodes(50);

    c.bench_function("predict_50_features", |b| {
        b.iter(|| model.predict(black_box(&input)).unwrap())
    });
}

criterion_group!(
    benches,
    bench_node_marshal,
    bench_problem_marshal,
    bench_predict
);
criterion_main!(benches);
