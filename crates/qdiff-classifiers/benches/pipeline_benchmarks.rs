//! Latency benchmarks for the question analysis pipeline
//!
//! Run with: cargo bench -p qdiff-classifiers

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::collections::HashMap;
use std::sync::Arc;

use qdiff_classifiers::{
    clean_text, DifficultyAnalyzer, LabelEncoder, LinearModel, LogisticRegression,
    ModelArtifacts, Scaler, TfidfVectorizer,
};

const VOCABULARY_SIZE: usize = 5_000;

fn analyzer() -> DifficultyAnalyzer {
    let mut vocabulary: HashMap<String, usize> = (0..VOCABULARY_SIZE)
        .map(|i| (format!("term{i}"), i))
        .collect();
    for (offset, word) in ["prove", "asymptotic", "complexity", "define", "list"]
        .iter()
        .enumerate()
    {
        vocabulary.insert(word.to_string(), offset);
    }
    let width = vocabulary.len() + 2;

    let coef: Vec<Vec<f64>> = (0..3)
        .map(|class| (0..width).map(|i| ((i * 7 + class) % 11) as f64 / 10.0 - 0.5).collect())
        .collect();

    let artifacts = ModelArtifacts::from_parts(
        TfidfVectorizer::from_vocabulary(vocabulary),
        Scaler::standard(vec![12.0, 70.0], vec![6.0, 35.0]),
        LabelEncoder::new(vec!["Easy".into(), "Hard".into(), "Medium".into()]),
        Arc::new(LogisticRegression(LinearModel::new(coef, vec![0.0; 3]))),
    );
    DifficultyAnalyzer::new(Arc::new(artifacts)).expect("Failed to create analyzer")
}

fn benchmark_clean_text(c: &mut Criterion) {
    let text = "<p>Synthesize the <b>asymptotic</b> complexity of merge sort, with proofs!</p>";

    c.bench_function("clean_text", |b| b.iter(|| clean_text(black_box(text))));
}

fn benchmark_analyze(c: &mut Criterion) {
    let analyzer = analyzer();

    let test_cases = vec![
        ("short", "What is 2+2?"),
        (
            "medium",
            "Prove the asymptotic complexity of the algorithm and define a list of invariants.",
        ),
        (
            "long",
            "Synthesize asymptotic complexity with mathematical proofs. Consider a list of \
             n elements, define the recurrence, prove its closed form by induction, and \
             compare the bound with the complexity of a heap-based alternative.",
        ),
    ];

    let mut group = c.benchmark_group("DifficultyAnalyzer");
    group.sample_size(100);

    for (name, question) in test_cases {
        group.bench_with_input(BenchmarkId::new("analyze", name), &question, |b, question| {
            b.iter(|| analyzer.analyze(black_box(question)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_clean_text, benchmark_analyze);
criterion_main!(benches);
