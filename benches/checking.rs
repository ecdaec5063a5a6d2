use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use squarefree_rs::{
    enumerate_morphisms, grow_seed_texts, is_square_free, Alphabet, DepthFirstSearch,
    Equivalence, FreenessCheck, ImageOrder, Morphism, MorphismSearch, Structure,
};

/// Seed text after `iterations` applications, mapped through the Cartesian code.
fn coded_text(iterations: usize) -> Vec<char> {
    let texts = grow_seed_texts(&Morphism::seed(), iterations).unwrap();
    Morphism::cartesian_code()
        .apply(texts.last().unwrap())
        .unwrap()
}

fn bench_encoders(c: &mut Criterion) {
    let text = coded_text(6);
    let mut group = c.benchmark_group("encode");

    for eq in Equivalence::ALL {
        group.bench_with_input(BenchmarkId::new(eq.name(), text.len()), &text, |b, text| {
            b.iter(|| black_box(eq.encode(black_box(text))));
        });
    }

    group.finish();
}

fn bench_square_check(c: &mut Criterion) {
    let mut group = c.benchmark_group("square_free");
    group.sample_size(20);

    for iterations in [3, 4, 5] {
        let text = coded_text(iterations);
        for eq in Equivalence::ALL {
            group.bench_with_input(BenchmarkId::new(eq.name(), text.len()), &text, |b, text| {
                b.iter(|| black_box(is_square_free(4, eq, black_box(text))));
            });
        }
    }

    group.finish();
}

fn bench_depth_first(c: &mut Criterion) {
    let mut group = c.benchmark_group("depth_first");
    let alphabet = Alphabet::latin(3).unwrap();

    for results in [100, 1_000] {
        group.bench_with_input(BenchmarkId::new("strict_square", results), &results, |b, &n| {
            b.iter(|| {
                let check = FreenessCheck::strict_square();
                let search = DepthFirstSearch::new(alphabet.clone(), check);
                black_box(search.take(n).count())
            });
        });
    }

    group.finish();
}

fn bench_morphism_search(c: &mut Criterion) {
    let alphabet = Alphabet::latin(3).unwrap();
    let texts = grow_seed_texts(&Morphism::seed(), 5).unwrap();
    let check = FreenessCheck::new(Structure::Square, Equivalence::Strict, 1);

    c.bench_function("morphism_search_k2", |b| {
        b.iter(|| {
            let candidates = enumerate_morphisms(&alphabet, 2, ImageOrder::Sequential).unwrap();
            black_box(MorphismSearch::new(candidates, texts.clone(), check).unwrap().count())
        });
    });
}

criterion_group!(
    benches,
    bench_encoders,
    bench_square_check,
    bench_depth_first,
    bench_morphism_search
);
criterion_main!(benches);
