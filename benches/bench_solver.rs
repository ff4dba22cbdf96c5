use criterion::{criterion_group, criterion_main, Criterion};
use superstring_solver::{
    longest_chains, Dictionary, IndexManager, Solver, TileSet, WordFile, WordSource,
};

const WORDFILE: &str = "wordlists/words.txt";

fn dictionary(tileset: &TileSet) -> Dictionary {
    let words = WordFile::new(WORDFILE).words().unwrap();
    Dictionary::build(&words, tileset)
}

fn bench_build_index(c: &mut Criterion) {
    let tileset = TileSet::english();
    let dictionary = dictionary(&tileset);
    c.bench_function("index.build", |b| b.iter(|| IndexManager::build(&dictionary)));
}

fn bench_solve(c: &mut Criterion) {
    let tileset = TileSet::english();
    let dictionary = dictionary(&tileset);
    let index = IndexManager::build(&dictionary);
    c.bench_function("solver.run", |b| {
        b.iter(|| Solver::new(tileset, &dictionary, index.clone()).run().unwrap())
    });
}

fn bench_chains(c: &mut Criterion) {
    let tileset = TileSet::english();
    let dictionary = dictionary(&tileset);
    let index = IndexManager::build(&dictionary);
    c.bench_function("longest_chains", |b| {
        b.iter(|| longest_chains(&tileset, &dictionary, &index))
    });
}

fn criterion_benchmark(c: &mut Criterion) {
    bench_build_index(c);
    bench_chains(c);
}

fn slow_benchmarks(c: &mut Criterion) {
    bench_solve(c);
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(60);
    targets = criterion_benchmark
}

criterion_group! {
    name = slow;
    config = Criterion::default()
        .sample_size(10);
    targets = slow_benchmarks
}

criterion_main!(benches, slow);
