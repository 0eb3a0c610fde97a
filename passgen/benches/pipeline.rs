mod common;

use common::{REVIEW_TEXT, generate_random_seeds};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use passgen::{
    AlphaDefects, AlphaOptions, Case, DefectCount, DefectMapping, DefectPhraseOptions, Generate,
    MappingTable, MemoryCorpus, SymbolReplacements, defect_phrase_password, uuid4,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn bench_defects(c: &mut Criterion) {
    let seeds = generate_random_seeds(1000);
    let mut rng = StdRng::seed_from_u64(42);

    let mut group = c.benchmark_group("defects");

    let table = MappingTable::new().with("aeiou", "aeiou");
    let vowels = DefectMapping::new(table, DefectCount::all(), true).unwrap();
    group.bench_function("all_vowels", |b| {
        let mut i = 0;
        b.iter(|| {
            i = (i + 1) % seeds.len();
            black_box(vowels.generate(&mut rng, black_box(&seeds[i])).unwrap())
        })
    });

    let symbols = SymbolReplacements::new(DefectCount::between(1, 3), false).unwrap();
    group.bench_function("symbols_1_to_3", |b| {
        let mut i = 0;
        b.iter(|| {
            i = (i + 1) % seeds.len();
            black_box(symbols.generate(&mut rng, black_box(&seeds[i])).unwrap())
        })
    });

    let options = AlphaOptions {
        replace_consonants: true,
        ..AlphaOptions::default()
    };
    let alpha = AlphaDefects::new(options, DefectCount::exactly(2), true).unwrap();
    group.bench_function("alpha_2", |b| {
        let mut i = 0;
        b.iter(|| {
            i = (i + 1) % seeds.len();
            black_box(alpha.generate(&mut rng, black_box(&seeds[i])).unwrap())
        })
    });

    group.finish();
}

fn bench_pipelines(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let mut group = c.benchmark_group("pipelines");

    let corpus = MemoryCorpus::new("reviews").with_document("review", REVIEW_TEXT);
    let phrases = defect_phrase_password(corpus, &DefectPhraseOptions::default()).unwrap();
    group.bench_function("defect_phrase", |b| {
        b.iter(|| black_box(phrases.generate_password(&mut rng).unwrap()))
    });

    let uuid = uuid4();
    group.bench_function("uuid4", |b| {
        b.iter(|| black_box(uuid.generate_password(&mut rng).unwrap()))
    });

    group.bench_function("random_case", |b| {
        b.iter(|| {
            let text = black_box(REVIEW_TEXT);
            black_box(Case::RandomCase.generate(&mut rng, text).unwrap())
        })
    });

    group.finish();
}

criterion_group!(benches, bench_defects, bench_pipelines);
criterion_main!(benches);
