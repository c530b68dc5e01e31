use criterion::{black_box, criterion_group, criterion_main, Criterion};
use nouns_seeder::{derive_seed, derive_seeds_batch, digest, random_seed, select_index_default, BlockHash, TokenId, TraitCatalog};
use rand_core::OsRng;

const COUNTS: [u64; 5] = [2, 30, 137, 234, 21];

fn bench_digest(c: &mut Criterion) {
    let block_hash = BlockHash([0x42u8; 32]);
    let token_id = TokenId::from(116u64);

    c.bench_function("digest", |b| {
        b.iter(|| digest(black_box(&block_hash), black_box(&token_id)));
    });
}

fn bench_select_index(c: &mut Criterion) {
    let d = digest(&BlockHash([0x42u8; 32]), &TokenId::from(116u64));

    c.bench_function("select_index", |b| {
        b.iter(|| {
            let _ = select_index_default(black_box(&d), black_box(234), black_box(144));
        });
    });
}

fn bench_derive_seed(c: &mut Criterion) {
    let catalog = TraitCatalog::reference(1, COUNTS).expect("catalog");
    let block_hash = BlockHash([0x42u8; 32]);
    let token_id = TokenId::from(116u64);

    c.bench_function("derive_seed", |b| {
        b.iter(|| {
            let _ = derive_seed(black_box(&block_hash), black_box(&token_id), black_box(&catalog));
        });
    });
}

fn bench_derive_batch(c: &mut Criterion) {
    let catalog = TraitCatalog::reference(1, COUNTS).expect("catalog");
    let block_hash = BlockHash([0x42u8; 32]);
    let ids: Vec<TokenId> = (0u64..1_000).map(TokenId::from).collect();

    c.bench_function("derive_seeds_batch_1000", |b| {
        b.iter(|| {
            let _ = derive_seeds_batch(black_box(&block_hash), black_box(&ids), black_box(&catalog));
        });
    });
}

fn bench_random_seed(c: &mut Criterion) {
    let catalog = TraitCatalog::reference(1, COUNTS).expect("catalog");

    c.bench_function("random_seed", |b| {
        b.iter(|| random_seed(black_box(&catalog), &mut OsRng));
    });
}

criterion_group!(
    benches,
    bench_digest,
    bench_select_index,
    bench_derive_seed,
    bench_derive_batch,
    bench_random_seed
);
criterion_main!(benches);
