use criterion::{criterion_group, criterion_main, Criterion};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use present_core::{MiniPresent, Present};

fn bench_present(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::from_seed([1u8; 32]);
    let mut key80 = [0u8; 10];
    rng.fill_bytes(&mut key80);
    let cipher = Present::new(&key80).expect("valid key");
    let block = rng.next_u64();

    let mut group = c.benchmark_group("present");
    group.bench_function("encrypt_block", |b| {
        b.iter(|| cipher.encrypt_block(block));
    });
    group.bench_function("decrypt_block", |b| {
        b.iter(|| cipher.decrypt_block(block));
    });
    group.bench_function("key_schedule_80", |b| {
        b.iter(|| Present::new(&key80).expect("valid key"));
    });
    group.finish();
}

fn bench_mini(c: &mut Criterion) {
    let cipher = MiniPresent::new(0x5a3c);
    let mut group = c.benchmark_group("mini");
    group.bench_function("encrypt", |b| {
        b.iter(|| cipher.encrypt(0xa7));
    });
    group.finish();
}

criterion_group!(benches, bench_present, bench_mini);
criterion_main!(benches);
