use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use aesf_core::{encrypt_block, expand_key, Aes128Key};
use aesf_stream::{Padding, StreamCipher, StreamConfig};

fn bench_block(c: &mut Criterion) {
    let key = Aes128Key::new(b"bench").expect("key");
    let round_keys = expand_key(&key);
    let mut rng = ChaCha20Rng::from_seed([3u8; 32]);

    let mut group = c.benchmark_group("block");
    group.bench_function("expand_key", |b| b.iter(|| expand_key(&key)));
    group.bench_function("encrypt_block", |b| {
        let mut block = [0u8; 16];
        rng.fill_bytes(&mut block);
        b.iter(|| encrypt_block(&block, &round_keys));
    });
    group.finish();
}

fn bench_stream(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::from_seed([4u8; 32]);
    let mut data = vec![0u8; 1 << 20];
    rng.fill_bytes(&mut data);

    let mut group = c.benchmark_group("stream");
    group.sample_size(20);
    group.throughput(Throughput::Bytes(data.len() as u64));
    for workers in [1usize, 4] {
        let config = StreamConfig {
            padding: Padding::Pkcs7,
            workers,
        };
        let cipher = StreamCipher::with_config(b"bench", config).expect("cipher");
        group.bench_function(format!("encrypt_1mib_{workers}_workers"), |b| {
            b.iter(|| cipher.encrypt(&data));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_block, bench_stream);
criterion_main!(benches);
