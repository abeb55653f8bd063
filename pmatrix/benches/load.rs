use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pmatrix::{load_matrix, write_tabular, ReadConfig};
use rand::Rng;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_random_matrix(dir: &TempDir, rows: i32, columns: i32) -> PathBuf {
    let mut rng = rand::thread_rng();
    let mut words = vec![rows, columns];
    words.extend((0..rows * columns).map(|_| rng.gen_range(-10_000..10_000)));
    let path = dir.path().join("bench.bin");
    std::fs::write(&path, bytemuck::cast_slice::<i32, u8>(&words)).unwrap();
    path
}

fn bench_load(c: &mut Criterion) {
    let dir = TempDir::new().unwrap();
    let path = write_random_matrix(&dir, 256, 256);

    let streamed = ReadConfig::default();
    c.bench_function("load_streamed_256x256", |b| {
        b.iter(|| load_matrix(black_box(&path), &streamed).unwrap())
    });

    let mapped = ReadConfig::default().with_mmap(true);
    c.bench_function("load_mapped_256x256", |b| {
        b.iter(|| load_matrix(black_box(&path), &mapped).unwrap())
    });
}

fn bench_render(c: &mut Criterion) {
    let dir = TempDir::new().unwrap();
    let path = write_random_matrix(&dir, 256, 256);
    let loaded = load_matrix(&path, &ReadConfig::default()).unwrap();

    c.bench_function("render_tabular_256x256", |b| {
        b.iter(|| {
            let mut out = Vec::with_capacity(1 << 20);
            write_tabular("bench.bin", black_box(&loaded.matrix), &mut out).unwrap();
            out
        })
    });
}

criterion_group!(benches, bench_load, bench_render);
criterion_main!(benches);
