//! Key Translation Benchmarks
//!
//! Measures per-frame translation cost for typical keyboard batches and the
//! snapshot-diffing path used by hosts that only expose held state.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use crt_input_bridge::input::{
    FrameSnapshot, InputTranslator, KeyMapper, MouseWheel, PhysicalKey, PolledInput,
    RecordingSink,
};

/// Build a frame releasing `count` keys, cycling through the whole key set
fn generate_release_frame(count: usize, shift: bool) -> FrameSnapshot {
    let released = PhysicalKey::ALL.iter().copied().cycle().take(count);
    let held = if shift {
        vec![PhysicalKey::ShiftLeft]
    } else {
        vec![]
    };
    FrameSnapshot::from_parts(held, released)
}

/// Benchmark table lookups across every physical key
fn bench_table_lookup(c: &mut Criterion) {
    let mapper = KeyMapper::new();

    c.bench_function("key_table_lookup_all", |b| {
        b.iter(|| {
            PhysicalKey::ALL
                .iter()
                .filter(|key| mapper.lookup(black_box(**key)).is_some())
                .count()
        })
    });
}

/// Benchmark released-key batches of increasing size
fn bench_key_batches(c: &mut Criterion) {
    let mut group = c.benchmark_group("key_batch");

    for count in [1usize, 8, 32, 128] {
        group.throughput(Throughput::Elements(count as u64));

        for (name, shift) in [("plain", false), ("shift", true)] {
            let frame = generate_release_frame(count, shift);

            group.bench_with_input(BenchmarkId::new(name, count), &frame, |b, frame| {
                let translator = InputTranslator::with_defaults(RecordingSink::new());
                b.iter(|| {
                    let emitted = translator.handle_key_press(black_box(frame));
                    translator.sink().drain();
                    emitted
                })
            });
        }
    }

    group.finish();
}

/// Benchmark the held-state diffing path
fn bench_polled_frames(c: &mut Criterion) {
    let typing: Vec<Vec<PhysicalKey>> = vec![
        vec![PhysicalKey::ShiftLeft, PhysicalKey::H],
        vec![PhysicalKey::ShiftLeft],
        vec![PhysicalKey::E],
        vec![PhysicalKey::L],
        vec![],
        vec![PhysicalKey::L, PhysicalKey::O],
        vec![],
    ];

    c.bench_function("polled_typing_sequence", |b| {
        let translator = InputTranslator::with_defaults(RecordingSink::new());
        let mut polled = PolledInput::new();

        b.iter(|| {
            for held in &typing {
                let frame = polled.next_frame(held.iter().copied());
                translator.handle_key_press(&frame);
            }
            translator.sink().drain()
        })
    });
}

/// Benchmark wheel translation (live modifier queries included)
fn bench_mouse_wheel(c: &mut Criterion) {
    let frame = FrameSnapshot::new().hold(PhysicalKey::ControlLeft);
    let translator = InputTranslator::with_defaults(RecordingSink::new());

    c.bench_function("mouse_wheel", |b| {
        b.iter(|| {
            let emitted = translator.handle_mouse_wheel(
                black_box(MouseWheel {
                    x: 40,
                    y: 12,
                    dy: -1.0,
                }),
                &frame,
            );
            translator.sink().drain();
            emitted
        })
    });
}

criterion_group!(
    benches,
    bench_table_lookup,
    bench_key_batches,
    bench_polled_frames,
    bench_mouse_wheel
);
criterion_main!(benches);
