//! Benchmarks for the per-move pointer path
//!
//! Run with: cargo bench -p socialcards-core
//!
//! Every global pointer move publishes through the tracker and recomputes
//! the ambient gradient and tilt, so these establish baselines for:
//! - Tracker fan-out
//! - A hovered card handling a move
//! - Rendering a view snapshot

use std::time::Instant;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use socialcards_core::{
    builtin_profiles, AnimationTimings, Bounds, CardController, PointerPosition, PointerTracker,
};

fn bench_tracker_fanout(c: &mut Criterion) {
    let mut group = c.benchmark_group("tracker_publish");

    for subscribers in [1usize, 8, 64] {
        group.bench_with_input(
            BenchmarkId::from_parameter(subscribers),
            &subscribers,
            |b, &n| {
                let mut tracker = PointerTracker::new();
                for _ in 0..n {
                    tracker.subscribe(|pos| {
                        black_box(pos);
                    });
                }
                b.iter(|| tracker.publish(black_box(PointerPosition::new(120.0, 80.0))))
            },
        );
    }

    group.finish();
}

fn bench_hovered_move(c: &mut Criterion) {
    let profile = builtin_profiles().remove(1);
    let mut card = CardController::new(profile, AnimationTimings::default(), Instant::now());
    card.set_bounds(Bounds::new(0.0, 0.0, 320.0, 420.0));
    card.pointer_enter();

    c.bench_function("hovered_card_move", |b| {
        b.iter(|| {
            let pos = black_box(PointerPosition::new(160.0, 210.0));
            card.global_pointer_moved(pos);
            card.pointer_moved_within(pos);
        })
    });

    c.bench_function("card_view", |b| b.iter(|| black_box(card.view())));
}

criterion_group!(benches, bench_tracker_fanout, bench_hovered_move);
criterion_main!(benches);
