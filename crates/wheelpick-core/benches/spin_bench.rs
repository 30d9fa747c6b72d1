use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use wheelpick_core::layout::layout;
use wheelpick_core::resolver::resolve;
use wheelpick_core::{OptionSet, SpinConfig, SpinPlanner, SpinSession};

fn options_of(count: usize) -> OptionSet {
    let mut set = OptionSet::new();
    for i in 0..count {
        set.add(&format!("option-{i}")).unwrap();
    }
    set
}

fn bench_plan(c: &mut Criterion) {
    let planner = SpinPlanner::default();
    let options = options_of(10);
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    c.bench_function("plan_10", |b| {
        b.iter(|| planner.plan(black_box(&options), &mut rng).unwrap())
    });
}

fn bench_resolve(c: &mut Criterion) {
    let options = options_of(50);

    c.bench_function("resolve_50", |b| {
        b.iter(|| resolve(black_box(123_456.789), &options).unwrap())
    });
}

fn bench_layout(c: &mut Criterion) {
    let options = options_of(50);

    c.bench_function("layout_50", |b| b.iter(|| black_box(layout(&options))));
}

fn bench_full_spin(c: &mut Criterion) {
    // Full request/settle cycle, including the option snapshot
    let mut session = SpinSession::with_seed(SpinConfig::default(), 7).unwrap();
    session.add_sample_options();

    c.bench_function("session_spin_cycle", |b| {
        b.iter(|| {
            session.request_spin().unwrap();
            black_box(session.notify_spin_animation_complete().unwrap())
        })
    });
}

criterion_group!(benches, bench_plan, bench_resolve, bench_layout, bench_full_spin);
criterion_main!(benches);
