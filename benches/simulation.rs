use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_runners::core::{SimpleRng, Simulation, SpriteCatalog};
use tui_runners::term::{encode_diff_into, encode_text, FrameBuffer, RunnerView, Viewport};

fn populated(seed: u32) -> Simulation {
    let mut sim = Simulation::populate(&SpriteCatalog::builtin(), &mut SimpleRng::new(seed));
    sim.resize(200, 60);
    sim
}

fn bench_tick(c: &mut Criterion) {
    let mut sim = populated(12345);

    c.bench_function("simulation_tick", |b| {
        b.iter(|| {
            sim.tick();
            black_box(&sim);
        })
    });
}

fn bench_render_into(c: &mut Criterion) {
    let sim = populated(12345);
    let view = RunnerView::default();
    let mut fb = FrameBuffer::new(200, 60);

    c.bench_function("render_into_200x60", |b| {
        b.iter(|| {
            view.render_into(black_box(&sim), Viewport::of(&sim), &mut fb);
        })
    });
}

fn bench_encode_text(c: &mut Criterion) {
    let sim = populated(12345);
    let fb = RunnerView::default().render(&sim, Viewport::of(&sim));

    c.bench_function("encode_text_200x60", |b| {
        b.iter(|| black_box(encode_text(black_box(&fb))))
    });
}

fn bench_encode_diff(c: &mut Criterion) {
    let mut sim = populated(12345);
    let view = RunnerView::default();
    let prev = view.render(&sim, Viewport::of(&sim));
    sim.tick();
    let next = view.render(&sim, Viewport::of(&sim));
    let mut out = Vec::with_capacity(64 * 1024);

    c.bench_function("encode_diff_one_tick", |b| {
        b.iter(|| {
            out.clear();
            encode_diff_into(black_box(&prev), black_box(&next), &mut out).unwrap();
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_render_into,
    bench_encode_text,
    bench_encode_diff
);
criterion_main!(benches);
