//! Integration tests for the animation loop (minus the terminal).

use tui_runners::core::{SimpleRng, Simulation, SpriteCatalog};
use tui_runners::term::{plain_text, RunnerView, Viewport};
use tui_runners::types::{MIN_VELOCITY, PLACEHOLDER_STATUS};

#[test]
fn test_many_ticks_keep_invariants() {
    let catalog = SpriteCatalog::builtin();
    let mut sim = Simulation::populate(&catalog, &mut SimpleRng::new(12345));
    sim.resize(40, 12);

    let rows: Vec<f64> = sim.runners().iter().map(|r| r.position().y).collect();

    for _ in 0..500 {
        sim.tick();
        for (r, y) in sim.runners().iter().zip(&rows) {
            assert!(r.frame_index() < r.animation().len());
            assert_eq!(r.position().y, *y);
            assert!(r.position().x >= -(r.art_width() as f64));
            assert!(r.position().x <= 40.0);
        }
    }
}

#[test]
fn test_runners_eventually_wrap() {
    let catalog = SpriteCatalog::builtin();
    let mut sim = Simulation::populate(&catalog, &mut SimpleRng::new(99));
    sim.resize(20, 24);

    // Enough ticks for the slowest runner to cross 40 columns.
    let ticks = (40.0 / MIN_VELOCITY) as usize;
    let mut wrapped = vec![false; sim.runners().len()];
    for _ in 0..ticks {
        sim.tick();
        for (i, r) in sim.runners().iter().enumerate() {
            if r.position().x < 0.0 {
                wrapped[i] = true;
            }
        }
    }
    assert!(wrapped.iter().all(|w| *w), "wrapped: {wrapped:?}");
}

#[test]
fn test_render_after_ticks_matches_grid() {
    let catalog = SpriteCatalog::builtin();
    let mut sim = Simulation::populate(&catalog, &mut SimpleRng::new(7));
    let view = RunnerView::default();

    assert_eq!(view.render_text(&sim), PLACEHOLDER_STATUS);

    sim.resize(30, 10);
    let mut fb = view.render(&sim, Viewport::of(&sim));
    for _ in 0..25 {
        sim.tick();
        view.render_into(&sim, Viewport::of(&sim), &mut fb);
        let text = plain_text(&fb);
        assert_eq!(text.lines().count(), 10);
        assert!(text.lines().all(|l| l.chars().count() == 30));
    }
}

#[test]
fn test_same_seed_same_animation() {
    let catalog = SpriteCatalog::builtin();
    let mut a = Simulation::populate(&catalog, &mut SimpleRng::new(2024));
    let mut b = Simulation::populate(&catalog, &mut SimpleRng::new(2024));
    a.resize(50, 20);
    b.resize(50, 20);
    let view = RunnerView::default();
    for _ in 0..30 {
        a.tick();
        b.tick();
        assert_eq!(view.render_text(&a), view.render_text(&b));
    }
}
