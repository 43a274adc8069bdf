use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use meteor_mayhem::core::{FrameReport, GameState, MeteorField, Playfield};
use meteor_mayhem::term::{FrameBuffer, GameView, Viewport};

fn busy_state() -> GameState {
    let mut state = GameState::new(12345, 50, 200, Duration::ZERO);
    for column in (0..200).step_by(2) {
        state.field_mut().set(column, column % 49);
    }
    state
}

fn bench_update(c: &mut Criterion) {
    let mut state = busy_state();
    let playfield = Playfield::new(49, 200);
    let mut now = Duration::ZERO;

    c.bench_function("game_update_10ms", |b| {
        b.iter(|| {
            now += Duration::from_millis(10);
            black_box(state.update(black_box(now), playfield));
        })
    });
}

fn bench_field_advance(c: &mut Criterion) {
    let mut field = MeteorField::new(200);
    for column in 0..200 {
        field.set(column, column % 50);
    }

    c.bench_function("field_advance_200_columns", |b| {
        b.iter(|| {
            field.advance(black_box(u16::MAX));
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let state = busy_state();
    let view = GameView::default();
    let viewport = Viewport::new(200, 50);
    let mut fb = FrameBuffer::new(200, 50);
    let report = FrameReport::default();

    c.bench_function("render_200x50", |b| {
        b.iter(|| {
            view.render_into(black_box(&state), &report, viewport, &mut fb);
        })
    });
}

criterion_group!(benches, bench_update, bench_field_advance, bench_render);
criterion_main!(benches);
