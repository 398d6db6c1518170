use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_pong::core::{check_paddle_collision, GameState};
use tui_pong::term::{FrameBuffer, GameView};
use tui_pong::types::ScreenSize;

fn bench_step(c: &mut Criterion) {
    let screen = ScreenSize::new(80, 24);

    c.bench_function("simulation_step", |b| {
        let mut state = GameState::new(screen);
        b.iter(|| {
            if state.is_game_over() {
                state = GameState::new(screen);
            }
            black_box(state.tick());
        })
    });
}

fn bench_paddle_collision(c: &mut Criterion) {
    let state = GameState::new(ScreenSize::new(80, 24));

    c.bench_function("paddle_collision", |b| {
        b.iter(|| {
            check_paddle_collision(black_box(state.ball()), black_box(state.player1()))
                || check_paddle_collision(black_box(state.ball()), black_box(state.player2()))
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let state = GameState::new(ScreenSize::new(200, 60));
    let view = GameView::default();
    let mut fb = FrameBuffer::new(200, 60);

    c.bench_function("render_200x60", |b| {
        b.iter(|| {
            view.render_into(black_box(&state), &mut fb);
        })
    });
}

criterion_group!(benches, bench_step, bench_paddle_collision, bench_render);
criterion_main!(benches);
