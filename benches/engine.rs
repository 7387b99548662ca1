use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_bricks::core::{collides, Board, Session, Shape};
use tui_bricks::term::{FrameBuffer, GameView, Viewport};
use tui_bricks::types::{Color, DropOutcome, FillMode};

fn half_full_board() -> Board {
    let mut board = Board::new();
    for y in 8..14 {
        for x in 0..9 {
            if (x + y) % 3 != 0 {
                board.set(x, y, Some(Color::MONO));
            }
        }
    }
    board
}

fn bench_collides(c: &mut Criterion) {
    let board = half_full_board();

    c.bench_function("collides", |b| {
        b.iter(|| {
            for shape in Shape::ALL {
                black_box(collides(&board, shape, black_box(2), black_box(6)));
            }
        })
    });
}

fn bench_move_right(c: &mut Criterion) {
    let mut session = Session::new(FillMode::Color);
    session.spawn(Shape::T);

    c.bench_function("move_left_right", |b| {
        b.iter(|| {
            black_box(session.move_right());
            black_box(session.move_left());
        })
    });
}

fn bench_fall_and_lock(c: &mut Criterion) {
    let board = half_full_board();

    c.bench_function("fall_and_materialize", |b| {
        b.iter(|| {
            let mut session = Session::from_board(board.clone(), FillMode::Color);
            session.spawn(Shape::O);
            while session.drop() == DropOutcome::Moved {}
            black_box(session.materialize());
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let mut session = Session::from_board(half_full_board(), FillMode::Color);
    session.spawn(Shape::S);
    let view = GameView::default();
    let mut fb = FrameBuffer::new(80, 24);

    c.bench_function("render_80x24", |b| {
        b.iter(|| {
            view.render_into(&session, Viewport::new(80, 24), &mut fb);
            black_box(fb.get(0, 0));
        })
    });
}

criterion_group!(
    benches,
    bench_collides,
    bench_move_right,
    bench_fall_and_lock,
    bench_render
);
criterion_main!(benches);
