use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use focus_engine::movegen::legal_moves;
use focus_engine::rules::check_move;
use focus_engine::{Color, Coord, DistanceRule, Game, PlayerId, Turn};

fn new_game() -> Game {
    Game::new(("A", Color('R')), ("B", Color('G'))).unwrap()
}

/// A mid-game position reached by a fixed random playout.
fn midgame() -> Game {
    let mut game = new_game();
    let mut rng = SmallRng::seed_from_u64(42);
    for _ in 0..60 {
        let mover = match game.turn() {
            Turn::Unset => PlayerId::A,
            Turn::Player(p) => p,
        };
        let moves = legal_moves(&game, mover);
        if moves.is_empty() {
            break;
        }
        let mv = moves[rng.gen_range(0..moves.len())];
        let name = game.player(mover).name().to_string();
        game.apply(&name, mv);
    }
    game
}

fn bench_check_move(c: &mut Criterion) {
    let game = new_game();
    c.bench_function("check_move_single_step", |b| {
        b.iter(|| {
            check_move(
                black_box(game.board()),
                Color('R'),
                black_box(Coord::new(0, 0)),
                black_box(Coord::new(0, 1)),
                1,
                DistanceRule::AtLeast,
            )
        })
    });
}

fn bench_move_piece(c: &mut Criterion) {
    let game = new_game();
    c.bench_function("move_piece_opening", |b| {
        b.iter(|| {
            let mut g = game.clone();
            g.move_piece("A", black_box(Coord::new(0, 0)), Coord::new(0, 1), 1)
        })
    });
}

fn bench_legal_moves_opening(c: &mut Criterion) {
    let game = new_game();
    c.bench_function("legal_moves_opening", |b| {
        b.iter(|| legal_moves(black_box(&game), PlayerId::A))
    });
}

fn bench_legal_moves_midgame(c: &mut Criterion) {
    let game = midgame();
    let mover = match game.turn() {
        Turn::Unset => PlayerId::A,
        Turn::Player(p) => p,
    };
    c.bench_function("legal_moves_midgame", |b| {
        b.iter(|| legal_moves(black_box(&game), mover))
    });
}

fn bench_game_clone(c: &mut Criterion) {
    let game = midgame();
    c.bench_function("game_clone", |b| b.iter(|| black_box(&game).clone()));
}

criterion_group!(
    benches,
    bench_check_move,
    bench_move_piece,
    bench_legal_moves_opening,
    bench_legal_moves_midgame,
    bench_game_clone,
);
criterion_main!(benches);
