use std::hint::black_box;

use checkers::{
    computer::{FirstLegal, Seeded},
    notation, perft, BoardSize, Game, Position, Settings, Setup, Side,
};
use criterion::{criterion_group, criterion_main, Criterion};

fn bench_perft(c: &mut Criterion) {
    for (size, depth, nodes) in [
        (BoardSize::Six, 6, None),
        (BoardSize::Eight, 4, Some(1469)),
        (BoardSize::Ten, 4, None),
    ] {
        let pos = Position::new(size);
        c.bench_function(&format!("perft {size} depth {depth}"), |b| {
            b.iter(|| {
                let n = perft(black_box(&pos), depth);
                if let Some(nodes) = nodes {
                    assert_eq!(n, nodes);
                }
                n
            })
        });
    }
}

fn bench_generate_moves(c: &mut Criterion) {
    // Kings in the middle of a crowded 10x10 board.
    let mut setup = Setup::empty(BoardSize::Ten);
    for name in ["Ef", "Ed", "Gb", "Gh", "Fe"] {
        setup
            .board
            .set_piece_at(name.parse().expect("valid square"), Side::One.king());
    }
    for name in ["Dc", "De", "Dg", "Cd", "Cf", "Bi"] {
        setup
            .board
            .set_piece_at(name.parse().expect("valid square"), Side::Two.regular());
    }
    let pos = Position::from_setup(setup).expect("valid setup");

    c.bench_function("generate moves", |b| {
        b.iter(|| black_box(&pos).legal_moves())
    });
}

fn bench_parse_move(c: &mut Criterion) {
    c.bench_function("parse move", |b| {
        b.iter(|| notation::parse_move(black_box("Fc>Ed"), BoardSize::Eight))
    });
}

fn bench_computer_round(c: &mut Criterion) {
    let settings = Settings::default().with_quiet_turn_limit(Some(50));

    c.bench_function("first legal round 8x8", |b| {
        b.iter(|| {
            let mut game = Game::new(8, "a", "b", true)
                .expect("valid config")
                .with_settings(settings)
                .with_selector(FirstLegal);
            while game.status().is_in_progress() {
                game.make_computer_move().expect("in progress");
            }
            game.status()
        })
    });

    c.bench_function("seeded round 10x10", |b| {
        b.iter(|| {
            let mut game = Game::new(10, "a", "b", true)
                .expect("valid config")
                .with_settings(settings)
                .with_selector(Seeded::new(1));
            while game.status().is_in_progress() {
                game.make_computer_move().expect("in progress");
            }
            game.status()
        })
    });
}

criterion_group!(
    benches,
    bench_perft,
    bench_generate_moves,
    bench_parse_move,
    bench_computer_round
);
criterion_main!(benches);
