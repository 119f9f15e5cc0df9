#![no_main]

use arbitrary::Arbitrary;
use checkers::{BoardSize, Move, Piece, Position, Setup, Side, Square};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Data {
    size: BoardSize,
    turn: Side,
    pieces: Vec<(Square, Piece)>,
    candidates: Vec<Move>,
}

fn check(pos: &Position, candidate: Move) {
    let legals = pos.legal_moves();
    assert_eq!(legals.contains(&candidate), pos.is_legal(candidate));
    assert!(legals.iter().all(|&m| pos.is_legal(m)));
}

fuzz_target!(|data: Data| {
    let mut setup = Setup::empty(data.size);
    setup.turn = data.turn;
    for (sq, piece) in data.pieces {
        setup.board.set_piece_at(sq, piece);
    }
    let Ok(mut pos) = Position::from_setup(setup) else {
        return;
    };

    for candidate in data.candidates {
        check(&pos, candidate);
        let before = pos.clone();
        if pos.play(candidate).is_err() {
            assert_eq!(pos, before);
        }
    }
});
