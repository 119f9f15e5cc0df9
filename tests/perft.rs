use checkers::{perft, BoardSize, Position};

fn test_perft(size: BoardSize, expected: &[u64]) {
    let pos = Position::new(size);
    for (depth, &nodes) in (1..).zip(expected) {
        assert_eq!(perft(&pos, depth), nodes, "{size} at depth {depth}");
    }
}

#[test]
fn test_perft_depth_zero() {
    for size in BoardSize::ALL {
        assert_eq!(perft(&Position::new(size), 0), 1);
    }
}

#[test]
fn test_eight() {
    test_perft(BoardSize::Eight, &[7, 49, 302, 1469]);
}

#[test]
fn test_six() {
    test_perft(BoardSize::Six, &[5]);
}

#[test]
fn test_ten() {
    test_perft(BoardSize::Ten, &[9]);
}

#[test]
fn test_symmetric_first_replies() {
    // Both sides start with the same number of options.
    for size in BoardSize::ALL {
        let pos = Position::new(size);
        let first = pos.legal_moves().len() as u64;
        assert_eq!(perft(&pos, 2), first * first);
    }
}
