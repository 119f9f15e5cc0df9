use crate::position::Position;

/// Counts complete-turn move paths of a given length.
///
/// A turn is a single step, or a whole capture chain. The jumps of a chain
/// are expanded individually, so every distinct route through a chain is
/// counted once. Paths that end early, because a side is stuck, are not
/// counted unless this happens in the final position. Useful for comparing,
/// testing and debugging move generation correctness and performance.
///
/// # Examples
///
/// ```
/// use checkers::{perft, BoardSize, Position};
///
/// let pos = Position::new(BoardSize::Eight);
/// assert_eq!(perft(&pos, 1), 7);
/// assert_eq!(perft(&pos, 2), 49);
/// ```
pub fn perft(pos: &Position, depth: u32) -> u64 {
    if depth < 1 {
        return 1;
    }

    pos.legal_moves()
        .into_iter()
        .map(|m| {
            let mut child = pos.clone();
            if child.play_unchecked(m).chain_continues {
                perft(&child, depth)
            } else {
                perft(&child, depth - 1)
            }
        })
        .sum()
}
