use crate::{Grid, Position, Snake};

/// Head cells the snake may move into next: in-bounds neighbours of the head
/// that survive the self-collision rules of `Snake::advance`.
///
/// An empty result means the snake is boxed in. That is an ordinary outcome.
pub fn legal_moves(grid: &Grid, snake: &Snake) -> Vec<Position> {
    grid.neighbors(snake.head())
        .into_iter()
        .filter(|next| snake.can_advance_to(*next))
        .collect()
}

/// Poses reachable in one legal move, in the same order as `legal_moves`.
pub fn successors(grid: &Grid, snake: &Snake) -> Vec<Snake> {
    legal_moves(grid, snake)
        .into_iter()
        .filter_map(|next| snake.advance(next).ok())
        .collect()
}

pub fn is_boxed_in(grid: &Grid, snake: &Snake) -> bool {
    legal_moves(grid, snake).is_empty()
}
