use crate::error::{Result, SolverError};
use crate::{Direction, Grid, Position};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Immutable snake body, ordered tail first and head last.
///
/// Every move produces a new value, so search code can branch from the same
/// pose without copying state back and forth.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Position>", into = "Vec<Position>")]
pub struct Snake {
    body: Vec<Position>,
}

impl Snake {
    pub fn new(cells: Vec<Position>) -> Result<Self> {
        if cells.len() < 2 {
            return Err(SolverError::InvalidSnake(format!(
                "a snake needs at least 2 segments, got {}",
                cells.len()
            )));
        }

        for pair in cells.windows(2) {
            if !pair[0].is_adjacent(&pair[1]) {
                return Err(SolverError::InvalidSnake(format!(
                    "segments {} and {} are not adjacent",
                    pair[0], pair[1]
                )));
            }
        }

        let mut seen = HashSet::with_capacity(cells.len());
        for cell in &cells {
            if !seen.insert(*cell) {
                return Err(SolverError::InvalidSnake(format!(
                    "segment {} appears more than once",
                    cell
                )));
            }
        }

        Ok(Snake { body: cells })
    }

    /// Horizontal snake with its tail at `tail` and its head `length - 1`
    /// cells to the right.
    pub fn straight(tail: Position, length: usize) -> Result<Self> {
        let too_long = || {
            SolverError::InvalidSnake(format!(
                "a straight snake of {} segments does not fit right of {}",
                length, tail
            ))
        };
        let last = i16::try_from(length.saturating_sub(1)).map_err(|_| too_long())?;
        tail.x.checked_add(last).ok_or_else(too_long)?;

        let cells = (0..=last)
            .take(length)
            .map(|offset| Position::new(tail.x + offset, tail.y))
            .collect();
        Snake::new(cells)
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn body(&self) -> &[Position] {
        &self.body
    }

    pub fn head(&self) -> Position {
        self.body[self.body.len() - 1]
    }

    pub fn tail(&self) -> Position {
        self.body[0]
    }

    /// Segment directly behind the head.
    pub fn neck(&self) -> Position {
        self.body[self.body.len() - 2]
    }

    /// Direction the head last moved in.
    pub fn direction(&self) -> Option<Direction> {
        Direction::between(&self.neck(), &self.head())
    }

    pub fn contains(&self, pos: &Position) -> bool {
        self.body.contains(pos)
    }

    pub fn fits(&self, grid: &Grid) -> bool {
        self.body.iter().all(|pos| grid.contains(*pos))
    }

    /// Whether `new_head` is a legal advance, ignoring the board edges.
    ///
    /// The tail cell is vacated by the same move, so stepping onto it is
    /// allowed unless it is also the neck (a two-segment snake reversing).
    pub fn can_advance_to(&self, new_head: Position) -> bool {
        self.head().is_adjacent(&new_head)
            && new_head != self.neck()
            && !self.body[1..].contains(&new_head)
    }

    pub fn advance(&self, new_head: Position) -> Result<Snake> {
        if !self.can_advance_to(new_head) {
            return Err(SolverError::IllegalMove {
                from: self.head(),
                to: new_head,
            });
        }

        let mut body = Vec::with_capacity(self.body.len());
        body.extend_from_slice(&self.body[1..]);
        body.push(new_head);
        Ok(Snake { body })
    }

    /// Whether `next` is exactly one legal move after this pose.
    pub fn is_successor(&self, next: &Snake) -> bool {
        self.step_to(next).is_some()
    }

    /// Head cell moved into to reach `next`, if it is one legal move away.
    pub fn step_to(&self, next: &Snake) -> Option<Position> {
        match self.advance(next.head()) {
            Ok(advanced) if advanced == *next => Some(next.head()),
            _ => None,
        }
    }
}

impl TryFrom<Vec<Position>> for Snake {
    type Error = SolverError;

    fn try_from(cells: Vec<Position>) -> Result<Self> {
        Snake::new(cells)
    }
}

impl From<Snake> for Vec<Position> {
    fn from(snake: Snake) -> Self {
        snake.body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: i16, y: i16) -> Position {
        Position::new(x, y)
    }

    #[test]
    fn rejects_malformed_bodies() {
        assert!(matches!(Snake::new(vec![p(0, 0)]), Err(SolverError::InvalidSnake(_))));
        assert!(matches!(
            Snake::new(vec![p(0, 0), p(2, 0)]),
            Err(SolverError::InvalidSnake(_))
        ));
        assert!(matches!(
            Snake::new(vec![p(0, 0), p(1, 1)]),
            Err(SolverError::InvalidSnake(_))
        ));
        assert!(matches!(
            Snake::new(vec![p(0, 0), p(1, 0), p(0, 0)]),
            Err(SolverError::InvalidSnake(_))
        ));
    }

    #[test]
    fn head_is_the_last_segment() {
        let snake = Snake::straight(p(0, 2), 4).unwrap();
        assert_eq!(snake.tail(), p(0, 2));
        assert_eq!(snake.head(), p(3, 2));
        assert_eq!(snake.neck(), p(2, 2));
        assert_eq!(snake.direction(), Some(Direction::Right));
    }

    #[test]
    fn advance_drops_the_tail() {
        let snake = Snake::straight(p(0, 0), 3).unwrap();
        let moved = snake.advance(p(2, 1)).unwrap();
        assert_eq!(moved.body(), &[p(1, 0), p(2, 0), p(2, 1)]);
        assert_eq!(snake.body(), &[p(0, 0), p(1, 0), p(2, 0)]);
        assert!(snake.is_successor(&moved));
        assert!(!moved.is_successor(&snake));
    }

    #[test]
    fn advance_rejects_collisions_and_jumps() {
        // Square loop, head at (0,1) with the tail at (0,0) and body at (1,1).
        let snake = Snake::new(vec![p(0, 0), p(1, 0), p(1, 1), p(0, 1)]).unwrap();
        assert!(matches!(
            snake.advance(p(1, 1)),
            Err(SolverError::IllegalMove { .. })
        ));
        assert!(matches!(
            snake.advance(p(2, 2)),
            Err(SolverError::IllegalMove { .. })
        ));
        // The tail is vacated in the same move.
        let chased = snake.advance(p(0, 0)).unwrap();
        assert_eq!(chased.body(), &[p(1, 0), p(1, 1), p(0, 1), p(0, 0)]);
    }

    #[test]
    fn two_segment_snake_cannot_reverse() {
        let snake = Snake::new(vec![p(0, 0), p(1, 0)]).unwrap();
        assert!(!snake.can_advance_to(p(0, 0)));
        assert!(snake.can_advance_to(p(2, 0)));
    }

    #[test]
    fn fits_checks_every_segment() {
        let grid = Grid::new(3, 1, []).unwrap();
        assert!(Snake::straight(p(0, 0), 3).unwrap().fits(&grid));
        assert!(!Snake::straight(p(1, 0), 3).unwrap().fits(&grid));
    }

    #[test]
    fn straight_rejects_bodies_past_the_coordinate_range() {
        assert!(matches!(
            Snake::straight(p(1, 0), 40_000),
            Err(SolverError::InvalidSnake(_))
        ));
        assert!(matches!(
            Snake::straight(p(0, 0), usize::MAX),
            Err(SolverError::InvalidSnake(_))
        ));
        assert!(matches!(
            Snake::straight(p(i16::MAX - 2, 0), 4),
            Err(SolverError::InvalidSnake(_))
        ));
        assert!(matches!(Snake::straight(p(0, 0), 1), Err(SolverError::InvalidSnake(_))));

        let edge = Snake::straight(p(i16::MAX - 3, 0), 4).unwrap();
        assert_eq!(edge.head(), p(i16::MAX, 0));
    }
}
