use crate::error::{Result, SolverError};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i16,
    pub y: i16,
}

impl Position {
    pub const fn new(x: i16, y: i16) -> Self {
        Position { x, y }
    }

    pub fn step(&self, direction: Direction) -> Position {
        let (dx, dy) = direction.delta();
        Position {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    pub fn manhattan_distance(&self, other: &Position) -> u32 {
        ((self.x as i32 - other.x as i32).abs() + (self.y as i32 - other.y as i32).abs()) as u32
    }

    pub fn is_adjacent(&self, other: &Position) -> bool {
        self.manhattan_distance(other) == 1
    }
}

// Raster order: rows first, then columns. Target tie-breaks and every
// ordered collection of positions rely on this.
impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        self.y.cmp(&other.y).then_with(|| self.x.cmp(&other.x))
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Expansion order used by every neighbour query and search.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn delta(&self) -> (i16, i16) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn is_opposite(&self, other: &Direction) -> bool {
        self.opposite() == *other
    }

    /// Direction of a single step from `from` to `to`, if they are adjacent.
    pub fn between(from: &Position, to: &Position) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|direction| from.step(*direction) == *to)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: i16,
    pub y: i16,
    pub level: u8,
}

impl Cell {
    pub fn new(x: i16, y: i16, level: u8) -> Self {
        Cell { x, y, level }
    }

    pub fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }

    pub fn is_target(&self) -> bool {
        self.level > 0
    }
}

/// Dense, immutable board of contribution levels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: u16,
    height: u16,
    levels: Vec<u8>,
}

impl Grid {
    /// Builds a grid from a sparse list of cells; unlisted cells are empty.
    /// When a position is listed twice the later entry wins.
    pub fn new(width: u16, height: u16, cells: impl IntoIterator<Item = Cell>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(SolverError::EmptyGrid);
        }
        if width > i16::MAX as u16 || height > i16::MAX as u16 {
            return Err(SolverError::InvalidConfig(format!(
                "grid of {width}x{height} cells is too large"
            )));
        }

        let mut grid = Grid {
            width,
            height,
            levels: vec![0; width as usize * height as usize],
        };

        for cell in cells {
            let idx = grid.index(cell.position())?;
            grid.levels[idx] = cell.level;
        }

        Ok(grid)
    }

    /// Builds a grid just large enough to hold every listed cell.
    pub fn from_cells(cells: &[Cell]) -> Result<Self> {
        if let Some(cell) = cells.iter().find(|c| c.x < 0 || c.y < 0) {
            return Err(SolverError::OutOfBounds {
                x: cell.x,
                y: cell.y,
                width: 0,
                height: 0,
            });
        }

        let width = cells.iter().map(|c| c.x as u16 + 1).max().unwrap_or(0);
        let height = cells.iter().map(|c| c.y as u16 + 1).max().unwrap_or(0);
        Grid::new(width, height, cells.iter().copied())
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.width as i16 && pos.y >= 0 && pos.y < self.height as i16
    }

    fn index(&self, pos: Position) -> Result<usize> {
        if !self.contains(pos) {
            return Err(SolverError::OutOfBounds {
                x: pos.x,
                y: pos.y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(pos.y as usize * self.width as usize + pos.x as usize)
    }

    pub fn level(&self, pos: Position) -> Result<u8> {
        Ok(self.levels[self.index(pos)?])
    }

    pub fn is_target(&self, pos: Position) -> Result<bool> {
        Ok(self.level(pos)? > 0)
    }

    /// In-bounds orthogonal neighbours, in `Direction::ALL` order.
    pub fn neighbors(&self, pos: Position) -> Vec<Position> {
        Direction::ALL
            .into_iter()
            .map(|direction| pos.step(direction))
            .filter(|next| self.contains(*next))
            .collect()
    }

    /// Every cell of the board in raster order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let width = self.width as usize;
        self.levels.iter().enumerate().map(move |(idx, &level)| Cell {
            x: (idx % width) as i16,
            y: (idx / width) as i16,
            level,
        })
    }

    /// Cells with a positive level, in raster order.
    pub fn targets(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells().filter(Cell::is_target)
    }

    pub fn target_count(&self) -> usize {
        self.levels.iter().filter(|&&level| level > 0).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Grid {
        Grid::new(3, 2, [Cell::new(0, 0, 1), Cell::new(2, 1, 4)]).unwrap()
    }

    #[test]
    fn unlisted_cells_default_to_empty() {
        let grid = sample();
        assert_eq!(grid.level(Position::new(1, 0)), Ok(0));
        assert_eq!(grid.level(Position::new(2, 1)), Ok(4));
        assert_eq!(grid.is_target(Position::new(0, 0)), Ok(true));
        assert_eq!(grid.is_target(Position::new(0, 1)), Ok(false));
    }

    #[test]
    fn level_outside_the_board_fails() {
        let grid = sample();
        assert_eq!(
            grid.level(Position::new(3, 0)),
            Err(SolverError::OutOfBounds {
                x: 3,
                y: 0,
                width: 3,
                height: 2
            })
        );
        assert!(grid.is_target(Position::new(0, -1)).is_err());
    }

    #[test]
    fn listing_a_cell_outside_the_board_fails() {
        let result = Grid::new(2, 2, [Cell::new(2, 0, 1)]);
        assert!(matches!(result, Err(SolverError::OutOfBounds { x: 2, y: 0, .. })));
        assert_eq!(Grid::new(0, 7, []), Err(SolverError::EmptyGrid));
    }

    #[test]
    fn neighbors_stay_in_bounds() {
        let grid = sample();
        assert_eq!(
            grid.neighbors(Position::new(0, 0)),
            vec![Position::new(0, 1), Position::new(1, 0)]
        );
        assert_eq!(grid.neighbors(Position::new(1, 0)).len(), 3);

        let single = Grid::new(1, 1, []).unwrap();
        assert!(single.neighbors(Position::new(0, 0)).is_empty());
    }

    #[test]
    fn from_cells_infers_dimensions() {
        let grid = Grid::from_cells(&[Cell::new(4, 0, 0), Cell::new(1, 6, 2)]).unwrap();
        assert_eq!((grid.width(), grid.height()), (5, 7));
        assert_eq!(grid.target_count(), 1);
        assert_eq!(Grid::from_cells(&[]), Err(SolverError::EmptyGrid));
    }

    #[test]
    fn positions_order_by_row_then_column() {
        let mut positions = vec![Position::new(2, 0), Position::new(0, 1), Position::new(1, 0)];
        positions.sort();
        assert_eq!(
            positions,
            vec![Position::new(1, 0), Position::new(2, 0), Position::new(0, 1)]
        );
    }

    #[test]
    fn direction_between_adjacent_positions() {
        let origin = Position::new(1, 1);
        assert_eq!(Direction::between(&origin, &Position::new(1, 0)), Some(Direction::Up));
        assert_eq!(Direction::between(&origin, &Position::new(2, 1)), Some(Direction::Right));
        assert_eq!(Direction::between(&origin, &Position::new(2, 2)), None);
        assert!(Direction::Left.is_opposite(&Direction::Right));
    }
}
