use solver::Position;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CharDimensions {
    pub horizontal: usize,
    pub vertical: usize,
}

impl CharDimensions {
    pub fn new(horizontal: usize, vertical: usize) -> Self {
        Self { horizontal, vertical }
    }

    /// Parses sizes written as `WxH`, e.g. `2x1`.
    pub fn parse(text: &str) -> Option<Self> {
        let (horizontal, vertical) = text.trim().split_once(['x', 'X'])?;
        let horizontal = horizontal.parse::<usize>().ok().filter(|h| *h > 0)?;
        let vertical = vertical.parse::<usize>().ok().filter(|v| *v > 0)?;
        Some(Self::new(horizontal, vertical))
    }
}

/// Text canvas addressed in board cells; each cell spans `char_dims`
/// characters.
pub struct CharGrid {
    rows: Vec<Vec<char>>,
    cells_wide: usize,
    cells_high: usize,
    char_dims: CharDimensions,
}

impl CharGrid {
    pub fn new(cells_wide: usize, cells_high: usize, char_dims: CharDimensions) -> Self {
        let rows = vec![vec![' '; cells_wide * char_dims.horizontal]; cells_high * char_dims.vertical];
        Self {
            rows,
            cells_wide,
            cells_high,
            char_dims,
        }
    }

    /// Stamps `pattern` over the cell at `pos`; anything off the canvas is
    /// dropped.
    pub fn paint(&mut self, pos: Position, pattern: &CharPattern) {
        if pos.x < 0 || pos.y < 0 {
            return;
        }
        let origin_x = pos.x as usize * self.char_dims.horizontal;
        let origin_y = pos.y as usize * self.char_dims.vertical;

        for (dy, pattern_row) in pattern.chars.iter().enumerate() {
            let Some(row) = self.rows.get_mut(origin_y + dy) else {
                continue;
            };
            for (dx, &ch) in pattern_row.iter().enumerate() {
                if let Some(slot) = row.get_mut(origin_x + dx) {
                    *slot = ch;
                }
            }
        }
    }

    pub fn width(&self) -> usize {
        self.cells_wide * self.char_dims.horizontal
    }

    pub fn height(&self) -> usize {
        self.cells_high * self.char_dims.vertical
    }

    pub fn char_at(&self, column: usize, row: usize) -> Option<char> {
        self.rows.get(row).and_then(|r| r.get(column)).copied()
    }

    pub fn into_lines(self) -> Vec<String> {
        self.rows.into_iter().map(|row| row.into_iter().collect()).collect()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharPattern {
    pub chars: Vec<Vec<char>>,
}

impl CharPattern {
    pub fn new(chars: Vec<Vec<char>>) -> Self {
        Self { chars }
    }

    pub fn single(ch: char, dims: CharDimensions) -> Self {
        Self {
            chars: vec![vec![ch; dims.horizontal]; dims.vertical],
        }
    }

    pub fn empty(dims: CharDimensions) -> Self {
        Self::single(' ', dims)
    }
}
