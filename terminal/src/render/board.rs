use super::traits::{CellRenderer, SegmentKind};
use super::types::CharGrid;
use solver::{Grid, Position, Snake};
use std::collections::BTreeSet;

pub struct BoardRenderer<R: CellRenderer> {
    renderer: R,
}

impl<R: CellRenderer> BoardRenderer<R> {
    pub fn new(renderer: R) -> Self {
        Self { renderer }
    }

    /// Draws one animation frame: the board with `eaten` cells cleared and the
    /// snake on top. Cells are as large as the renderer draws them.
    pub fn render(&self, grid: &Grid, pose: &Snake, eaten: &BTreeSet<Position>) -> CharGrid {
        let mut canvas = CharGrid::new(
            grid.width() as usize,
            grid.height() as usize,
            self.renderer.char_dimensions(),
        );

        for cell in grid.cells() {
            let pos = cell.position();
            let level = if eaten.contains(&pos) { 0 } else { cell.level };
            canvas.paint(pos, &self.renderer.render_level(level));
        }

        let last = pose.len() - 1;
        for (idx, pos) in pose.body().iter().enumerate() {
            if !grid.contains(*pos) {
                continue;
            }
            let (kind, direction) = match idx {
                i if i == last => (SegmentKind::Head, pose.direction()),
                0 => (SegmentKind::Tail, None),
                _ => (SegmentKind::Body, None),
            };
            canvas.paint(*pos, &self.renderer.render_segment(kind, direction));
        }

        canvas
    }
}
