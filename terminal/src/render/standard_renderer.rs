use super::traits::{CellRenderer, SegmentKind};
use super::types::{CharDimensions, CharPattern};
use solver::Direction;

const LEVEL_SHADES: [char; 5] = ['·', '░', '▒', '▓', '█'];

pub struct StandardRenderer {
    char_dims: CharDimensions,
}

impl StandardRenderer {
    pub fn new(char_dims: CharDimensions) -> Self {
        Self { char_dims }
    }
}

impl CellRenderer for StandardRenderer {
    fn char_dimensions(&self) -> CharDimensions {
        self.char_dims
    }

    fn render_level(&self, level: u8) -> CharPattern {
        let shade = LEVEL_SHADES[(level as usize).min(LEVEL_SHADES.len() - 1)];
        if level == 0 && self.char_dims.horizontal > 1 {
            // Keep the dot on the left so wide cells read as a grid.
            let mut pattern = CharPattern::empty(self.char_dims);
            pattern.chars[0][0] = shade;
            return pattern;
        }
        CharPattern::single(shade, self.char_dims)
    }

    fn render_segment(&self, kind: SegmentKind, direction: Option<Direction>) -> CharPattern {
        let ch = match (kind, direction) {
            (SegmentKind::Head, Some(Direction::Up)) => '▲',
            (SegmentKind::Head, Some(Direction::Down)) => '▼',
            (SegmentKind::Head, Some(Direction::Left)) => '◀',
            (SegmentKind::Head, Some(Direction::Right)) => '▶',
            (SegmentKind::Head, None) => '●',
            (SegmentKind::Body, _) => 'o',
            (SegmentKind::Tail, _) => '.',
        };

        if self.char_dims.horizontal == 2 && self.char_dims.vertical == 1 {
            // Wide cells: glyph plus padding keeps arrows from smearing together.
            return CharPattern::new(vec![vec![ch, ' ']]);
        }
        CharPattern::single(ch, self.char_dims)
    }
}
