use super::types::{CharDimensions, CharPattern};
use solver::Direction;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SegmentKind {
    Head,
    Body,
    Tail,
}

pub trait CellRenderer {
    fn char_dimensions(&self) -> CharDimensions;

    /// A board cell showing contribution `level`; 0 is an empty day.
    fn render_level(&self, level: u8) -> CharPattern;

    fn render_segment(&self, kind: SegmentKind, direction: Option<Direction>) -> CharPattern;
}
