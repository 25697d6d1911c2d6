pub mod player;

pub use player::ChainPlayer;

use solver::{Position, Snake};
use std::collections::BTreeSet;

/// What the renderer needs for one step of the animation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub step: usize,
    pub pose: Snake,
    pub eaten: BTreeSet<Position>,
}
