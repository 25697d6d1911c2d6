use crate::search::{find_path, SearchOutcome};
use crate::{Grid, Position, Snake, SolverConfig};
use log::debug;

/// Poses that bring the head from `snake` back to `rest`, excluding the
/// starting pose.
///
/// Returns an empty path when the head is already at rest, when `rest` lies
/// off the board, or when no legal route exists; the animation then simply
/// ends on its last pose.
pub fn plan_return(grid: &Grid, snake: &Snake, rest: Position, config: &SolverConfig) -> Vec<Snake> {
    search_return(grid, snake, rest, config).path.unwrap_or_default()
}

pub(crate) fn search_return(
    grid: &Grid,
    snake: &Snake,
    rest: Position,
    config: &SolverConfig,
) -> SearchOutcome {
    let outcome = find_path(
        grid,
        snake,
        rest,
        config.search,
        config.limits.max_search_states,
    );

    match &outcome.path {
        Some(path) => debug!("Return to {} takes {} moves", rest, path.len()),
        None => debug!("No way back to {} from {}", rest, snake.head()),
    }

    outcome
}
