use crate::chain::{assemble_chain, Chain};
use crate::error::{Result, SolverError};
use crate::return_path::search_return;
use crate::search::{find_path, SearchOutcome};
use crate::{Grid, Position, Snake, SolverConfig, TargetOrder};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A target cell and the chain index of the pose that first covered it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EatenCell {
    pub position: Position,
    pub level: u8,
    pub step: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SolveStats {
    /// Target cells on the grid.
    pub targets: usize,
    /// Path searches run, the closing return included.
    pub searches: usize,
    /// Searches where the whole-body search had to take over.
    pub fallbacks: usize,
    /// Poses created across all searches.
    pub states_explored: usize,
}

/// Everything the renderer needs: the poses, and when each cell changes colour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub chain: Chain,
    pub eaten: Vec<EatenCell>,
    pub skipped: Vec<Position>,
    pub stats: SolveStats,
}

impl Route {
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }

    pub fn last_pose(&self) -> Option<&Snake> {
        self.chain.last()
    }
}

/// Plans a chain of poses that covers every target cell of `grid`, starting
/// from `initial` and, if configured, ending with the head on the rest cell.
///
/// Targets the snake cannot reach are reported in `Route::skipped` instead of
/// failing the whole computation.
pub fn solve(grid: &Grid, initial: &Snake, config: &SolverConfig) -> Result<Route> {
    config.validate()?;
    if let Some(pos) = initial.body().iter().find(|pos| !grid.contains(**pos)) {
        return Err(SolverError::OutOfBounds {
            x: pos.x,
            y: pos.y,
            width: grid.width(),
            height: grid.height(),
        });
    }

    let mut planner = RoutePlanner::new(grid, initial, config);
    planner.cover_targets();
    // A snake that never left its start stays a static image.
    if config.return_to_rest && !planner.segments.is_empty() {
        planner.return_to_rest();
    }
    planner.finish(initial.clone())
}

struct RoutePlanner<'a> {
    grid: &'a Grid,
    config: &'a SolverConfig,
    current: Snake,
    segments: Vec<Vec<Snake>>,
    /// Chain index of `current`.
    step: usize,
    /// Unvisited targets, keyed by position, valued by level.
    unvisited: BTreeMap<Position, u8>,
    skipped: BTreeMap<Position, u8>,
    eaten: Vec<EatenCell>,
    stats: SolveStats,
}

impl<'a> RoutePlanner<'a> {
    fn new(grid: &'a Grid, initial: &Snake, config: &'a SolverConfig) -> Self {
        let unvisited: BTreeMap<Position, u8> = grid
            .targets()
            .map(|cell| (cell.position(), cell.level))
            .collect();

        let mut planner = RoutePlanner {
            grid,
            config,
            current: initial.clone(),
            segments: Vec::new(),
            step: 0,
            stats: SolveStats {
                targets: unvisited.len(),
                ..SolveStats::default()
            },
            unvisited,
            skipped: BTreeMap::new(),
            eaten: Vec::new(),
        };

        // Cells under the initial body count as eaten before the first move.
        for pos in initial.body() {
            planner.cover(*pos);
        }
        planner
    }

    fn cover(&mut self, pos: Position) {
        let level = self
            .unvisited
            .remove(&pos)
            .or_else(|| self.skipped.remove(&pos));

        if let Some(level) = level {
            self.eaten.push(EatenCell {
                position: pos,
                level,
                step: self.step,
            });
        }
    }

    fn cover_targets(&mut self) {
        while self.cover_next().is_some() {}
    }

    /// Picks the next target and moves onto it, skipping it if there is no
    /// way there. Returns the picked target, or `None` once nothing is left.
    fn cover_next(&mut self) -> Option<Position> {
        let target = self.next_target()?;
        let outcome = self.search(target);

        let Some(path) = outcome.path else {
            debug!("Target {} is unreachable from {}, skipping", target, self.current.head());
            self.skip(target);
            return Some(target);
        };

        if !self.fits_budget(&path) {
            warn!(
                "Chain budget of {} poses reached with {} targets left",
                self.config.limits.max_chain_len,
                self.unvisited.len()
            );
            let remaining: Vec<Position> = self.unvisited.keys().copied().collect();
            for pos in remaining {
                self.skip(pos);
            }
            return Some(target);
        }

        debug!("Reached {} after {} moves", target, path.len());
        self.append(path);
        Some(target)
    }

    fn return_to_rest(&mut self) {
        let rest = self.config.rest;
        let outcome = search_return(self.grid, &self.current, rest, self.config);
        self.record(&outcome);

        match outcome.path {
            Some(path) if self.fits_budget(&path) => self.append(path),
            Some(_) => warn!("Chain budget leaves no room for the way back to {}", rest),
            None => {}
        }
    }

    /// Nearest remaining target by Manhattan distance, ties broken by row and
    /// then column. With `LevelLayers`, only the lowest remaining level counts.
    fn next_target(&self) -> Option<Position> {
        let head = self.current.head();
        let layer = match self.config.order {
            TargetOrder::Nearest => None,
            TargetOrder::LevelLayers => self.unvisited.values().min().copied(),
        };

        self.unvisited
            .iter()
            .filter(|(_, level)| layer.is_none_or(|layer| **level == layer))
            .map(|(pos, _)| *pos)
            .min_by_key(|pos| (head.manhattan_distance(pos), pos.y, pos.x))
    }

    fn search(&mut self, target: Position) -> SearchOutcome {
        let outcome = find_path(
            self.grid,
            &self.current,
            target,
            self.config.search,
            self.config.limits.max_search_states,
        );
        self.record(&outcome);
        outcome
    }

    fn record(&mut self, outcome: &SearchOutcome) {
        self.stats.searches += 1;
        self.stats.states_explored += outcome.explored;
        if outcome.fell_back {
            self.stats.fallbacks += 1;
        }
    }

    fn skip(&mut self, pos: Position) {
        if let Some(level) = self.unvisited.remove(&pos) {
            self.skipped.insert(pos, level);
        }
    }

    fn fits_budget(&self, path: &[Snake]) -> bool {
        self.step + 1 + path.len() <= self.config.limits.max_chain_len
    }

    fn append(&mut self, path: Vec<Snake>) {
        let Some(last) = path.last() else {
            return;
        };
        self.current = last.clone();

        for pose in &path {
            self.step += 1;
            self.cover(pose.head());
        }
        self.segments.push(path);
    }

    fn finish(self, initial: Snake) -> Result<Route> {
        let chain = assemble_chain(initial, self.segments)?;
        let skipped: Vec<Position> = self.skipped.into_keys().collect();

        info!(
            "Route covers {} of {} targets in {} poses ({} skipped, {} searches)",
            self.eaten.len(),
            self.stats.targets,
            chain.len(),
            skipped.len(),
            self.stats.searches
        );

        Ok(Route {
            chain,
            eaten: self.eaten,
            skipped,
            stats: self.stats,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell;

    fn p(x: i16, y: i16) -> Position {
        Position::new(x, y)
    }

    fn no_return() -> SolverConfig {
        SolverConfig {
            return_to_rest: false,
            ..SolverConfig::default()
        }
    }

    #[test]
    fn targets_under_the_initial_body_need_no_moves() {
        let grid = Grid::new(4, 1, [Cell::new(0, 0, 1), Cell::new(3, 0, 2)]).unwrap();
        let snake = Snake::straight(p(0, 0), 4).unwrap();
        let route = solve(&grid, &snake, &SolverConfig::default()).unwrap();

        assert_eq!(route.len(), 1);
        assert!(route.is_complete());
        assert_eq!(
            route.eaten,
            vec![
                EatenCell { position: p(0, 0), level: 1, step: 0 },
                EatenCell { position: p(3, 0), level: 2, step: 0 },
            ]
        );
    }

    #[test]
    fn empty_grid_is_a_static_image() {
        let grid = Grid::new(5, 5, []).unwrap();
        let snake = Snake::straight(p(1, 1), 3).unwrap();
        let route = solve(&grid, &snake, &SolverConfig::default()).unwrap();
        assert_eq!(route.chain.poses(), &[snake]);
        assert!(route.eaten.is_empty());
        assert_eq!(route.stats.searches, 0);
    }

    #[test]
    fn nearest_target_wins_with_raster_tie_break() {
        // Head at (2,2); (2,0), (0,2), (4,2) and (2,4) are all two steps away.
        let cells = [
            Cell::new(2, 4, 1),
            Cell::new(4, 2, 1),
            Cell::new(0, 2, 1),
            Cell::new(2, 0, 1),
        ];
        let grid = Grid::new(5, 5, cells).unwrap();
        let snake = Snake::new(vec![p(2, 4), p(2, 3), p(2, 2)]).unwrap();
        let config = SolverConfig::default();
        let planner = RoutePlanner::new(&grid, &snake, &config);
        // (2,4) is under the tail already.
        assert_eq!(planner.next_target(), Some(p(2, 0)));
    }

    #[test]
    fn level_layers_clear_light_cells_first() {
        let cells = [Cell::new(3, 0, 4), Cell::new(0, 3, 1)];
        let grid = Grid::new(5, 5, cells).unwrap();
        let snake = Snake::straight(p(0, 0), 3).unwrap();

        let nearest_config = SolverConfig::default();
        let nearest = RoutePlanner::new(&grid, &snake, &nearest_config);
        assert_eq!(nearest.next_target(), Some(p(3, 0)));

        let layered_config = SolverConfig {
            order: TargetOrder::LevelLayers,
            ..SolverConfig::default()
        };
        let layered = RoutePlanner::new(&grid, &snake, &layered_config);
        assert_eq!(layered.next_target(), Some(p(0, 3)));
    }

    #[test]
    fn level_layers_always_pick_from_the_lowest_remaining_level() {
        let first_day = chrono::NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        let grid = Grid::from_calendar(&crate::synthetic_year(11, first_day).unwrap()).unwrap();
        let snake = Snake::straight(p(0, 0), 4).unwrap();
        let config = SolverConfig {
            order: TargetOrder::LevelLayers,
            ..SolverConfig::default()
        };
        let mut planner = RoutePlanner::new(&grid, &snake, &config);

        let mut picks = 0;
        loop {
            let lowest = planner.unvisited.values().min().copied();
            let Some(target) = planner.cover_next() else {
                break;
            };
            assert_eq!(grid.level(target).ok(), lowest, "{} is not on the lowest layer", target);
            picks += 1;
        }

        assert!(planner.unvisited.is_empty());
        // Darker cells crossed on the way are eaten without being picked.
        assert!(picks < grid.target_count());
        assert_eq!(planner.eaten.len(), grid.target_count());
    }

    #[test]
    fn unreachable_targets_are_skipped() {
        // The head faces the wall of a one-row board; (0,0) is behind the tail.
        let grid = Grid::new(4, 1, [Cell::new(0, 0, 3)]).unwrap();
        let snake = Snake::straight(p(1, 0), 3).unwrap();
        let route = solve(&grid, &snake, &SolverConfig::default()).unwrap();

        assert_eq!(route.len(), 1);
        assert_eq!(route.skipped, vec![p(0, 0)]);
        assert!(!route.is_complete());
    }

    #[test]
    fn chain_budget_cuts_the_route_short() {
        let cells = [Cell::new(9, 0, 1), Cell::new(9, 6, 1), Cell::new(0, 6, 1)];
        let grid = Grid::new(10, 7, cells).unwrap();
        let snake = Snake::straight(p(0, 0), 4).unwrap();
        let mut config = no_return();
        config.limits.max_chain_len = 8;

        let route = solve(&grid, &snake, &config).unwrap();
        assert!(route.len() <= 8);
        assert_eq!(route.eaten.len(), 1);
        assert_eq!(route.skipped, vec![p(0, 6), p(9, 6)]);
    }

    #[test]
    fn initial_snake_off_the_board_is_rejected() {
        let grid = Grid::new(3, 3, []).unwrap();
        let snake = Snake::straight(p(1, 1), 3).unwrap();
        assert!(matches!(
            solve(&grid, &snake, &SolverConfig::default()),
            Err(SolverError::OutOfBounds { x: 3, y: 1, .. })
        ));
    }
}
