use super::Frame;
use solver::{Position, Route, Snake};
use std::collections::BTreeSet;

/// Steps through a solved route one pose at a time.
pub struct ChainPlayer {
    route: Route,
    current_step: usize,
}

impl ChainPlayer {
    pub fn new(route: Route) -> Self {
        Self {
            route,
            current_step: 0,
        }
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    /// Move forward by `steps` poses, stopping on the last one.
    pub fn step_forward(&mut self, steps: usize) {
        self.current_step = self.current_step.saturating_add(steps).min(self.max_step());
    }

    pub fn step_backward(&mut self, steps: usize) {
        self.current_step = self.current_step.saturating_sub(steps);
    }

    pub fn seek(&mut self, step: usize) {
        self.current_step = step.min(self.max_step());
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn max_step(&self) -> usize {
        self.route.len().saturating_sub(1)
    }

    /// An empty route has nothing to play and counts as finished.
    pub fn is_finished(&self) -> bool {
        self.route.is_empty() || self.current_step == self.max_step()
    }

    pub fn current_pose(&self) -> Option<&Snake> {
        self.route.chain.poses().get(self.current_step)
    }

    /// Cells whose colour has already been eaten by `step`.
    pub fn eaten_at(&self, step: usize) -> BTreeSet<Position> {
        self.route
            .eaten
            .iter()
            .take_while(|eaten| eaten.step <= step)
            .map(|eaten| eaten.position)
            .collect()
    }

    pub fn frame(&self) -> Option<Frame> {
        let pose = self.current_pose()?.clone();
        Some(Frame {
            step: self.current_step,
            pose,
            eaten: self.eaten_at(self.current_step),
        })
    }
}
