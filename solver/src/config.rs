use crate::constants::{DEFAULT_MAX_CHAIN_LEN, DEFAULT_MAX_SEARCH_STATES};
use crate::error::SolverError;
use crate::Position;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How a single path search tracks the poses it has already expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchMode {
    /// Poses are deduplicated by head and neck cell only. Much smaller state
    /// space, but a path that needs a particular body shape can be missed.
    HeadTrajectory,
    /// Poses are deduplicated by the whole body. Exact, and more expensive.
    WholeBody,
    /// `HeadTrajectory` first, `WholeBody` when that finds nothing.
    #[default]
    Hybrid,
}

impl FromStr for SearchMode {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "head" | "head_trajectory" => Ok(SearchMode::HeadTrajectory),
            "body" | "whole_body" => Ok(SearchMode::WholeBody),
            "hybrid" => Ok(SearchMode::Hybrid),
            other => Err(SolverError::InvalidConfig(format!(
                "unknown search mode '{other}', expected head, body or hybrid"
            ))),
        }
    }
}

/// Which unvisited target the solver heads for next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetOrder {
    /// Nearest target by Manhattan distance, ties broken by row then column.
    #[default]
    Nearest,
    /// Exhaust the lowest remaining level first, nearest-first within it.
    LevelLayers,
}

impl FromStr for TargetOrder {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "nearest" => Ok(TargetOrder::Nearest),
            "layers" | "level_layers" => Ok(TargetOrder::LevelLayers),
            other => Err(SolverError::InvalidConfig(format!(
                "unknown target order '{other}', expected nearest or layers"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchLimits {
    /// Poses one search may create before it gives up.
    pub max_search_states: usize,
    /// Poses the assembled chain may hold, initial pose included.
    pub max_chain_len: usize,
}

impl Default for SearchLimits {
    fn default() -> Self {
        SearchLimits {
            max_search_states: DEFAULT_MAX_SEARCH_STATES,
            max_chain_len: DEFAULT_MAX_CHAIN_LEN,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    pub rest: Position,
    pub return_to_rest: bool,
    pub search: SearchMode,
    pub order: TargetOrder,
    pub limits: SearchLimits,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            rest: Position::new(0, 0),
            return_to_rest: true,
            search: SearchMode::default(),
            order: TargetOrder::default(),
            limits: SearchLimits::default(),
        }
    }
}

impl SolverConfig {
    pub fn validate(&self) -> Result<(), SolverError> {
        if self.limits.max_search_states == 0 {
            return Err(SolverError::InvalidConfig(
                "max_search_states must be positive".to_string(),
            ));
        }
        if self.limits.max_chain_len == 0 {
            return Err(SolverError::InvalidConfig(
                "max_chain_len must hold at least the initial pose".to_string(),
            ));
        }
        Ok(())
    }
}
