mod calendar;
mod chain;
mod config;
mod constants;
mod error;
mod grid;
mod moves;
mod return_path;
mod route;
mod search;
mod snake;

pub mod util;

pub use calendar::*;
pub use chain::*;
pub use config::*;
pub use constants::*;
pub use error::{Result, SolverError};
pub use grid::*;
pub use moves::*;
pub use return_path::plan_return;
pub use route::*;
pub use search::{find_path, SearchOutcome};
pub use snake::*;
pub use util::PseudoRandom;
