use crate::error::{Result, SolverError};
use crate::{Position, Snake};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Ordered poses of the whole animation. Serialises as `Position[][]`,
/// each pose listed tail first.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Chain {
    poses: Vec<Snake>,
}

impl Chain {
    pub fn poses(&self) -> &[Snake] {
        &self.poses
    }

    pub fn len(&self) -> usize {
        self.poses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.poses.is_empty()
    }

    pub fn first(&self) -> Option<&Snake> {
        self.poses.first()
    }

    pub fn last(&self) -> Option<&Snake> {
        self.poses.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Snake> {
        self.poses.iter()
    }

    /// Every cell any pose of the chain occupies.
    pub fn covered_cells(&self) -> BTreeSet<Position> {
        self.poses
            .iter()
            .flat_map(|pose| pose.body().iter().copied())
            .collect()
    }
}

impl<'a> IntoIterator for &'a Chain {
    type Item = &'a Snake;
    type IntoIter = std::slice::Iter<'a, Snake>;

    fn into_iter(self) -> Self::IntoIter {
        self.poses.iter()
    }
}

/// Joins path segments behind the initial pose.
///
/// A segment pose equal to the pose before it is dropped; any other gap
/// between consecutive poses is an `IllegalMove`.
pub fn assemble_chain<I>(initial: Snake, segments: I) -> Result<Chain>
where
    I: IntoIterator<Item = Vec<Snake>>,
{
    let mut poses = vec![initial];

    for segment in segments {
        for pose in segment {
            let previous = &poses[poses.len() - 1];
            if *previous == pose {
                continue;
            }
            if !previous.is_successor(&pose) {
                return Err(SolverError::IllegalMove {
                    from: previous.head(),
                    to: pose.head(),
                });
            }
            poses.push(pose);
        }
    }

    Ok(Chain { poses })
}
