use crate::moves::successors;
use crate::{Grid, Position, SearchMode, Snake};
use log::warn;
use std::collections::{HashSet, VecDeque};
use std::hash::Hash;

/// Result of one shortest-path search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Poses after the start pose, ending with the head on the goal.
    /// Empty when the head already sits on the goal.
    pub path: Option<Vec<Snake>>,
    /// Poses created while searching.
    pub explored: usize,
    /// Whether the exact whole-body search had to take over.
    pub fell_back: bool,
}

struct Node {
    snake: Snake,
    parent: Option<usize>,
}

/// Breadth-first search over legal moves until the head reaches `goal`.
///
/// Moves are expanded in `Direction::ALL` order, so the same inputs always
/// yield the same path.
pub fn find_path(
    grid: &Grid,
    start: &Snake,
    goal: Position,
    mode: SearchMode,
    max_states: usize,
) -> SearchOutcome {
    match mode {
        SearchMode::HeadTrajectory => SearchOutcome {
            fell_back: false,
            ..bfs(grid, start, goal, max_states, head_key)
        },
        SearchMode::WholeBody => SearchOutcome {
            fell_back: false,
            ..bfs(grid, start, goal, max_states, Snake::clone)
        },
        SearchMode::Hybrid => {
            let quick = bfs(grid, start, goal, max_states, head_key);
            if quick.path.is_some() {
                return quick;
            }
            let exact = bfs(grid, start, goal, max_states, Snake::clone);
            SearchOutcome {
                path: exact.path,
                explored: quick.explored + exact.explored,
                fell_back: true,
            }
        }
    }
}

fn head_key(snake: &Snake) -> (Position, Position) {
    (snake.head(), snake.neck())
}

fn bfs<K, F>(grid: &Grid, start: &Snake, goal: Position, max_states: usize, key: F) -> SearchOutcome
where
    K: Eq + Hash,
    F: Fn(&Snake) -> K,
{
    let not_found = |explored| SearchOutcome {
        path: None,
        explored,
        fell_back: false,
    };

    if !grid.contains(goal) {
        return not_found(0);
    }
    if start.head() == goal {
        return SearchOutcome {
            path: Some(Vec::new()),
            explored: 0,
            fell_back: false,
        };
    }

    let mut nodes = vec![Node {
        snake: start.clone(),
        parent: None,
    }];
    let mut seen = HashSet::new();
    seen.insert(key(start));
    let mut queue = VecDeque::from([0usize]);

    while let Some(idx) = queue.pop_front() {
        for next in successors(grid, &nodes[idx].snake) {
            if !seen.insert(key(&next)) {
                continue;
            }

            let reached = next.head() == goal;
            nodes.push(Node {
                snake: next,
                parent: Some(idx),
            });

            if reached {
                let explored = nodes.len() - 1;
                return SearchOutcome {
                    path: Some(unwind(&nodes)),
                    explored,
                    fell_back: false,
                };
            }

            if nodes.len() > max_states {
                warn!(
                    "Search toward {} gave up after {} poses",
                    goal, max_states
                );
                return not_found(nodes.len() - 1);
            }

            queue.push_back(nodes.len() - 1);
        }
    }

    not_found(nodes.len() - 1)
}

// Walks parent links back from the last node; the root pose is left out.
fn unwind(nodes: &[Node]) -> Vec<Snake> {
    let mut path = Vec::new();
    let mut cursor = nodes.len() - 1;

    while let Some(parent) = nodes[cursor].parent {
        path.push(nodes[cursor].snake.clone());
        cursor = parent;
    }

    path.reverse();
    path
}
