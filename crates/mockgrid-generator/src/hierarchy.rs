//! Hierarchy strategies: overlaying parent/child links on a flat record set,
//! or growing a tree of nodes from scratch.
//!
//! The two strategies are named, selectable alternatives and are never mixed
//! within one dataset:
//!
//! - [`assign_parents`] relinks an existing flat collection into a depth-1
//!   forest (a percentage of records become parents, nearby records their
//!   children).
//! - [`generate_tree`] creates new, narrower [`TreeNode`]s top-down with
//!   variable depth.

use crate::generators::{choice, identity, person};
use mockgrid_core::{Catalogs, Record, TreeNode};
use rand::Rng;
use std::collections::HashSet;
use std::str::FromStr;
use uuid::Uuid;

/// Default share of records promoted to parents, in percent.
pub const DEFAULT_PARENT_PERCENTAGE: u8 = 30;

/// Default average child count per parent.
pub const DEFAULT_AVG_CHILDREN_PER_PARENT: u32 = 3;

/// Default maximum tree depth for the recursive strategy.
pub const DEFAULT_MAX_LEVEL: u32 = 2;

/// Probability of descending one level after emitting a tree node.
const DESCEND_PROBABILITY: f64 = 0.7;

/// Sibling count range per tree level.
const SIBLING_RANGE: (u32, u32) = (1, 3);

/// Error returned when a strategy name cannot be parsed.
#[derive(Debug, thiserror::Error)]
#[error("Unknown hierarchy strategy '{0}' (expected 'percentage' or 'tree')")]
pub struct StrategyParseError(String);

/// Selectable hierarchy strategy with its tuning parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HierarchyStrategy {
    /// Relink a flat collection into a depth-1 forest.
    Percentage {
        /// Share of records promoted to parents (0-100)
        parent_percentage: u8,
        /// Average child count per parent
        avg_children_per_parent: u32,
    },

    /// Grow a multi-level tree of new nodes.
    RecursiveTree {
        /// Maximum 0-based depth
        max_level: u32,
    },
}

impl Default for HierarchyStrategy {
    fn default() -> Self {
        Self::Percentage {
            parent_percentage: DEFAULT_PARENT_PERCENTAGE,
            avg_children_per_parent: DEFAULT_AVG_CHILDREN_PER_PARENT,
        }
    }
}

impl FromStr for HierarchyStrategy {
    type Err = StrategyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "percentage" => Ok(Self::default()),
            "tree" | "recursive-tree" => Ok(Self::RecursiveTree {
                max_level: DEFAULT_MAX_LEVEL,
            }),
            other => Err(StrategyParseError(other.to_string())),
        }
    }
}

/// Overlay parent/child links on a flat collection (percentage strategy).
///
/// Selects `max(1, floor(len * parent_percentage / 100))` distinct parent
/// records uniformly without replacement, then walks a wrap-around run of
/// indices per parent, claiming each visited record as a child. A parent is
/// never claimed as a child, so the result is a forest of depth 1; ranges of
/// later-processed parents overwrite earlier claims (last-write-wins in
/// selection order). Child runs may undershoot the requested average when
/// they collide with the parent set.
///
/// Pure apart from RNG state: returns the collection with only `parent_id`
/// fields changed. Fewer than 2 records are returned unchanged.
pub fn assign_parents<R: Rng>(
    mut records: Vec<Record>,
    parent_percentage: u8,
    avg_children_per_parent: u32,
    rng: &mut R,
) -> Vec<Record> {
    let len = records.len();
    if len < 2 {
        return records;
    }

    let num_parents = ((len * parent_percentage as usize) / 100).clamp(1, len);

    // Distinct parent indices, kept in selection order: later parents win
    // when child runs overlap.
    let mut parent_indices: Vec<usize> = Vec::with_capacity(num_parents);
    while parent_indices.len() < num_parents {
        let index = rng.gen_range(0..len);
        if !parent_indices.contains(&index) {
            parent_indices.push(index);
        }
    }
    let parent_set: HashSet<usize> = parent_indices.iter().copied().collect();

    for &parent_index in &parent_indices {
        let parent_id = records[parent_index].id;

        // Roughly [0.5x, 1.5x] of the requested average, never zero.
        let spread = avg_children_per_parent as f64 * (0.5 + rng.gen::<f64>());
        let num_children = (spread.floor() as usize).max(1);

        let start = rng.gen_range(0..len);
        for offset in 0..num_children {
            let child_index = (start + offset) % len;
            if child_index == parent_index || parent_set.contains(&child_index) {
                continue;
            }
            records[child_index].parent_id = Some(parent_id);
        }
    }

    records
}

/// Grow a tree of nodes top-down (recursive-tree strategy).
///
/// Each call emits 1-3 siblings at `level` carrying the caller's id as
/// parent, and after each node descends one level with probability 0.7 -
/// but only while `level < max_level`. A call past `max_level` yields
/// nothing. The result is every node in creation order, so a node's parent
/// always precedes it.
pub fn generate_tree<R: Rng>(
    rng: &mut R,
    catalogs: &Catalogs,
    parent_id: Option<Uuid>,
    level: u32,
    max_level: u32,
) -> Vec<TreeNode> {
    if level > max_level {
        return Vec::new();
    }

    let (min_siblings, max_siblings) = SIBLING_RANGE;
    let siblings = rng.gen_range(min_siblings..=max_siblings);
    let mut nodes = Vec::new();

    for _ in 0..siblings {
        let id = identity::uuid_v4(rng);
        nodes.push(TreeNode {
            id,
            parent_id,
            name: person::full_name(rng, &catalogs.first_names, &catalogs.last_names),
            department: choice::one_of(rng, &catalogs.departments).to_string(),
            level,
        });

        if level < max_level && rng.gen_bool(DESCEND_PROBABILITY) {
            nodes.extend(generate_tree(rng, catalogs, Some(id), level + 1, max_level));
        }
    }

    nodes
}
