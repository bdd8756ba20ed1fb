//! Record types produced by the generator.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One generated data row.
///
/// Field names serialize in camelCase to match grid consumers. `parent_id`
/// is `None` at creation and is assigned at most once by a hierarchy
/// strategy; a non-null value always references another record's `id` in the
/// same collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// Unique identifier, assigned once at creation
    pub id: Uuid,

    /// Full name ("First Last")
    pub name: String,

    /// Email address derived from `name` at generation time
    pub email: String,

    /// Calendar date with no time component
    pub date: NaiveDate,

    /// Monetary amount rendered with exactly two fractional digits.
    ///
    /// Kept as text so display formatting never drifts through float
    /// round-tripping.
    pub amount: String,

    /// One of the status catalog values
    pub status: String,

    /// Boolean flag
    pub is_active: bool,

    /// Completion percentage in `[0, 100]`
    pub progress: u8,

    /// Non-empty, duplicate-free subset of the tag catalog
    pub tags: Vec<String>,

    /// One of the country catalog values
    pub country: String,

    /// One of the department catalog values
    pub department: String,

    /// Parent record reference; `None` means root
    pub parent_id: Option<Uuid>,
}

/// Node emitted by the recursive-tree hierarchy strategy.
///
/// Deliberately narrower than [`Record`]: the tree strategy generates only
/// name, department, and depth. Reconciling this shape with the flat column
/// schema is left to the consumer; it is a documented mismatch, not a bug.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeNode {
    /// Unique identifier
    pub id: Uuid,

    /// Parent node reference; `None` only for root-level nodes
    pub parent_id: Option<Uuid>,

    /// Full name
    pub name: String,

    /// One of the department catalog values
    pub department: String,

    /// Depth from the root, 0-based
    pub level: u32,
}
