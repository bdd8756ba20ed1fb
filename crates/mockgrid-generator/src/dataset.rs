//! Dataset orchestration: record creation plus exactly one hierarchy pass.

use crate::factory::RecordFactory;
use crate::hierarchy::{
    assign_parents, generate_tree, DEFAULT_AVG_CHILDREN_PER_PARENT, DEFAULT_PARENT_PERCENTAGE,
};
use mockgrid_core::{grid_columns, Catalogs, ColumnDescriptor, Record, TreeNode};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

/// Default record count for [`generate_sample_data`].
pub const DEFAULT_RECORD_COUNT: usize = 100;

/// Orchestrator producing complete sample datasets.
///
/// Invokes the record factory `count` times, then applies exactly one
/// hierarchy strategy over the result. A fresh batch is produced per call;
/// nothing is cached or persisted.
pub struct DatasetGenerator {
    factory: RecordFactory,
    rng: StdRng,
}

impl DatasetGenerator {
    /// Create a generator with the given catalogs and seed.
    ///
    /// The seed covers both record creation and hierarchy assignment, so the
    /// same catalogs and seed yield an identical dataset.
    pub fn new(catalogs: Catalogs, seed: u64) -> Self {
        Self {
            factory: RecordFactory::new(catalogs, seed),
            // Decorrelate the hierarchy stream from the record stream.
            rng: StdRng::seed_from_u64(seed.wrapping_mul(0x9E37_79B9_7F4A_7C15)),
        }
    }

    /// Create a generator seeded from OS entropy (non-reproducible).
    pub fn from_entropy(catalogs: Catalogs) -> Self {
        Self {
            factory: RecordFactory::from_entropy(catalogs),
            rng: StdRng::from_entropy(),
        }
    }

    /// Get a reference to the catalogs in use.
    pub fn catalogs(&self) -> &Catalogs {
        self.factory.catalogs()
    }

    /// Generate `count` records linked by the percentage strategy with its
    /// default tuning (30% parents, 3 children per parent on average).
    pub fn generate(&mut self, count: usize) -> Vec<Record> {
        self.generate_with(
            count,
            DEFAULT_PARENT_PERCENTAGE,
            DEFAULT_AVG_CHILDREN_PER_PARENT,
        )
    }

    /// Generate `count` records linked by the percentage strategy with
    /// explicit tuning. `count == 0` yields an empty collection.
    pub fn generate_with(
        &mut self,
        count: usize,
        parent_percentage: u8,
        avg_children_per_parent: u32,
    ) -> Vec<Record> {
        debug!("generating {count} flat records");
        let records: Vec<Record> = (0..count).map(|_| self.factory.create_record()).collect();

        let records = assign_parents(
            records,
            parent_percentage,
            avg_children_per_parent,
            &mut self.rng,
        );

        let children = records.iter().filter(|r| r.parent_id.is_some()).count();
        info!(
            "dataset complete: {} records, {} linked as children",
            records.len(),
            children
        );
        records
    }

    /// Generate a variable-depth outline with the recursive-tree strategy.
    ///
    /// Produces new [`TreeNode`]s top-down instead of relinking flat
    /// records; the node shape is narrower than [`Record`] and is not
    /// covered by the flat column schema.
    pub fn generate_outline(&mut self, max_level: u32) -> Vec<TreeNode> {
        let nodes = generate_tree(&mut self.rng, self.factory.catalogs(), None, 0, max_level);
        info!("outline complete: {} nodes, max level {max_level}", nodes.len());
        nodes
    }
}

/// Generate a sample dataset over the default catalogs.
///
/// Entropy-seeded (non-reproducible by design); use [`DatasetGenerator::new`]
/// with a seed when reproducibility matters. `count == 0` yields an empty
/// collection.
pub fn generate_sample_data(count: usize) -> Vec<Record> {
    let mut generator = DatasetGenerator::from_entropy(Catalogs::default());
    generator.generate(count)
}

/// Generate the column schema matching [`generate_sample_data`] output.
///
/// Constant per call: same descriptors, same order, `actions` last.
pub fn generate_columns() -> Vec<ColumnDescriptor> {
    grid_columns(&Catalogs::default())
}
