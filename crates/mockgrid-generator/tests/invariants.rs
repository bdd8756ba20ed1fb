//! Black-box invariant tests over the public dataset API.

use mockgrid_core::Catalogs;
use mockgrid_generator::{generate_columns, generate_sample_data, DatasetGenerator};
use std::collections::HashSet;
use uuid::Uuid;

#[test]
fn dataset_satisfies_record_invariants() {
    let records = generate_sample_data(200);
    assert_eq!(records.len(), 200);

    let ids: HashSet<Uuid> = records.iter().map(|r| r.id).collect();
    assert_eq!(ids.len(), 200, "ids must be pairwise distinct");

    let parent_ids: HashSet<Uuid> = records.iter().filter_map(|r| r.parent_id).collect();

    for record in &records {
        assert!(record.progress <= 100);

        let (whole, frac) = record.amount.split_once('.').expect("two-digit amount");
        assert!(whole.chars().all(|c| c.is_ascii_digit()));
        assert_eq!(frac.len(), 2);

        assert!(!record.tags.is_empty());
        let unique: HashSet<&String> = record.tags.iter().collect();
        assert_eq!(unique.len(), record.tags.len());

        if let Some(parent_id) = record.parent_id {
            assert!(ids.contains(&parent_id), "no dangling parent references");
        }
        if parent_ids.contains(&record.id) {
            assert!(record.parent_id.is_none(), "forest depth is at most 1");
        }
    }
}

#[test]
fn columns_describe_serialized_records() {
    let mut generator = DatasetGenerator::new(Catalogs::default(), 42);
    let record = generator.generate(1).pop().unwrap();
    let json = serde_json::to_value(&record).unwrap();

    for column in generate_columns() {
        let Some(field) = column.field else {
            assert_eq!(column.id, "actions");
            continue;
        };
        assert!(
            json.get(&field).is_some(),
            "column '{field}' has no matching record field"
        );
    }
}

#[test]
fn select_filter_options_cover_generated_values() {
    let mut generator = DatasetGenerator::new(Catalogs::default(), 42);
    let records = generator.generate(100);
    let columns = generate_columns();

    let options_for = |id: &str| -> Vec<String> {
        columns
            .iter()
            .find(|c| c.id == id)
            .and_then(|c| c.filter_options.clone())
            .unwrap()
    };

    let statuses = options_for("status");
    let tags = options_for("tags");
    let countries = options_for("country");
    let departments = options_for("department");

    for record in &records {
        assert!(statuses.contains(&record.status));
        assert!(countries.contains(&record.country));
        assert!(departments.contains(&record.department));
        for tag in &record.tags {
            assert!(tags.contains(tag));
        }
    }
}

#[test]
fn outline_nodes_reference_earlier_parents() {
    let mut generator = DatasetGenerator::new(Catalogs::default(), 42);
    let nodes = generator.generate_outline(3);

    let mut seen: HashSet<Uuid> = HashSet::new();
    for node in &nodes {
        if let Some(parent_id) = node.parent_id {
            assert!(seen.contains(&parent_id));
        }
        seen.insert(node.id);
    }
    assert_eq!(seen.len(), nodes.len(), "node ids are unique");
}
