//! Injectable reference tables for value generation.
//!
//! The record factory never hardcodes example values; it samples from a
//! [`Catalogs`] instance. The default catalogs match the filter options the
//! column schema advertises, and a custom set can be loaded from YAML for
//! tests or themed datasets.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Error type for catalog loading.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Error reading catalog file
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A catalog table has no entries
    #[error("Catalog '{0}' is empty")]
    EmptyCatalog(&'static str),
}

/// Reference tables the record factory samples from.
///
/// Every table must be non-empty; generation draws uniformly by index.
/// [`Catalogs::default`] carries the stock example values used by the default
/// column schema's filter options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalogs {
    /// First-name pool for the `name` field
    pub first_names: Vec<String>,

    /// Last-name pool for the `name` field
    pub last_names: Vec<String>,

    /// Domain pool for the derived `email` field
    pub email_domains: Vec<String>,

    /// Value pool for the `status` field
    pub statuses: Vec<String>,

    /// Value pool for the `tags` field
    pub tags: Vec<String>,

    /// Value pool for the `country` field
    pub countries: Vec<String>,

    /// Value pool for the `department` field
    pub departments: Vec<String>,
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

impl Default for Catalogs {
    fn default() -> Self {
        Self {
            first_names: to_strings(&[
                "John", "Jane", "Michael", "Emily", "David", "Sarah", "Robert", "Lisa",
                "William", "Emma", "James", "Olivia", "Daniel", "Sophia", "Matthew", "Ava",
                "Joseph", "Isabella", "Christopher", "Mia",
            ]),
            last_names: to_strings(&[
                "Smith", "Johnson", "Williams", "Jones", "Brown", "Davis", "Miller", "Wilson",
                "Moore", "Taylor", "Anderson", "Thomas", "Jackson", "White", "Harris", "Martin",
                "Thompson", "Garcia", "Martinez", "Robinson",
            ]),
            email_domains: to_strings(&[
                "gmail.com",
                "yahoo.com",
                "hotmail.com",
                "outlook.com",
                "icloud.com",
                "example.com",
            ]),
            statuses: to_strings(&["Active", "Inactive", "Pending", "Completed", "Cancelled"]),
            tags: to_strings(&[
                "Frontend", "Backend", "UI", "UX", "Database", "API", "Mobile", "Web", "Cloud",
                "DevOps", "Testing", "Security",
            ]),
            countries: to_strings(&[
                "USA", "Canada", "UK", "Germany", "France", "Australia", "Japan", "China",
                "India", "Brazil",
            ]),
            departments: to_strings(&[
                "Engineering",
                "Marketing",
                "Sales",
                "HR",
                "Finance",
                "Operations",
                "Customer Support",
                "Research",
                "Legal",
                "Product",
            ]),
        }
    }
}

impl Catalogs {
    /// Load catalogs from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse catalogs from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, CatalogError> {
        let catalogs: Catalogs = serde_yaml::from_str(yaml)?;
        catalogs.validate()?;
        Ok(catalogs)
    }

    /// Verify that every table has at least one entry.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let tables: [(&'static str, &Vec<String>); 7] = [
            ("first_names", &self.first_names),
            ("last_names", &self.last_names),
            ("email_domains", &self.email_domains),
            ("statuses", &self.statuses),
            ("tags", &self.tags),
            ("countries", &self.countries),
            ("departments", &self.departments),
        ];

        for (name, table) in tables {
            if table.is_empty() {
                return Err(CatalogError::EmptyCatalog(name));
            }
        }
        Ok(())
    }
}
