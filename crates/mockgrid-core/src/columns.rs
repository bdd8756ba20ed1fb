//! Column metadata for grid consumers.
//!
//! A [`ColumnDescriptor`] tells a rendering component how to label, sort,
//! filter, and edit one field. Descriptor order defines default left-to-right
//! display order, and the synthetic `actions` descriptor is always last.

use crate::catalogs::Catalogs;
use serde::{Deserialize, Serialize};

/// Filter widget kind for a column.
///
/// A column with no filter at all carries `filter_type: None` on the
/// descriptor instead of a dedicated variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterType {
    Text,
    Date,
    Number,
    Select,
    Multiselect,
    Boolean,
}

/// Downstream formatting kind for a column's values.
///
/// Drives how a consumer renders the cell, not how values are generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    String,
    Date,
    Currency,
    Enum,
    Boolean,
    Percentage,
    Array,
    Actions,
}

/// Optional formatting hint, present only on currency columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnFormat {
    /// Format kind; currently always `"currency"`
    #[serde(rename = "type")]
    pub format_type: String,

    /// ISO 4217 currency code
    pub currency: String,
}

impl ColumnFormat {
    /// Currency format with the given ISO 4217 code.
    pub fn currency(code: impl Into<String>) -> Self {
        Self {
            format_type: "currency".to_string(),
            currency: code.into(),
        }
    }
}

/// Metadata describing one grid column.
///
/// Immutable once produced. `field` is the record field the column reads;
/// it is `None` only for the synthetic `actions` column, which carries
/// UI-only controls and no data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDescriptor {
    /// Unique column key, matching the record field name for data columns
    pub id: String,

    /// Display name
    pub label: String,

    /// Record field backing this column; `None` for synthetic columns
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,

    /// Whether the column supports sorting
    pub sortable: bool,

    /// Whether the column supports filtering
    pub filterable: bool,

    /// Filter widget kind; `None` when the column is not filterable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_type: Option<FilterType>,

    /// Enumerated filter choices for select/multiselect filters.
    ///
    /// Always sourced from the same catalog the record factory samples, so
    /// schema and data cannot disagree.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_options: Option<Vec<String>>,

    /// Whether cells in the column are editable
    pub editable: bool,

    /// Rendering width hint in pixels
    pub width: u32,

    /// Downstream formatting kind
    pub data_type: DataType,

    /// Extra formatting hint (currency columns only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<ColumnFormat>,
}

impl ColumnDescriptor {
    /// Build a sortable, filterable, editable data column.
    pub fn data(
        id: &str,
        label: &str,
        filter_type: FilterType,
        width: u32,
        data_type: DataType,
    ) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            field: Some(id.to_string()),
            sortable: true,
            filterable: true,
            filter_type: Some(filter_type),
            filter_options: None,
            editable: true,
            width,
            data_type,
            format: None,
        }
    }

    /// Build the synthetic `actions` column (always last, no backing field).
    pub fn actions(width: u32) -> Self {
        Self {
            id: "actions".to_string(),
            label: "Actions".to_string(),
            field: None,
            sortable: false,
            filterable: false,
            filter_type: None,
            filter_options: None,
            editable: false,
            width,
            data_type: DataType::Actions,
            format: None,
        }
    }

    /// Attach select/multiselect filter options.
    pub fn with_options(mut self, options: &[String]) -> Self {
        self.filter_options = Some(options.to_vec());
        self
    }

    /// Attach a formatting hint.
    pub fn with_format(mut self, format: ColumnFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Mark the column as not sortable.
    pub fn unsortable(mut self) -> Self {
        self.sortable = false;
        self
    }
}

/// Build the column schema for the given catalogs.
///
/// Pure and order-preserving: the same catalogs always produce the same
/// descriptors in the same order, with `actions` last. Select-filter options
/// are taken verbatim from the catalogs.
pub fn grid_columns(catalogs: &Catalogs) -> Vec<ColumnDescriptor> {
    vec![
        ColumnDescriptor::data("name", "Name", FilterType::Text, 200, DataType::String),
        ColumnDescriptor::data("email", "Email", FilterType::Text, 250, DataType::String),
        ColumnDescriptor::data("date", "Date", FilterType::Date, 150, DataType::Date),
        ColumnDescriptor::data("amount", "Amount", FilterType::Number, 150, DataType::Currency)
            .with_format(ColumnFormat::currency("USD")),
        ColumnDescriptor::data("status", "Status", FilterType::Select, 150, DataType::Enum)
            .with_options(&catalogs.statuses),
        ColumnDescriptor::data("isActive", "Active", FilterType::Boolean, 100, DataType::Boolean),
        ColumnDescriptor::data(
            "progress",
            "Progress",
            FilterType::Number,
            150,
            DataType::Percentage,
        ),
        ColumnDescriptor::data("tags", "Tags", FilterType::Multiselect, 200, DataType::Array)
            .with_options(&catalogs.tags)
            .unsortable(),
        ColumnDescriptor::data("country", "Country", FilterType::Select, 150, DataType::String)
            .with_options(&catalogs.countries),
        ColumnDescriptor::data(
            "department",
            "Department",
            FilterType::Select,
            200,
            DataType::String,
        )
        .with_options(&catalogs.departments),
        ColumnDescriptor::actions(120),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_constant_and_ordered() {
        let catalogs = Catalogs::default();
        let first = grid_columns(&catalogs);
        let second = grid_columns(&catalogs);

        assert_eq!(first, second);
        assert_eq!(first.len(), 11);

        let ids: Vec<&str> = first.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "name",
                "email",
                "date",
                "amount",
                "status",
                "isActive",
                "progress",
                "tags",
                "country",
                "department",
                "actions"
            ]
        );
    }

    #[test]
    fn test_actions_column_is_synthetic_and_last() {
        let columns = grid_columns(&Catalogs::default());
        let actions = columns.last().unwrap();

        assert_eq!(actions.id, "actions");
        assert!(actions.field.is_none());
        assert!(actions.filter_type.is_none());
        assert!(!actions.sortable);
        assert!(!actions.filterable);
        assert!(!actions.editable);
        assert_eq!(actions.data_type, DataType::Actions);
    }

    #[test]
    fn test_filter_options_match_catalogs() {
        let catalogs = Catalogs::default();
        let columns = grid_columns(&catalogs);

        let status = columns.iter().find(|c| c.id == "status").unwrap();
        assert_eq!(status.filter_options.as_ref().unwrap(), &catalogs.statuses);
        assert_eq!(status.filter_type, Some(FilterType::Select));

        let tags = columns.iter().find(|c| c.id == "tags").unwrap();
        assert_eq!(tags.filter_options.as_ref().unwrap(), &catalogs.tags);
        assert_eq!(tags.filter_type, Some(FilterType::Multiselect));
        assert!(!tags.sortable);
    }

    #[test]
    fn test_currency_format_only_on_amount() {
        let columns = grid_columns(&Catalogs::default());

        for column in &columns {
            if column.id == "amount" {
                assert_eq!(column.format, Some(ColumnFormat::currency("USD")));
                assert_eq!(column.data_type, DataType::Currency);
            } else {
                assert!(column.format.is_none());
            }
        }
    }

    #[test]
    fn test_serialized_shape() {
        let columns = grid_columns(&Catalogs::default());
        let json = serde_json::to_value(&columns).unwrap();

        // Enum columns carry lowercase filter types and data types.
        assert_eq!(json[4]["filterType"], serde_json::json!("select"));
        assert_eq!(json[4]["dataType"], serde_json::json!("enum"));

        // Currency format serializes with a "type" tag.
        assert_eq!(json[3]["format"]["type"], serde_json::json!("currency"));
        assert_eq!(json[3]["format"]["currency"], serde_json::json!("USD"));

        // The actions column omits field/filterType/filterOptions entirely.
        let actions = &json[10];
        assert!(actions.get("field").is_none());
        assert!(actions.get("filterType").is_none());
        assert!(actions.get("filterOptions").is_none());
    }
}
