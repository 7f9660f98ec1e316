//! Regional branches and the column layout each one uses.
//!
//! All three branches record the same sale event. They differ only in column
//! naming, sale-date format, identifier type and the optional extra column.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A regional branch feeding the downstream pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Branch {
    North,
    South,
    West,
}

impl Branch {
    /// All branches in the order they are written and uploaded.
    pub const ALL: [Branch; 3] = [Branch::North, Branch::South, Branch::West];

    /// Lowercase key used in the manifest and as the remote directory name.
    pub fn key(&self) -> &'static str {
        match self {
            Branch::North => "north",
            Branch::South => "south",
            Branch::West => "west",
        }
    }

    /// Capitalised name used in file names.
    pub fn display_name(&self) -> &'static str {
        match self {
            Branch::North => "North",
            Branch::South => "South",
            Branch::West => "West",
        }
    }

    /// The column layout this branch writes.
    pub fn schema(&self) -> &'static BranchSchema {
        match self {
            Branch::North => &NORTH,
            Branch::South => &SOUTH,
            Branch::West => &WEST,
        }
    }

    /// Name of the CSV file for this branch, e.g. `North_Sales_2024-03-07.csv`.
    pub fn file_name(&self, date: NaiveDate) -> String {
        format!(
            "{}_Sales_{}.csv",
            self.display_name(),
            crate::format_batch_date(date)
        )
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// How the identifier column is typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdType {
    /// Identifier rendered as a string.
    Text,
    /// Identifier kept as a native integer.
    Int,
}

/// Kind of value carried by a branch's extra column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtraField {
    /// Source channel tag (`POS`, `ONLINE`, `MOBILE` or null).
    SourceSystem,
    /// Discount percentage in `[2, 40)`.
    Discount,
}

/// An extra, branch-specific column appended after the common ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtraColumn {
    pub name: &'static str,
    pub kind: ExtraField,
}

/// Names of the common columns, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnNames {
    pub id: &'static str,
    pub sale_date: &'static str,
    pub customer: &'static str,
    pub product: &'static str,
    pub quantity: &'static str,
    pub unit_price: &'static str,
    pub payment_method: &'static str,
    pub created_at: &'static str,
}

/// Logical fields of a sale row, in column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Id,
    SaleDate,
    Customer,
    Product,
    Quantity,
    UnitPrice,
    PaymentMethod,
    CreatedAt,
    Extra,
}

impl Field {
    /// Position of this field in a row.
    pub fn position(&self) -> usize {
        match self {
            Field::Id => 0,
            Field::SaleDate => 1,
            Field::Customer => 2,
            Field::Product => 3,
            Field::Quantity => 4,
            Field::UnitPrice => 5,
            Field::PaymentMethod => 6,
            Field::CreatedAt => 7,
            Field::Extra => 8,
        }
    }
}

/// Descriptor driving row synthesis and CSV output for one branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BranchSchema {
    pub branch: Branch,
    pub columns: ColumnNames,
    /// chrono format string for the sale-date column.
    pub date_format: &'static str,
    pub id_type: IdType,
    pub extra: Option<ExtraColumn>,
}

impl BranchSchema {
    /// Header row for this branch.
    pub fn column_names(&self) -> Vec<&'static str> {
        let c = &self.columns;
        let mut names = vec![
            c.id,
            c.sale_date,
            c.customer,
            c.product,
            c.quantity,
            c.unit_price,
            c.payment_method,
            c.created_at,
        ];
        if let Some(extra) = &self.extra {
            names.push(extra.name);
        }
        names
    }

    /// Number of columns in a row.
    pub fn width(&self) -> usize {
        if self.extra.is_some() {
            9
        } else {
            8
        }
    }

    /// Render the sale date in this branch's format.
    pub fn format_sale_date(&self, date: NaiveDate) -> String {
        date.format(self.date_format).to_string()
    }
}

pub const NORTH: BranchSchema = BranchSchema {
    branch: Branch::North,
    columns: ColumnNames {
        id: "SaleID",
        sale_date: "SaleDate",
        customer: "Customer",
        product: "Product",
        quantity: "Units",
        unit_price: "UnitPrice",
        payment_method: "PaymentMethod",
        created_at: "CreatedAt",
    },
    date_format: "%Y-%m-%d",
    id_type: IdType::Text,
    extra: None,
};

pub const SOUTH: BranchSchema = BranchSchema {
    branch: Branch::South,
    columns: ColumnNames {
        id: "TransactionID",
        sale_date: "TransactionDate",
        customer: "ClientName",
        product: "ItemName",
        quantity: "QuantitySold",
        unit_price: "PricePerUnit",
        payment_method: "PaymentType",
        created_at: "RecordCreatedAt",
    },
    date_format: "%m/%d/%Y",
    id_type: IdType::Int,
    extra: Some(ExtraColumn {
        name: "SourceSystem",
        kind: ExtraField::SourceSystem,
    }),
};

pub const WEST: BranchSchema = BranchSchema {
    branch: Branch::West,
    columns: ColumnNames {
        id: "order_id",
        sale_date: "order_date",
        customer: "buyer",
        product: "item",
        quantity: "unit_count",
        unit_price: "unit_cost",
        payment_method: "payment_channel",
        created_at: "created_timestamp",
    },
    date_format: "%m-%d-%Y",
    id_type: IdType::Text,
    extra: Some(ExtraColumn {
        name: "discount",
        kind: ExtraField::Discount,
    }),
};

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 7).unwrap()
    }

    #[test]
    fn test_column_names() {
        assert_eq!(
            Branch::North.schema().column_names(),
            vec![
                "SaleID",
                "SaleDate",
                "Customer",
                "Product",
                "Units",
                "UnitPrice",
                "PaymentMethod",
                "CreatedAt"
            ]
        );
        assert_eq!(
            Branch::South.schema().column_names(),
            vec![
                "TransactionID",
                "TransactionDate",
                "ClientName",
                "ItemName",
                "QuantitySold",
                "PricePerUnit",
                "PaymentType",
                "RecordCreatedAt",
                "SourceSystem"
            ]
        );
        assert_eq!(
            Branch::West.schema().column_names(),
            vec![
                "order_id",
                "order_date",
                "buyer",
                "item",
                "unit_count",
                "unit_cost",
                "payment_channel",
                "created_timestamp",
                "discount"
            ]
        );
    }

    #[test]
    fn test_width_matches_header() {
        for branch in Branch::ALL {
            let schema = branch.schema();
            assert_eq!(schema.width(), schema.column_names().len());
            assert_eq!(schema.branch, branch);
        }
    }

    #[test]
    fn test_sale_date_formats() {
        assert_eq!(NORTH.format_sale_date(date()), "2024-03-07");
        assert_eq!(SOUTH.format_sale_date(date()), "03/07/2024");
        assert_eq!(WEST.format_sale_date(date()), "03-07-2024");
    }

    #[test]
    fn test_file_names() {
        assert_eq!(Branch::North.file_name(date()), "North_Sales_2024-03-07.csv");
        assert_eq!(Branch::South.file_name(date()), "South_Sales_2024-03-07.csv");
        assert_eq!(Branch::West.file_name(date()), "West_Sales_2024-03-07.csv");
    }

    #[test]
    fn test_branch_serde_key() {
        let json = serde_json::to_string(&Branch::South).unwrap();
        assert_eq!(json, "\"south\"");
        assert_eq!(Branch::West.to_string(), "west");
    }
}
