//! Generated sale values and rows.

use crate::branch::{Branch, Field};

/// A single generated cell.
///
/// `Text("")` and `Null` are distinct here even though both end up as an
/// empty CSV field.
#[derive(Debug, Clone, PartialEq)]
pub enum SaleValue {
    Null,
    Text(String),
    Int(i64),
    Price(f64),
}

impl SaleValue {
    pub fn text(s: impl Into<String>) -> Self {
        SaleValue::Text(s.into())
    }

    /// Null or an empty string.
    pub fn is_blank(&self) -> bool {
        match self {
            SaleValue::Null => true,
            SaleValue::Text(s) => s.is_empty(),
            _ => false,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            SaleValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            SaleValue::Int(i) => Some(*i),
            _ => None,
        }
    }
}

impl From<Option<f64>> for SaleValue {
    fn from(price: Option<f64>) -> Self {
        price.map(SaleValue::Price).unwrap_or(SaleValue::Null)
    }
}

/// One generated row for a branch, values in the branch's column order.
#[derive(Debug, Clone, PartialEq)]
pub struct SaleRow {
    pub branch: Branch,
    /// Position of this row within the generator's run.
    pub index: u64,
    pub values: Vec<SaleValue>,
}

impl SaleRow {
    pub fn new(branch: Branch, index: u64, values: Vec<SaleValue>) -> Self {
        Self {
            branch,
            index,
            values,
        }
    }

    /// Value of a logical field, `None` if the branch has no such column.
    pub fn field(&self, field: Field) -> Option<&SaleValue> {
        self.values.get(field.position())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_values() {
        assert!(SaleValue::Null.is_blank());
        assert!(SaleValue::text("").is_blank());
        assert!(!SaleValue::text("Mouse").is_blank());
        assert!(!SaleValue::Int(0).is_blank());
    }

    #[test]
    fn test_price_from_option() {
        assert_eq!(SaleValue::from(Some(700.0)), SaleValue::Price(700.0));
        assert_eq!(SaleValue::from(None), SaleValue::Null);
    }

    #[test]
    fn test_field_lookup() {
        let row = SaleRow::new(
            Branch::North,
            0,
            vec![
                SaleValue::text("17"),
                SaleValue::text("2024-03-07"),
                SaleValue::Null,
                SaleValue::text("Mouse"),
                SaleValue::Int(3),
                SaleValue::Price(700.0),
                SaleValue::text("UPI"),
                SaleValue::text("2024-03-07 10:00:00"),
            ],
        );

        assert_eq!(row.field(Field::Product), Some(&SaleValue::text("Mouse")));
        assert_eq!(row.field(Field::Quantity).and_then(|v| v.as_int()), Some(3));
        assert_eq!(row.field(Field::Extra), None);
    }
}
