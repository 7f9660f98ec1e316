//! Conversion of sale values to CSV fields.

use sales_core::{SaleRow, SaleValue};

/// Wrapper for CSV string values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvValue(pub String);

impl CsvValue {
    /// Get the inner CSV string.
    pub fn into_inner(self) -> String {
        self.0
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<SaleValue> for CsvValue {
    fn from(value: SaleValue) -> Self {
        match value {
            // Null and empty text are indistinguishable in the file
            SaleValue::Null => CsvValue(String::new()),
            SaleValue::Text(s) => CsvValue(s),
            SaleValue::Int(i) => CsvValue(i.to_string()),
            SaleValue::Price(p) => CsvValue(format!("{p:.2}")),
        }
    }
}

/// Convert a sale row to a CSV record in column order.
pub fn sale_row_to_csv_record(row: SaleRow) -> Vec<String> {
    row.values
        .into_iter()
        .map(|value| CsvValue::from(value).into_inner())
        .collect()
}
