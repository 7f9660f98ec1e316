//! Reference data: product prices, payment methods and customer names.
//!
//! The builtin tables are embedded in the binary. A YAML file with the same
//! shape can replace them:
//!
//! ```yaml
//! product_prices:
//!   Laptop: 55000.0
//!   Mouse: 700.0
//! payment_methods: [Cash, UPI]
//! customers: [Aarav Sharma, Diya Patel]
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Error type for loading reference data.
#[derive(Debug, thiserror::Error)]
pub enum ReferenceError {
    #[error("Failed to read reference data file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse reference data YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Price for product '{product}' must be a positive number, got {price}")]
    InvalidPrice { product: String, price: f64 },
}

/// Immutable lookup tables consumed by the generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceData {
    pub product_prices: BTreeMap<String, f64>,
    pub payment_methods: Vec<String>,
    pub customers: Vec<String>,
}

const PRODUCT_PRICES: &[(&str, f64)] = &[
    ("Bluetooth Speaker", 3500.0),
    ("External Hard Drive", 5500.0),
    ("Headphones", 2500.0),
    ("Keyboard", 1500.0),
    ("Laptop", 55000.0),
    ("Monitor", 12000.0),
    ("Mouse", 700.0),
    ("Power Bank", 1800.0),
    ("Printer", 9000.0),
    ("Router", 3000.0),
    ("Smartphone", 25000.0),
    ("Smartwatch", 7000.0),
    ("Tablet", 18000.0),
    ("USB Flash Drive", 600.0),
    ("Webcam", 2200.0),
];

const PAYMENT_METHODS: &[&str] = &["Cash", "Credit Card", "Debit Card", "UPI", "Net Banking"];

const CUSTOMERS: &[&str] = &[
    "Aarav Sharma",
    "Vivaan Gupta",
    "Aditya Verma",
    "Vihaan Reddy",
    "Arjun Nair",
    "Sai Krishnan",
    "Reyansh Iyer",
    "Krishna Menon",
    "Ishaan Joshi",
    "Rohan Mehta",
    "Ananya Singh",
    "Diya Patel",
    "Aadhya Rao",
    "Saanvi Kulkarni",
    "Myra Desai",
    "Anika Bose",
    "Kavya Pillai",
    "Isha Chatterjee",
    "Meera Agarwal",
    "Priya Banerjee",
    "Rahul Kapoor",
    "Neha Saxena",
    "Karan Malhotra",
    "Pooja Mishra",
    "Siddharth Jain",
];

impl ReferenceData {
    /// The embedded reference tables.
    pub fn builtin() -> Self {
        Self {
            product_prices: PRODUCT_PRICES
                .iter()
                .map(|(name, price)| (name.to_string(), *price))
                .collect(),
            payment_methods: PAYMENT_METHODS.iter().map(|s| s.to_string()).collect(),
            customers: CUSTOMERS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Load reference data from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ReferenceError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse reference data from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ReferenceError> {
        let data: ReferenceData = serde_yaml::from_str(yaml)?;
        data.validate()?;
        Ok(data)
    }

    fn validate(&self) -> Result<(), ReferenceError> {
        for (product, price) in &self.product_prices {
            if !price.is_finite() || *price <= 0.0 {
                return Err(ReferenceError::InvalidPrice {
                    product: product.clone(),
                    price: *price,
                });
            }
        }
        Ok(())
    }

    /// Product names in sorted order.
    pub fn products(&self) -> Vec<&str> {
        self.product_prices.keys().map(|s| s.as_str()).collect()
    }

    /// Price for a product; a missing, empty or unknown product has no price.
    pub fn price_of(&self, product: Option<&str>) -> Option<f64> {
        product.and_then(|name| self.product_prices.get(name).copied())
    }
}

impl Default for ReferenceData {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_tables() {
        let data = ReferenceData::builtin();
        assert_eq!(data.product_prices.len(), 15);
        assert_eq!(data.payment_methods.len(), 5);
        assert_eq!(data.customers.len(), 25);
        assert!(data.product_prices.values().all(|p| *p > 0.0));
    }

    #[test]
    fn test_price_lookup() {
        let data = ReferenceData::builtin();
        assert_eq!(data.price_of(Some("Laptop")), Some(55000.0));
        assert_eq!(data.price_of(Some("")), None);
        assert_eq!(data.price_of(Some("Toaster")), None);
        assert_eq!(data.price_of(None), None);
    }

    #[test]
    fn test_products_sorted() {
        let data = ReferenceData::builtin();
        let products = data.products();
        let mut sorted = products.clone();
        sorted.sort();
        assert_eq!(products, sorted);
    }

    #[test]
    fn test_from_yaml() {
        let yaml = r#"
product_prices:
  Pen: 20.0
  Notebook: 55.5
payment_methods: [Cash]
customers: [Asha, Ravi]
"#;
        let data = ReferenceData::from_yaml(yaml).unwrap();
        assert_eq!(data.products(), vec!["Notebook", "Pen"]);
        assert_eq!(data.price_of(Some("Notebook")), Some(55.5));
        assert_eq!(data.customers, vec!["Asha", "Ravi"]);
    }

    #[test]
    fn test_from_yaml_empty_tables() {
        let yaml = "product_prices: {}\npayment_methods: []\ncustomers: []\n";
        let data = ReferenceData::from_yaml(yaml).unwrap();
        assert!(data.products().is_empty());
    }

    #[test]
    fn test_from_yaml_rejects_non_positive_price() {
        let yaml = "product_prices:\n  Pen: -5.0\npayment_methods: []\ncustomers: []\n";
        let result = ReferenceData::from_yaml(yaml);
        assert!(matches!(result, Err(ReferenceError::InvalidPrice { .. })));
    }

    #[test]
    fn test_from_yaml_missing_table() {
        let result = ReferenceData::from_yaml("product_prices: {}\n");
        assert!(matches!(result, Err(ReferenceError::Yaml(_))));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "product_prices:\n  Pen: 20.0\npayment_methods: [UPI]\ncustomers: [Asha]"
        )
        .unwrap();

        let data = ReferenceData::from_file(file.path()).unwrap();
        assert_eq!(data.payment_methods, vec!["UPI"]);
    }
}
