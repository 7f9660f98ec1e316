//! Individual value generators.
//!
//! This module provides the selection pools and the numeric and timestamp
//! generators the synthesis routine draws from.

pub mod numeric;
pub mod pool;
pub mod timestamp;

use pool::{repeated, WeightedPool};
use sales_core::{ReferenceData, SaleValue};

pub const PRODUCT_WEIGHT: u32 = 20;
pub const QUANTITY_WEIGHT: u32 = 100;
pub const CUSTOMER_WEIGHT: u32 = 10;
pub const PAYMENT_METHOD_WEIGHT: u32 = 50;

/// Source channels for the South branch's extra column.
pub const SOURCE_SYSTEMS: &[&str] = &["POS", "ONLINE", "MOBILE"];

/// Selection pools built once from the reference data.
#[derive(Debug, Clone)]
pub struct SalePools {
    pub products: WeightedPool<SaleValue>,
    pub quantities: WeightedPool<SaleValue>,
    pub customers: WeightedPool<SaleValue>,
    pub payment_methods: WeightedPool<SaleValue>,
    pub source_systems: WeightedPool<SaleValue>,
}

impl SalePools {
    pub fn from_reference(reference: &ReferenceData) -> Self {
        let products = WeightedPool::from_entries(
            repeated(
                reference.products().into_iter().map(SaleValue::text),
                PRODUCT_WEIGHT,
            )
            .chain([(SaleValue::Null, 1), (SaleValue::text(""), 1)]),
        );

        let quantities = WeightedPool::from_entries(
            repeated(numeric::QUANTITY_RANGE.map(SaleValue::Int), QUANTITY_WEIGHT).chain([
                (SaleValue::Int(-1), 1),
                (SaleValue::Int(0), 1),
                (SaleValue::Null, 1),
            ]),
        );

        let customers = WeightedPool::from_entries(
            repeated(
                reference.customers.iter().map(SaleValue::text),
                CUSTOMER_WEIGHT,
            )
            .chain([(SaleValue::Null, 1), (SaleValue::text(""), 1)]),
        );

        let payment_methods = WeightedPool::from_entries(
            repeated(
                reference.payment_methods.iter().map(SaleValue::text),
                PAYMENT_METHOD_WEIGHT,
            )
            .chain([(SaleValue::Null, 1)]),
        );

        let source_systems = WeightedPool::from_entries(
            repeated(SOURCE_SYSTEMS.iter().map(|s| SaleValue::text(*s)), 1)
                .chain([(SaleValue::Null, 1)]),
        );

        Self {
            products,
            quantities,
            customers,
            payment_methods,
            source_systems,
        }
    }
}
