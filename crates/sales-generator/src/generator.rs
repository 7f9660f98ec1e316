//! Main generator producing sale rows for a branch schema.

use crate::generators::numeric::{generate_discount, generate_identifier};
use crate::generators::timestamp::{generate_created_at, BusinessWindow, CREATED_AT_FORMAT};
use crate::generators::SalePools;
use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;
use sales_core::{BranchSchema, ExtraField, IdType, ReferenceData, SaleRow, SaleValue};
use tracing::debug;

/// Error type for generator operations.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// Business window hours out of order or past the end of the day
    #[error("Invalid business window {start_hour}..{end_hour}: need start < end <= 23")]
    InvalidWindow { start_hour: u32, end_hour: u32 },
}

/// Generator that produces synthetic sale rows.
///
/// All randomness flows through one seeded RNG, so the rows depend only on
/// the seed, the reference data, the window and the sequence of calls.
pub struct SalesGenerator {
    reference: ReferenceData,
    window: BusinessWindow,
    pools: SalePools,
    rng: StdRng,
    seed: u64,
    index: u64,
}

impl SalesGenerator {
    /// Create a new generator with the given reference data, window and seed.
    pub fn new(reference: ReferenceData, window: BusinessWindow, seed: u64) -> Self {
        let pools = SalePools::from_reference(&reference);
        debug!(
            "Sales generator seeded with {seed}: {} products, {} customers, {} payment methods",
            reference.product_prices.len(),
            reference.customers.len(),
            reference.payment_methods.len()
        );
        Self {
            reference,
            window,
            pools,
            rng: StdRng::seed_from_u64(seed),
            seed,
            index: 0,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of rows generated so far, across all branches.
    pub fn current_index(&self) -> u64 {
        self.index
    }

    /// Generate the next row for `schema` on the batch `date`.
    pub fn next_row(&mut self, schema: &BranchSchema, date: NaiveDate) -> SaleRow {
        let rng = &mut self.rng;

        let product = self.pools.products.choose(rng).unwrap_or(SaleValue::Null);
        let unit_price = SaleValue::from(self.reference.price_of(product.as_str()));
        let created_at = generate_created_at(rng, date, &self.window);

        let id = generate_identifier(rng);
        let id = match schema.id_type {
            IdType::Text => SaleValue::Text(id.to_string()),
            IdType::Int => SaleValue::Int(id),
        };

        let customer = self.pools.customers.choose(rng).unwrap_or(SaleValue::Null);
        let quantity = self.pools.quantities.choose(rng).unwrap_or(SaleValue::Null);
        let payment_method = self
            .pools
            .payment_methods
            .choose(rng)
            .unwrap_or(SaleValue::Null);

        let mut values = Vec::with_capacity(schema.width());
        values.push(id);
        values.push(SaleValue::Text(schema.format_sale_date(date)));
        values.push(customer);
        values.push(product);
        values.push(quantity);
        values.push(unit_price);
        values.push(payment_method);
        values.push(SaleValue::Text(
            created_at.format(CREATED_AT_FORMAT).to_string(),
        ));

        if let Some(extra) = &schema.extra {
            values.push(self.generate_extra(extra.kind));
        }

        let row = SaleRow::new(schema.branch, self.index, values);
        self.index += 1;
        row
    }

    fn generate_extra(&mut self, kind: ExtraField) -> SaleValue {
        match kind {
            ExtraField::SourceSystem => self
                .pools
                .source_systems
                .choose(&mut self.rng)
                .unwrap_or(SaleValue::Null),
            ExtraField::Discount => SaleValue::Int(generate_discount(&mut self.rng)),
        }
    }

    /// Generate `count` rows for `schema`.
    ///
    /// Returns an iterator that lazily generates rows.
    pub fn rows<'a>(
        &'a mut self,
        schema: &'a BranchSchema,
        date: NaiveDate,
        count: u64,
    ) -> SaleRowIterator<'a> {
        SaleRowIterator {
            generator: self,
            schema,
            date,
            remaining: count,
        }
    }
}

/// Iterator that lazily generates sale rows.
pub struct SaleRowIterator<'a> {
    generator: &'a mut SalesGenerator,
    schema: &'a BranchSchema,
    date: NaiveDate,
    remaining: u64,
}

impl Iterator for SaleRowIterator<'_> {
    type Item = SaleRow;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;
        Some(self.generator.next_row(self.schema, self.date))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SaleRowIterator<'_> {}
