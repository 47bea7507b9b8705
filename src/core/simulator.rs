use crate::core::catalog::{available_lots, filter_lots, find_lot, InventorySummary, StatusFilter};
use crate::core::pricing::price;
use crate::domain::model::{Lot, PaymentPlan, Quote};
use crate::domain::ports::InventorySource;
use crate::utils::error::{LotError, Result};

pub struct Simulator<I: InventorySource> {
    source: I,
}

impl<I: InventorySource> Simulator<I> {
    pub fn new(source: I) -> Self {
        Self { source }
    }

    pub async fn load(&self) -> Result<Inventory> {
        tracing::debug!("Loading lot inventory...");
        let lots = self.source.load().await?;
        let inventory = Inventory::new(lots);
        let summary = inventory.summary();
        tracing::info!(
            "Loaded {} lots ({} available, {} sold)",
            summary.total,
            summary.available,
            summary.sold
        );
        Ok(inventory)
    }
}

/// A resolved snapshot of the lot inventory.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    lots: Vec<Lot>,
}

impl Inventory {
    pub fn new(lots: Vec<Lot>) -> Self {
        Self { lots }
    }

    pub fn lots(&self) -> &[Lot] {
        &self.lots
    }

    pub fn summary(&self) -> InventorySummary {
        InventorySummary::of(&self.lots)
    }

    pub fn filter(&self, query: &str, status: StatusFilter) -> Vec<&Lot> {
        filter_lots(&self.lots, query, status)
    }

    /// Quotes one lot; only lots still for sale can be simulated.
    pub fn simulate(&self, lot_id: u64, plan: PaymentPlan) -> Result<(&Lot, Quote)> {
        let lot = find_lot(&self.lots, lot_id).ok_or(LotError::LotNotFound { id: lot_id })?;
        if !lot.is_available() {
            return Err(LotError::LotUnavailable {
                id: lot.id,
                identifier: lot.identifier.clone(),
            });
        }

        let quote = price(lot, plan);
        tracing::debug!(
            "Quoted {} ({:?}): base {}, final {}",
            lot.identifier,
            plan,
            quote.base_value,
            quote.final_value
        );
        Ok((lot, quote))
    }

    pub fn quote_all(&self, plan: PaymentPlan) -> Vec<(&Lot, Quote)> {
        available_lots(&self.lots)
            .map(|lot| (lot, price(lot, plan)))
            .collect()
    }
}
