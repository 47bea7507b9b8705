use crate::domain::model::{Lot, LotStatus};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(LotStatus),
}

impl StatusFilter {
    pub fn accepts(self, status: LotStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => wanted == status,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "todos" | "all" => Ok(StatusFilter::All),
            other => LotStatus::parse(other)
                .map(StatusFilter::Only)
                .ok_or_else(|| format!("unknown status filter '{}'", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InventorySummary {
    pub total: usize,
    pub available: usize,
    pub sold: usize,
}

impl InventorySummary {
    pub fn of(lots: &[Lot]) -> Self {
        lots.iter().fold(Self::default(), |mut summary, lot| {
            summary.total += 1;
            match lot.status {
                LotStatus::Available => summary.available += 1,
                LotStatus::Sold => summary.sold += 1,
            }
            summary
        })
    }
}

/// Lots whose identifier contains `query` (ignoring case) and whose status
/// passes `status`.
pub fn filter_lots<'a>(lots: &'a [Lot], query: &str, status: StatusFilter) -> Vec<&'a Lot> {
    let needle = query.to_lowercase();
    lots.iter()
        .filter(|lot| status.accepts(lot.status))
        .filter(|lot| lot.identifier.to_lowercase().contains(&needle))
        .collect()
}

pub fn available_lots(lots: &[Lot]) -> impl Iterator<Item = &Lot> {
    lots.iter().filter(|lot| lot.is_available())
}

pub fn find_lot(lots: &[Lot], id: u64) -> Option<&Lot> {
    lots.iter().find(|lot| lot.id == id)
}
