pub mod catalog;
pub mod format;
pub mod pricing;
pub mod simulator;
pub mod zone;

pub use crate::domain::model::{Lot, LotStatus, Money, PaymentPlan, PlanBreakdown, Quote};
pub use crate::domain::ports::{ConfigProvider, InventorySource, Storage};
pub use crate::utils::error::Result;
