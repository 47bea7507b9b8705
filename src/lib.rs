pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{CliConfig, Command, PlanKind};

pub use crate::adapters::{file::FileInventory, http::HttpInventory};
pub use crate::config::cli::LocalStorage;
pub use crate::core::format::format_currency;
pub use crate::core::pricing::{price, InterestSchedule};
pub use crate::core::simulator::{Inventory, Simulator};
pub use crate::core::zone::{is_premium_zone, LotRef};
pub use crate::domain::model::{Lot, LotStatus, Money, PaymentPlan, PlanBreakdown, Quote};
pub use crate::utils::error::{LotError, Result};
