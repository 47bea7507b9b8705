pub mod export;
pub mod report;

#[cfg(feature = "cli")]
use crate::adapters::{file::FileInventory, http::HttpInventory};
#[cfg(feature = "cli")]
use crate::config::{cli::LocalStorage, CliConfig, Command};
#[cfg(feature = "cli")]
use crate::core::simulator::{Inventory, Simulator};
#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;

#[cfg(feature = "cli")]
async fn load_inventory(config: &CliConfig) -> Result<Inventory> {
    match config.inventory_file() {
        Some(path) => {
            let source = FileInventory::new(LocalStorage::new(".".to_string()), path);
            Simulator::new(source).load().await
        }
        None => {
            let source = HttpInventory::new(config.clone())?;
            Simulator::new(source).load().await
        }
    }
}

/// Executes the selected subcommand and returns the text to print.
#[cfg(feature = "cli")]
pub async fn run(config: &CliConfig) -> Result<String> {
    if let Command::Terms = config.command {
        return Ok(report::render_terms());
    }

    let inventory = load_inventory(config).await?;

    match &config.command {
        Command::List { search, status } => {
            let lots = inventory.filter(search, *status);
            tracing::debug!("{} lots match '{}' ({:?})", lots.len(), search, status);
            Ok(format!(
                "{}\n{}",
                report::render_lot_table(&lots),
                report::render_summary(&inventory.summary())
            ))
        }
        Command::Summary => Ok(report::render_summary(&inventory.summary())),
        Command::Quote {
            lot_id,
            plan,
            term,
            json,
        } => {
            let plan = config.payment_plan(*plan, *term)?;
            let (lot, quote) = inventory.simulate(*lot_id, plan)?;
            if *json {
                Ok(serde_json::to_string_pretty(&serde_json::json!({
                    "lot": lot,
                    "quote": quote,
                }))?)
            } else {
                Ok(report::render_quote(lot, &quote))
            }
        }
        Command::Export { output, plan, term } => {
            let plan = config.payment_plan(*plan, *term)?;
            let quotes = inventory.quote_all(plan);
            let storage = LocalStorage::new(".".to_string());
            let written = export::export_quotes(&storage, output, &quotes).await?;
            tracing::info!("Exported {} quotes to {}", written, output);
            Ok(format!("{} cotações exportadas para {}", written, output))
        }
        Command::Terms => Ok(report::render_terms()),
    }
}
