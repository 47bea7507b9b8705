// Adapters layer: inventory sources backed by the remote service or a local file.

pub mod file;
pub mod http;

use crate::domain::model::Lot;
use crate::utils::error::{LotError, Result};
use crate::utils::validation::Validate;
use std::collections::HashSet;

/// Turns a JSON inventory payload into lots, skipping records that are
/// malformed, fail validation, or repeat an earlier id.
pub(crate) fn decode_inventory(json_data: serde_json::Value) -> Result<Vec<Lot>> {
    let serde_json::Value::Array(items) = json_data else {
        return Err(LotError::ValidationError {
            message: "inventory payload is not a JSON array".to_string(),
        });
    };

    let mut seen = HashSet::new();
    let mut lots = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        let lot: Lot = match serde_json::from_value(item) {
            Ok(lot) => lot,
            Err(e) => {
                tracing::warn!("Skipping inventory record #{}: {}", index, e);
                continue;
            }
        };

        if let Err(e) = lot.validate() {
            tracing::warn!("Skipping lot {} ({}): {}", lot.id, lot.identifier, e);
            continue;
        }

        if !seen.insert(lot.id) {
            tracing::warn!("Skipping duplicate lot id {} ({})", lot.id, lot.identifier);
            continue;
        }

        lots.push(lot);
    }

    tracing::debug!("Decoded {} lots", lots.len());
    Ok(lots)
}
