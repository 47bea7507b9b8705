use crate::adapters::decode_inventory;
use crate::core::{InventorySource, Lot, Storage};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Reads the inventory from a JSON file, in the same shape the remote service
/// returns.
pub struct FileInventory<S: Storage> {
    storage: S,
    path: String,
}

impl<S: Storage> FileInventory<S> {
    pub fn new(storage: S, path: impl Into<String>) -> Self {
        Self {
            storage,
            path: path.into(),
        }
    }
}

#[async_trait]
impl<S: Storage> InventorySource for FileInventory<S> {
    async fn load(&self) -> Result<Vec<Lot>> {
        tracing::debug!("Reading inventory file: {}", self.path);
        let data = self.storage.read_file(&self.path).await?;
        let json_data: serde_json::Value = serde_json::from_slice(&data)?;
        decode_inventory(json_data)
    }
}
