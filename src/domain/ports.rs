use crate::domain::model::Lot;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn endpoint(&self) -> &str;
    fn inventory_file(&self) -> Option<&str>;
    fn timeout(&self) -> Duration;
    fn headers(&self) -> &HashMap<String, String>;
}

/// Supplies the lot inventory the pricing engine works on.
#[async_trait]
pub trait InventorySource: Send + Sync {
    async fn load(&self) -> Result<Vec<Lot>>;
}
