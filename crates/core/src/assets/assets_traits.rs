use super::assets_model::{Asset, AssetUpdate, NewAsset};
use crate::errors::Result;

/// Trait defining the contract for asset service operations.
#[async_trait::async_trait]
pub trait AssetServiceTrait: Send + Sync {
    fn get_assets(&self) -> Result<Vec<Asset>>;
    fn get_asset_by_id(&self, asset_id: &str) -> Result<Asset>;
    /// Assets whose status still counts toward inventory and reporting.
    fn get_active_assets(&self) -> Result<Vec<Asset>>;
    async fn create_asset(&self, new_asset: NewAsset) -> Result<Asset>;
    async fn update_asset(&self, asset_id: &str, update: AssetUpdate) -> Result<Asset>;
    async fn delete_asset(&self, asset_id: &str) -> Result<()>;
}

/// Trait defining the contract for asset repository operations.
///
/// Reads are synchronous, mutations are async; the storage crate decides how
/// to satisfy both.
#[async_trait::async_trait]
pub trait AssetRepositoryTrait: Send + Sync {
    async fn create(&self, asset: Asset) -> Result<Asset>;
    async fn update(&self, asset: Asset) -> Result<Asset>;
    async fn delete(&self, asset_id: &str) -> Result<()>;
    fn get_by_id(&self, asset_id: &str) -> Result<Asset>;
    fn list(&self) -> Result<Vec<Asset>>;
    fn list_active(&self) -> Result<Vec<Asset>>;
}
