use chrono::Utc;
use log::{debug, warn};
use rust_decimal::Decimal;
use std::sync::Arc;
use uuid::Uuid;

use super::assets_model::{Asset, AssetUpdate, NewAsset};
use super::assets_traits::{AssetRepositoryTrait, AssetServiceTrait};
use crate::errors::Result;

/// Service for managing the asset inventory.
pub struct AssetService {
    asset_repository: Arc<dyn AssetRepositoryTrait>,
}

impl AssetService {
    /// Creates a new AssetService instance.
    pub fn new(asset_repository: Arc<dyn AssetRepositoryTrait>) -> Self {
        Self { asset_repository }
    }

    // A salvage value above the purchase price makes the book value ride the
    // clamp at the purchase price instead of depreciating. Logged, not rejected.
    fn warn_on_inverted_salvage(
        asset_tag: &str,
        purchase_price: Option<Decimal>,
        salvage_value: Option<Decimal>,
    ) {
        if let (Some(price), Some(salvage)) = (purchase_price, salvage_value) {
            if salvage > price {
                warn!(
                    "Asset {}: salvage value {} exceeds purchase price {}; book value will not depreciate",
                    asset_tag, salvage, price
                );
            }
        }
    }
}

#[async_trait::async_trait]
impl AssetServiceTrait for AssetService {
    /// Lists all assets.
    fn get_assets(&self) -> Result<Vec<Asset>> {
        self.asset_repository.list()
    }

    /// Retrieves an asset by its ID.
    fn get_asset_by_id(&self, asset_id: &str) -> Result<Asset> {
        self.asset_repository.get_by_id(asset_id)
    }

    /// Lists assets whose status still counts toward inventory.
    fn get_active_assets(&self) -> Result<Vec<Asset>> {
        self.asset_repository.list_active()
    }

    /// Creates a new asset with a generated ID and timestamps.
    async fn create_asset(&self, new_asset: NewAsset) -> Result<Asset> {
        new_asset.validate()?;
        Self::warn_on_inverted_salvage(
            &new_asset.asset_tag,
            new_asset.purchase_price,
            new_asset.salvage_value,
        );

        let now = Utc::now().naive_utc();
        let asset = Asset {
            id: Uuid::new_v4().to_string(),
            asset_tag: new_asset.asset_tag,
            name: new_asset.name,
            category: new_asset.category,
            status: new_asset.status,
            purchase_date: new_asset.purchase_date,
            purchase_price: new_asset.purchase_price,
            salvage_value: new_asset.salvage_value,
            lifespan_months: new_asset.lifespan_months,
            assigned_to: new_asset.assigned_to,
            location: new_asset.location,
            notes: new_asset.notes,
            created_at: now,
            updated_at: now,
        };

        debug!("Creating asset {} ({})", asset.asset_tag, asset.id);
        self.asset_repository.create(asset).await
    }

    /// Replaces an asset's editable profile.
    async fn update_asset(&self, asset_id: &str, update: AssetUpdate) -> Result<Asset> {
        update.validate()?;

        let mut asset = self.asset_repository.get_by_id(asset_id)?;
        Self::warn_on_inverted_salvage(
            &asset.asset_tag,
            update.purchase_price,
            update.salvage_value,
        );

        update.apply(&mut asset);
        asset.updated_at = Utc::now().naive_utc();

        debug!("Updating asset {} ({})", asset.asset_tag, asset.id);
        self.asset_repository.update(asset).await
    }

    /// Deletes an asset.
    async fn delete_asset(&self, asset_id: &str) -> Result<()> {
        self.asset_repository.delete(asset_id).await
    }
}
