//! Depreciation reporting service implementation.

use chrono::NaiveDate;
use log::debug;
use rust_decimal::Decimal;
use std::sync::Arc;

use super::depreciation_calculator::calculate_depreciation;
use super::depreciation_model::{AssetDepreciation, DepreciationReport};
use super::depreciation_traits::DepreciationServiceTrait;
use crate::assets::{Asset, AssetRepositoryTrait};
use crate::errors::Result;

/// Service producing book-value figures for asset records.
///
/// The per-asset arithmetic lives in [`calculate_depreciation`]; this service
/// resolves asset records through the repository and aggregates fleet totals.
pub struct DepreciationService {
    asset_repository: Arc<dyn AssetRepositoryTrait>,
}

impl DepreciationService {
    /// Creates a new DepreciationService instance.
    pub fn new(asset_repository: Arc<dyn AssetRepositoryTrait>) -> Self {
        Self { asset_repository }
    }

    fn row_for_asset(asset: &Asset, as_of: NaiveDate) -> AssetDepreciation {
        let depreciation = calculate_depreciation(&asset.depreciation_input(), as_of);
        AssetDepreciation {
            asset_id: asset.id.clone(),
            asset_tag: asset.asset_tag.clone(),
            name: asset.name.clone(),
            depreciation,
        }
    }
}

impl DepreciationServiceTrait for DepreciationService {
    fn calculate_for_asset(&self, asset_id: &str, as_of: NaiveDate) -> Result<AssetDepreciation> {
        let asset = self.asset_repository.get_by_id(asset_id)?;
        Ok(Self::row_for_asset(&asset, as_of))
    }

    fn calculate_report(&self, as_of: NaiveDate) -> Result<DepreciationReport> {
        let assets = self.asset_repository.list_active()?;
        debug!(
            "Calculating depreciation report for {} active assets as of {}",
            assets.len(),
            as_of
        );

        let rows: Vec<AssetDepreciation> = assets
            .iter()
            .map(|asset| Self::row_for_asset(asset, as_of))
            .collect();

        let mut total_acquisition_cost = Decimal::ZERO;
        let mut total_book_value = Decimal::ZERO;
        let mut fully_depreciated_count = 0usize;
        for row in &rows {
            total_acquisition_cost += row.depreciation.initial_price;
            total_book_value += row.depreciation.current_value;
            if row.depreciation.is_fully_depreciated {
                fully_depreciated_count += 1;
            }
        }

        Ok(DepreciationReport {
            as_of,
            rows,
            total_acquisition_cost,
            total_book_value,
            fully_depreciated_count,
        })
    }
}
