//! Depreciation domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Inputs for a single book-value calculation.
///
/// Constructed fresh for each call, usually via [`crate::assets::Asset::depreciation_input`].
/// `purchase_date` is `None` when the acquisition date is unknown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepreciationInput {
    pub initial_price: Decimal,
    pub salvage_value: Decimal,
    pub lifespan_months: i32,
    pub purchase_date: Option<NaiveDate>,
}

/// Outcome of a straight-line depreciation calculation.
///
/// Echoes the inputs it was derived from (with the default lifespan
/// substituted when the supplied value was degenerate) so display code
/// needs no second lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepreciationResult {
    pub initial_price: Decimal,
    pub salvage_value: Decimal,
    pub lifespan_months: i32,
    pub purchase_date: Option<NaiveDate>,
    /// Present book value, rounded to display precision.
    pub current_value: Decimal,
    /// Amount written off per elapsed month, rounded to display precision.
    pub monthly_rate: Decimal,
    /// Whole calendar months elapsed since purchase. Negative for assets
    /// recorded with a future purchase date.
    pub age_months: i32,
    pub is_fully_depreciated: bool,
}

/// Per-asset row in a depreciation report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetDepreciation {
    pub asset_id: String,
    pub asset_tag: String,
    pub name: String,
    pub depreciation: DepreciationResult,
}

/// Fleet-wide depreciation report for a reporting date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepreciationReport {
    pub as_of: NaiveDate,
    pub rows: Vec<AssetDepreciation>,
    pub total_acquisition_cost: Decimal,
    pub total_book_value: Decimal,
    pub fully_depreciated_count: usize,
}
