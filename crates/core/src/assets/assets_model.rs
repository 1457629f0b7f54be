//! Asset inventory domain models.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_LIFESPAN_MONTHS;
use crate::depreciation::DepreciationInput;
use crate::errors::{Result, ValidationError};

/// Hardware category of an inventory asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssetCategory {
    Laptop,
    Desktop,
    Monitor,
    Phone,
    Tablet,
    NetworkDevice,
    Printer,
    Peripheral,
    Furniture,
    #[default]
    Other,
}

impl AssetCategory {
    /// Returns the database string representation (SCREAMING_SNAKE_CASE).
    pub const fn as_db_str(&self) -> &'static str {
        match self {
            AssetCategory::Laptop => "LAPTOP",
            AssetCategory::Desktop => "DESKTOP",
            AssetCategory::Monitor => "MONITOR",
            AssetCategory::Phone => "PHONE",
            AssetCategory::Tablet => "TABLET",
            AssetCategory::NetworkDevice => "NETWORK_DEVICE",
            AssetCategory::Printer => "PRINTER",
            AssetCategory::Peripheral => "PERIPHERAL",
            AssetCategory::Furniture => "FURNITURE",
            AssetCategory::Other => "OTHER",
        }
    }

    /// Parses a category from its database string.
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "LAPTOP" => Some(AssetCategory::Laptop),
            "DESKTOP" => Some(AssetCategory::Desktop),
            "MONITOR" => Some(AssetCategory::Monitor),
            "PHONE" => Some(AssetCategory::Phone),
            "TABLET" => Some(AssetCategory::Tablet),
            "NETWORK_DEVICE" => Some(AssetCategory::NetworkDevice),
            "PRINTER" => Some(AssetCategory::Printer),
            "PERIPHERAL" => Some(AssetCategory::Peripheral),
            "FURNITURE" => Some(AssetCategory::Furniture),
            "OTHER" => Some(AssetCategory::Other),
            _ => None,
        }
    }
}

/// Lifecycle status of an inventory asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssetStatus {
    #[default]
    InService,
    InStorage,
    UnderRepair,
    Retired,
    Disposed,
}

impl AssetStatus {
    /// Returns the database string representation (SCREAMING_SNAKE_CASE).
    pub const fn as_db_str(&self) -> &'static str {
        match self {
            AssetStatus::InService => "IN_SERVICE",
            AssetStatus::InStorage => "IN_STORAGE",
            AssetStatus::UnderRepair => "UNDER_REPAIR",
            AssetStatus::Retired => "RETIRED",
            AssetStatus::Disposed => "DISPOSED",
        }
    }

    /// Parses a status from its database string.
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "IN_SERVICE" => Some(AssetStatus::InService),
            "IN_STORAGE" => Some(AssetStatus::InStorage),
            "UNDER_REPAIR" => Some(AssetStatus::UnderRepair),
            "RETIRED" => Some(AssetStatus::Retired),
            "DISPOSED" => Some(AssetStatus::Disposed),
            _ => None,
        }
    }

    /// Active assets appear in inventory listings and depreciation reports.
    pub const fn is_active(&self) -> bool {
        matches!(
            self,
            AssetStatus::InService | AssetStatus::InStorage | AssetStatus::UnderRepair
        )
    }
}

/// Domain model representing an inventory asset.
///
/// Identity is opaque (UUID). `asset_tag` is the user-visible label printed
/// on the physical asset. Purchase metadata is optional: plenty of inventory
/// arrives with no recorded acquisition details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: String,
    pub asset_tag: String,
    pub name: String,
    pub category: AssetCategory,
    pub status: AssetStatus,
    pub purchase_date: Option<NaiveDate>,
    pub purchase_price: Option<Decimal>,
    pub salvage_value: Option<Decimal>,
    pub lifespan_months: Option<i32>,
    pub assigned_to: Option<String>,
    pub location: Option<String>,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Asset {
    /// Maps this record to calculator inputs.
    ///
    /// Missing monetary fields become zero and a missing lifespan becomes
    /// `DEFAULT_LIFESPAN_MONTHS` - the default is resolved here, at the call
    /// boundary, not hidden inside the calculator's arithmetic.
    pub fn depreciation_input(&self) -> DepreciationInput {
        DepreciationInput {
            initial_price: self.purchase_price.unwrap_or(Decimal::ZERO),
            salvage_value: self.salvage_value.unwrap_or(Decimal::ZERO),
            lifespan_months: self.lifespan_months.unwrap_or(DEFAULT_LIFESPAN_MONTHS),
            purchase_date: self.purchase_date,
        }
    }
}

/// Request payload for creating an asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAsset {
    pub asset_tag: String,
    pub name: String,
    #[serde(default)]
    pub category: AssetCategory,
    #[serde(default)]
    pub status: AssetStatus,
    pub purchase_date: Option<NaiveDate>,
    pub purchase_price: Option<Decimal>,
    pub salvage_value: Option<Decimal>,
    pub lifespan_months: Option<i32>,
    pub assigned_to: Option<String>,
    pub location: Option<String>,
    pub notes: Option<String>,
}

/// Request payload for updating an asset's editable profile.
///
/// A full replace of the editable fields, mirroring the edit form. Optional
/// fields set to `None` clear the stored value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetUpdate {
    pub name: String,
    pub category: AssetCategory,
    pub status: AssetStatus,
    pub purchase_date: Option<NaiveDate>,
    pub purchase_price: Option<Decimal>,
    pub salvage_value: Option<Decimal>,
    pub lifespan_months: Option<i32>,
    pub assigned_to: Option<String>,
    pub location: Option<String>,
    pub notes: Option<String>,
}

fn validate_purchase_fields(
    purchase_price: Option<Decimal>,
    salvage_value: Option<Decimal>,
    lifespan_months: Option<i32>,
) -> Result<()> {
    if let Some(price) = purchase_price {
        if price < Decimal::ZERO {
            return Err(ValidationError::InvalidInput(format!(
                "purchase price cannot be negative: {}",
                price
            ))
            .into());
        }
    }
    if let Some(salvage) = salvage_value {
        if salvage < Decimal::ZERO {
            return Err(ValidationError::InvalidInput(format!(
                "salvage value cannot be negative: {}",
                salvage
            ))
            .into());
        }
    }
    if let Some(months) = lifespan_months {
        if months < 0 {
            return Err(ValidationError::InvalidInput(format!(
                "lifespan months cannot be negative: {}",
                months
            ))
            .into());
        }
    }
    Ok(())
}

impl NewAsset {
    /// Validates the request. A salvage value above the purchase price is
    /// accepted; the service logs it instead of rejecting.
    pub fn validate(&self) -> Result<()> {
        if self.asset_tag.trim().is_empty() {
            return Err(ValidationError::MissingField("assetTag".to_string()).into());
        }
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name".to_string()).into());
        }
        validate_purchase_fields(self.purchase_price, self.salvage_value, self.lifespan_months)
    }
}

impl AssetUpdate {
    /// Validates the request; same rules as [`NewAsset::validate`] minus the
    /// asset tag, which is immutable after creation.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name".to_string()).into());
        }
        validate_purchase_fields(self.purchase_price, self.salvage_value, self.lifespan_months)
    }

    /// Applies the editable fields to an existing record.
    pub fn apply(self, asset: &mut Asset) {
        asset.name = self.name;
        asset.category = self.category;
        asset.status = self.status;
        asset.purchase_date = self.purchase_date;
        asset.purchase_price = self.purchase_price;
        asset.salvage_value = self.salvage_value;
        asset.lifespan_months = self.lifespan_months;
        asset.assigned_to = self.assigned_to;
        asset.location = self.location;
        asset.notes = self.notes;
    }
}
