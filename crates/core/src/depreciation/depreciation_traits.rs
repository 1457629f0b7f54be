//! Service trait for depreciation reporting.

use chrono::NaiveDate;

use super::depreciation_model::{AssetDepreciation, DepreciationReport};
use crate::errors::Result;
use crate::utils::time_utils::reporting_date_today;

/// Trait defining the contract for depreciation reporting operations.
pub trait DepreciationServiceTrait: Send + Sync {
    /// Book value of a single asset as of the given reporting date.
    fn calculate_for_asset(&self, asset_id: &str, as_of: NaiveDate) -> Result<AssetDepreciation>;

    /// Depreciation rows and fleet totals for every active asset.
    fn calculate_report(&self, as_of: NaiveDate) -> Result<DepreciationReport>;

    /// Report as of today's reporting date. The clock is read here, at the
    /// call boundary; the calculation itself stays deterministic.
    fn calculate_report_today(&self) -> Result<DepreciationReport> {
        self.calculate_report(reporting_date_today())
    }
}
