//! Depreciation module - straight-line book value calculation and reporting.

mod depreciation_calculator;
mod depreciation_model;
mod depreciation_service;
mod depreciation_traits;

#[cfg(test)]
mod depreciation_calculator_tests;

// Re-export the public interface
pub use depreciation_calculator::calculate_depreciation;
pub use depreciation_model::{
    AssetDepreciation, DepreciationInput, DepreciationReport, DepreciationResult,
};
pub use depreciation_service::DepreciationService;
pub use depreciation_traits::DepreciationServiceTrait;
