use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::depreciation_model::{DepreciationInput, DepreciationResult};
use crate::constants::{DEFAULT_LIFESPAN_MONTHS, DISPLAY_DECIMAL_PRECISION};
use crate::utils::time_utils::whole_months_between;

/// Computes the current book value of an asset using the straight-line method.
///
/// The caller supplies `as_of` (the reporting date) explicitly; the function
/// never reads the system clock, so identical inputs always produce identical
/// results.
///
/// When the input is degenerate - no purchase date, non-positive acquisition
/// cost, or non-positive lifespan - no amortization is attempted. The result
/// echoes the acquisition cost as the book value with a zero rate. Book value
/// is best-effort display data, so incomplete purchase metadata degrades
/// gracefully instead of failing.
///
/// Elapsed age is counted in whole calendar months from year/month components
/// only. A future purchase date yields a negative age; the clamp below still
/// bounds the book value at the acquisition cost.
///
/// `salvage_value > initial_price` is not rejected here. The monthly rate goes
/// negative and the book value rides the clamp at `initial_price`; whether such
/// records deserve an upstream validation error is the caller's decision.
pub fn calculate_depreciation(input: &DepreciationInput, as_of: NaiveDate) -> DepreciationResult {
    let lifespan_months = if input.lifespan_months > 0 {
        input.lifespan_months
    } else {
        DEFAULT_LIFESPAN_MONTHS
    };

    let purchase_date = match input.purchase_date {
        Some(date) if input.initial_price > Decimal::ZERO && input.lifespan_months > 0 => date,
        _ => {
            return DepreciationResult {
                initial_price: input.initial_price,
                salvage_value: input.salvage_value,
                lifespan_months,
                purchase_date: input.purchase_date,
                current_value: input.initial_price,
                monthly_rate: Decimal::ZERO,
                age_months: 0,
                is_fully_depreciated: false,
            };
        }
    };

    let age_months = whole_months_between(purchase_date, as_of);

    let depreciable_amount = input.initial_price - input.salvage_value;
    let monthly_rate = depreciable_amount / Decimal::from(lifespan_months);

    let mut current_value = input.initial_price - monthly_rate * Decimal::from(age_months);
    if current_value < input.salvage_value {
        current_value = input.salvage_value;
    }
    if current_value > input.initial_price {
        current_value = input.initial_price;
    }

    DepreciationResult {
        initial_price: input.initial_price,
        salvage_value: input.salvage_value,
        lifespan_months,
        purchase_date: Some(purchase_date),
        current_value: current_value.round_dp(DISPLAY_DECIMAL_PRECISION),
        monthly_rate: monthly_rate.round_dp(DISPLAY_DECIMAL_PRECISION),
        age_months,
        is_fully_depreciated: age_months >= lifespan_months,
    }
}
