//! Tests for the straight-line depreciation calculator.

#[cfg(test)]
mod tests {
    use crate::depreciation::{calculate_depreciation, DepreciationInput};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn input(
        initial_price: Decimal,
        salvage_value: Decimal,
        lifespan_months: i32,
        purchase_date: Option<NaiveDate>,
    ) -> DepreciationInput {
        DepreciationInput {
            initial_price,
            salvage_value,
            lifespan_months,
            purchase_date,
        }
    }

    #[test]
    fn test_missing_purchase_date_returns_acquisition_cost() {
        let result =
            calculate_depreciation(&input(dec!(1000), dec!(100), 36, None), date(2025, 7, 15));

        assert_eq!(result.current_value, dec!(1000));
        assert_eq!(result.monthly_rate, Decimal::ZERO);
        assert_eq!(result.age_months, 0);
        assert_eq!(result.lifespan_months, 36);
        assert!(!result.is_fully_depreciated);
        assert_eq!(result.purchase_date, None);
    }

    #[test]
    fn test_zero_price_returns_zero_book_value() {
        let result = calculate_depreciation(
            &input(dec!(0), dec!(0), 36, Some(date(2024, 1, 1))),
            date(2025, 7, 15),
        );

        assert_eq!(result.current_value, dec!(0));
        assert_eq!(result.monthly_rate, Decimal::ZERO);
        assert!(!result.is_fully_depreciated);
    }

    #[test]
    fn test_zero_lifespan_defaults_to_36_months() {
        let result = calculate_depreciation(
            &input(dec!(1000), dec!(0), 0, Some(date(2024, 1, 1))),
            date(2025, 7, 15),
        );

        assert_eq!(result.lifespan_months, 36);
        assert_eq!(result.current_value, dec!(1000));
        assert_eq!(result.monthly_rate, Decimal::ZERO);
        assert_eq!(result.age_months, 0);
    }

    #[test]
    fn test_mid_life_asset() {
        // Purchased exactly 6 calendar months before the reporting date.
        let result = calculate_depreciation(
            &input(dec!(1200), dec!(0), 12, Some(date(2025, 1, 15))),
            date(2025, 7, 15),
        );

        assert_eq!(result.age_months, 6);
        assert_eq!(result.monthly_rate, dec!(100.00));
        assert_eq!(result.current_value, dec!(600.00));
        assert!(!result.is_fully_depreciated);
    }

    #[test]
    fn test_fully_depreciated_asset_clamps_to_salvage() {
        // 24 months old with a 12-month lifespan: raw value would be -1200.
        let result = calculate_depreciation(
            &input(dec!(1200), dec!(0), 12, Some(date(2023, 7, 15))),
            date(2025, 7, 15),
        );

        assert_eq!(result.age_months, 24);
        assert!(result.is_fully_depreciated);
        assert_eq!(result.current_value, dec!(0));
    }

    #[test]
    fn test_future_purchase_date_clamps_to_acquisition_cost() {
        // Purchased one month after the reporting date: raw value would be 1300.
        let result = calculate_depreciation(
            &input(dec!(1200), dec!(0), 12, Some(date(2025, 8, 15))),
            date(2025, 7, 15),
        );

        assert_eq!(result.age_months, -1);
        assert_eq!(result.current_value, dec!(1200));
        assert!(!result.is_fully_depreciated);
    }

    #[test]
    fn test_day_of_month_is_ignored() {
        // Jan 31 to Feb 1 is one whole calendar month.
        let result = calculate_depreciation(
            &input(dec!(1200), dec!(0), 12, Some(date(2025, 1, 31))),
            date(2025, 2, 1),
        );

        assert_eq!(result.age_months, 1);
        assert_eq!(result.current_value, dec!(1100.00));
    }

    #[test]
    fn test_monetary_rounding_to_two_decimal_places() {
        // 1200 / 7 = 171.428571... per month.
        let result = calculate_depreciation(
            &input(dec!(1200), dec!(0), 7, Some(date(2025, 6, 10))),
            date(2025, 7, 10),
        );

        assert_eq!(result.age_months, 1);
        assert_eq!(result.monthly_rate, dec!(171.43));
        assert_eq!(result.current_value, dec!(1028.57));
    }

    #[test]
    fn test_exact_end_of_life_lands_on_salvage() {
        let result = calculate_depreciation(
            &input(dec!(1000), dec!(100), 12, Some(date(2024, 7, 15))),
            date(2025, 7, 15),
        );

        assert_eq!(result.age_months, 12);
        assert_eq!(result.current_value, dec!(100.00));
        assert!(result.is_fully_depreciated);
    }

    #[test]
    fn test_salvage_above_price_rides_the_clamp() {
        // Inverted salvage: the rate goes negative and the clamp caps the
        // book value at the acquisition cost.
        let result = calculate_depreciation(
            &input(dec!(100), dec!(200), 10, Some(date(2025, 2, 15))),
            date(2025, 7, 15),
        );

        assert_eq!(result.monthly_rate, dec!(-10.00));
        assert_eq!(result.current_value, dec!(100));
    }

    #[test]
    fn test_identical_inputs_yield_identical_results() {
        let i = input(dec!(2500), dec!(250), 48, Some(date(2024, 3, 1)));
        let as_of = date(2025, 7, 15);

        let first = calculate_depreciation(&i, as_of);
        let second = calculate_depreciation(&i, as_of);

        assert_eq!(first, second);
    }
}
