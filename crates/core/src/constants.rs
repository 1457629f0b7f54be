/// Useful life assumed when an asset has no lifespan recorded.
/// 36 months is the amortization window used for most IT hardware.
pub const DEFAULT_LIFESPAN_MONTHS: i32 = 36;

/// Decimal precision for monetary display values.
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;
