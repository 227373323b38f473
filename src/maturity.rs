//! Common time-to-maturity values, expressed as year fractions.
//!
//! Convenience constants for the `t` argument of the pricers. Each tenor is
//! defined exactly once; callers needing day-count precision should compute
//! their own year fraction instead.

/// One calendar month: 1/12 year.
pub const ONE_MONTH: f64 = 1.0 / 12.0;

/// Two calendar months: 2/12 year.
pub const TWO_MONTHS: f64 = 2.0 / 12.0;

/// Three calendar months (one quarter): 3/12 year.
pub const THREE_MONTHS: f64 = 3.0 / 12.0;

/// Six calendar months: 6/12 year.
pub const SIX_MONTHS: f64 = 6.0 / 12.0;

/// Nine calendar months: 9/12 year.
pub const NINE_MONTHS: f64 = 9.0 / 12.0;

/// One calendar year.
pub const ONE_YEAR: f64 = 1.0;
