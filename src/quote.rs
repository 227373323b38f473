//! Validated input bundle for a single pricing call.
//!
//! The free functions in [`crate::models`] are the canonical surface; this
//! struct exists for callers who carry the five inputs around together and
//! want the domain checks available independently of pricing.

use crate::models::{bsm, parity};
use anyhow::Result;

/// One option contract quote: the immutable inputs of a single pricing call.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionQuote {
    /// Spot price of the underlying
    pub underlying_price: f64,
    /// Strike price
    pub strike_price: f64,
    /// Annualized volatility (as decimal, e.g., 0.25 for 25%)
    pub sigma: f64,
    /// Annualized continuously-compounded risk-free rate (may be negative)
    pub r: f64,
    /// Time to expiration in years
    pub years_to_exp: f64,
}

impl OptionQuote {
    /// Checks the quote against the pricing domain without computing a price.
    pub fn validate(&self) -> Result<()> {
        self.d1().map(|_| ())
    }

    /// The d1 term for this quote. See [`bsm::d1`].
    pub fn d1(&self) -> Result<f64> {
        bsm::d1(
            self.underlying_price,
            self.strike_price,
            self.sigma,
            self.r,
            self.years_to_exp,
        )
    }

    /// The d2 term for this quote. See [`bsm::d2`].
    pub fn d2(&self) -> Result<f64> {
        bsm::d2(
            self.underlying_price,
            self.strike_price,
            self.sigma,
            self.r,
            self.years_to_exp,
        )
    }

    /// European call price for this quote. See [`bsm::call`].
    pub fn call(&self) -> Result<f64> {
        bsm::call(
            self.underlying_price,
            self.strike_price,
            self.sigma,
            self.r,
            self.years_to_exp,
        )
    }

    /// European put price for this quote. See [`bsm::put`].
    pub fn put(&self) -> Result<f64> {
        bsm::put(
            self.underlying_price,
            self.strike_price,
            self.sigma,
            self.r,
            self.years_to_exp,
        )
    }

    /// Put price derived from a known call price via parity.
    pub fn put_from_call(&self, c: f64) -> Result<f64> {
        parity::put_from_call(
            self.underlying_price,
            self.strike_price,
            self.r,
            self.years_to_exp,
            c,
        )
    }

    /// Call price derived from a known put price via parity.
    pub fn call_from_put(&self, p: f64) -> Result<f64> {
        parity::call_from_put(
            self.underlying_price,
            self.strike_price,
            self.r,
            self.years_to_exp,
            p,
        )
    }
}
