//! # BSM-Lib: Closed-Form European Option Pricing
//!
//! `bsm-lib` prices European call and put options under the Black-Scholes-Merton
//! model and converts between the two prices via put-call parity. It is a small,
//! pure formula library: no state, no I/O, no market-data handling — just a
//! numerically sound implementation of the closed-form expressions.
//!
//! ## Core Features
//!
//! - **d1/d2 Terms**: the intermediate Black-Scholes quantities, exposed directly
//! - **Call/Put Pricing**: `S·Φ(d1) − K·e^(−rt)·Φ(d2)` and its put counterpart
//! - **Put-Call Parity**: derive either price from the other without volatility
//! - **Strict Domain Checking**: non-positive spot, strike, volatility, or
//!   maturity is rejected with an error naming the offending parameter
//!
//! ## Quick Start
//!
//! ```rust
//! use bsm_lib::{call, put, put_from_call};
//!
//! // S = 100, K = 100, sigma = 20%, r = 5%, t = 1 year
//! let c = call(100.0, 100.0, 0.2, 0.05, 1.0)?;
//! let p = put(100.0, 100.0, 0.2, 0.05, 1.0)?;
//! assert!((c - 10.4506).abs() < 1e-3);
//! assert!((p - 5.5735).abs() < 1e-3);
//!
//! // Parity reproduces the put from the call without touching sigma
//! let p2 = put_from_call(100.0, 100.0, 0.05, 1.0, c)?;
//! assert!((p - p2).abs() < 1e-9);
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Numerical Notes
//!
//! Every function is pure and deterministic; concurrent use needs no
//! synchronization. Deep out-of-the-money prices can come out marginally
//! negative from floating-point cancellation; that is documented behavior of
//! the closed form and is not clamped here. Extreme inputs (e.g. huge `r·t`)
//! may overflow the exponential term; the resulting non-finite value is
//! propagated rather than masked.

// ================================================================================================
// MODULES
// ================================================================================================

pub mod maturity;
pub mod models;
pub mod quote;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

// Black-Scholes-Merton pricer and its intermediate terms
pub use models::bsm::{call, d1, d2, put};

// Put-call parity converters
pub use models::parity::{call_from_put, put_from_call};

// Validated input bundle
pub use quote::OptionQuote;
