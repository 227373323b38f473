// Closed-form Black-Scholes-Merton pricing for European options.  The d1/d2
// intermediates are public because callers routinely want them for diagnostics;
// both pricers recompute them internally (the cost is negligible, no caching).

use crate::models::utils::norm_cdf;
use anyhow::{bail, Result};

/// Rejects any pricing input outside the model's domain, naming the offender.
///
/// The checks are written as `!(x > 0.0)` so that NaN inputs fail them too.
fn validate_inputs(s: f64, k: f64, sigma: f64, t: f64) -> Result<()> {
    if !(s > 0.0) {
        bail!("spot price must be positive: S={}", s);
    }
    if !(k > 0.0) {
        bail!("strike price must be positive: K={}", k);
    }
    if !(sigma > 0.0) {
        bail!("volatility must be positive: sigma={}", sigma);
    }
    if !(t > 0.0) {
        bail!("time to maturity must be positive: t={}", t);
    }
    Ok(())
}

/// The d1 term of the Black-Scholes formula:
/// `(ln(S/K) + (r + sigma²/2)·t) / (sigma·√t)`.
///
/// # Errors
///
/// Fails with a domain error if `s`, `k`, `sigma`, or `t` is not strictly
/// positive. The rate `r` may be any real number, including negative.
pub fn d1(s: f64, k: f64, sigma: f64, r: f64, t: f64) -> Result<f64> {
    validate_inputs(s, k, sigma, t)?;
    let numerator = (s / k).ln() + (r + 0.5 * sigma * sigma) * t;
    Ok(numerator / (sigma * t.sqrt()))
}

/// The d2 term of the Black-Scholes formula: `d1 − sigma·√t`.
///
/// # Errors
///
/// Same domain as [`d1`].
pub fn d2(s: f64, k: f64, sigma: f64, r: f64, t: f64) -> Result<f64> {
    Ok(d1(s, k, sigma, r, t)? - sigma * t.sqrt())
}

/// Price of a European call option: `S·Φ(d1) − K·e^(−rt)·Φ(d2)`.
///
/// For valid inputs the result is finite. Deep out-of-the-money, the true
/// price underflows toward zero and floating-point cancellation can leave a
/// marginally negative value; that is expected behavior of the closed form
/// and is deliberately not clamped (clamping is caller policy). Extreme
/// inputs that overflow the exponential propagate as ±inf/NaN.
///
/// # Errors
///
/// Fails with a domain error when `s`, `k`, `sigma`, or `t` is not strictly
/// positive.
pub fn call(s: f64, k: f64, sigma: f64, r: f64, t: f64) -> Result<f64> {
    let v1 = d1(s, k, sigma, r, t)?;
    let v2 = v1 - sigma * t.sqrt();
    Ok(s * norm_cdf(v1) - k * (-r * t).exp() * norm_cdf(v2))
}

/// Price of a European put option: `K·e^(−rt)·Φ(−d2) − S·Φ(−d1)`.
///
/// Same domain and numerical caveats as [`call`].
pub fn put(s: f64, k: f64, sigma: f64, r: f64, t: f64) -> Result<f64> {
    let v1 = d1(s, k, sigma, r, t)?;
    let v2 = v1 - sigma * t.sqrt();
    Ok(k * (-r * t).exp() * norm_cdf(-v2) - s * norm_cdf(-v1))
}
