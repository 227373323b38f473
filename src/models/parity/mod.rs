// Put-call parity conversion.  Pure algebra on a discounted strike: no
// volatility input and no normal-CDF evaluation, which makes these the cheap
// cross-check for the closed-form pricers.

use anyhow::{bail, Result};

fn validate_inputs(k: f64, t: f64) -> Result<()> {
    if !(k > 0.0) {
        bail!("strike price must be positive: K={}", k);
    }
    if !(t >= 0.0) {
        bail!("time to maturity must be non-negative: t={}", t);
    }
    Ok(())
}

/// Derive a European put price from a call price via put-call parity:
/// `P = K·e^(−rt) + C − S`.
///
/// `t = 0` is accepted as degenerate (no discounting). The supplied call
/// price `c` is taken at face value; it is the caller's responsibility that
/// it is a sane option price.
///
/// # Errors
///
/// Fails with a domain error when `k` is not positive or `t` is negative.
pub fn put_from_call(s: f64, k: f64, r: f64, t: f64, c: f64) -> Result<f64> {
    validate_inputs(k, t)?;
    Ok(k * (-r * t).exp() + c - s)
}

/// Derive a European call price from a put price via put-call parity:
/// `C = S + P − K·e^(−rt)`.
///
/// Same domain and caveats as [`put_from_call`].
pub fn call_from_put(s: f64, k: f64, r: f64, t: f64, p: f64) -> Result<f64> {
    validate_inputs(k, t)?;
    Ok(s + p - k * (-r * t).exp())
}
