pub mod bsm;
pub mod parity;

/// Crate-internal math utilities shared by the pricing models
pub(crate) mod utils {
    use statrs::function::erf::erfc;

    /// Standard normal cumulative distribution function Φ(x).
    ///
    /// Φ(x) = erfc(-x / √2) / 2, delegating the error function to `statrs`.
    /// The erfc form keeps precision for large negative `x`, where
    /// 0.5 * (1 + erf) would cancel.
    pub fn norm_cdf(x: f64) -> f64 {
        0.5 * erfc(-x / std::f64::consts::SQRT_2)
    }
}
