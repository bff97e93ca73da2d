// src/distribution.rs
//! Gaussian probability density and cumulative distribution functions
//!
//! Leaf dependency of both the analytic pricing formulas and the implied
//! volatility solver. The CDF is evaluated through the error function from
//! `statrs` rather than a hand-rolled polynomial approximation:
//!
//! ```text
//! Φ(x) = 0.5 * (1 + erf((x - μ) / (σ√2)))
//! ```

use statrs::function::erf;
use std::f64::consts::{PI, SQRT_2};

/// Normal distribution with given mean and standard deviation.
///
/// Callers are responsible for supplying a nonzero standard deviation;
/// the distribution itself performs no validation.
#[derive(Debug, Clone, Copy)]
pub struct NormalDistribution {
    mean: f64,
    std_dev: f64,
}

impl NormalDistribution {
    pub fn new(mean: f64, std_dev: f64) -> Self {
        NormalDistribution { mean, std_dev }
    }

    /// The standard normal N(0, 1)
    pub fn standard() -> Self {
        NormalDistribution {
            mean: 0.0,
            std_dev: 1.0,
        }
    }

    /// Probability density function
    ///
    /// # Formula
    /// ```text
    /// φ(x) = (1/(σ√(2π))) * exp(-(x-μ)²/(2σ²))
    /// ```
    pub fn pdf(&self, x: f64) -> f64 {
        let z = x - self.mean;
        (1.0 / (self.std_dev * (2.0 * PI).sqrt()))
            * (-z * z / (2.0 * self.std_dev * self.std_dev)).exp()
    }

    /// Cumulative distribution function
    ///
    /// # Formula
    /// ```text
    /// Φ(x) = 0.5 * (1 + erf((x-μ)/(σ√2)))
    /// ```
    pub fn cdf(&self, x: f64) -> f64 {
        0.5 * (1.0 + erf::erf((x - self.mean) / (self.std_dev * SQRT_2)))
    }
}
