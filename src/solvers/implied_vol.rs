// src/solvers/implied_vol.rs
//! Implied volatility from an observed option price
//!
//! # Algorithm
//!
//! Inverts price → volatility by Newton-Raphson on the *normalized* option
//! price rather than on the raw Black-Scholes formula. With
//! ```text
//! x = ln(e^(rT) * S / K)                      (forward log-moneyness)
//! p = price * e^(rT/2) / √(S*K)               (normalized price)
//! F(σ) = θ*e^(x/2)*Φ(θ(x/σ + σ/2)) - θ*e^(-x/2)*Φ(θ(x/σ - σ/2))
//! ```
//! the implied total volatility σ = σ_impl·√T solves `F(σ) = p`, with
//! θ = +1 for calls and θ = -1 for puts.
//!
//! The iteration is split at the critical price `b_c = F(√(2|x|))`:
//!
//! - `p ≥ b_c`: Newton directly on `F(σ) - p`, seeded from an
//!   inverse-CDF-style estimate.
//! - `p < b_c` (deep tail, F nearly flat): Newton on the log-transformed
//!   `G(σ) = ln(F(σ) - ι) - ln(p - ι)` where ι is the intrinsic floor in
//!   normalized coordinates, seeded from a closed-form estimate. The log
//!   transform keeps the Newton step from overshooting where a naive
//!   solver stalls on deep out-of-the-money prices.
//!
//! Convergence is declared when successive iterates differ by at most the
//! configured tolerance (absolute difference of iterates, not residual
//! size). Both loops are capped at `max_iterations` and report
//! [`PricingError::ConvergenceFailure`] if the cap is hit.

use crate::distribution::NormalDistribution;
use crate::error::{validation, PricingError, PricingResult};
use crate::option::OptionType;

/// Configuration for the Newton-Raphson implied volatility solver.
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Convergence tolerance on the absolute difference between
    /// successive iterates.
    pub tolerance: f64,
    /// Maximum iterations before giving up.
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-8,
            max_iterations: 100,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the convergence tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum number of iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// Implied volatility of a European call option.
///
/// Fixes the call branch (θ = +1); use [`implied_vol_for`] to solve for
/// puts. Equivalent to
/// `implied_vol_for(OptionType::Call, ..., &SolverConfig::default())`.
///
/// # Parameters
/// - `price`: Observed market price of the call
/// - `spot`: Current price of the underlying
/// - `strike`: Strike price
/// - `expiry`: Time to expiry, in years
/// - `rate`: Risk-free rate, as a percentage (5.0 = 5%)
///
/// # Returns
/// The annualized implied volatility, as a percentage (20.0 = 20%)
///
/// # Errors
/// - [`PricingError::PriceOutOfRange`] if the price violates the
///   no-arbitrage bound `max(S - K*e^(-rT), 0) < price < S`
/// - [`PricingError::InvalidParameters`] for degenerate inputs
/// - [`PricingError::ConvergenceFailure`] if the iteration cap is hit
pub fn implied_vol(
    price: f64,
    spot: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
) -> PricingResult<f64> {
    implied_vol_for(
        OptionType::Call,
        price,
        spot,
        strike,
        expiry,
        rate,
        &SolverConfig::default(),
    )
}

/// Implied volatility with the Newton branch sign θ selected by option
/// type: θ = +1 for calls, θ = -1 for puts.
///
/// The no-arbitrage bound checked before iterating is likewise
/// type-dependent:
/// ```text
/// call:  max(S - K*e^(-rT), 0) < price < S
/// put:   max(K*e^(-rT) - S, 0) < price < K*e^(-rT)
/// ```
pub fn implied_vol_for(
    option_type: OptionType,
    price: f64,
    spot: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
    config: &SolverConfig,
) -> PricingResult<f64> {
    validation::validate_positive("price", price)?;
    validation::validate_positive("spot", spot)?;
    validation::validate_positive("strike", strike)?;
    validation::validate_positive("expiry", expiry)?;
    validation::validate_finite("rate", rate)?;

    let r = rate / 100.0;
    let discounted_strike = (-r * expiry).exp() * strike;
    let (lower, upper) = match option_type {
        OptionType::Call => ((spot - discounted_strike).max(0.0), spot),
        OptionType::Put => ((discounted_strike - spot).max(0.0), discounted_strike),
    };
    if price <= lower || price >= upper {
        return Err(PricingError::PriceOutOfRange {
            price,
            lower,
            upper,
        });
    }

    let theta = match option_type {
        OptionType::Call => 1.0,
        OptionType::Put => -1.0,
    };
    let x = ((r * expiry).exp() * spot / strike).ln();
    let scaled_price = price * (r * expiry / 2.0).exp() / (spot * strike).sqrt();

    let norm = NormalDistribution::standard();

    // Normalized option price as a function of total volatility, and its
    // derivative with respect to σ (normalized vega).
    let f = |sigma: f64| {
        theta * (x / 2.0).exp() * norm.cdf(theta * (x / sigma + sigma / 2.0))
            - theta * (-x / 2.0).exp() * norm.cdf(theta * (x / sigma - sigma / 2.0))
    };
    let f_prime = |sigma: f64| {
        (x / 2.0).exp() * norm.pdf(theta * (x / sigma + sigma / 2.0))
            * (-x / (sigma * sigma) + 0.5)
            - (-x / 2.0).exp() * norm.pdf(theta * (x / sigma - sigma / 2.0))
                * (-x / (sigma * sigma) - 0.5)
    };

    // Critical total volatility and the normalized price it produces;
    // this is where the two regimes meet.
    let sigma_c = (2.0 * x.abs()).sqrt();
    let b_c = f(sigma_c);

    let total_vol = if scaled_price >= b_c {
        // F is steep enough here for Newton on F itself.
        let pval = ((theta * x / 2.0).exp() - scaled_price) * norm.cdf(-(x.abs() / 2.0).sqrt())
            / ((theta * x / 2.0).exp() - b_c);
        let seed = -2.0 * norm.pdf(pval);
        newton_raphson(seed, |sigma| f(sigma) - scaled_price, &f_prime, config)?
    } else {
        // Intrinsic floor in normalized coordinates.
        let iota = if theta * x <= 0.0 {
            0.0
        } else {
            theta * ((x / 2.0).exp() - (-x / 2.0).exp())
        };
        let g = |sigma: f64| (f(sigma) - iota).ln() - (scaled_price - iota).ln();
        let g_prime = |sigma: f64| f_prime(sigma) / (f(sigma) - iota);
        let seed = (2.0 * x * x
            / (x.abs() - 4.0 * ((scaled_price - iota) / (b_c - iota)).ln()))
        .sqrt();
        newton_raphson(seed, g, g_prime, config)?
    };

    // Back from total volatility to an annualized percentage.
    Ok(100.0 * total_vol / expiry.sqrt())
}

/// Newton-Raphson iteration to the configured tolerance on successive
/// iterates, capped at `config.max_iterations`.
fn newton_raphson<F, D>(
    seed: f64,
    objective: F,
    derivative: D,
    config: &SolverConfig,
) -> PricingResult<f64>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    let mut old_sigma = seed;
    let mut new_sigma = old_sigma - objective(old_sigma) / derivative(old_sigma);

    for _ in 0..config.max_iterations {
        if (new_sigma - old_sigma).abs() <= config.tolerance {
            return Ok(new_sigma);
        }
        old_sigma = new_sigma;
        new_sigma = old_sigma - objective(old_sigma) / derivative(old_sigma);
    }

    Err(PricingError::ConvergenceFailure {
        iterations: config.max_iterations,
        last_sigma: new_sigma,
    })
}
