// src/analytics/black_scholes.rs
//! Analytical Black-Scholes formulas for European options and Greeks
//!
//! # Mathematical Foundation
//!
//! Under the Black-Scholes model, the underlying asset follows:
//! ```text
//! dS_t = r S_t dt + σ S_t dW_t
//! ```
//!
//! The risk-neutral pricing formula gives closed-form solutions for
//! European payoffs in terms of the cumulative normal distribution Φ(x):
//! ```text
//! C(S,t) = S*Φ(d₁) - K*e^(-rτ)*Φ(d₂),    τ = T - t
//! d₁ = [ln(S/K) + (r + σ²/2)τ] / (σ√τ)
//! d₂ = d₁ - σ√τ
//! ```
//!
//! # Unit convention
//!
//! Volatility and rate cross this boundary **as percentages** (20.0 means
//! 20%) and are divided by 100 before entering the formulas. Every function
//! here follows this convention; so do all test fixtures.
//!
//! Degenerate inputs (non-positive spot, strike, or vol; zero time to
//! expiry) are rejected with [`PricingError::InvalidParameters`] instead of
//! letting NaN or infinities propagate out of the formulas.

use crate::distribution::NormalDistribution;
use crate::error::{validation, PricingError, PricingResult};

/// Shared d₁/d₂ computation consumed by every price and Greek formula.
///
/// Takes `sigma` and `rate` already rescaled to decimals and `tau` already
/// validated positive.
fn d1_d2(spot: f64, strike: f64, tau: f64, sigma: f64, rate: f64) -> (f64, f64) {
    let sqrt_tau = tau.sqrt();
    let d1 = ((spot / strike).ln() + (rate + 0.5 * sigma * sigma) * tau) / (sigma * sqrt_tau);
    let d2 = d1 - sigma * sqrt_tau;
    (d1, d2)
}

/// Validates market inputs and returns the time to expiry τ = expiry - time.
fn checked_tau(spot: f64, time: f64, strike: f64, expiry: f64, vol: f64) -> PricingResult<f64> {
    validation::validate_positive("spot", spot)?;
    validation::validate_positive("strike", strike)?;
    validation::validate_positive("vol", vol)?;
    validation::validate_non_negative("time", time)?;

    let tau = expiry - time;
    if tau <= 0.0 {
        return Err(PricingError::InvalidParameters {
            parameter: "expiry".to_string(),
            value: expiry,
            constraint: format!("must exceed valuation time {}", time),
        });
    }
    Ok(tau)
}

/// Black-Scholes European call option price
///
/// # Formula
/// ```text
/// C = S*Φ(d₁) - K*e^(-rτ)*Φ(d₂)
/// ```
///
/// # Parameters
/// - `spot`: Current price of the underlying
/// - `time`: Valuation time, in years
/// - `strike`: Strike price
/// - `expiry`: Expiration date, in years
/// - `vol`: Volatility, as a percentage (20.0 = 20%)
/// - `rate`: Risk-free rate, as a percentage (5.0 = 5%)
///
/// # Returns
/// Present value of the call option
pub fn call_price(
    spot: f64,
    time: f64,
    strike: f64,
    expiry: f64,
    vol: f64,
    rate: f64,
) -> PricingResult<f64> {
    let tau = checked_tau(spot, time, strike, expiry, vol)?;
    let sigma = vol / 100.0;
    let r = rate / 100.0;
    let (d1, d2) = d1_d2(spot, strike, tau, sigma, r);
    let norm = NormalDistribution::standard();
    Ok(spot * norm.cdf(d1) - strike * (-r * tau).exp() * norm.cdf(d2))
}

/// Black-Scholes European put option price
///
/// # Formula
/// ```text
/// P = K*e^(-rτ)*Φ(-d₂) - S*Φ(-d₁)
/// ```
///
/// Related to the call price through put-call parity:
/// `C - P = S - K*e^(-rτ)`.
pub fn put_price(
    spot: f64,
    time: f64,
    strike: f64,
    expiry: f64,
    vol: f64,
    rate: f64,
) -> PricingResult<f64> {
    let tau = checked_tau(spot, time, strike, expiry, vol)?;
    let sigma = vol / 100.0;
    let r = rate / 100.0;
    let (d1, d2) = d1_d2(spot, strike, tau, sigma, r);
    let norm = NormalDistribution::standard();
    Ok(-spot * norm.cdf(-d1) + strike * (-r * tau).exp() * norm.cdf(-d2))
}

/// Black-Scholes Delta (∂V/∂S) for a European call
///
/// # Formula
/// ```text
/// Δ = Φ(d₁)
/// ```
///
/// # Interpretation
/// - Hedge ratio: shares of the underlying per option sold
/// - Range: [0, 1] for calls
pub fn call_delta(
    spot: f64,
    time: f64,
    strike: f64,
    expiry: f64,
    vol: f64,
    rate: f64,
) -> PricingResult<f64> {
    let tau = checked_tau(spot, time, strike, expiry, vol)?;
    let sigma = vol / 100.0;
    let r = rate / 100.0;
    let (d1, _) = d1_d2(spot, strike, tau, sigma, r);
    Ok(NormalDistribution::standard().cdf(d1))
}

/// Black-Scholes Delta (∂V/∂S) for a European put
///
/// # Formula
/// ```text
/// Δ = -Φ(-d₁)
/// ```
///
/// Range: [-1, 0] for puts.
pub fn put_delta(
    spot: f64,
    time: f64,
    strike: f64,
    expiry: f64,
    vol: f64,
    rate: f64,
) -> PricingResult<f64> {
    let tau = checked_tau(spot, time, strike, expiry, vol)?;
    let sigma = vol / 100.0;
    let r = rate / 100.0;
    let (d1, _) = d1_d2(spot, strike, tau, sigma, r);
    Ok(-NormalDistribution::standard().cdf(-d1))
}

/// Black-Scholes Gamma (∂²V/∂S²), identical for calls and puts
///
/// # Formula
/// ```text
/// Γ = φ(d₁) / (S * σ * √τ)
/// ```
///
/// # Interpretation
/// - Rate of change of Delta w.r.t. the underlying price
/// - Maximum at-the-money, always non-negative
pub fn gamma(
    spot: f64,
    time: f64,
    strike: f64,
    expiry: f64,
    vol: f64,
    rate: f64,
) -> PricingResult<f64> {
    let tau = checked_tau(spot, time, strike, expiry, vol)?;
    let sigma = vol / 100.0;
    let r = rate / 100.0;
    let (d1, _) = d1_d2(spot, strike, tau, sigma, r);
    Ok(NormalDistribution::standard().pdf(d1) / (spot * sigma * tau.sqrt()))
}

/// Black-Scholes Vega (∂V/∂σ), identical for calls and puts
///
/// # Formula
/// ```text
/// ν = S * √τ * φ(d₁) / 100
/// ```
///
/// Scaled to the price change per 1-point move in the percentage
/// volatility (e.g. 20% → 21%).
pub fn vega(
    spot: f64,
    time: f64,
    strike: f64,
    expiry: f64,
    vol: f64,
    rate: f64,
) -> PricingResult<f64> {
    let tau = checked_tau(spot, time, strike, expiry, vol)?;
    let sigma = vol / 100.0;
    let r = rate / 100.0;
    let (d1, _) = d1_d2(spot, strike, tau, sigma, r);
    Ok(spot * tau.sqrt() * NormalDistribution::standard().pdf(d1) / 100.0)
}

/// Black-Scholes Theta for a European call, scaled to one-day decay
///
/// # Formula
/// ```text
/// Θ = [-S*σ*φ(d₁)/(2√τ) - r*K*e^(-rτ)*Φ(d₂)] / 365
/// ```
///
/// Usually negative for long options: time erodes value.
pub fn call_theta(
    spot: f64,
    time: f64,
    strike: f64,
    expiry: f64,
    vol: f64,
    rate: f64,
) -> PricingResult<f64> {
    let tau = checked_tau(spot, time, strike, expiry, vol)?;
    let sigma = vol / 100.0;
    let r = rate / 100.0;
    let (d1, d2) = d1_d2(spot, strike, tau, sigma, r);
    let norm = NormalDistribution::standard();
    let theta = -spot * sigma * norm.pdf(d1) / (2.0 * tau.sqrt())
        - r * strike * (-r * tau).exp() * norm.cdf(d2);
    Ok(theta / 365.0)
}

/// Black-Scholes Theta for a European put, scaled to one-day decay
///
/// # Formula
/// ```text
/// Θ = [-S*σ*φ(d₁)/(2√τ) + r*K*e^(-rτ)*Φ(-d₂)] / 365
/// ```
pub fn put_theta(
    spot: f64,
    time: f64,
    strike: f64,
    expiry: f64,
    vol: f64,
    rate: f64,
) -> PricingResult<f64> {
    let tau = checked_tau(spot, time, strike, expiry, vol)?;
    let sigma = vol / 100.0;
    let r = rate / 100.0;
    let (d1, d2) = d1_d2(spot, strike, tau, sigma, r);
    let norm = NormalDistribution::standard();
    let theta = -spot * sigma * norm.pdf(d1) / (2.0 * tau.sqrt())
        + r * strike * (-r * tau).exp() * norm.cdf(-d2);
    Ok(theta / 365.0)
}

/// Black-Scholes Rho (∂V/∂r) for a European call
///
/// # Formula
/// ```text
/// ρ = K * τ * e^(-rτ) * Φ(d₂) / 100
/// ```
///
/// Scaled to the price change per 1-point move in the percentage rate.
/// Positive for calls.
pub fn call_rho(
    spot: f64,
    time: f64,
    strike: f64,
    expiry: f64,
    vol: f64,
    rate: f64,
) -> PricingResult<f64> {
    let tau = checked_tau(spot, time, strike, expiry, vol)?;
    let sigma = vol / 100.0;
    let r = rate / 100.0;
    let (_, d2) = d1_d2(spot, strike, tau, sigma, r);
    Ok(strike * tau * (-r * tau).exp() * NormalDistribution::standard().cdf(d2) / 100.0)
}

/// Black-Scholes Rho (∂V/∂r) for a European put
///
/// # Formula
/// ```text
/// ρ = -K * τ * e^(-rτ) * Φ(-d₂) / 100
/// ```
///
/// Negative for puts.
pub fn put_rho(
    spot: f64,
    time: f64,
    strike: f64,
    expiry: f64,
    vol: f64,
    rate: f64,
) -> PricingResult<f64> {
    let tau = checked_tau(spot, time, strike, expiry, vol)?;
    let sigma = vol / 100.0;
    let r = rate / 100.0;
    let (_, d2) = d1_d2(spot, strike, tau, sigma, r);
    Ok(-strike * tau * (-r * tau).exp() * NormalDistribution::standard().cdf(-d2) / 100.0)
}
