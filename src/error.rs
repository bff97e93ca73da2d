// src/error.rs
use std::fmt;

/// Custom error types for the bs-analytic library
#[derive(Debug, Clone, PartialEq)]
pub enum PricingError {
    /// Invalid parameter values (degenerate numeric input)
    InvalidParameters {
        parameter: String,
        value: f64,
        constraint: String,
    },

    /// Valuation time is past the option's expiry
    ExpiredOption { time: f64, expiry: f64 },

    /// Observed option price violates the no-arbitrage bound
    PriceOutOfRange { price: f64, lower: f64, upper: f64 },

    /// Newton-Raphson iteration cap exceeded without meeting tolerance
    ConvergenceFailure { iterations: u32, last_sigma: f64 },
}

impl fmt::Display for PricingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PricingError::InvalidParameters {
                parameter,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid parameter '{}' = {}: {}",
                    parameter, value, constraint
                )
            }
            PricingError::ExpiredOption { time, expiry } => {
                write!(
                    f,
                    "Valuation time {} exceeds expiry {}: evaluation time must precede expiry",
                    time, expiry
                )
            }
            PricingError::PriceOutOfRange {
                price,
                lower,
                upper,
            } => {
                write!(
                    f,
                    "Option price {} out of range: no-arbitrage bound requires a price in ({}, {})",
                    price, lower, upper
                )
            }
            PricingError::ConvergenceFailure {
                iterations,
                last_sigma,
            } => {
                write!(
                    f,
                    "Implied volatility solver failed to converge after {} iterations (last sigma: {})",
                    iterations, last_sigma
                )
            }
        }
    }
}

impl std::error::Error for PricingError {}

/// Result type alias for bs-analytic operations
pub type PricingResult<T> = Result<T, PricingError>;

/// Validation utilities
pub mod validation {
    use super::{PricingError, PricingResult};

    /// Validate that a parameter is positive
    pub fn validate_positive(name: &str, value: f64) -> PricingResult<()> {
        if value <= 0.0 {
            Err(PricingError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be positive (> 0)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a parameter is non-negative
    pub fn validate_non_negative(name: &str, value: f64) -> PricingResult<()> {
        if value < 0.0 {
            Err(PricingError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be non-negative (≥ 0)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a value is finite and not NaN
    pub fn validate_finite(name: &str, value: f64) -> PricingResult<()> {
        if !value.is_finite() {
            Err(PricingError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be finite (not NaN or infinite)".to_string(),
            })
        } else {
            Ok(())
        }
    }
}
