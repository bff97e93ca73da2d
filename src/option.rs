// src/option.rs
//! Vanilla European option product
//!
//! Thin facade over the analytic engine: holds (strike, expiry, type),
//! validates that the valuation time precedes expiry, and dispatches each
//! pricing call to the call or put formula.

use crate::analytics::black_scholes;
use crate::error::{validation, PricingError, PricingResult};
use crate::solvers::implied_vol::{implied_vol_for, SolverConfig};

/// European option style: call or put.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionType {
    Call,
    Put,
}

/// A vanilla European option.
///
/// Strike, expiry, and type are fixed at construction; no setters exist.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VanillaOption {
    strike: f64,
    expiry: f64,
    option_type: OptionType,
}

impl VanillaOption {
    /// Creates an option, validating that strike and expiry are positive.
    pub fn new(strike: f64, expiry: f64, option_type: OptionType) -> PricingResult<Self> {
        validation::validate_positive("strike", strike)?;
        validation::validate_positive("expiry", expiry)?;
        Ok(VanillaOption {
            strike,
            expiry,
            option_type,
        })
    }

    /// The strike price of the option.
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// The expiration date of the option, in years.
    pub fn expiry(&self) -> f64 {
        self.expiry
    }

    /// The option type.
    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    fn check_time(&self, time: f64) -> PricingResult<()> {
        if time > self.expiry {
            return Err(PricingError::ExpiredOption {
                time,
                expiry: self.expiry,
            });
        }
        Ok(())
    }

    /// The option price (premium) at the given valuation time.
    ///
    /// `vol` and `rate` are percentages (20.0 = 20%).
    pub fn price(&self, spot: f64, time: f64, vol: f64, rate: f64) -> PricingResult<f64> {
        self.check_time(time)?;
        match self.option_type {
            OptionType::Call => {
                black_scholes::call_price(spot, time, self.strike, self.expiry, vol, rate)
            }
            OptionType::Put => {
                black_scholes::put_price(spot, time, self.strike, self.expiry, vol, rate)
            }
        }
    }

    /// The option delta.
    pub fn delta(&self, spot: f64, time: f64, vol: f64, rate: f64) -> PricingResult<f64> {
        self.check_time(time)?;
        match self.option_type {
            OptionType::Call => {
                black_scholes::call_delta(spot, time, self.strike, self.expiry, vol, rate)
            }
            OptionType::Put => {
                black_scholes::put_delta(spot, time, self.strike, self.expiry, vol, rate)
            }
        }
    }

    /// The option gamma (identical formula for calls and puts).
    pub fn gamma(&self, spot: f64, time: f64, vol: f64, rate: f64) -> PricingResult<f64> {
        self.check_time(time)?;
        black_scholes::gamma(spot, time, self.strike, self.expiry, vol, rate)
    }

    /// The option vega (identical formula for calls and puts).
    pub fn vega(&self, spot: f64, time: f64, vol: f64, rate: f64) -> PricingResult<f64> {
        self.check_time(time)?;
        black_scholes::vega(spot, time, self.strike, self.expiry, vol, rate)
    }

    /// The one-day option theta.
    pub fn theta(&self, spot: f64, time: f64, vol: f64, rate: f64) -> PricingResult<f64> {
        self.check_time(time)?;
        match self.option_type {
            OptionType::Call => {
                black_scholes::call_theta(spot, time, self.strike, self.expiry, vol, rate)
            }
            OptionType::Put => {
                black_scholes::put_theta(spot, time, self.strike, self.expiry, vol, rate)
            }
        }
    }

    /// The option rho.
    pub fn rho(&self, spot: f64, time: f64, vol: f64, rate: f64) -> PricingResult<f64> {
        self.check_time(time)?;
        match self.option_type {
            OptionType::Call => {
                black_scholes::call_rho(spot, time, self.strike, self.expiry, vol, rate)
            }
            OptionType::Put => {
                black_scholes::put_rho(spot, time, self.strike, self.expiry, vol, rate)
            }
        }
    }

    /// The implied volatility reproducing `price`, solved with the Newton
    /// branch sign matching this option's type.
    pub fn implied_vol(&self, price: f64, spot: f64, rate: f64) -> PricingResult<f64> {
        implied_vol_for(
            self.option_type,
            price,
            spot,
            self.strike,
            self.expiry,
            rate,
            &SolverConfig::default(),
        )
    }
}
