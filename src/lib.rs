//! # bs-analytic: Closed-Form Black-Scholes Analytics
//!
//! A Rust library for analytic European option valuation: closed-form
//! prices, risk sensitivities (Greeks), and implied volatility recovery,
//! with no PDE grids or Monte Carlo simulation involved.
//!
//! ## Key Features
//!
//! - **Closed-form pricing**: call/put prices and delta, gamma, vega,
//!   theta, rho as pure functions of (spot, time, strike, expiry, vol, rate)
//! - **Implied volatility**: a two-regime, normalized-price Newton-Raphson
//!   inversion that stays stable for deep out-of-the-money options
//! - **Deterministic**: stateless pure functions, safe to call from any
//!   number of threads
//! - **Validated inputs**: degenerate parameters and no-arbitrage
//!   violations are reported as errors, never as silent NaN
//!
//! ## Unit convention
//!
//! Volatility and rate are **percentages** at every public boundary
//! (20.0 means 20%) and are rescaled internally.
//!
//! ## Quick Start
//!
//! ```rust
//! use bs_analytic::analytics::black_scholes;
//! use bs_analytic::solvers::implied_vol::implied_vol;
//!
//! // Price an at-the-money one-year call, 20% vol, 5% rate
//! let price = black_scholes::call_price(100.0, 0.0, 100.0, 1.0, 20.0, 5.0).unwrap();
//! assert!((price - 10.4506).abs() < 1e-4);
//!
//! // Recover the volatility from the price
//! let vol = implied_vol(price, 100.0, 100.0, 1.0, 5.0).unwrap();
//! assert!((vol - 20.0).abs() < 0.01);
//! ```

// Module declarations
pub mod analytics;
pub mod distribution;
pub mod error;
pub mod option;
pub mod solvers;

// Re-export commonly used types for convenience
pub use error::{PricingError, PricingResult};
pub use option::{OptionType, VanillaOption};
