// src/analytics/mod.rs
pub mod black_scholes;
