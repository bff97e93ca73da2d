// src/solvers/mod.rs
pub mod implied_vol;
