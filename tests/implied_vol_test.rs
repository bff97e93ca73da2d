// tests/implied_vol_test.rs
use bs_analytic::analytics::black_scholes;
use bs_analytic::solvers::implied_vol::{implied_vol, implied_vol_for, SolverConfig};
use bs_analytic::{OptionType, PricingError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn test_concrete_inversion() {
    // S=100, K=100, T=1, r=5%, observed price 10.4506 -> vol of 20%
    let vol = implied_vol(10.4506, 100.0, 100.0, 1.0, 5.0).unwrap();

    println!("\nImplied vol: {}", vol);
    println!("Expected: 20.00");

    assert!(
        (vol - 20.0).abs() < 0.01,
        "Implied vol {} not within 0.01 of 20.00",
        vol
    );
}

#[test]
fn test_round_trip_vol_grid() {
    // Price at a known vol, then recover it
    let spot = 100.0;
    let strike = 100.0;
    let expiry = 1.0;
    let rate = 5.0;

    for target_vol in [2.0, 5.0, 10.0, 20.0, 40.0, 60.0, 80.0, 99.0] {
        let price =
            black_scholes::call_price(spot, 0.0, strike, expiry, target_vol, rate).unwrap();
        let recovered = implied_vol(price, spot, strike, expiry, rate).unwrap();

        let rel_error = (recovered - target_vol).abs() / target_vol;
        println!(
            "target vol {} -> price {:.6} -> recovered {} (rel error {:e})",
            target_vol, price, recovered, rel_error
        );

        assert!(
            rel_error < 1e-4,
            "Round trip failed at vol {}: recovered {}",
            target_vol,
            recovered
        );
    }
}

#[test]
fn test_round_trip_random_sampling() {
    let mut rng = StdRng::seed_from_u64(42);
    let spot = 100.0;

    for i in 0..200 {
        let strike = rng.gen_range(85.0..115.0);
        let expiry = rng.gen_range(0.25..2.0);
        let target_vol = rng.gen_range(5.0..95.0);
        let rate = rng.gen_range(0.0..10.0);

        let price = black_scholes::call_price(spot, 0.0, strike, expiry, target_vol, rate)
            .expect("sampled inputs are valid");
        let recovered = implied_vol(price, spot, strike, expiry, rate).unwrap_or_else(|e| {
            panic!(
                "sample {}: solver failed at K={}, T={}, vol={}, r={}: {}",
                i, strike, expiry, target_vol, rate, e
            )
        });

        let rel_error = (recovered - target_vol).abs() / target_vol;
        assert!(
            rel_error < 1e-4,
            "sample {}: K={}, T={}, r={}: target vol {}, recovered {} (rel error {:e})",
            i,
            strike,
            expiry,
            rate,
            target_vol,
            recovered,
            rel_error
        );
    }
}

#[test]
fn test_round_trip_moneyness_regimes() {
    // Exercise both solver branches: near-the-money prices sit above the
    // critical price b_c, deep out-of-the-money prices fall below it
    let expiry = 1.0;
    let rate = 5.0;

    for (spot, strike, vol) in [
        (100.0, 100.0, 20.0),  // at the money
        (100.0, 60.0, 35.0),   // deep in the money
        (100.0, 150.0, 25.0),  // out of the money
        (100.0, 90.0, 80.0),   // high vol regime
        (100.0, 120.0, 10.0),  // low vol, out of the money
    ] {
        let price = black_scholes::call_price(spot, 0.0, strike, expiry, vol, rate).unwrap();
        let recovered = implied_vol(price, spot, strike, expiry, rate).unwrap();

        let rel_error = (recovered - vol).abs() / vol;
        println!(
            "S={}, K={}, vol={} -> recovered {} (rel error {:e})",
            spot, strike, vol, recovered, rel_error
        );
        assert!(rel_error < 1e-4);
    }
}

#[test]
fn test_put_branch_round_trip() {
    // theta = -1 branch: recover the vol from a put price
    let spot = 100.0;
    let strike = 100.0;
    let expiry = 1.0;
    let rate = 5.0;
    let config = SolverConfig::default();

    for target_vol in [10.0, 20.0, 40.0, 70.0] {
        let price = black_scholes::put_price(spot, 0.0, strike, expiry, target_vol, rate).unwrap();
        let recovered = implied_vol_for(
            OptionType::Put,
            price,
            spot,
            strike,
            expiry,
            rate,
            &config,
        )
        .unwrap();

        let rel_error = (recovered - target_vol).abs() / target_vol;
        println!(
            "put: target vol {} -> recovered {} (rel error {:e})",
            target_vol, recovered, rel_error
        );
        assert!(rel_error < 1e-4, "Put round trip failed at vol {}", target_vol);
    }
}

#[test]
fn test_default_solver_is_call_branch() {
    // implied_vol fixes theta = +1; it must agree with the explicit call path
    let price = black_scholes::call_price(100.0, 0.0, 95.0, 1.0, 30.0, 5.0).unwrap();

    let default_result = implied_vol(price, 100.0, 95.0, 1.0, 5.0).unwrap();
    let explicit_call = implied_vol_for(
        OptionType::Call,
        price,
        100.0,
        95.0,
        1.0,
        5.0,
        &SolverConfig::default(),
    )
    .unwrap();

    assert_eq!(default_result, explicit_call);
}

#[test]
fn test_call_branch_disagrees_on_put_prices() {
    // A put price fed through the call branch does not recover the put's
    // vol; the branch sign has to match the option type
    let target_vol = 20.0;
    let put_price = black_scholes::put_price(100.0, 0.0, 100.0, 1.0, target_vol, 5.0).unwrap();

    let through_call_branch = implied_vol(put_price, 100.0, 100.0, 1.0, 5.0);
    match through_call_branch {
        Ok(vol) => {
            println!("call branch on put price: {}", vol);
            assert!(
                (vol - target_vol).abs() > 0.1,
                "Call branch unexpectedly recovered the put vol"
            );
        }
        // A put price can also fall outside the call's no-arbitrage band
        Err(PricingError::PriceOutOfRange { .. }) => {}
        Err(e) => panic!("unexpected error: {}", e),
    }
}

#[test]
fn test_boundary_rejection_below_intrinsic() {
    // r=5%, T=1: discounted strike = 95.12, intrinsic lower bound = 4.88
    let result = implied_vol(4.0, 100.0, 100.0, 1.0, 5.0);
    assert!(matches!(result, Err(PricingError::PriceOutOfRange { .. })));

    // Exactly at the bound is rejected as well (strict inequality)
    let lower = 100.0 - (-0.05_f64).exp() * 100.0;
    let result = implied_vol(lower, 100.0, 100.0, 1.0, 5.0);
    assert!(matches!(result, Err(PricingError::PriceOutOfRange { .. })));
}

#[test]
fn test_boundary_rejection_above_spot() {
    let result = implied_vol(100.0, 100.0, 100.0, 1.0, 5.0);
    assert!(matches!(result, Err(PricingError::PriceOutOfRange { .. })));

    let result = implied_vol(150.0, 100.0, 100.0, 1.0, 5.0);
    assert!(matches!(result, Err(PricingError::PriceOutOfRange { .. })));
}

#[test]
fn test_degenerate_inputs_rejected() {
    assert!(matches!(
        implied_vol(-1.0, 100.0, 100.0, 1.0, 5.0),
        Err(PricingError::InvalidParameters { .. })
    ));
    assert!(matches!(
        implied_vol(10.0, 0.0, 100.0, 1.0, 5.0),
        Err(PricingError::InvalidParameters { .. })
    ));
    assert!(matches!(
        implied_vol(10.0, 100.0, -100.0, 1.0, 5.0),
        Err(PricingError::InvalidParameters { .. })
    ));
    assert!(matches!(
        implied_vol(10.0, 100.0, 100.0, 0.0, 5.0),
        Err(PricingError::InvalidParameters { .. })
    ));
    assert!(matches!(
        implied_vol(10.0, 100.0, 100.0, 1.0, f64::NAN),
        Err(PricingError::InvalidParameters { .. })
    ));
}

#[test]
fn test_iteration_cap_reported() {
    // A zero-iteration budget cannot satisfy the tolerance check
    let price = black_scholes::call_price(100.0, 0.0, 100.0, 1.0, 20.0, 5.0).unwrap();
    let config = SolverConfig::new()
        .with_tolerance(1e-14)
        .with_max_iterations(0);

    let result = implied_vol_for(
        OptionType::Call,
        price,
        100.0,
        100.0,
        1.0,
        5.0,
        &config,
    );
    assert!(matches!(
        result,
        Err(PricingError::ConvergenceFailure { iterations: 0, .. })
    ));
}

#[test]
fn test_solver_config_builder() {
    let config = SolverConfig::new()
        .with_tolerance(1e-6)
        .with_max_iterations(50);

    assert!((config.tolerance - 1e-6).abs() < 1e-12);
    assert_eq!(config.max_iterations, 50);
}

#[test]
fn test_convergence_speed() {
    // Newton-Raphson should meet a 1e-8 iterate tolerance well inside the
    // default 100-iteration cap; a 10-iteration budget is plenty
    let price = black_scholes::call_price(100.0, 0.0, 100.0, 1.0, 20.0, 5.0).unwrap();
    let config = SolverConfig::new().with_max_iterations(10);

    let result = implied_vol_for(
        OptionType::Call,
        price,
        100.0,
        100.0,
        1.0,
        5.0,
        &config,
    );
    assert!(result.is_ok(), "solver needed more than 10 iterations");
}
