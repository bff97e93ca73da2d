// demos/demo.rs
use bs_analytic::analytics::black_scholes;
use bs_analytic::solvers::implied_vol::implied_vol;
use bs_analytic::{OptionType, VanillaOption};

fn main() {
    let spot = 100.0;
    let time = 0.0;
    let strike = 100.0;
    let expiry = 1.0;
    let vol = 20.0; // percent
    let rate = 5.0; // percent

    println!("=== European option valuation ===");
    println!(
        "S={}, K={}, T={}y, vol={}%, rate={}%\n",
        spot, strike, expiry, vol, rate
    );

    let call = VanillaOption::new(strike, expiry, OptionType::Call).expect("valid option");
    let put = VanillaOption::new(strike, expiry, OptionType::Put).expect("valid option");

    let call_price = call.price(spot, time, vol, rate).expect("valid inputs");
    let put_price = put.price(spot, time, vol, rate).expect("valid inputs");

    println!("Call price: {:.4}", call_price);
    println!("Put price:  {:.4}", put_price);
    println!(
        "Parity residual: {:.2e}\n",
        call_price - put_price - (spot - strike * (-rate / 100.0 * expiry).exp())
    );

    println!("Call Greeks:");
    println!("  delta: {:.4}", call.delta(spot, time, vol, rate).unwrap());
    println!("  gamma: {:.4}", call.gamma(spot, time, vol, rate).unwrap());
    println!("  vega:  {:.4} (per vol point)", call.vega(spot, time, vol, rate).unwrap());
    println!("  theta: {:.4} (one-day)", call.theta(spot, time, vol, rate).unwrap());
    println!("  rho:   {:.4} (per rate point)\n", call.rho(spot, time, vol, rate).unwrap());

    // Invert the call price back to a volatility
    let recovered = implied_vol(call_price, spot, strike, expiry, rate).expect("price in range");
    println!(
        "Implied vol from price {:.4}: {:.4}% (true vol {}%)",
        call_price, recovered, vol
    );

    // Deep out-of-the-money: the solver switches to its log-transformed
    // tail regime and still recovers the vol
    let otm_price = black_scholes::call_price(spot, time, 150.0, expiry, 25.0, rate).unwrap();
    let otm_recovered = implied_vol(otm_price, spot, 150.0, expiry, rate).unwrap();
    println!(
        "Deep OTM (K=150): price {:.4} -> implied vol {:.4}% (true 25%)",
        otm_price, otm_recovered
    );

    // Out-of-range prices are rejected up front
    match implied_vol(spot + 5.0, spot, strike, expiry, rate) {
        Err(e) => println!("\nRejected bad price: {}", e),
        Ok(_) => unreachable!(),
    }
}
