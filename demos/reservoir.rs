//! # Example: Reservoir volume balance
//!
//! Integrate dV/dt = Q_in(t) - Q_out(t) - leak(t) + noise with one constant
//! rate per day and compare the fixed-step methods.
//!
//! Pass a seed as the first argument for reproducible noise.
//!

use onestep::prelude::*;
use onestep::scenario::{Reservoir, ReservoirConfig};

fn main() -> Result<(), Error> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let seed = std::env::args().nth(1).and_then(|s| s.parse::<u64>().ok());
    log::info!("noise seed: {:?}", seed);
    let config = ReservoirConfig::builder().maybe_seed(seed).build();
    let reservoir = Reservoir::new(&config)?;

    println!("{:>6} {:>10} {:>10} {:>10} {:>10} {:>10}", "t", "Q_in", "Q_out", "leak", "noise", "dV/dt");
    for (i, s) in reservoir.series()[2].iter().enumerate().step_by(10) {
        println!(
            "{:>6.1} {:>10.3} {:>10.3} {:>10.3} {:>10.3} {:>10.3}",
            s.0, reservoir.inflow[i], reservoir.outflow[i], reservoir.leak[i], reservoir.noise[i], s.1
        );
    }

    println!();
    for method in Method::standard_set() {
        let series = solve(&reservoir.ivp, reservoir.rhs(), &method)?;
        let change = reservoir.volume_change(&series.y);
        if let (Some((t, v)), Some(dv)) = (series.last(), change.last()) {
            println!("{:<30} V({}) = {:.6}  (change {:+.6})", series.label, t, v, dv);
        }
    }

    Ok(())
}
