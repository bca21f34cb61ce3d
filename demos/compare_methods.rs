//! # Example: Method comparison
//!
//! Compare the fixed-step integrators on three scalar problems and print
//! the solutions and their errors.
//!
//! Problems:
//! dy/dx = -y                   y(0) = 1   exact exp(-x)
//! dy/dx = y (x^2 - 1)          y(0) = 1   exact exp(x^3/3 - x)
//! dy/dx = (x + y + 1) / (2x)   y(2) = 4   exact x - 1 + 3 sqrt(x/2)
//!

use onestep::prelude::*;

fn decay(_x: f64, y: f64) -> f64 {
    -y
}

fn cubic(x: f64, y: f64) -> f64 {
    y * (x * x - 1.0)
}

fn rational(x: f64, y: f64) -> Result<f64, EvalError> {
    if x == 0.0 {
        return Err(EvalError::new(x, y, "division by zero"));
    }
    Ok((x + y + 1.0) / (2.0 * x))
}

fn print_table(title: &str, cmp: &Comparison) {
    println!("\n{}", title);
    let columns: Vec<&Series> = cmp.series().collect();

    print!("{:>6}", "x");
    for s in &columns {
        print!(" {:>22}", s.label);
    }
    println!();
    for i in 0..cmp.reference.len() {
        print!("{:>6.2}", cmp.reference.x[i]);
        for s in &columns {
            print!(" {:>22.15}", s.y[i]);
        }
        println!();
    }

    println!("max |error|:");
    for run in &cmp.runs {
        if let Some(e) = run.max_abs_error() {
            println!("  {:<30} {:.3e}", run.series.label, e);
        }
    }
}

fn run<F: ODE>(title: &str, ivp: &IVP, f: &F, exact: impl Fn(f64) -> f64) -> Result<(), Error> {
    let reference = exact_on_grid(ivp, exact);
    let cmp = compare(ivp, Rhs::Continuous(f), reference, &Method::standard_set())?;
    print_table(title, &cmp);

    let numeric = adaptive_on_grid(ivp, f, &AdaptiveSettings::reference())?;
    let worst = numeric
        .iter()
        .zip(&cmp.reference.y)
        .map(|(a, b)| (a - b).abs())
        .fold(0.0, f64::max);
    println!("  adaptive reference vs exact: {:.3e}", worst);

    let adaptive = solve(ivp, Rhs::Continuous(f), &Method::DormandPrinceAdaptive(AdaptiveSettings::default()))?;
    println!("  {}: {} accepted points", adaptive.label, adaptive.len() - 1);
    for (x, y) in adaptive.iter() {
        println!("    x = {:.6}, y = {:.15}", x, y);
    }
    Ok(())
}

fn main() -> Result<(), Error> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let ivp = IVP::builder().y0(1.0).x0(0.0).h(0.1).n(10).build()?;
    run("dy/dx = -y", &ivp, &decay, |x| (-x).exp())?;
    run("dy/dx = y (x^2 - 1)", &ivp, &cubic, |x| (x * x * x / 3.0 - x).exp())?;

    let ivp = IVP::builder().y0(4.0).x0(2.0).h(0.1).n(10).build()?;
    run("dy/dx = (x + y + 1) / (2x)", &ivp, &Fallible(rational), |x| {
        x - 1.0 + 3.0 * (x / 2.0).sqrt()
    })?;

    Ok(())
}
