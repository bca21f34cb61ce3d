use approx::assert_abs_diff_eq;
use onestep::prelude::*;
use onestep::scenario::ConstantRate;

mod common;
use common::{Counting, cubic, cubic_exact, decay, fixed_step_all, ivp, rational};

#[test]
fn zero_steps_return_initial_value() {
    let p = ivp(1.5, 0.0, 0.1, 0);
    for result in fixed_step_all(&p, Rhs::Continuous(&decay)) {
        assert_eq!(result.unwrap(), vec![1.5]);
    }
}

#[test]
fn zero_steps_evaluate_nothing() {
    let p = ivp(1.0, 0.0, 0.1, 0);
    let f = Counting::new(decay);
    for result in fixed_step_all(&p, Rhs::Continuous(&f)) {
        result.unwrap();
    }
    assert_eq!(f.calls(), 0);
}

#[test]
fn euler_matches_discrete_recursion() {
    let h = 0.1;
    let p = ivp(1.0, 0.0, h, 10);
    let y = euler(&p, Rhs::Continuous(&decay)).unwrap();

    let mut expected = vec![1.0];
    for i in 0..10 {
        expected.push(round15(expected[i] * (1.0 - h)));
    }

    assert_eq!(y.len(), 11);
    for (a, b) in y.iter().zip(&expected) {
        assert_abs_diff_eq!(*a, *b, epsilon = 1e-14);
    }
    assert_abs_diff_eq!(y[10], 0.348678440, epsilon = 1e-9);
}

#[test]
fn outputs_are_rounded_to_fifteen_digits() {
    let p = ivp(1.0, 0.0, 0.1, 10);
    for result in fixed_step_all(&p, Rhs::Continuous(&cubic)) {
        for v in result.unwrap() {
            assert_eq!(round15(v), v);
        }
    }
}

#[test]
fn rk2_half_is_modified_euler() {
    let p = ivp(1.0, 0.0, 0.1, 10);
    let rk = rk2(&p, Rhs::Continuous(&cubic), 0.5).unwrap();
    let mid = modified_euler(&p, Rhs::Continuous(&cubic)).unwrap();
    assert_eq!(rk, mid);
}

#[test]
fn rk2_one_is_improved_euler() {
    let p = ivp(1.0, 0.0, 0.1, 10);
    let rk = rk2(&p, Rhs::Continuous(&cubic), 1.0).unwrap();
    let heun = improved_euler(&p, Rhs::Continuous(&cubic)).unwrap();
    assert_eq!(rk, heun);
}

#[test]
fn rk2_third_and_quarter_differ() {
    let p = ivp(1.0, 0.0, 0.1, 10);
    let third = rk2(&p, Rhs::Continuous(&cubic), RK2Tableau::ONE_THIRD).unwrap();
    let quarter = rk2(&p, Rhs::Continuous(&cubic), RK2Tableau::ONE_QUARTER).unwrap();
    assert_ne!(third, quarter);
    assert_abs_diff_eq!(third[10], quarter[10], epsilon = 1e-2);
}

#[test]
fn rk2_zero_alpha_is_rejected() {
    let p = ivp(1.0, 0.0, 0.1, 10);
    let f = Counting::new(decay);
    assert_eq!(rk2(&p, Rhs::Continuous(&f), 0.0), Err(Error::InvalidAlpha(0.0)));
    assert!(matches!(
        rk2(&p, Rhs::Continuous(&f), f64::NAN),
        Err(Error::InvalidAlpha(_))
    ));
    assert_eq!(f.calls(), 0);
}

#[test]
fn rk2_tableau_weights() {
    let t = RK2Tableau::new(0.25).unwrap();
    assert_eq!(t.b1, -1.0);
    assert_eq!(t.b2, 2.0);
    assert_eq!(RK2Tableau::new(0.0), Err(Error::InvalidAlpha(0.0)));
}

#[test]
fn zero_step_size_is_rejected() {
    let err = IVP::builder().y0(1.0).x0(0.0).h(0.0).n(10).build();
    assert_eq!(err, Err(Error::InvalidStepSize(0.0)));
    assert!(IVP::builder().y0(1.0).h(f64::INFINITY).n(1).build().is_err());
}

#[test]
fn repeated_calls_are_bit_identical() {
    let p = ivp(1.0, 0.0, 0.1, 10);
    let first = fixed_step_all(&p, Rhs::Continuous(&cubic));
    let second = fixed_step_all(&p, Rhs::Continuous(&cubic));
    for (a, b) in first.into_iter().zip(second) {
        let a: Vec<u64> = a.unwrap().iter().map(|v| v.to_bits()).collect();
        let b: Vec<u64> = b.unwrap().iter().map(|v| v.to_bits()).collect();
        assert_eq!(a, b);
    }
}

#[test]
fn evaluations_per_step() {
    let p = ivp(1.0, 0.0, 0.1, 10);

    let f = Counting::new(decay);
    euler(&p, Rhs::Continuous(&f)).unwrap();
    assert_eq!(f.calls(), 10);

    let f = Counting::new(decay);
    improved_euler(&p, Rhs::Continuous(&f)).unwrap();
    assert_eq!(f.calls(), 20);

    let f = Counting::new(decay);
    modified_euler(&p, Rhs::Continuous(&f)).unwrap();
    assert_eq!(f.calls(), 20);

    let f = Counting::new(decay);
    rk2(&p, Rhs::Continuous(&f), RK2Tableau::ONE_THIRD).unwrap();
    assert_eq!(f.calls(), 20);
}

#[test]
fn backward_integration() {
    let x0 = 1.0;
    let p = ivp((-x0 as f64).exp(), x0, -0.1, 10);
    let heun = improved_euler(&p, Rhs::Continuous(&decay)).unwrap();
    let forward = euler(&p, Rhs::Continuous(&decay)).unwrap();
    assert_abs_diff_eq!(heun[10], 1.0, epsilon = 1e-2);
    assert!((heun[10] - 1.0).abs() < (forward[10] - 1.0).abs());
}

#[test]
fn divergence_is_not_an_error() {
    let blow_up = |_x: f64, y: f64| y * y;
    let p = ivp(1.0, 0.0, 0.5, 20);
    let y = euler(&p, Rhs::Continuous(&blow_up)).unwrap();
    assert_eq!(y.len(), 21);
    assert!(y[20].is_infinite());
}

#[test]
fn evaluation_error_propagates_unchanged() {
    let p = ivp(1.0, 0.0, 0.1, 10);
    let g = rational();
    let expected = Err(Error::Evaluation(EvalError::new(0.0, 1.0, "division by zero")));
    for result in fixed_step_all(&p, Rhs::Continuous(&g)) {
        assert_eq!(result, expected);
    }
}

#[test]
fn short_stepwise_rhs_is_rejected_before_stepping() {
    let p = ivp(1.0, 0.0, 0.1, 5);
    let rates: Vec<Counting<ConstantRate>> = (0..3).map(|_| Counting::new(ConstantRate(1.0))).collect();
    let expected = Err(Error::DimensionMismatch { expected: 5, found: 3 });
    for result in fixed_step_all(&p, Rhs::Stepwise(&rates)) {
        assert_eq!(result, expected);
    }
    assert!(rates.iter().all(|r| r.calls() == 0));
}

fn scaled(c: f64) -> impl Fn(f64, f64) -> f64 {
    move |x, y| c * y + x
}

#[test]
fn stepwise_matches_continuous_when_entries_agree() {
    let p = ivp(1.0, 0.0, 0.1, 10);
    let single = scaled(-1.0);
    let per_step: Vec<_> = (0..10).map(|_| scaled(-1.0)).collect();
    let a = fixed_step_all(&p, Rhs::Continuous(&single));
    let b = fixed_step_all(&p, Rhs::Stepwise(&per_step));
    assert_eq!(a, b);
}

#[test]
fn stepwise_uses_entry_i_for_step_i() {
    let p = ivp(0.0, 0.0, 1.0, 3);
    let rates = [ConstantRate(1.0), ConstantRate(2.0), ConstantRate(4.0), ConstantRate(100.0)];
    let y = euler(&p, Rhs::Stepwise(&rates)).unwrap();
    assert_eq!(y, vec![0.0, 1.0, 3.0, 7.0]);
}

fn final_error<M>(method: M, n: usize) -> f64
where
    M: Fn(&IVP) -> Vec<f64>,
{
    let p = ivp(1.0, 0.0, 1.0 / n as f64, n);
    let y = method(&p);
    (y[n] - (-p.x(n)).exp()).abs()
}

fn assert_order<M>(method: M, ratio_low: f64, ratio_high: f64)
where
    M: Fn(&IVP) -> Vec<f64>,
{
    let errors: Vec<f64> = [20, 40, 80, 160].iter().map(|&n| final_error(&method, n)).collect();
    for w in errors.windows(2) {
        let ratio = w[0] / w[1];
        assert!(
            ratio > ratio_low && ratio < ratio_high,
            "convergence ratio {} outside ({}, {})",
            ratio,
            ratio_low,
            ratio_high
        );
    }
}

#[test]
fn euler_first_order_convergence() {
    assert_order(|p| euler(p, Rhs::Continuous(&decay)).unwrap(), 1.8, 2.2);
}

#[test]
fn second_order_convergence() {
    assert_order(|p| improved_euler(p, Rhs::Continuous(&decay)).unwrap(), 3.5, 4.5);
    assert_order(|p| modified_euler(p, Rhs::Continuous(&decay)).unwrap(), 3.5, 4.5);
    assert_order(|p| rk2(p, Rhs::Continuous(&decay), RK2Tableau::ONE_THIRD).unwrap(), 3.5, 4.5);
    assert_order(|p| rk2(p, Rhs::Continuous(&decay), RK2Tableau::ONE_QUARTER).unwrap(), 3.5, 4.5);
}

#[test]
fn cubic_problem_tracks_exact_solution() {
    let p = ivp(1.0, 0.0, 0.1, 10);
    for result in fixed_step_all(&p, Rhs::Continuous(&cubic)) {
        let y = result.unwrap();
        assert_abs_diff_eq!(y[10], cubic_exact(1.0), epsilon = 5e-2);
    }
}
