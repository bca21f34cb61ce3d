//! Reservoir volume balance driven by piecewise-constant flows.
//!
//! ```text
//! dV/dt = Q_in(t) - Q_out(t) - leak(t) + noise_i
//! ```
//!
//! Flows, leak and noise are sampled once per grid time `t_i`, so each step
//! has its own constant right-hand side. This is the use case for
//! [`Rhs::Stepwise`].
//!
//! The leak stays at its nominal value until `leak_delay` and then relaxes
//! towards `leak_limit`:
//!
//! ```text
//! theta   = 0                   if t <= leak_delay
//!         = leak_delay - t      otherwise
//! leak(t) = leak_limit - (leak_limit - leak_nominal) * exp(leak_tau * theta)
//! ```

use bon::Builder;
use log::debug;
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    Error, Float,
    core::{
        ivp::IVP,
        ode::{EvalError, ODE, Rhs},
        round::round15,
    },
    solve::Series,
};

/// Parameters of the reservoir scenario.
#[derive(Builder, Clone, Debug, PartialEq)]
pub struct ReservoirConfig {
    /// Initial volume.
    #[builder(default = 500.0)]
    pub v0: Float,
    /// Initial time.
    #[builder(default = 0.0)]
    pub t0: Float,
    /// Number of time steps.
    #[builder(default = 100)]
    pub steps: usize,
    /// Time step.
    #[builder(default = 1.0)]
    pub h: Float,
    #[builder(default = 10.0)]
    pub leak_limit: Float,
    #[builder(default = 0.0)]
    pub leak_nominal: Float,
    #[builder(default = 50.0)]
    pub leak_delay: Float,
    #[builder(default = 0.05)]
    pub leak_tau: Float,
    /// Noise is drawn uniformly from `[-noise_amplitude, noise_amplitude]`.
    #[builder(default = 3.0)]
    pub noise_amplitude: Float,
    /// Seed for the noise generator; `None` seeds from the operating system.
    pub seed: Option<u64>,
}

impl Default for ReservoirConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// A right-hand side that ignores `(x, y)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConstantRate(pub Float);

impl ODE for ConstantRate {
    fn ode(&self, _x: Float, _y: Float) -> Result<Float, EvalError> {
        Ok(self.0)
    }
}

/// Inflow schedule.
pub fn inflow(t: Float) -> Float {
    if t < 20.0 {
        110.0
    } else if t < 40.0 {
        100.0
    } else if t < 80.0 {
        95.0
    } else {
        100.0
    }
}

/// Outflow schedule.
pub fn outflow(t: Float) -> Float {
    if t < 30.0 {
        100.0
    } else if t < 40.0 {
        95.0
    } else if t < 70.0 {
        105.0
    } else {
        85.0
    }
}

impl ReservoirConfig {
    /// Leak rate at time `t`.
    pub fn leak(&self, t: Float) -> Float {
        let theta = if self.leak_delay - t >= 0.0 {
            0.0
        } else {
            self.leak_delay - t
        };
        self.leak_limit - (self.leak_limit - self.leak_nominal) * (self.leak_tau * theta).exp()
    }
}

/// Sampled scenario: the problem, one rate per grid time and the flow
/// components the rates were built from.
#[derive(Clone, Debug)]
pub struct Reservoir {
    pub ivp: IVP,
    /// `rates[i]` drives step `i`; there are `steps + 1` entries.
    pub rates: Vec<ConstantRate>,
    pub time: Vec<Float>,
    pub inflow: Vec<Float>,
    pub outflow: Vec<Float>,
    pub leak: Vec<Float>,
    pub noise: Vec<Float>,
}

impl Reservoir {
    /// Sample flows, leak and noise on the grid described by `config`.
    pub fn new(config: &ReservoirConfig) -> Result<Self, Error> {
        let a = config.noise_amplitude;
        if !(a >= 0.0 && a.is_finite()) {
            return Err(Error::InvalidParameter {
                name: "noise_amplitude",
                value: a,
            });
        }
        let ivp = IVP::builder()
            .y0(config.v0)
            .x0(config.t0)
            .h(config.h)
            .n(config.steps)
            .build()?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        debug!("reservoir: {} steps, seed = {:?}", config.steps, config.seed);

        let len = config.steps + 1;
        let mut reservoir = Self {
            ivp,
            rates: Vec::with_capacity(len),
            time: Vec::with_capacity(len),
            inflow: Vec::with_capacity(len),
            outflow: Vec::with_capacity(len),
            leak: Vec::with_capacity(len),
            noise: Vec::with_capacity(len),
        };

        for i in 0..len {
            let t = ivp.x(i);
            let q_in = inflow(t);
            let q_out = outflow(t);
            let leak = config.leak(t);
            let noise = if a > 0.0 { round15(rng.random_range(-a..=a)) } else { 0.0 };

            reservoir.rates.push(ConstantRate(q_in - q_out - leak + noise));
            reservoir.time.push(round15(t));
            reservoir.inflow.push(q_in);
            reservoir.outflow.push(q_out);
            reservoir.leak.push(leak);
            reservoir.noise.push(noise);
        }

        Ok(reservoir)
    }

    /// Per-step right-hand side.
    pub fn rhs(&self) -> Rhs<'_, ConstantRate> {
        Rhs::Stepwise(&self.rates)
    }

    /// Net rate `dV/dt` per grid time.
    pub fn net_rate(&self) -> Vec<Float> {
        self.rates.iter().map(|r| r.0).collect()
    }

    /// Volume change `V_i - V0` of a computed volume sequence.
    pub fn volume_change(&self, volume: &[Float]) -> Vec<Float> {
        volume.iter().map(|v| v - self.ivp.y0()).collect()
    }

    /// Flow components as labelled series.
    pub fn series(&self) -> Vec<Series> {
        vec![
            Series::new("Inflow", self.time.clone(), self.inflow.clone()),
            Series::new("Outflow", self.time.clone(), self.outflow.clone()),
            Series::new("Net rate", self.time.clone(), self.net_rate()),
            Series::new("Leak", self.time.clone(), self.leak.clone()),
            Series::new("Noise", self.time.clone(), self.noise.clone()),
        ]
    }
}
