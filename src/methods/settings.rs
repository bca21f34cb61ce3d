//! Settings for the adaptive integrator

use bon::Builder;

use crate::{Error, Float};

#[derive(Builder, Clone, Debug, PartialEq)]
/// Settings for the adaptive Dormand-Prince integrator.
///
/// Every field has a default suitable for smooth problems; the tolerances
/// default to the values SciPy's `RK45` uses.
pub struct AdaptiveSettings {
    /// Relative tolerance for error estimation.
    #[builder(default = 1e-3)]
    pub rtol: Float,
    /// Absolute tolerance for error estimation.
    #[builder(default = 1e-6)]
    pub atol: Float,
    /// The rounding unit, typically machine epsilon
    #[builder(default = 2.3e-16)]
    pub uround: Float,
    /// safety factor in step-size prediction.
    #[builder(default = 0.9)]
    pub safety_factor: Float,
    /// Parameter for step size selection where scale_min <= hnew/hold <= scale_max
    #[builder(default = 0.2)]
    pub scale_min: Float,
    /// Parameter for step size selection where scale_min <= hnew/hold <= scale_max
    #[builder(default = 10.0)]
    pub scale_max: Float,
    /// Beta factor for stabilized step size control. Positive values of Beta
    /// ( <= 0.04 ) make the step size control more stable. Negative values
    /// are treated as zero.
    #[builder(default = 0.04)]
    pub beta: Float,
    /// Maximal step size. Defaults to the length of the interval.
    pub hmax: Option<Float>,
    /// Maximum number of allowed steps.
    #[builder(default = 100_000)]
    pub nmax: usize,
}

impl Default for AdaptiveSettings {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl AdaptiveSettings {
    /// Tight tolerances used to build reference solutions.
    pub fn reference() -> Self {
        Self::builder().rtol(1e-12).atol(1e-12).build()
    }

    /// Check the settings before any step is taken.
    pub fn validate(&self) -> Result<(), Error> {
        for tol in [self.rtol, self.atol] {
            if !(tol > 0.0 && tol.is_finite()) {
                return Err(Error::InvalidTolerance(tol));
            }
        }
        if self.uround <= 1e-35 || self.uround >= 1.0 || self.uround.is_nan() {
            return Err(Error::URoundOutOfRange(self.uround));
        }
        let min_ok = self.scale_min > 0.0 && self.scale_min <= 1.0;
        let max_ok = self.scale_max >= 1.0 && self.scale_max.is_finite();
        if !(min_ok && max_ok) {
            return Err(Error::ScaleOutOfRange {
                min: self.scale_min,
                max: self.scale_max,
            });
        }
        if self.safety_factor >= 1.0 || self.safety_factor <= 1e-4 {
            return Err(Error::SafetyFactorOutOfRange(self.safety_factor));
        }
        if self.beta > 0.2 {
            return Err(Error::BetaTooLarge(self.beta));
        }
        if self.nmax == 0 {
            return Err(Error::NMaxMustBePositive(self.nmax));
        }
        Ok(())
    }
}
