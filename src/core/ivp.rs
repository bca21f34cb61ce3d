//! Initial value problem data shared by every integrator.

use bon::bon;

use crate::{Error, Float, core::round::round15};

/// Initial state and uniform grid of a scalar initial value problem.
///
/// The grid is `x_i = x0 + i * h` for `i` in `0..=n`. A negative `h`
/// integrates backward.
///
/// ```rust
/// use onestep::core::ivp::IVP;
///
/// let ivp = IVP::builder().y0(4.0).x0(2.0).h(0.1).n(10).build().unwrap();
/// assert_eq!(ivp.x_end(), 3.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IVP {
    y0: Float,
    x0: Float,
    h: Float,
    n: usize,
}

#[bon]
impl IVP {
    /// Validate and build the problem. `h` must be finite and nonzero.
    #[builder]
    pub fn new(y0: Float, #[builder(default = 0.0)] x0: Float, h: Float, n: usize) -> Result<Self, Error> {
        if h == 0.0 || !h.is_finite() {
            return Err(Error::InvalidStepSize(h));
        }
        Ok(Self { y0, x0, h, n })
    }
}

impl IVP {
    pub fn y0(&self) -> Float {
        self.y0
    }

    pub fn x0(&self) -> Float {
        self.x0
    }

    pub fn h(&self) -> Float {
        self.h
    }

    /// Number of steps.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Abscissa of grid point `i`.
    #[inline]
    pub fn x(&self, i: usize) -> Float {
        self.x0 + i as Float * self.h
    }

    /// End of the integration interval, `x0 + h * n`.
    pub fn x_end(&self) -> Float {
        self.x0 + self.h * self.n as Float
    }

    /// The rounded grid `x_0 ..= x_n`.
    pub fn grid(&self) -> Vec<Float> {
        (0..=self.n).map(|i| round15(self.x(i))).collect()
    }
}
