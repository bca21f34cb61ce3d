//! Adaptive-step Dormand-Prince 5(4)
//!
//! Embedded error estimation with the `B5 - B4` weights, Lund-stabilized
//! (PI) step-size control, and local extrapolation: accepted steps advance
//! with the 5th-order solution.

use log::{debug, trace, warn};

use crate::{
    Error, Float,
    core::{ivp::IVP, ode::ODE, trace::AdaptiveTrace},
    methods::{
        dp::tableau::{B5, E, combine, stages},
        settings::AdaptiveSettings,
    },
};

/// Dormand-Prince 5(4) with adaptive step size over `[x0, x0 + h * n]`.
///
/// `ivp.h()` only seeds the first step; the controller picks every later
/// step from the embedded error estimate. The returned trace holds the
/// initial condition followed by every accepted step, all rounded; its last
/// abscissa is the interval end. With `n = 0` the trace is the single point
/// `(x0, y0)`.
///
/// Rejected steps are retried internally and never show up in the result.
/// The call fails as a whole when the controller cannot finish the interval.
pub fn dormand_prince_adaptive<F>(
    ivp: &IVP,
    f: &F,
    settings: &AdaptiveSettings,
) -> Result<AdaptiveTrace, Error>
where
    F: ODE,
{
    settings.validate()?;
    debug!(
        "dormand_prince_adaptive: [{}, {}], h0 = {}, rtol = {}, atol = {}",
        ivp.x0(),
        ivp.x_end(),
        ivp.h(),
        settings.rtol,
        settings.atol
    );

    let mut out = AdaptiveTrace::new(ivp.x0(), ivp.y0());
    integrate(f, ivp.x0(), ivp.x_end(), ivp.y0(), ivp.h(), settings, |x, y| {
        out.push(x, y)
    })?;
    Ok(out)
}

/// Integrate `f` from `(x, y)` to `xend`, calling `solout(x, y)` after every
/// accepted step. Returns the state at `xend` and the step size the
/// controller proposes next.
///
/// Settings are assumed to be validated.
pub(crate) fn integrate<F, S>(
    f: &F,
    mut x: Float,
    xend: Float,
    mut y: Float,
    h0: Float,
    settings: &AdaptiveSettings,
    mut solout: S,
) -> Result<(Float, Float), Error>
where
    F: ODE,
    S: FnMut(Float, Float),
{
    if x == xend {
        return Ok((y, h0));
    }

    let AdaptiveSettings {
        rtol,
        atol,
        uround,
        safety_factor,
        scale_min,
        scale_max,
        beta,
        hmax,
        nmax,
    } = *settings;

    let posneg = (xend - x).signum();
    let hmax = hmax.unwrap_or(xend - x).abs();
    let beta = beta.max(0.0);
    let expo1 = 0.2 - beta * 0.75;
    let facc1 = 1.0 / scale_min;
    let facc2 = 1.0 / scale_max;

    let mut h = h0.abs().min(hmax) * posneg;
    let mut facold: Float = 1e-4;
    let mut last = false;
    let mut reject = false;
    let mut nstep = 0;
    let mut naccpt = 0;
    let mut nrejct = 0;

    loop {
        // Check for maximum number of steps
        if nstep >= nmax {
            warn!("adaptive integration stopped at x = {}: nmax = {} reached", x, nmax);
            return Err(Error::MaxStepsExceeded(nmax));
        }

        // Check for underflow due to machine rounding
        if 0.1 * h.abs() <= x.abs() * uround || h == 0.0 {
            warn!("adaptive integration stopped at x = {}: step size {} too small", x, h);
            return Err(Error::StepSizeTooSmall { x, h });
        }

        // Adjust last step to land on xend
        if (x + 1.01 * h - xend) * posneg > 0.0 {
            h = xend - x;
            last = true;
        }

        nstep += 1;

        let k = stages(f, x, y, h)?;
        let y1 = y + h * combine(&B5, &k);
        let est = h * combine(&E, &k);

        // Error estimation
        let sk = atol + rtol * y.abs().max(y1.abs());
        let err = (est / sk).abs();

        // Computation of hnew
        let fac11 = err.powf(expo1);
        // Lund-Stabilization
        let fac = fac11 / facold.powf(beta);
        // We require facc2 <= hnew/h <= facc1
        let fac = facc2.max(facc1.min(fac / safety_factor));
        let mut hnew = h / fac;

        if err <= 1.0 {
            // Step accepted
            facold = err.max(1.0e-4);
            naccpt += 1;
            trace!("accepted x = {}, h = {}, err = {}", x, h, err);

            y = y1;
            x = if last { xend } else { x + h };
            solout(x, y);

            // Normal exit
            if last {
                debug!(
                    "adaptive integration finished: {} steps, {} accepted, {} rejected",
                    nstep, naccpt, nrejct
                );
                return Ok((y, hnew));
            }

            // Check for step size limits
            if hnew.abs() > hmax {
                hnew = posneg * hmax;
            }

            // Prevent oscillations due to previous rejected step
            if reject {
                hnew = posneg * hnew.abs().min(h.abs());
                reject = false;
            }
        } else {
            // Step rejected
            trace!("rejected x = {}, h = {}, err = {}", x, h, err);
            hnew = h / facc1.min(fac11 / safety_factor);
            reject = true;
            nrejct += 1;
            last = false;
        }
        h = hnew;
    }
}
