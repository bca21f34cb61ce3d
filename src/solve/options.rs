//! Method selection for solve

use crate::{Float, methods::rk::RK2Tableau, methods::settings::AdaptiveSettings};

/// Integration method selection.
#[derive(Clone, Debug, PartialEq)]
pub enum Method {
    /// Forward Euler, first order
    Euler,
    /// Improved Euler (Heun), second order
    ImprovedEuler,
    /// Modified Euler (midpoint), second order
    ModifiedEuler,
    /// Generic second-order Runge-Kutta RK(α)
    RK2 { alpha: Float },
    /// Dormand-Prince 5(4) on the fixed grid
    DormandPrince,
    /// Dormand-Prince 5(4) with adaptive step size; the grid step is only
    /// the initial step hint.
    DormandPrinceAdaptive(AdaptiveSettings),
}

impl Method {
    /// The six fixed-step methods compared on a common grid: Euler, improved
    /// Euler, modified Euler, RK(1/3), RK(1/4) and fixed-step Dormand-Prince.
    pub fn standard_set() -> Vec<Method> {
        vec![
            Method::Euler,
            Method::ImprovedEuler,
            Method::ModifiedEuler,
            Method::RK2 { alpha: RK2Tableau::ONE_THIRD },
            Method::RK2 { alpha: RK2Tableau::ONE_QUARTER },
            Method::DormandPrince,
        ]
    }

    /// Whether the method produces one value per grid point.
    pub fn is_fixed_step(&self) -> bool {
        !matches!(self, Method::DormandPrinceAdaptive(_))
    }

    /// Human readable name, used as the series label.
    pub fn label(&self) -> String {
        match self {
            Method::Euler => "Euler".to_string(),
            Method::ImprovedEuler => "Improved Euler".to_string(),
            Method::ModifiedEuler => "Modified Euler".to_string(),
            Method::RK2 { alpha } => format!("RK2 (alpha = {})", fraction(*alpha)),
            Method::DormandPrince => "Dormand-Prince (fixed step)".to_string(),
            Method::DormandPrinceAdaptive(_) => "Dormand-Prince (adaptive step)".to_string(),
        }
    }
}

/// Print `alpha` as `1/k` (or `-1/k`) when it is the reciprocal of a small
/// integer.
fn fraction(alpha: Float) -> String {
    let sign = if alpha < 0.0 { "-" } else { "" };
    let inv = 1.0 / alpha.abs();
    let k = inv.round();
    if (1.0..=100.0).contains(&k) && (inv - k).abs() < 1e-9 {
        if k == 1.0 {
            return format!("{}1", sign);
        }
        return format!("{}1/{}", sign, k);
    }
    format!("{}", alpha)
}
