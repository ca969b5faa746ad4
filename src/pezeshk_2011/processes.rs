//! Pezeshk et al. (2011) core process functions.
//!
//! Pure per-period scalar functions implementing the published regression
//! terms. All inputs and outputs are f64; the model loops these over the
//! 23 coefficient rows.

use super::constants::{FAR_DIST, HINGE_MAG, NEAR_DIST, STD_SLOPE_ABOVE_HINGE};
use super::Coefficients;

/// Depth-adjusted effective distance: `sqrt(dist_rup² + c11²)` [km].
///
/// `c11` acts as a per-period pseudo-depth term.
pub fn effective_distance(dist_rup: f64, c11: f64) -> f64 {
    (dist_rup * dist_rup + c11 * c11).sqrt()
}

/// Near-field log-distance term, saturating beyond 70 km.
pub fn near_field_spreading(dist: f64) -> f64 {
    dist.log10().min(NEAR_DIST.log10())
}

/// Mid-field log-distance term, active only between 70 and 140 km.
///
/// Exactly zero at and below 70 km; saturates at 140 km.
pub fn mid_field_spreading(dist: f64) -> f64 {
    (dist / NEAR_DIST)
        .log10()
        .min((FAR_DIST / NEAR_DIST).log10())
        .max(0.0)
}

/// Far-field log-distance term, active only beyond 140 km.
pub fn far_field_spreading(dist: f64) -> f64 {
    (dist / FAR_DIST).log10().max(0.0)
}

/// Base-10 log of the mean response for one coefficient row.
///
/// Two magnitude-scaling terms, the trilinear distance model, and a
/// linear anelastic-attenuation term. `dist` is the effective distance
/// from [`effective_distance`].
pub fn log10_resp(mag: f64, dist: f64, c: &Coefficients) -> f64 {
    c.c1 + c.c2 * mag
        + c.c3 * mag * mag
        + (c.c4 + c.c5 * mag) * near_field_spreading(dist)
        + (c.c6 + c.c7 * mag) * mid_field_spreading(dist)
        + (c.c8 + c.c9 * mag) * far_field_spreading(dist)
        + c.c10 * dist
}

/// Magnitude-dependent mean of the log standard deviation for one row.
///
/// Sharp branch at magnitude 7: at and below the hinge the per-period
/// `c12`/`c13` pair applies; above it the fixed published slope with
/// `c14`. The discontinuity is part of the published model.
pub fn ln_std_mean(mag: f64, c: &Coefficients) -> f64 {
    if mag <= HINGE_MAG {
        c.c12 * mag + c.c13
    } else {
        STD_SLOPE_ABOVE_HINGE * mag + c.c14
    }
}

/// Total log standard deviation: mean term combined with the regional
/// uncertainty in quadrature.
pub fn ln_std(mag: f64, c: &Coefficients) -> f64 {
    let mean = ln_std_mean(mag, c);
    (mean * mean + c.sigma_reg * c.sigma_reg).sqrt()
}
