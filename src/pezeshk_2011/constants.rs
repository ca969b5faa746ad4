//! Fixed values of the Pezeshk, Zandieh & Tavakoli (2011) model.

use crate::model::NumericParameter;

/// Reference shear-wave velocity [m/sec].
pub const V_REF: f64 = 2000.0;

/// Number of coefficient rows: PGA plus 22 spectral periods.
pub const N_PERIODS: usize = 23;

/// Distance beyond which near-field geometric spreading saturates [km].
pub const NEAR_DIST: f64 = 70.0;

/// Distance beyond which mid-field geometric spreading saturates [km].
pub const FAR_DIST: f64 = 140.0;

/// Magnitude hinge of the standard-deviation model.
pub const HINGE_MAG: f64 = 7.0;

/// Slope of the standard-deviation mean above the hinge.
///
/// A single published literal shared across all periods; the model is
/// intentionally discontinuous at the hinge.
pub const STD_SLOPE_ABOVE_HINGE: f64 = -6.95e-3;

// -- Scenario parameter bounds --

/// Moment magnitude, valid over [5, 8].
pub const MAG: NumericParameter = NumericParameter::required("mag", Some(5.0), Some(8.0));

/// Rupture distance [km], valid over [0, 1000].
pub const DIST_RUP: NumericParameter =
    NumericParameter::required("dist_rup", Some(0.0), Some(1000.0));
