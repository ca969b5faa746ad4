//! Pezeshk, Zandieh, and Tavakoli (2011) ground-motion model.
//!
//! Hybrid empirical model developed for Eastern North America with a
//! reference shear-wave velocity of 2000 m/s. Coefficients are the
//! published per-period regression table bundled under `data/`.

pub mod constants;
pub mod processes;

use std::sync::OnceLock;

use serde::Deserialize;

use crate::coeffs;
use crate::error::{ModelError, ModelResult};
use crate::model::GroundMotionModel;
use crate::scenario::Scenario;

const DATA_CSV: &str = include_str!("../../data/pezeshk_zandieh_tavakoli_2011.csv");

/// One row of the published coefficient table.
///
/// Index 0 is peak ground acceleration (period 0); the remaining rows are
/// spectral accelerations at ascending periods. `c11` doubles as the
/// pseudo-depth term of the effective-distance metric.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Coefficients {
    pub period: f64,
    pub c1: f64,
    pub c2: f64,
    pub c3: f64,
    pub c4: f64,
    pub c5: f64,
    pub c6: f64,
    pub c7: f64,
    pub c8: f64,
    pub c9: f64,
    pub c10: f64,
    pub c11: f64,
    pub c12: f64,
    pub c13: f64,
    pub c14: f64,
    pub sigma_reg: f64,
}

impl Coefficients {
    fn fields(&self) -> [f64; 16] {
        [
            self.period,
            self.c1,
            self.c2,
            self.c3,
            self.c4,
            self.c5,
            self.c6,
            self.c7,
            self.c8,
            self.c9,
            self.c10,
            self.c11,
            self.c12,
            self.c13,
            self.c14,
            self.sigma_reg,
        ]
    }
}

/// The coefficient table, loaded once and shared across instances.
///
/// Fails with `DataLoad` if the embedded CSV is malformed, has the wrong
/// row count, holds non-finite values, or is out of period order.
pub fn coefficients() -> ModelResult<&'static [Coefficients]> {
    static TABLE: OnceLock<ModelResult<Vec<Coefficients>>> = OnceLock::new();
    TABLE
        .get_or_init(load_table)
        .as_ref()
        .map(|rows| rows.as_slice())
        .map_err(|e| e.clone())
}

fn load_table() -> ModelResult<Vec<Coefficients>> {
    let rows: Vec<Coefficients> = coeffs::load_csv(DATA_CSV)?;
    coeffs::check_row_count(PezeshkZandiehTavakoli2011::NAME, &rows, constants::N_PERIODS)?;
    for row in &rows {
        coeffs::check_finite(PezeshkZandiehTavakoli2011::NAME, row.period, &row.fields())?;
    }
    if rows[0].period != 0.0 {
        return Err(ModelError::data_load("first row must be PGA (period 0)"));
    }
    if !rows[1..].windows(2).all(|w| w[0].period < w[1].period) {
        return Err(ModelError::data_load(
            "spectral periods must be strictly ascending",
        ));
    }
    Ok(rows)
}

/// Pezeshk et al. (2011) model instance for one scenario.
///
/// Construction validates the scenario against the declared bounds and
/// evaluates both output sequences eagerly; the instance is immutable
/// afterwards and every accessor is a cached read.
#[derive(Debug, Clone)]
pub struct PezeshkZandiehTavakoli2011 {
    mag: f64,
    dist_rup: f64,
    periods: Vec<f64>,
    ln_resp: Vec<f64>,
    ln_std: Vec<f64>,
}

impl PezeshkZandiehTavakoli2011 {
    /// Reference shear-wave velocity of the model [m/sec].
    pub const V_REF: f64 = constants::V_REF;

    /// Build the model for a scenario.
    ///
    /// Requires `mag` in [5, 8] and `dist_rup` in [0, 1000] km; values
    /// outside the bounds are rejected, never clamped.
    pub fn new(scenario: &Scenario) -> ModelResult<Self> {
        let mag = constants::MAG.check_required(scenario.mag)?;
        let dist_rup = constants::DIST_RUP.check_required(scenario.dist_rup)?;
        let coeff = coefficients()?;

        Ok(Self {
            mag,
            dist_rup,
            periods: coeff.iter().map(|c| c.period).collect(),
            ln_resp: calc_ln_resp(mag, dist_rup, coeff),
            ln_std: calc_ln_std(mag, coeff),
        })
    }

    /// Moment magnitude the instance was built with.
    pub fn mag(&self) -> f64 {
        self.mag
    }

    /// Rupture distance the instance was built with [km].
    pub fn dist_rup(&self) -> f64 {
        self.dist_rup
    }
}

/// Natural log of the mean response, one entry per coefficient row.
fn calc_ln_resp(mag: f64, dist_rup: f64, coeff: &[Coefficients]) -> Vec<f64> {
    coeff
        .iter()
        .map(|c| {
            let dist = processes::effective_distance(dist_rup, c.c11);
            let log10_resp = processes::log10_resp(mag, dist, c);
            // power-then-log, matching the reference numerics
            10f64.powf(log10_resp).ln()
        })
        .collect()
}

/// Natural log of the standard deviation, one entry per coefficient row.
fn calc_ln_std(mag: f64, coeff: &[Coefficients]) -> Vec<f64> {
    coeff.iter().map(|c| processes::ln_std(mag, c)).collect()
}

impl GroundMotionModel for PezeshkZandiehTavakoli2011 {
    const NAME: &'static str = "Pezeshk et al. (2011)";
    const ABBREV: &'static str = "Pea11";

    fn periods(&self) -> &[f64] {
        &self.periods
    }

    fn ln_resp(&self) -> &[f64] {
        &self.ln_resp
    }

    fn ln_std(&self) -> &[f64] {
        &self.ln_std
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(mag: f64, dist_rup: f64) -> PezeshkZandiehTavakoli2011 {
        PezeshkZandiehTavakoli2011::new(&Scenario::new().with_mag(mag).with_dist_rup(dist_rup))
            .unwrap()
    }

    #[test]
    fn table_loads_with_23_ordered_rows() {
        let coeff = coefficients().unwrap();
        assert_eq!(coeff.len(), constants::N_PERIODS);
        assert_eq!(coeff[0].period, 0.0);
        assert_eq!(coeff[1].period, 0.01);
        assert_eq!(coeff[22].period, 10.0);
        assert!(coeff[1..].windows(2).all(|w| w[0].period < w[1].period));
    }

    #[test]
    fn model_identity() {
        assert_eq!(PezeshkZandiehTavakoli2011::NAME, "Pezeshk et al. (2011)");
        assert_eq!(PezeshkZandiehTavakoli2011::ABBREV, "Pea11");
        assert_eq!(PezeshkZandiehTavakoli2011::V_REF, 2000.0);
    }

    #[test]
    fn outputs_align_with_table_periods() {
        let m = model(6.0, 20.0);
        let coeff = coefficients().unwrap();
        assert_eq!(m.periods().len(), 23);
        assert_eq!(m.ln_resp().len(), 23);
        assert_eq!(m.ln_std().len(), 23);
        for (p, c) in m.periods().iter().zip(coeff) {
            assert_eq!(*p, c.period);
        }
    }

    #[test]
    fn magnitude_below_range_is_rejected() {
        let err = PezeshkZandiehTavakoli2011::new(
            &Scenario::new().with_mag(4.9).with_dist_rup(20.0),
        )
        .unwrap_err();
        assert_eq!(
            err,
            ModelError::ParameterOutOfRange {
                name: "mag",
                value: 4.9,
                min: 5.0,
                max: 8.0,
            }
        );
    }

    #[test]
    fn magnitude_above_range_is_rejected() {
        assert!(
            PezeshkZandiehTavakoli2011::new(&Scenario::new().with_mag(8.1).with_dist_rup(20.0))
                .is_err()
        );
    }

    #[test]
    fn distance_bounds_are_inclusive_at_1000() {
        assert!(
            PezeshkZandiehTavakoli2011::new(&Scenario::new().with_mag(6.0).with_dist_rup(1000.0))
                .is_ok()
        );
        let err = PezeshkZandiehTavakoli2011::new(
            &Scenario::new().with_mag(6.0).with_dist_rup(1000.1),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ModelError::ParameterOutOfRange {
                name: "dist_rup",
                ..
            }
        ));
    }

    #[test]
    fn negative_distance_is_rejected() {
        assert!(
            PezeshkZandiehTavakoli2011::new(&Scenario::new().with_mag(6.0).with_dist_rup(-1.0))
                .is_err()
        );
    }

    #[test]
    fn missing_inputs_are_rejected() {
        assert_eq!(
            PezeshkZandiehTavakoli2011::new(&Scenario::new().with_dist_rup(20.0)).unwrap_err(),
            ModelError::MissingParameter { name: "mag" }
        );
        assert_eq!(
            PezeshkZandiehTavakoli2011::new(&Scenario::new().with_mag(6.0)).unwrap_err(),
            ModelError::MissingParameter { name: "dist_rup" }
        );
    }

    #[test]
    fn scenario_values_are_kept() {
        let m = model(6.5, 120.0);
        assert_eq!(m.mag(), 6.5);
        assert_eq!(m.dist_rup(), 120.0);
    }

    #[test]
    fn repeated_access_returns_same_slice() {
        let m = model(6.0, 20.0);
        let a = m.ln_resp().as_ptr();
        let b = m.ln_resp().as_ptr();
        assert_eq!(a, b);
    }

    #[test]
    fn response_decreases_with_distance() {
        let near = model(6.0, 10.0);
        let far = model(6.0, 200.0);
        for (n, f) in near.ln_resp().iter().zip(far.ln_resp()) {
            assert!(n > f);
        }
    }

    #[test]
    fn response_increases_with_magnitude() {
        let small = model(5.5, 20.0);
        let large = model(7.5, 20.0);
        for (s, l) in small.ln_resp().iter().zip(large.ln_resp()) {
            assert!(s < l);
        }
    }
}
