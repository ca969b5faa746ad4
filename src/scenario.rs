//! Earthquake scenario inputs shared by all models.

/// Scalar inputs describing an earthquake scenario.
///
/// Fields are optional until a model validates them: each model declares
/// which parameters it requires and what ranges it accepts, so a
/// `Scenario` carries raw values and validation happens at model
/// construction.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Scenario {
    /// Moment magnitude of the event.
    pub mag: Option<f64>,
    /// Closest distance to the rupture plane [km].
    pub dist_rup: Option<f64>,
}

impl Scenario {
    /// Create an empty scenario.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the moment magnitude.
    pub fn with_mag(mut self, mag: f64) -> Self {
        self.mag = Some(mag);
        self
    }

    /// Set the rupture distance [km].
    pub fn with_dist_rup(mut self, dist_rup: f64) -> Self {
        self.dist_rup = Some(dist_rup);
        self
    }
}
