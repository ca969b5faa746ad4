//! rsgmm — empirical ground-motion prediction equations in Rust.
//!
//! Each model is a closed-form regression of earthquake shaking intensity
//! (peak ground acceleration and spectral accelerations) against moment
//! magnitude, source-to-site distance, and site parameters, with
//! per-spectral-period coefficients taken from the published reference
//! tables bundled under `data/`.
//!
//! Models validate their scenario inputs at construction, evaluate eagerly,
//! and expose the cached natural-log means and standard deviations through
//! the [`GroundMotionModel`] trait.

pub mod coeffs;
pub mod error;
pub mod model;
pub mod pezeshk_2011;
pub mod scenario;

pub use error::ModelError;
pub use model::{GroundMotionModel, NumericParameter};
pub use pezeshk_2011::PezeshkZandiehTavakoli2011;
pub use scenario::Scenario;
