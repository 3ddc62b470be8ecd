//! Face fluxes for compressible flow.

mod euler;

pub use euler::{euler_face_flux, euler_flux_jacobian};
