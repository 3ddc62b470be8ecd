//! # cnsfv-rs
//!
//! Cell-centered finite-volume (CNSFV) boundary machinery for the
//! compressible Euler / Navier-Stokes equations.
//!
//! This crate provides the boundary-face building blocks that a host
//! finite-volume or finite-element assembly loop plugs into:
//! - Conserved-state and wave-direction types
//! - A fluid-properties (equation of state) abstraction with an ideal-gas
//!   reference implementation
//! - Ghost-cell boundary conditions (stagnation inlet, static pressure
//!   outlet)
//! - Boundary-flux evaluators with exact analytic Jacobians for implicit
//!   (Newton) solves
//! - Serial and parallel boundary-face sweeps
//!
//! The host loop supplies, per boundary face, the interior conserved state
//! and the outward area-weighted face normal; this crate returns the
//! numerical flux through the face and its 5x5 Jacobian with respect to the
//! interior state. All evaluation paths are pure functions over their
//! arguments and the immutable per-instance boundary targets, so instances
//! can be shared across threads processing different faces.
//!
//! # Example
//!
//! ```
//! use cnsfv_rs::{
//!     BoundaryFlux, ConservedState, IdealGasFluidProperties,
//!     StaticPressureOutletConfig, StaticPressureOutletFlux, Vector3,
//! };
//!
//! let fluid = IdealGasFluidProperties::air();
//! let config = StaticPressureOutletConfig {
//!     static_pressure: 101_325.0,
//! };
//! let outlet = StaticPressureOutletFlux::new(config, fluid).unwrap();
//!
//! // Interior state: rho = 1.2 kg/m^3, u = 50 m/s, e = 2.1e5 J/kg
//! let interior = ConservedState::from_primitives(1.2, Vector3::new(50.0, 0.0, 0.0), 2.1e5);
//! let normal = Vector3::new(1.0, 0.0, 0.0);
//!
//! let flux = outlet.flux(0, 0, &interior, &normal).unwrap();
//! let jac = outlet.jacobian(0, 0, &interior, &normal).unwrap();
//! assert!(flux.rho > 0.0); // outflow carries mass out
//! assert_eq!(jac[(0, 1)], 1.0); // mass flux depends linearly on x-momentum
//! ```

pub mod boundary;
pub mod error;
pub mod fluid;
pub mod flux;
pub mod initial;
pub mod types;

pub use boundary::{
    BoundaryFace, BoundaryFlux, GhostCellBoundary, StagnationInletBc, StagnationInletConfig,
    StagnationInletFlux, StaticPressureOutletBc, StaticPressureOutletConfig,
    StaticPressureOutletFlux, compute_boundary_fluxes, compute_boundary_jacobians,
};
#[cfg(feature = "parallel")]
pub use boundary::{compute_boundary_fluxes_parallel, compute_boundary_jacobians_parallel};
pub use error::{BoundaryError, FluidPropertyError};
pub use fluid::{FluidProperties, IdealGasFluidProperties, RhoEDerivatives};
pub use flux::{euler_face_flux, euler_flux_jacobian};
pub use initial::UniformFlow;
pub use types::{ConservedState, Matrix5, Vector3};
