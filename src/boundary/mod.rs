//! Ghost-cell boundary conditions and boundary-flux evaluators.
//!
//! Each boundary-condition kind comes as a pair:
//! - a [`GhostCellBoundary`] that maps the interior conserved state to the
//!   exterior ("ghost") state enforcing the boundary physics, and
//! - a [`BoundaryFlux`] evaluator that resolves the ghost state, computes
//!   the Euler flux through the face, and its analytic 5x5 Jacobian with
//!   respect to the interior state.
//!
//! | Boundary condition | Target parameters | Ghost construction |
//! |--------------------|-------------------|--------------------|
//! | `StagnationInletBc` | stagnation pressure p0, temperature T0 | isentropic deceleration from (p0, T0); interior speed and direction preserved |
//! | `StaticPressureOutletBc` | static pressure p_out | density and momentum pass through; energy recomputed at p_out |
//!
//! The evaluators own their matching resolver, constructed once from the
//! same config; there is no dynamic lookup. All types are `Send + Sync`
//! pure functions of their call-time arguments, safe to share across
//! face-parallel sweeps (see `compute_boundary_fluxes_parallel` behind the
//! `parallel` feature).

mod stagnation_inlet;
mod static_pressure_outlet;
mod sweep;

pub use stagnation_inlet::{StagnationInletBc, StagnationInletConfig, StagnationInletFlux};
pub use static_pressure_outlet::{
    StaticPressureOutletBc, StaticPressureOutletConfig, StaticPressureOutletFlux,
};
#[cfg(feature = "parallel")]
pub use sweep::{compute_boundary_fluxes_parallel, compute_boundary_jacobians_parallel};
pub use sweep::{BoundaryFace, compute_boundary_fluxes, compute_boundary_jacobians};

use crate::error::BoundaryError;
use crate::types::{ConservedState, Matrix5, Vector3};

/// Resolves the exterior ("ghost") conserved state at a boundary face.
///
/// Implementations are pure functions of the arguments and the immutable
/// boundary targets fixed at construction; the ghost state is recomputed on
/// every call, never cached.
pub trait GhostCellBoundary: Send + Sync {
    /// Compute the ghost state for a boundary face.
    ///
    /// # Arguments
    /// * `side` - face index within the element (host-framework numbering)
    /// * `elem` - element identifier
    /// * `interior` - interior conserved state, `rho > 0` required
    /// * `dwave` - outward area-weighted face normal
    fn ghost_cell_value(
        &self,
        side: usize,
        elem: usize,
        interior: &ConservedState,
        dwave: &Vector3,
    ) -> Result<ConservedState, BoundaryError>;

    /// Name of this boundary condition for debugging/logging.
    fn name(&self) -> &'static str;
}

/// Computes the numerical flux through a boundary face and its Jacobian
/// with respect to the interior conserved state.
///
/// The Jacobian is analytic (chain rule through the ghost-state resolution,
/// not finite differences): implicit Newton solves need it exact, and a
/// subtle inconsistency between `flux` and `jacobian` silently degrades
/// outer-iteration convergence.
pub trait BoundaryFlux: Send + Sync {
    /// Numerical flux through the face, per unit time.
    fn flux(
        &self,
        side: usize,
        elem: usize,
        interior: &ConservedState,
        dwave: &Vector3,
    ) -> Result<ConservedState, BoundaryError>;

    /// Jacobian dF/dU of [`BoundaryFlux::flux`] with respect to the
    /// interior conserved state.
    fn jacobian(
        &self,
        side: usize,
        elem: usize,
        interior: &ConservedState,
        dwave: &Vector3,
    ) -> Result<Matrix5, BoundaryError>;

    /// Name of this evaluator for debugging/logging.
    fn name(&self) -> &'static str;
}
