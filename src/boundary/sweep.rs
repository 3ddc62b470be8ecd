//! Serial and parallel sweeps over batches of boundary faces.
//!
//! The host assembly loop typically visits boundary faces one at a time,
//! but when it hands over a whole batch these helpers evaluate all fluxes
//! (or Jacobians) in one call. Evaluators are `Send + Sync` pure functions,
//! so the parallel variants (feature `parallel`) just fan the faces out
//! over rayon and report the first error.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::BoundaryError;
use crate::types::{ConservedState, Matrix5, Vector3};

use super::BoundaryFlux;

/// One boundary face as seen by a sweep: face-local data supplied by the
/// host mesh.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundaryFace {
    /// Face index within the element (host-framework numbering).
    pub side: usize,
    /// Element identifier.
    pub elem: usize,
    /// Interior conserved state at the face.
    pub interior: ConservedState,
    /// Outward area-weighted face normal.
    pub dwave: Vector3,
}

/// Evaluate the boundary flux on every face, in order.
pub fn compute_boundary_fluxes<B: BoundaryFlux>(
    evaluator: &B,
    faces: &[BoundaryFace],
) -> Result<Vec<ConservedState>, BoundaryError> {
    faces
        .iter()
        .map(|f| evaluator.flux(f.side, f.elem, &f.interior, &f.dwave))
        .collect()
}

/// Evaluate the boundary-flux Jacobian on every face, in order.
pub fn compute_boundary_jacobians<B: BoundaryFlux>(
    evaluator: &B,
    faces: &[BoundaryFace],
) -> Result<Vec<Matrix5>, BoundaryError> {
    faces
        .iter()
        .map(|f| evaluator.jacobian(f.side, f.elem, &f.interior, &f.dwave))
        .collect()
}

/// Parallel version of [`compute_boundary_fluxes`]. Results are in face
/// order and identical to the serial sweep.
#[cfg(feature = "parallel")]
pub fn compute_boundary_fluxes_parallel<B: BoundaryFlux>(
    evaluator: &B,
    faces: &[BoundaryFace],
) -> Result<Vec<ConservedState>, BoundaryError> {
    faces
        .par_iter()
        .map(|f| evaluator.flux(f.side, f.elem, &f.interior, &f.dwave))
        .collect()
}

/// Parallel version of [`compute_boundary_jacobians`].
#[cfg(feature = "parallel")]
pub fn compute_boundary_jacobians_parallel<B: BoundaryFlux>(
    evaluator: &B,
    faces: &[BoundaryFace],
) -> Result<Vec<Matrix5>, BoundaryError> {
    faces
        .par_iter()
        .map(|f| evaluator.jacobian(f.side, f.elem, &f.interior, &f.dwave))
        .collect()
}
