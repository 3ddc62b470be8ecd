//! Euler flux through a face, and its analytic Jacobian.
//!
//! Ghost-cell boundary conditions evaluate the physical Euler flux entirely
//! at the resolved exterior ("ghost") state, projected onto the outward
//! area-weighted face normal:
//!
//! F . n = [ (u.n) rho,
//!           (u.n) rho u + p nx,
//!           (u.n) rho v + p ny,
//!           (u.n) rho w + p nz,
//!           (u.n) (rho E + p) ]
//!
//! The Jacobian of F . n with respect to the conserved variables has the
//! standard closed form in terms of the velocity, the normal, the adiabatic
//! index, and the total enthalpy H = E + p / rho.

use crate::error::BoundaryError;
use crate::fluid::FluidProperties;
use crate::types::{ConservedState, Matrix5, Vector3};

/// Physical Euler flux through a face, evaluated at `state` (normally the
/// resolved ghost state) and projected onto the wave direction `dwave`.
///
/// Fails with [`BoundaryError::NonPositiveDensity`] for unphysical states
/// and propagates pressure-closure failures unchanged.
pub fn euler_face_flux<F: FluidProperties>(
    fluid: &F,
    state: &ConservedState,
    dwave: &Vector3,
) -> Result<ConservedState, BoundaryError> {
    if state.rho <= 0.0 {
        return Err(BoundaryError::NonPositiveDensity { value: state.rho });
    }

    let v = state.specific_volume();
    let vel = state.velocity();
    let e = v * state.rho_e - 0.5 * vel.norm_sq();
    let pressure = fluid.p_from_v_e(v, e);
    let vdon = vel.dot(dwave);

    Ok(ConservedState::new(
        vdon * state.rho,
        vdon * state.rho_u + pressure * dwave.x,
        vdon * state.rho_v + pressure * dwave.y,
        vdon * state.rho_w + pressure * dwave.z,
        vdon * (state.rho_e + pressure),
    ))
}

/// Closed-form Jacobian d(F . n)/dU of the Euler face flux with respect to
/// the conserved variables of the state it is evaluated at.
///
/// Parameterized by the velocity and total enthalpy of that state, the
/// wave direction, and the adiabatic index gamma.
pub fn euler_flux_jacobian(
    velocity: &Vector3,
    dwave: &Vector3,
    gamma: f64,
    total_enthalpy: f64,
) -> Matrix5 {
    let (u, v, w) = (velocity.x, velocity.y, velocity.z);
    let (nx, ny, nz) = (dwave.x, dwave.y, dwave.z);
    let vdov = velocity.norm_sq();
    let vdon = velocity.dot(dwave);
    let gamm1 = gamma - 1.0;
    let gamm2 = 2.0 - gamma;
    let rq05 = 0.5 * gamm1 * vdov;
    let enth = total_enthalpy;

    Matrix5::from_rows([
        [0.0, nx, ny, nz, 0.0],
        [
            rq05 * nx - u * vdon,
            gamm2 * nx * u + vdon,
            ny * u - v * gamm1 * nx,
            nz * u - w * gamm1 * nx,
            gamm1 * nx,
        ],
        [
            rq05 * ny - v * vdon,
            nx * v - u * gamm1 * ny,
            gamm2 * ny * v + vdon,
            nz * v - w * gamm1 * ny,
            gamm1 * ny,
        ],
        [
            rq05 * nz - w * vdon,
            nx * w - u * gamm1 * nz,
            ny * w - v * gamm1 * nz,
            gamm2 * nz * w + vdon,
            gamm1 * nz,
        ],
        [
            (rq05 - enth) * vdon,
            nx * enth - gamm1 * u * vdon,
            ny * enth - gamm1 * v * vdon,
            nz * enth - gamm1 * w * vdon,
            gamma * vdon,
        ],
    ])
}
