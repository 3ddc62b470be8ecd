//! Static-pressure outlet boundary condition.
//!
//! The exterior state keeps the interior density and momentum unchanged and
//! recomputes the total energy at the prescribed outlet pressure:
//!
//! - rho_2 = rho_1,  (rho u)_2 = (rho u)_1
//! - (rho E)_2 = rho_1 (e(p_out, rho_1) + |u_1|^2 / 2)
//!
//! When p_out equals the pressure implied by the interior state, the ghost
//! state equals the interior state and the boundary flux reduces to the
//! interior Euler flux (no discontinuity at the consistency point).

use crate::error::BoundaryError;
use crate::fluid::FluidProperties;
use crate::flux::euler_face_flux;
use crate::types::{ConservedState, Matrix5, Vector3};

use super::{BoundaryFlux, GhostCellBoundary};

/// Configuration for a static-pressure outlet.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StaticPressureOutletConfig {
    /// Static outlet pressure p_out.
    pub static_pressure: f64,
}

impl StaticPressureOutletConfig {
    /// Validate the boundary target.
    pub fn validate(&self) -> Result<(), BoundaryError> {
        if self.static_pressure <= 0.0 || !self.static_pressure.is_finite() {
            return Err(BoundaryError::InvalidConfig(format!(
                "static outlet pressure must be finite and > 0, got {}",
                self.static_pressure
            )));
        }
        Ok(())
    }
}

/// Ghost-cell resolver for the static-pressure outlet.
#[derive(Clone, Debug)]
pub struct StaticPressureOutletBc<F> {
    fluid: F,
    static_pressure: f64,
}

impl<F: FluidProperties> StaticPressureOutletBc<F> {
    /// Create the resolver from a validated config and a fluid closure.
    pub fn new(config: StaticPressureOutletConfig, fluid: F) -> Result<Self, BoundaryError> {
        config.validate()?;
        Ok(Self {
            fluid,
            static_pressure: config.static_pressure,
        })
    }
}

impl<F: FluidProperties> GhostCellBoundary for StaticPressureOutletBc<F> {
    fn ghost_cell_value(
        &self,
        _side: usize,
        _elem: usize,
        interior: &ConservedState,
        _dwave: &Vector3,
    ) -> Result<ConservedState, BoundaryError> {
        let rho1 = interior.rho;
        if rho1 <= 0.0 {
            return Err(BoundaryError::NonPositiveDensity { value: rho1 });
        }
        let vel = interior.velocity();
        let e2 = self.fluid.e_from_p_rho(self.static_pressure, rho1);
        let rho_e2 = rho1 * (e2 + 0.5 * vel.norm_sq());

        // density and momentum pass through bit-for-bit
        Ok(ConservedState::new(
            interior.rho,
            interior.rho_u,
            interior.rho_v,
            interior.rho_w,
            rho_e2,
        ))
    }

    fn name(&self) -> &'static str {
        "static_pressure_outlet"
    }
}

/// Boundary-flux evaluator for the static-pressure outlet.
///
/// Owns its [`StaticPressureOutletBc`] resolver. Because density and
/// momentum pass through unchanged and the face pressure is pinned at
/// p_out, the Jacobian is a single-stage closed form; only the energy row
/// needs the closure derivative de/drho at constant pressure.
#[derive(Clone, Debug)]
pub struct StaticPressureOutletFlux<F> {
    bc: StaticPressureOutletBc<F>,
}

impl<F: FluidProperties> StaticPressureOutletFlux<F> {
    /// Create the evaluator (and its resolver) from a config and a fluid
    /// closure.
    pub fn new(config: StaticPressureOutletConfig, fluid: F) -> Result<Self, BoundaryError> {
        Ok(Self {
            bc: StaticPressureOutletBc::new(config, fluid)?,
        })
    }

    /// The ghost-cell resolver this evaluator uses.
    pub fn boundary_condition(&self) -> &StaticPressureOutletBc<F> {
        &self.bc
    }
}

impl<F: FluidProperties> BoundaryFlux for StaticPressureOutletFlux<F> {
    fn flux(
        &self,
        side: usize,
        elem: usize,
        interior: &ConservedState,
        dwave: &Vector3,
    ) -> Result<ConservedState, BoundaryError> {
        let ghost = self.bc.ghost_cell_value(side, elem, interior, dwave)?;
        euler_face_flux(&self.bc.fluid, &ghost, dwave)
    }

    fn jacobian(
        &self,
        _side: usize,
        _elem: usize,
        interior: &ConservedState,
        dwave: &Vector3,
    ) -> Result<Matrix5, BoundaryError> {
        let rho1 = interior.rho;
        if rho1 <= 0.0 {
            return Err(BoundaryError::NonPositiveDensity { value: rho1 });
        }
        let vel = interior.velocity();
        let (u, v, w) = (vel.x, vel.y, vel.z);
        let (nx, ny, nz) = (dwave.x, dwave.y, dwave.z);
        let vdov = vel.norm_sq();
        let vdon = vel.dot(dwave);

        let p_out = self.bc.static_pressure;
        let (e2, _de_dp, de_drho) = self.bc.fluid.e_derivs_from_p_rho(p_out, rho1);
        let rho_e2 = rho1 * (e2 + 0.5 * vdov);
        let enth_b = (rho_e2 + p_out) / rho1;

        // d(rho E)_2/drho_1; the kinetic term |m|^2 / (2 rho_1) contributes
        // the -|u|^2 / 2
        let drhoe2_drho1 = e2 + rho1 * de_drho - 0.5 * vdov;

        Ok(Matrix5::from_rows([
            [0.0, nx, ny, nz, 0.0],
            [-vdon * u, nx * u + vdon, ny * u, nz * u, 0.0],
            [-vdon * v, nx * v, ny * v + vdon, nz * v, 0.0],
            [-vdon * w, nx * w, ny * w, nz * w + vdon, 0.0],
            [
                vdon * (drhoe2_drho1 - enth_b),
                nx * enth_b + vdon * u,
                ny * enth_b + vdon * v,
                nz * enth_b + vdon * w,
                // the ghost energy is recomputed from p_out and never reads
                // the interior rho_e
                0.0,
            ],
        ]))
    }

    fn name(&self) -> &'static str {
        "static_pressure_outlet_flux"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fluid::IdealGasFluidProperties;

    fn outlet(p_out: f64) -> StaticPressureOutletBc<IdealGasFluidProperties> {
        StaticPressureOutletBc::new(
            StaticPressureOutletConfig {
                static_pressure: p_out,
            },
            IdealGasFluidProperties::air(),
        )
        .unwrap()
    }

    #[test]
    fn test_config_validation() {
        let bad = StaticPressureOutletConfig {
            static_pressure: f64::NAN,
        };
        assert!(matches!(
            bad.validate(),
            Err(BoundaryError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_density_and_momentum_pass_through_exactly() {
        let bc = outlet(9.0e4);
        let interior = ConservedState::new(1.3, 65.0, -13.0, 3.9, 2.9e5);
        let n = Vector3::new(1.0, 0.0, 0.0);

        let ghost = bc.ghost_cell_value(0, 0, &interior, &n).unwrap();
        assert_eq!(ghost.rho, interior.rho);
        assert_eq!(ghost.rho_u, interior.rho_u);
        assert_eq!(ghost.rho_v, interior.rho_v);
        assert_eq!(ghost.rho_w, interior.rho_w);
        assert_ne!(ghost.rho_e, interior.rho_e);
    }

    #[test]
    fn test_matching_pressure_reproduces_interior_state() {
        let fp = IdealGasFluidProperties::air();
        let vel = Vector3::new(40.0, 8.0, 0.0);
        let interior = ConservedState::from_primitives(1.2, vel, 2.1e5);
        let p_interior = fp.p_from_v_e(
            interior.specific_volume(),
            interior.specific_internal_energy(),
        );

        let bc = outlet(p_interior);
        let n = Vector3::new(1.0, 0.0, 0.0);
        let ghost = bc.ghost_cell_value(0, 0, &interior, &n).unwrap();
        assert!((ghost.rho_e - interior.rho_e).abs() < interior.rho_e * 1e-12);
    }

    #[test]
    fn test_nonpositive_density_rejected() {
        let bc = outlet(1.0e5);
        let interior = ConservedState::new(0.0, 1.0, 0.0, 0.0, 1.0);
        let n = Vector3::new(1.0, 0.0, 0.0);
        assert!(matches!(
            bc.ghost_cell_value(0, 0, &interior, &n),
            Err(BoundaryError::NonPositiveDensity { .. })
        ));
    }
}
