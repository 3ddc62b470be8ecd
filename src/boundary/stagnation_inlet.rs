//! Stagnation (total pressure / total temperature) inlet boundary condition.
//!
//! The exterior state is derived by isentropic deceleration from the
//! prescribed stagnation state (p0, T0): entropy is conserved across the
//! boundary, the interior speed and flow direction are extrapolated
//! unchanged, and the static boundary state follows from
//!
//! - h_b = h0 - |u|^2 / 2
//! - p_b = p(h_b, s0),  (rho_b, e_b) = (rho, e)(p_b, s0)
//!
//! Extrapolating the interior velocity is a deliberate zeroth-order choice
//! (not a physical derivation); the Jacobian linearizes exactly that
//! choice.

use crate::error::BoundaryError;
use crate::fluid::FluidProperties;
use crate::flux::{euler_face_flux, euler_flux_jacobian};
use crate::types::{ConservedState, Matrix5, Vector3};

use super::{BoundaryFlux, GhostCellBoundary};

/// Configuration for a stagnation inlet.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StagnationInletConfig {
    /// Stagnation (total) inlet pressure p0.
    pub stagnation_pressure: f64,
    /// Stagnation (total) inlet temperature T0.
    pub stagnation_temperature: f64,
}

impl StagnationInletConfig {
    /// Validate the boundary targets.
    pub fn validate(&self) -> Result<(), BoundaryError> {
        if self.stagnation_pressure <= 0.0 || !self.stagnation_pressure.is_finite() {
            return Err(BoundaryError::InvalidConfig(format!(
                "stagnation pressure must be finite and > 0, got {}",
                self.stagnation_pressure
            )));
        }
        if self.stagnation_temperature <= 0.0 || !self.stagnation_temperature.is_finite() {
            return Err(BoundaryError::InvalidConfig(format!(
                "stagnation temperature must be finite and > 0, got {}",
                self.stagnation_temperature
            )));
        }
        Ok(())
    }
}

/// Ghost-cell resolver for the stagnation inlet.
#[derive(Clone, Debug)]
pub struct StagnationInletBc<F> {
    fluid: F,
    stagnation_pressure: f64,
    stagnation_temperature: f64,
}

impl<F: FluidProperties> StagnationInletBc<F> {
    /// Create the resolver from a validated config and a fluid closure.
    pub fn new(config: StagnationInletConfig, fluid: F) -> Result<Self, BoundaryError> {
        config.validate()?;
        Ok(Self {
            fluid,
            stagnation_pressure: config.stagnation_pressure,
            stagnation_temperature: config.stagnation_temperature,
        })
    }
}

impl<F: FluidProperties> GhostCellBoundary for StagnationInletBc<F> {
    fn ghost_cell_value(
        &self,
        _side: usize,
        _elem: usize,
        interior: &ConservedState,
        _dwave: &Vector3,
    ) -> Result<ConservedState, BoundaryError> {
        if interior.rho <= 0.0 {
            return Err(BoundaryError::NonPositiveDensity {
                value: interior.rho,
            });
        }
        let vel = interior.velocity();

        let p0 = self.stagnation_pressure;
        let t0 = self.stagnation_temperature;
        let fp = &self.fluid;
        let rho0 = fp.rho_from_p_t(p0, t0);
        let e0 = fp.e_from_p_rho(p0, rho0);
        let h0 = fp.h_from_p_t(p0, t0);
        let s0 = fp.s_from_v_e(1.0 / rho0, e0);

        // entropy conserved; interior speed and direction extrapolated
        let speed_sq = vel.norm_sq();
        let hb = h0 - 0.5 * speed_sq;
        let pb = fp.p_from_h_s(hb, s0)?;
        let (rho_b, e_b) = fp.rho_e_from_p_s(pb, s0)?;
        let eb_total = e_b + 0.5 * speed_sq;

        Ok(ConservedState::new(
            rho_b,
            rho_b * vel.x,
            rho_b * vel.y,
            rho_b * vel.z,
            rho_b * eb_total,
        ))
    }

    fn name(&self) -> &'static str {
        "stagnation_inlet"
    }
}

/// Boundary-flux evaluator for the stagnation inlet.
///
/// Owns its [`StagnationInletBc`] resolver. The Jacobian is assembled as a
/// two-stage chain rule: the Euler flux Jacobian at the boundary state,
/// times the sensitivity of the boundary state to the interior state
/// through the (h, s) / (p, s) closure relations.
#[derive(Clone, Debug)]
pub struct StagnationInletFlux<F> {
    bc: StagnationInletBc<F>,
}

impl<F: FluidProperties> StagnationInletFlux<F> {
    /// Create the evaluator (and its resolver) from a config and a fluid
    /// closure.
    pub fn new(config: StagnationInletConfig, fluid: F) -> Result<Self, BoundaryError> {
        Ok(Self {
            bc: StagnationInletBc::new(config, fluid)?,
        })
    }

    /// The ghost-cell resolver this evaluator uses.
    pub fn boundary_condition(&self) -> &StagnationInletBc<F> {
        &self.bc
    }
}

impl<F: FluidProperties> BoundaryFlux for StagnationInletFlux<F> {
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
        let vdov = vel.norm_sq();

        let fp = &self.bc.fluid;
        let (rho0, e0) = fp.rho_e_from_p_t(
            self.bc.stagnation_pressure,
            self.bc.stagnation_temperature,
        );
        let s0 = fp.s_from_v_e(1.0 / rho0, e0);
        let h0 = fp.h_from_p_t(
            self.bc.stagnation_pressure,
            self.bc.stagnation_temperature,
        );

        // boundary velocity = interior velocity (zeroth-order extrapolation)
        let hb = h0 - 0.5 * vdov;
        let pb = fp.p_from_h_s(hb, s0)?;
        let d = fp.rho_e_derivs_from_p_s(pb, s0)?;
        let rho_b = d.rho;
        let eb_total = d.e + 0.5 * vdov;
        let gamma = fp.gamma_from_v_e(1.0 / rho_b, d.e);
        let enth_b = eb_total + pb / rho_b;

        // Stage A: Euler flux Jacobian at the boundary state
        let dfn_dub = euler_flux_jacobian(&vel, dwave, gamma, enth_b);

        // Stage B: sensitivity of the boundary state to the interior state.
        // Everything thermodynamic enters through hb = h0 - |u1|^2 / 2 at
        // constant entropy; dp_b/dh_b comes from the closure.
        let dpb_dhb = fp.dpdh_from_h_s(hb, s0)?;
        let dhb = [
            vdov / rho1,
            -vel.x / rho1,
            -vel.y / rho1,
            -vel.z / rho1,
        ];
        let drhob_dhb = d.drho_dp * dpb_dhb;
        let deb_dhb = d.de_dp * dpb_dhb;

        // dEb/dU1 = d(e_b)/dU1 + d(|u1|^2 / 2)/dU1
        let deb_total = [
            deb_dhb * dhb[0] - vdov / rho1,
            deb_dhb * dhb[1] + vel.x / rho1,
            deb_dhb * dhb[2] + vel.y / rho1,
            deb_dhb * dhb[3] + vel.z / rho1,
        ];

        let mut dub_du1 = Matrix5::zeros();
        for j in 0..4 {
            dub_du1[(0, j)] = drhob_dhb * dhb[j];
        }
        // momentum rows: product rule on rho_b * u1_i
        let ucomp = [vel.x, vel.y, vel.z];
        for i in 0..3 {
            for j in 0..4 {
                dub_du1[(i + 1, j)] = ucomp[i] * dub_du1[(0, j)];
            }
            dub_du1[(i + 1, 0)] -= rho_b / rho1 * ucomp[i];
            dub_du1[(i + 1, i + 1)] += rho_b / rho1;
        }
        // energy row: product rule on rho_b * E_b
        for j in 0..4 {
            dub_du1[(4, j)] = eb_total * dub_du1[(0, j)] + rho_b * deb_total[j];
        }
        // column 4 stays zero: the ghost state never reads rho_e of the
        // interior

        // Stage C: chain rule
        Ok(dfn_dub.matmul(&dub_du1))
    }

    fn name(&self) -> &'static str {
        "stagnation_inlet_flux"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fluid::IdealGasFluidProperties;

    const P0: f64 = 101_325.0;
    const T0: f64 = 300.0;

    fn inlet() -> StagnationInletBc<IdealGasFluidProperties> {
        StagnationInletBc::new(
            StagnationInletConfig {
                stagnation_pressure: P0,
                stagnation_temperature: T0,
            },
            IdealGasFluidProperties::air(),
        )
        .unwrap()
    }

    #[test]
    fn test_config_validation() {
        let bad = StagnationInletConfig {
            stagnation_pressure: -1.0,
            stagnation_temperature: T0,
        };
        assert!(matches!(
            bad.validate(),
            Err(BoundaryError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_speed_and_direction_preserved() {
        let bc = inlet();
        let vel = Vector3::new(60.0, 30.0, -10.0);
        let interior = ConservedState::from_primitives(1.0, vel, 2.0e5);
        let n = Vector3::new(-1.0, 0.0, 0.0);

        let ghost = bc.ghost_cell_value(0, 0, &interior, &n).unwrap();
        let gvel = ghost.velocity();
        assert!((gvel.x - vel.x).abs() < 1e-10);
        assert!((gvel.y - vel.y).abs() < 1e-10);
        assert!((gvel.z - vel.z).abs() < 1e-10);
        assert!((gvel.norm() - vel.norm()).abs() < 1e-10);
    }

    #[test]
    fn test_rest_interior_recovers_stagnation_state() {
        let bc = inlet();
        let fp = IdealGasFluidProperties::air();
        let (rho0, e0) = fp.rho_e_from_p_t(P0, T0);

        let interior = ConservedState::new(rho0, 0.0, 0.0, 0.0, rho0 * e0);
        let n = Vector3::new(-1.0, 0.0, 0.0);
        let ghost = bc.ghost_cell_value(0, 0, &interior, &n).unwrap();

        assert!((ghost.rho - rho0).abs() < rho0 * 1e-10);
        assert_eq!(ghost.rho_u, 0.0);
        assert_eq!(ghost.rho_v, 0.0);
        assert_eq!(ghost.rho_w, 0.0);
        assert!((ghost.rho_e - rho0 * e0).abs() < rho0 * e0 * 1e-10);
    }

    #[test]
    fn test_excessive_speed_leaves_eos_domain() {
        let bc = inlet();
        // |u|^2 / 2 far above the stagnation enthalpy
        let vel = Vector3::new(2000.0, 0.0, 0.0);
        let interior = ConservedState::from_primitives(1.0, vel, 2.0e5);
        let n = Vector3::new(-1.0, 0.0, 0.0);

        assert!(matches!(
            bc.ghost_cell_value(0, 0, &interior, &n),
            Err(BoundaryError::FluidProperty(_))
        ));
    }

    #[test]
    fn test_nonpositive_density_rejected() {
        let bc = inlet();
        let interior = ConservedState::new(-0.1, 0.0, 0.0, 0.0, 1.0);
        let n = Vector3::new(-1.0, 0.0, 0.0);
        assert!(matches!(
            bc.ghost_cell_value(0, 0, &interior, &n),
            Err(BoundaryError::NonPositiveDensity { .. })
        ));
    }
}
