//! Uniform-flow initial conditions for the conserved variables.
//!
//! Initial states are specified in the natural engineering variables
//! (pressure, temperature, velocity) and converted to conserved variables
//! through the fluid-properties closure, one accessor per conserved field
//! so the host framework can project each variable separately.

use crate::fluid::FluidProperties;
use crate::types::{ConservedState, Vector3};

/// A spatially uniform initial flow state.
///
/// # Example
///
/// ```
/// use cnsfv_rs::{IdealGasFluidProperties, UniformFlow, Vector3};
///
/// let fluid = IdealGasFluidProperties::air();
/// let ic = UniformFlow::new(101_325.0, 300.0, Vector3::new(50.0, 0.0, 0.0));
/// let q = ic.conserved_state(&fluid);
/// assert!((q.rho - 1.1766).abs() < 1e-3);
/// assert!((q.rho_u / q.rho - 50.0).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UniformFlow {
    /// Initial pressure, constant everywhere.
    pub pressure: f64,
    /// Initial temperature, constant everywhere.
    pub temperature: f64,
    /// Initial velocity, constant everywhere.
    pub velocity: Vector3,
}

impl UniformFlow {
    /// Create a uniform initial flow state.
    pub fn new(pressure: f64, temperature: f64, velocity: Vector3) -> Self {
        Self {
            pressure,
            temperature,
            velocity,
        }
    }

    /// Initial density rho(p, T).
    pub fn density<F: FluidProperties>(&self, fluid: &F) -> f64 {
        fluid.rho_from_p_t(self.pressure, self.temperature)
    }

    /// Initial momentum rho * velocity.
    pub fn momentum<F: FluidProperties>(&self, fluid: &F) -> Vector3 {
        self.velocity * self.density(fluid)
    }

    /// Initial total energy density rho * (e + |velocity|^2 / 2).
    pub fn total_energy<F: FluidProperties>(&self, fluid: &F) -> f64 {
        let (rho, e) = fluid.rho_e_from_p_t(self.pressure, self.temperature);
        rho * (e + 0.5 * self.velocity.norm_sq())
    }

    /// The full conserved-state vector.
    pub fn conserved_state<F: FluidProperties>(&self, fluid: &F) -> ConservedState {
        let (rho, e) = fluid.rho_e_from_p_t(self.pressure, self.temperature);
        ConservedState::from_primitives(rho, self.velocity, e)
    }
}
