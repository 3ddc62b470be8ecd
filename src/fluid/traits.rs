//! Trait for single-phase fluid property (equation of state) closures.

use crate::error::FluidPropertyError;

/// Density and internal energy at a (pressure, entropy) state, together
/// with their first derivatives. Returned by
/// [`FluidProperties::rho_e_derivs_from_p_s`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RhoEDerivatives {
    /// Density rho(p, s)
    pub rho: f64,
    /// d(rho)/dp at constant entropy
    pub drho_dp: f64,
    /// d(rho)/ds at constant pressure
    pub drho_ds: f64,
    /// Specific internal energy e(p, s)
    pub e: f64,
    /// de/dp at constant entropy
    pub de_dp: f64,
    /// de/ds at constant pressure
    pub de_ds: f64,
}

/// Single-phase equation-of-state closure.
///
/// Converts between (pressure, temperature), (pressure, density),
/// (specific volume, internal energy), (enthalpy, entropy), and
/// (pressure, entropy) representations of a thermodynamic state. All
/// quantities are per unit mass in SI units.
///
/// # Contract
///
/// Implementations must be internally consistent so that boundary-flux
/// Jacobians match finite differences of the fluxes they linearize:
///
/// - `p_from_v_e(1/rho, e_from_p_rho(p, rho)) == p` for valid inputs;
/// - `p_from_h_s` inverts the (h, s) state implied by `h_from_p_t` and
///   `s_from_v_e`;
/// - the derivative variants are exact derivatives of their base functions.
///
/// Conversions that can leave the equation-of-state domain (the enthalpy /
/// entropy and pressure / entropy inversions) return `Result` and must
/// report failure rather than clamp: a silently clamped state corrupts the
/// outer Newton iteration.
///
/// Implementations are stateless from the caller's perspective and must be
/// `Send + Sync` so boundary objects can be shared across face-parallel
/// sweeps.
pub trait FluidProperties: Send + Sync {
    /// Density from pressure and temperature.
    fn rho_from_p_t(&self, pressure: f64, temperature: f64) -> f64;

    /// Specific internal energy from pressure and density.
    fn e_from_p_rho(&self, pressure: f64, rho: f64) -> f64;

    /// Specific internal energy from pressure and density, with first
    /// derivatives: returns `(e, de/dp, de/drho)`.
    fn e_derivs_from_p_rho(&self, pressure: f64, rho: f64) -> (f64, f64, f64);

    /// Specific enthalpy from pressure and temperature.
    fn h_from_p_t(&self, pressure: f64, temperature: f64) -> f64;

    /// Specific entropy from specific volume and internal energy.
    fn s_from_v_e(&self, v: f64, e: f64) -> f64;

    /// Pressure from specific volume and internal energy.
    fn p_from_v_e(&self, v: f64, e: f64) -> f64;

    /// Adiabatic index gamma = cp / cv at (v, e).
    fn gamma_from_v_e(&self, v: f64, e: f64) -> f64;

    /// Density and internal energy from pressure and temperature.
    fn rho_e_from_p_t(&self, pressure: f64, temperature: f64) -> (f64, f64) {
        let rho = self.rho_from_p_t(pressure, temperature);
        (rho, self.e_from_p_rho(pressure, rho))
    }

    /// Pressure from specific enthalpy and entropy.
    fn p_from_h_s(&self, h: f64, s: f64) -> Result<f64, FluidPropertyError>;

    /// Derivative dp/dh at constant entropy. By the Gibbs relation
    /// dh = T ds + v dp this equals the density at the (h, s) state.
    fn dpdh_from_h_s(&self, h: f64, s: f64) -> Result<f64, FluidPropertyError>;

    /// Density and internal energy from pressure and entropy.
    fn rho_e_from_p_s(&self, pressure: f64, s: f64) -> Result<(f64, f64), FluidPropertyError>;

    /// Density and internal energy from pressure and entropy, with their
    /// first derivatives.
    fn rho_e_derivs_from_p_s(
        &self,
        pressure: f64,
        s: f64,
    ) -> Result<RhoEDerivatives, FluidPropertyError>;
}
