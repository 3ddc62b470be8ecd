//! Ideal gas equation of state.
//!
//! Calorically perfect gas with constant adiabatic index gamma and specific
//! gas constant R:
//!
//! - p v = R T,  e = cv T,  h = cp T,  cv = R / (gamma - 1),  cp = gamma cv
//! - s(v, e) = cv ln(e / cv) + R ln(v)
//!
//! The entropy constant is chosen so the (v, e), (p, T), and (h, s) forms
//! agree, which makes the enthalpy/entropy inversions exact closed forms:
//!
//! - s(T, p) = cp ln T - R ln p + R ln R
//! - T(p, s) = exp((s + R ln p - R ln R) / cp)
//! - p(h, s) = R exp((cp ln(h / cp) - s) / R)
//!
//! All derivative variants are exact derivatives of these expressions, so
//! analytic Jacobians built on them match finite differences of the
//! corresponding fluxes.

use crate::error::FluidPropertyError;

use super::traits::{FluidProperties, RhoEDerivatives};

/// Ideal gas fluid properties.
///
/// # Example
///
/// ```
/// use cnsfv_rs::fluid::{FluidProperties, IdealGasFluidProperties};
///
/// let air = IdealGasFluidProperties::air();
/// let rho = air.rho_from_p_t(101_325.0, 300.0);
/// assert!((rho - 1.1766).abs() < 1e-3);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct IdealGasFluidProperties {
    gamma: f64,
    r: f64,
}

impl Default for IdealGasFluidProperties {
    fn default() -> Self {
        Self::air()
    }
}

impl IdealGasFluidProperties {
    /// Create an ideal gas with the given adiabatic index and specific gas
    /// constant (J/(kg K)).
    pub fn new(gamma: f64, r: f64) -> Result<Self, FluidPropertyError> {
        if gamma <= 1.0 || !gamma.is_finite() {
            return Err(FluidPropertyError::InvalidConfig(format!(
                "adiabatic index must be finite and > 1, got {gamma}"
            )));
        }
        if r <= 0.0 || !r.is_finite() {
            return Err(FluidPropertyError::InvalidConfig(format!(
                "specific gas constant must be finite and > 0, got {r}"
            )));
        }
        Ok(Self { gamma, r })
    }

    /// Dry air: gamma = 1.4, R = 287.058 J/(kg K).
    pub fn air() -> Self {
        Self {
            gamma: 1.4,
            r: 287.058,
        }
    }

    /// Adiabatic index.
    #[inline(always)]
    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// Specific gas constant R.
    #[inline(always)]
    pub fn r(&self) -> f64 {
        self.r
    }

    /// Specific heat at constant volume cv = R / (gamma - 1).
    #[inline(always)]
    pub fn cv(&self) -> f64 {
        self.r / (self.gamma - 1.0)
    }

    /// Specific heat at constant pressure cp = gamma cv.
    #[inline(always)]
    pub fn cp(&self) -> f64 {
        self.gamma * self.cv()
    }

    /// Temperature from pressure and entropy along the (T, p) entropy form.
    fn t_from_p_s(&self, pressure: f64, s: f64) -> Result<f64, FluidPropertyError> {
        if pressure <= 0.0 {
            return Err(FluidPropertyError::OutOfDomain {
                quantity: "pressure",
                value: pressure,
            });
        }
        Ok(((s + self.r * pressure.ln() - self.r * self.r.ln()) / self.cp()).exp())
    }
}

impl FluidProperties for IdealGasFluidProperties {
    #[inline]
    fn rho_from_p_t(&self, pressure: f64, temperature: f64) -> f64 {
        pressure / (self.r * temperature)
    }

    #[inline]
    fn e_from_p_rho(&self, pressure: f64, rho: f64) -> f64 {
        pressure / ((self.gamma - 1.0) * rho)
    }

    #[inline]
    fn e_derivs_from_p_rho(&self, pressure: f64, rho: f64) -> (f64, f64, f64) {
        let e = self.e_from_p_rho(pressure, rho);
        (e, e / pressure, -e / rho)
    }

    #[inline]
    fn h_from_p_t(&self, _pressure: f64, temperature: f64) -> f64 {
        self.cp() * temperature
    }

    #[inline]
    fn s_from_v_e(&self, v: f64, e: f64) -> f64 {
        debug_assert!(v > 0.0 && e > 0.0, "entropy of v = {v}, e = {e}");
        let cv = self.cv();
        cv * (e / cv).ln() + self.r * v.ln()
    }

    #[inline]
    fn p_from_v_e(&self, v: f64, e: f64) -> f64 {
        (self.gamma - 1.0) * e / v
    }

    #[inline]
    fn gamma_from_v_e(&self, _v: f64, _e: f64) -> f64 {
        self.gamma
    }

    fn p_from_h_s(&self, h: f64, s: f64) -> Result<f64, FluidPropertyError> {
        if h <= 0.0 {
            return Err(FluidPropertyError::OutOfDomain {
                quantity: "enthalpy",
                value: h,
            });
        }
        let t = h / self.cp();
        Ok(self.r * ((self.cp() * t.ln() - s) / self.r).exp())
    }

    fn dpdh_from_h_s(&self, h: f64, s: f64) -> Result<f64, FluidPropertyError> {
        // dp/dh at constant s equals 1/v = rho (Gibbs relation).
        let p = self.p_from_h_s(h, s)?;
        let t = h / self.cp();
        Ok(p / (self.r * t))
    }

    fn rho_e_from_p_s(&self, pressure: f64, s: f64) -> Result<(f64, f64), FluidPropertyError> {
        let t = self.t_from_p_s(pressure, s)?;
        Ok((pressure / (self.r * t), self.cv() * t))
    }

    fn rho_e_derivs_from_p_s(
        &self,
        pressure: f64,
        s: f64,
    ) -> Result<RhoEDerivatives, FluidPropertyError> {
        let t = self.t_from_p_s(pressure, s)?;
        let cp = self.cp();
        let cv = self.cv();
        let rho = pressure / (self.r * t);
        Ok(RhoEDerivatives {
            rho,
            // isentropic compressibility: drho/dp = 1/c^2 = rho / (gamma p)
            drho_dp: rho / (self.gamma * pressure),
            drho_ds: -rho / cp,
            e: cv * t,
            de_dp: cv * self.r * t / (cp * pressure),
            de_ds: cv * t / cp,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const P: f64 = 101_325.0;
    const T: f64 = 300.0;

    fn air() -> IdealGasFluidProperties {
        IdealGasFluidProperties::air()
    }

    /// Entropy of the (P, T) reference state via the (v, e) form.
    fn reference_entropy(fp: &IdealGasFluidProperties) -> f64 {
        let (rho, e) = fp.rho_e_from_p_t(P, T);
        fp.s_from_v_e(1.0 / rho, e)
    }

    #[test]
    fn test_invalid_config_rejected() {
        assert!(IdealGasFluidProperties::new(1.0, 287.0).is_err());
        assert!(IdealGasFluidProperties::new(1.4, 0.0).is_err());
        assert!(IdealGasFluidProperties::new(1.4, 287.0).is_ok());
    }

    #[test]
    fn test_p_v_e_consistency() {
        let fp = air();
        let rho = fp.rho_from_p_t(P, T);
        let e = fp.e_from_p_rho(P, rho);
        let p_back = fp.p_from_v_e(1.0 / rho, e);
        assert!((p_back - P).abs() < P * 1e-12);
    }

    #[test]
    fn test_h_s_inversion_round_trip() {
        let fp = air();
        let h = fp.h_from_p_t(P, T);
        let s = reference_entropy(&fp);

        let p_back = fp.p_from_h_s(h, s).unwrap();
        assert!((p_back - P).abs() < P * 1e-10);

        let (rho, e) = fp.rho_e_from_p_s(p_back, s).unwrap();
        assert!((rho - fp.rho_from_p_t(P, T)).abs() < rho * 1e-10);
        assert!((e - fp.cv() * T).abs() < e * 1e-10);
    }

    #[test]
    fn test_dpdh_equals_density() {
        let fp = air();
        let h = fp.h_from_p_t(P, T);
        let s = reference_entropy(&fp);
        let dpdh = fp.dpdh_from_h_s(h, s).unwrap();
        assert!((dpdh - fp.rho_from_p_t(P, T)).abs() < dpdh * 1e-10);
    }

    #[test]
    fn test_p_from_h_s_derivative_matches_fd() {
        let fp = air();
        let h = fp.h_from_p_t(P, T);
        let s = reference_entropy(&fp);

        let dh = h * 1e-7;
        let p_plus = fp.p_from_h_s(h + dh, s).unwrap();
        let p_minus = fp.p_from_h_s(h - dh, s).unwrap();
        let fd = (p_plus - p_minus) / (2.0 * dh);
        let analytic = fp.dpdh_from_h_s(h, s).unwrap();
        assert!((fd - analytic).abs() < analytic.abs() * 1e-6);
    }

    #[test]
    fn test_rho_e_p_s_derivatives_match_fd() {
        let fp = air();
        let s = reference_entropy(&fp);
        let d = fp.rho_e_derivs_from_p_s(P, s).unwrap();

        let dp = P * 1e-7;
        let (rho_p, e_p) = fp.rho_e_from_p_s(P + dp, s).unwrap();
        let (rho_m, e_m) = fp.rho_e_from_p_s(P - dp, s).unwrap();
        assert!(((rho_p - rho_m) / (2.0 * dp) - d.drho_dp).abs() < d.drho_dp.abs() * 1e-6);
        assert!(((e_p - e_m) / (2.0 * dp) - d.de_dp).abs() < d.de_dp.abs() * 1e-6);

        let ds = 1e-5;
        let (rho_p, e_p) = fp.rho_e_from_p_s(P, s + ds).unwrap();
        let (rho_m, e_m) = fp.rho_e_from_p_s(P, s - ds).unwrap();
        assert!(((rho_p - rho_m) / (2.0 * ds) - d.drho_ds).abs() < d.drho_ds.abs() * 1e-6);
        assert!(((e_p - e_m) / (2.0 * ds) - d.de_ds).abs() < d.de_ds.abs() * 1e-6);
    }

    #[test]
    fn test_e_p_rho_derivatives_match_fd() {
        let fp = air();
        let rho = fp.rho_from_p_t(P, T);
        let (_, de_dp, de_drho) = fp.e_derivs_from_p_rho(P, rho);

        let dp = P * 1e-7;
        let fd_p = (fp.e_from_p_rho(P + dp, rho) - fp.e_from_p_rho(P - dp, rho)) / (2.0 * dp);
        assert!((fd_p - de_dp).abs() < de_dp.abs() * 1e-6);

        let dr = rho * 1e-7;
        let fd_r = (fp.e_from_p_rho(P, rho + dr) - fp.e_from_p_rho(P, rho - dr)) / (2.0 * dr);
        assert!((fd_r - de_drho).abs() < de_drho.abs() * 1e-6);
    }

    #[test]
    fn test_out_of_domain_enthalpy_reported() {
        let fp = air();
        let err = fp.p_from_h_s(-1.0, 0.0).unwrap_err();
        assert!(matches!(
            err,
            FluidPropertyError::OutOfDomain {
                quantity: "enthalpy",
                ..
            }
        ));
    }
}
