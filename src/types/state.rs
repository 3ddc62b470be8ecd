//! Conserved-state and wave-direction types for 3D compressible flow.
//!
//! The conserved variables are (rho, rho*u, rho*v, rho*w, rho*E) where E is
//! the specific total energy E = e + |velocity|^2 / 2. The same type doubles
//! as the flux 5-vector, which shares the indexing.

use std::ops::{Add, Mul, Sub};

/// A 3-component vector, used for velocities and for the outward
/// area-weighted face normal ("wave direction") supplied by the host mesh.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    /// Create a new vector.
    #[inline(always)]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Zero vector.
    #[inline(always)]
    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Dot product.
    #[inline(always)]
    pub fn dot(&self, other: &Vector3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Squared Euclidean norm.
    #[inline(always)]
    pub fn norm_sq(&self) -> f64 {
        self.dot(self)
    }

    /// Euclidean norm.
    #[inline(always)]
    pub fn norm(&self) -> f64 {
        self.norm_sq().sqrt()
    }
}

impl Mul<f64> for Vector3 {
    type Output = Vector3;

    #[inline(always)]
    fn mul(self, s: f64) -> Vector3 {
        Vector3::new(self.x * s, self.y * s, self.z * s)
    }
}

/// Conserved state for 3D compressible flow: (rho, rho_u, rho_v, rho_w, rho_e).
///
/// Physical states have `rho > 0`; velocity components are derived as
/// momentum / density. The struct is `Copy` and all evaluation paths treat
/// it as an immutable value.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ConservedState {
    /// Density rho
    pub rho: f64,
    /// x-momentum rho * u
    pub rho_u: f64,
    /// y-momentum rho * v
    pub rho_v: f64,
    /// z-momentum rho * w
    pub rho_w: f64,
    /// Total energy density rho * E
    pub rho_e: f64,
}

impl ConservedState {
    /// Create a new conserved state from its five components.
    #[inline(always)]
    pub fn new(rho: f64, rho_u: f64, rho_v: f64, rho_w: f64, rho_e: f64) -> Self {
        Self {
            rho,
            rho_u,
            rho_v,
            rho_w,
            rho_e,
        }
    }

    /// Create a state from primitive variables: density, velocity, and
    /// specific internal energy e (J/kg).
    ///
    /// The total energy density is rho * (e + |velocity|^2 / 2).
    #[inline(always)]
    pub fn from_primitives(rho: f64, velocity: Vector3, e: f64) -> Self {
        Self {
            rho,
            rho_u: rho * velocity.x,
            rho_v: rho * velocity.y,
            rho_w: rho * velocity.z,
            rho_e: rho * (e + 0.5 * velocity.norm_sq()),
        }
    }

    /// Zero state.
    #[inline(always)]
    pub fn zero() -> Self {
        Self::default()
    }

    /// Velocity components (momentum / density).
    ///
    /// Callers must ensure `rho > 0` first; boundary evaluators report
    /// [`crate::BoundaryError::NonPositiveDensity`] before dividing.
    #[inline(always)]
    pub fn velocity(&self) -> Vector3 {
        debug_assert!(self.rho > 0.0, "velocity of state with rho = {}", self.rho);
        let inv = 1.0 / self.rho;
        Vector3::new(self.rho_u * inv, self.rho_v * inv, self.rho_w * inv)
    }

    /// Specific volume v = 1 / rho.
    #[inline(always)]
    pub fn specific_volume(&self) -> f64 {
        1.0 / self.rho
    }

    /// Specific internal energy e = rho_e / rho - |velocity|^2 / 2.
    #[inline(always)]
    pub fn specific_internal_energy(&self) -> f64 {
        let v = self.specific_volume();
        v * self.rho_e - 0.5 * self.velocity().norm_sq()
    }

    /// Convert to array representation [rho, rho_u, rho_v, rho_w, rho_e].
    #[inline(always)]
    pub fn to_array(&self) -> [f64; 5] {
        [self.rho, self.rho_u, self.rho_v, self.rho_w, self.rho_e]
    }

    /// Create from array representation [rho, rho_u, rho_v, rho_w, rho_e].
    #[inline(always)]
    pub fn from_array(arr: [f64; 5]) -> Self {
        Self {
            rho: arr[0],
            rho_u: arr[1],
            rho_v: arr[2],
            rho_w: arr[3],
            rho_e: arr[4],
        }
    }
}

impl Add for ConservedState {
    type Output = ConservedState;

    #[inline(always)]
    fn add(self, other: ConservedState) -> ConservedState {
        ConservedState::new(
            self.rho + other.rho,
            self.rho_u + other.rho_u,
            self.rho_v + other.rho_v,
            self.rho_w + other.rho_w,
            self.rho_e + other.rho_e,
        )
    }
}

impl Sub for ConservedState {
    type Output = ConservedState;

    #[inline(always)]
    fn sub(self, other: ConservedState) -> ConservedState {
        ConservedState::new(
            self.rho - other.rho,
            self.rho_u - other.rho_u,
            self.rho_v - other.rho_v,
            self.rho_w - other.rho_w,
            self.rho_e - other.rho_e,
        )
    }
}

impl Mul<f64> for ConservedState {
    type Output = ConservedState;

    #[inline(always)]
    fn mul(self, s: f64) -> ConservedState {
        ConservedState::new(
            self.rho * s,
            self.rho_u * s,
            self.rho_v * s,
            self.rho_w * s,
            self.rho_e * s,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-12;

    #[test]
    fn test_from_primitives_round_trip() {
        let vel = Vector3::new(50.0, -10.0, 3.0);
        let q = ConservedState::from_primitives(1.2, vel, 2.1e5);

        let back = q.velocity();
        assert!((back.x - vel.x).abs() < TOL);
        assert!((back.y - vel.y).abs() < TOL);
        assert!((back.z - vel.z).abs() < TOL);
        assert!((q.specific_internal_energy() - 2.1e5).abs() < 2.1e5 * TOL);
    }

    #[test]
    fn test_array_round_trip() {
        let q = ConservedState::new(1.0, 2.0, 3.0, 4.0, 5.0);
        assert_eq!(ConservedState::from_array(q.to_array()), q);
    }

    #[test]
    fn test_state_arithmetic() {
        let a = ConservedState::new(1.0, 2.0, 3.0, 4.0, 5.0);
        let b = ConservedState::new(0.5, 0.5, 0.5, 0.5, 0.5);

        let sum = a + b;
        assert_eq!(sum.rho, 1.5);
        assert_eq!(sum.rho_e, 5.5);

        let diff = a - b;
        assert_eq!(diff.rho_u, 1.5);

        let scaled = a * 2.0;
        assert_eq!(scaled.rho_w, 8.0);
    }

    #[test]
    fn test_vector_dot_and_norm() {
        let n = Vector3::new(3.0, 4.0, 0.0);
        assert_eq!(n.norm(), 5.0);
        assert_eq!(n.dot(&Vector3::new(1.0, 1.0, 7.0)), 7.0);
    }
}
