//! Error types for fluid-property and boundary-flux evaluation.
//!
//! No recovery is attempted inside this crate: a failed equation-of-state
//! inversion or an unphysical state surfaces to the assembly loop, which
//! decides whether to cut the nonlinear step and retry at the solver level.

use thiserror::Error;

/// Errors from the fluid-properties (equation of state) closure.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FluidPropertyError {
    /// A thermodynamic inversion was asked for a state outside the
    /// equation-of-state domain (e.g. non-positive enthalpy from an
    /// (h, s) pair).
    #[error("{quantity} = {value} is outside the equation-of-state domain")]
    OutOfDomain { quantity: &'static str, value: f64 },

    /// Invalid equation-of-state parameters.
    #[error("invalid fluid properties configuration: {0}")]
    InvalidConfig(String),
}

/// Errors from ghost-cell resolution and boundary-flux evaluation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BoundaryError {
    /// A conserved state carried a non-positive density. Velocities are
    /// derived as momentum / density, so evaluation cannot proceed.
    #[error("non-positive density {value} in conserved state")]
    NonPositiveDensity { value: f64 },

    /// Invalid boundary-condition parameters.
    #[error("invalid boundary configuration: {0}")]
    InvalidConfig(String),

    /// The fluid-properties closure failed; propagated unchanged.
    #[error("fluid property evaluation failed: {0}")]
    FluidProperty(#[from] FluidPropertyError),
}
