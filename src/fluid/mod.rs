//! Fluid properties (equation of state) abstraction.
//!
//! Boundary conditions and flux evaluators are generic over a
//! [`FluidProperties`] closure so that any single-phase equation of state
//! can drive the ghost-cell thermodynamics. An ideal-gas reference
//! implementation is provided.

mod ideal_gas;
mod traits;

pub use ideal_gas::IdealGasFluidProperties;
pub use traits::{FluidProperties, RhoEDerivatives};
