//! Core value types: conserved-state vectors, wave directions, and small
//! dense matrices.

mod matrix;
mod state;

pub use matrix::Matrix5;
pub use state::{ConservedState, Vector3};
