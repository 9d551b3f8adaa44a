//! Engine-wide utilities that sit below the simulation.

#[macro_use]
pub mod log;
pub mod matrix;
