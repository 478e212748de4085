//! Logo upload checks and the simulated scan sequence

pub mod upload;
pub mod simulator;

pub use simulator::*;
