//! Wind-mixing and convection scenario for SCPN Ocean LES.
//!
//! Surface forcing, initial conditions, time-step control and profile
//! diagnostics. The flow solver itself is external.

pub mod diagnostics;
pub mod forcing;
pub mod initial;
pub mod setup;
pub mod timestep;

pub use setup::Scenario;
