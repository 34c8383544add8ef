//! Orbital sandbox core: ship propagation under a fixed sun with circularly
//! orbiting perturbers, bounded trajectory histories, and gravity-assist
//! phase alignment.
//!
//! Keeping the physics and orchestration in library crates lets multiple
//! front-ends (CLI, GUI, web) share them; the binaries under `src/bin` are
//! thin reporting shells over this facade.

pub use catapult_core::{StateVector, Vector2, angles, constants, time};

pub use catapult_config as config;
pub use catapult_dynamics as dynamics;
pub use catapult_export as export;
pub use catapult_orbits as orbits;
pub use catapult_sim as sim;

pub mod scenario;

/// Returns the version of the library for smoke tests while scaffolding.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
