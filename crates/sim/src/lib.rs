//! Simulation layer: clock, trajectory history, the stepping controller, and
//! the multi-body orchestration model.

pub mod alignment;
pub mod bodies;
pub mod clock;
pub mod controller;
pub mod model;
pub mod scenario;
pub mod trajectory;

pub use alignment::{AlignmentSolution, solve_phase_for_assist};
pub use bodies::{Body, Perturber, PerturberId};
pub use clock::SimulationClock;
pub use controller::SimulationController;
pub use model::{AlignmentOutcome, SimulationModel};
pub use scenario::ScenarioParams;
pub use trajectory::TrajectoryBuffer;
