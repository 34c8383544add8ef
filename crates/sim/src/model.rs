//! Multi-body scene orchestration: the sun, two perturbers, and the ship.

use catapult_core::{StateVector, Vector2};
use catapult_dynamics::{IntegratorKind, acceleration_from_body};

use crate::alignment::{self, AlignmentSolution};
use crate::bodies::{self, Body, Perturber, PerturberId};
use crate::clock::SimulationClock;
use crate::controller::SimulationController;
use crate::scenario::ScenarioParams;
use crate::trajectory::TrajectoryBuffer;

/// Default time-scale multiplier: one tick covers `dt * 1e6` seconds, so
/// multi-year cruises play out in seconds of wall time.
pub const DEFAULT_TIME_SCALE: f64 = 1.0e6;

/// Result of the alignment phase of a scenario reset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AlignmentOutcome {
    /// The scenario did not ask for automatic alignment.
    NotRequested,
    /// The target perturber's phase was installed from a successful search.
    Aligned(AlignmentSolution),
    /// The search exhausted its horizon; the target's phase stayed at zero.
    NoEncounter,
}

/// Owns the full restricted multi-body scene and advances it tick by tick.
///
/// The sun sits fixed at its catalog position while Earth and Jupiter move on
/// analytic circles; only the ship is integrated numerically, through the
/// combined field of all three bodies.
#[derive(Debug)]
pub struct SimulationModel {
    controller: SimulationController,
    clock: SimulationClock,
    ship_trajectory: TrajectoryBuffer,
    sun: Body,
    earth: Perturber,
    jupiter: Perturber,
    time_scale: f64,
}

impl SimulationModel {
    /// Build the stock Sun/Earth/Jupiter scene around an initial ship state.
    ///
    /// `mu_km3_s2` is the primary's gravitational parameter, used both for
    /// the controller's single-attractor stepping and for the sun of the
    /// multi-body field.
    pub fn new(
        initial_state: StateVector,
        mu_km3_s2: f64,
        dt_s: f64,
        integrator: IntegratorKind,
        max_trajectory_points: usize,
    ) -> Self {
        let mut sun = bodies::sun();
        sun.mu_km3_s2 = mu_km3_s2;
        let earth = Perturber::new(
            bodies::earth(),
            bodies::EARTH_ORBIT_RADIUS_KM,
            mu_km3_s2,
            max_trajectory_points,
        );
        let jupiter = Perturber::new(
            bodies::jupiter(),
            bodies::JUPITER_ORBIT_RADIUS_KM,
            mu_km3_s2,
            max_trajectory_points,
        );
        Self::with_bodies(
            initial_state,
            dt_s,
            integrator,
            max_trajectory_points,
            sun,
            earth,
            jupiter,
        )
    }

    /// Build a scene from an explicit sun and two perturbers.
    pub fn with_bodies(
        initial_state: StateVector,
        dt_s: f64,
        integrator: IntegratorKind,
        max_trajectory_points: usize,
        sun: Body,
        earth: Perturber,
        jupiter: Perturber,
    ) -> Self {
        let mut model = Self {
            controller: SimulationController::new(initial_state, sun.mu_km3_s2, dt_s, integrator),
            clock: SimulationClock::default(),
            ship_trajectory: TrajectoryBuffer::new(max_trajectory_points),
            sun,
            earth,
            jupiter,
            time_scale: DEFAULT_TIME_SCALE,
        };
        model.seed_trajectories();
        model
    }

    fn seed_trajectories(&mut self) {
        self.ship_trajectory.push(self.controller.state().position_km);
        self.earth.trajectory.push(self.earth.body.position_km);
        self.jupiter.trajectory.push(self.jupiter.body.position_km);
    }

    /// Advance the scene by one tick of `dt * time_scale` seconds.
    ///
    /// Perturbers move first on their analytic circles; the ship then steps
    /// through the combined Sun/Earth/Jupiter field sampled at the new
    /// positions; the clock and all three trajectory traces follow. The
    /// controller's base `dt` is never touched.
    pub fn update(&mut self) {
        let dt_eff = self.controller.dt_s() * self.time_scale;

        self.jupiter.advance_phase(dt_eff);
        self.earth.advance_phase(dt_eff);

        let (sun_position, sun_mu) = (self.sun.position_km, self.sun.mu_km3_s2);
        let (jupiter_position, jupiter_mu) =
            (self.jupiter.body.position_km, self.jupiter.body.mu_km3_s2);
        let (earth_position, earth_mu) = (self.earth.body.position_km, self.earth.body.mu_km3_s2);
        self.controller.step_by(dt_eff, move |position| {
            acceleration_from_body(position, sun_position, sun_mu)
                + acceleration_from_body(position, jupiter_position, jupiter_mu)
                + acceleration_from_body(position, earth_position, earth_mu)
        });

        self.clock.advance(dt_eff);

        self.ship_trajectory.push(self.controller.state().position_km);
        self.earth.trajectory.push(self.earth.body.position_km);
        self.jupiter.trajectory.push(self.jupiter.body.position_km);
    }

    /// Rebuild the scene from scenario parameters.
    ///
    /// Ship state, step size, clock, and perturber phases are reinstalled;
    /// when the scenario asks for it, the assist target's phase comes from
    /// the encounter search instead of zero. Trajectories are either cleared
    /// or continued across a break marker, then re-seeded with the fresh
    /// positions.
    pub fn reset(&mut self, params: &ScenarioParams) -> AlignmentOutcome {
        let ship = StateVector::new(params.ship_position_km, params.ship_velocity_km_s);
        self.controller.set_dt(params.dt_s);
        self.controller.reset(ship);
        self.clock.reset(0.0);
        self.earth.set_phase(0.0);
        self.jupiter.set_phase(0.0);

        let outcome = if params.auto_align_assist {
            let mu = self.sun.mu_km3_s2;
            let target = match params.assist_target {
                PerturberId::Earth => &mut self.earth,
                PerturberId::Jupiter => &mut self.jupiter,
            };
            match alignment::solve_phase_for_assist(
                ship,
                mu,
                target.orbit_radius_km,
                target.angular_speed_rad_s,
                params.dt_s,
            ) {
                Some(solution) => {
                    target.set_phase(solution.phase_angle_rad);
                    AlignmentOutcome::Aligned(solution)
                }
                None => AlignmentOutcome::NoEncounter,
            }
        } else {
            AlignmentOutcome::NotRequested
        };

        if params.clear_trajectories {
            self.ship_trajectory.clear();
            self.earth.trajectory.clear();
            self.jupiter.trajectory.clear();
        } else {
            self.ship_trajectory.push_break();
            self.earth.trajectory.push_break();
            self.jupiter.trajectory.push_break();
        }
        self.seed_trajectories();

        outcome
    }

    /// Current ship state.
    pub fn state(&self) -> StateVector {
        self.controller.state()
    }

    /// Accumulated simulation time in seconds.
    pub fn time_s(&self) -> f64 {
        self.clock.time_s()
    }

    /// Ship trajectory trace.
    pub fn trajectory(&self) -> &TrajectoryBuffer {
        &self.ship_trajectory
    }

    /// The central body.
    pub fn sun(&self) -> &Body {
        &self.sun
    }

    /// The Earth perturber.
    pub fn earth(&self) -> &Perturber {
        &self.earth
    }

    /// The Jupiter perturber.
    pub fn jupiter(&self) -> &Perturber {
        &self.jupiter
    }

    /// Look up a perturber by identity.
    pub fn perturber(&self, id: PerturberId) -> &Perturber {
        match id {
            PerturberId::Earth => &self.earth,
            PerturberId::Jupiter => &self.jupiter,
        }
    }

    /// Sun position (km).
    pub fn sun_position(&self) -> Vector2 {
        self.sun.position_km
    }

    /// Earth position (km).
    pub fn earth_position(&self) -> Vector2 {
        self.earth.body.position_km
    }

    /// Jupiter position (km).
    pub fn jupiter_position(&self) -> Vector2 {
        self.jupiter.body.position_km
    }

    /// Earth trajectory trace.
    pub fn earth_trajectory(&self) -> &TrajectoryBuffer {
        &self.earth.trajectory
    }

    /// Jupiter trajectory trace.
    pub fn jupiter_trajectory(&self) -> &TrajectoryBuffer {
        &self.jupiter.trajectory
    }

    /// Configured base step size in seconds, before time scaling.
    pub fn dt_s(&self) -> f64 {
        self.controller.dt_s()
    }

    /// Replace the base step size.
    pub fn set_dt(&mut self, dt_s: f64) {
        self.controller.set_dt(dt_s);
    }

    /// Gravitational parameter of the multi-body primary (km³/s²).
    pub fn primary_mu_km3_s2(&self) -> f64 {
        self.sun.mu_km3_s2
    }

    /// Replace the controller's single-attractor `mu`.
    ///
    /// The multi-body sun keeps its own value; this knob affects only
    /// single-attractor stepping through the controller.
    pub fn set_mu(&mut self, mu_km3_s2: f64) {
        self.controller.set_mu(mu_km3_s2);
    }

    /// Active integration scheme.
    pub fn integrator(&self) -> IntegratorKind {
        self.controller.integrator()
    }

    /// Switch the integration scheme.
    pub fn set_integrator(&mut self, integrator: IntegratorKind) {
        self.controller.set_integrator(integrator);
    }

    /// Time-scale multiplier applied to each tick.
    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    /// Replace the time-scale multiplier; values not strictly positive
    /// (NaN included) are ignored.
    pub fn set_time_scale(&mut self, time_scale: f64) {
        if time_scale > 0.0 {
            self.time_scale = time_scale;
        }
    }
}
