use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use cosmic_catapult::angles::rad_to_deg;
use cosmic_catapult::config::load_scenario;
use cosmic_catapult::orbits::OrbitalElements;
use cosmic_catapult::scenario::build_model;
use cosmic_catapult::sim::{AlignmentOutcome, PerturberId};
use cosmic_catapult::time::seconds_to_days;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Phase a perturber for a gravity assist and fly the encounter"
)]
struct Cli {
    /// Scenario manifest (TOML or YAML)
    #[arg(long)]
    scenario: PathBuf,

    /// Assist target (overrides the manifest)
    #[arg(long, value_enum)]
    target: Option<TargetArg>,

    /// Number of ticks to fly after alignment
    #[arg(long, default_value_t = 2200)]
    ticks: u64,
}

#[derive(Copy, Clone, ValueEnum, Debug)]
enum TargetArg {
    Earth,
    Jupiter,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_scenario(&cli.scenario)?;
    let (mut model, mut params) = build_model(&config)?;

    params.auto_align_assist = true;
    if let Some(target) = cli.target {
        params.assist_target = match target {
            TargetArg::Earth => PerturberId::Earth,
            TargetArg::Jupiter => PerturberId::Jupiter,
        };
    }
    let target = params.assist_target;

    let outcome = model.reset(&params);

    println!("=== Assist Plan ===");
    println!("Scenario    : {}", config.name);
    println!("Target      : {}", target.as_str());
    match outcome {
        AlignmentOutcome::Aligned(solution) => {
            println!(
                "Phase angle : {:.3} deg ({:.5} rad)",
                rad_to_deg(solution.phase_angle_rad),
                solution.phase_angle_rad
            );
            println!(
                "Intercept   : {:.2} days at r = {:.0} km ({} coarse steps)",
                seconds_to_days(solution.intercept_time_s),
                solution.encounter_radius_km,
                solution.integration_steps
            );
        }
        AlignmentOutcome::NoEncounter => {
            println!("No encounter : the ship never reaches the target's orbit radius");
            return Ok(());
        }
        AlignmentOutcome::NotRequested => {}
    }

    let before = OrbitalElements::from_state(model.state(), model.primary_mu_km3_s2());

    let mut closest_km = f64::INFINITY;
    for _ in 0..cli.ticks {
        model.update();
        let separation_km =
            (model.state().position_km - model.perturber(target).position_km()).norm();
        if separation_km < closest_km {
            closest_km = separation_km;
        }
    }

    let after = OrbitalElements::from_state(model.state(), model.primary_mu_km3_s2());

    println!("=== Flyby Result ===");
    println!("Ticks flown     : {}", cli.ticks);
    println!("Sim elapsed     : {:.2} days", seconds_to_days(model.time_s()));
    println!("Closest approach: {:.0} km", closest_km);
    println!(
        "Specific energy : {:.4} -> {:.4} km^2/s^2 (ΔE = {:+.4})",
        before.specific_energy_km2_s2,
        after.specific_energy_km2_s2,
        after.specific_energy_km2_s2 - before.specific_energy_km2_s2
    );
    println!("Orbit class     : {} -> {}", before.class, after.class);

    Ok(())
}
