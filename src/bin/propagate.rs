use std::io::Write;
use std::path::PathBuf;

use chrono::Utc;
use clap::Parser;
use cosmic_catapult::config::{load_bodies, load_scenario};
use cosmic_catapult::export::summary::{
    AlignmentSummary, Metadata, OrbitSummary, RunStats, StateSummary, write_run_sidecar,
};
use cosmic_catapult::export::trajectory::{self, Record};
use cosmic_catapult::orbits::OrbitalElements;
use cosmic_catapult::scenario::{build_model, build_model_with_catalog};
use cosmic_catapult::sim::{AlignmentOutcome, TrajectoryBuffer};
use cosmic_catapult::time::seconds_to_days;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Propagate a scenario through the Sun/Earth/Jupiter field"
)]
struct Cli {
    /// Scenario manifest (TOML or YAML)
    #[arg(long)]
    scenario: PathBuf,

    /// Body catalog YAML (defaults to the built-in Sun/Earth/Jupiter system)
    #[arg(long)]
    bodies: Option<PathBuf>,

    /// Number of ticks to run
    #[arg(long, default_value_t = 2000)]
    ticks: u64,

    /// Trajectory CSV destination ('-' for stdout)
    #[arg(long)]
    output: Option<PathBuf>,

    /// JSON run-summary destination
    #[arg(long)]
    sidecar: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_scenario(&cli.scenario)?;

    let (mut model, params) = match &cli.bodies {
        Some(path) => {
            let catalog = load_bodies(path)?;
            build_model_with_catalog(&config, &catalog)?
        }
        None => build_model(&config)?,
    };
    let outcome = model.reset(&params);

    for _ in 0..cli.ticks {
        model.update();
    }

    let state = model.state();
    let elements = OrbitalElements::from_state(state, model.primary_mu_km3_s2());

    println!("=== Propagation Summary ===");
    println!("Scenario    : {}", config.name);
    println!("Integrator  : {}", model.integrator().as_str());
    println!(
        "Ticks       : {} x {:.1} s (time scale {:.0})",
        cli.ticks,
        model.dt_s(),
        model.time_scale()
    );
    println!(
        "Sim elapsed : {:.2} days ({:.0} s)",
        seconds_to_days(model.time_s()),
        model.time_s()
    );
    match outcome {
        AlignmentOutcome::Aligned(solution) => println!(
            "Assist      : {} phased to {:.4} rad, intercept in {:.2} days",
            params.assist_target.as_str(),
            solution.phase_angle_rad,
            seconds_to_days(solution.intercept_time_s)
        ),
        AlignmentOutcome::NoEncounter => println!(
            "Assist      : no encounter with {} inside the search horizon",
            params.assist_target.as_str()
        ),
        AlignmentOutcome::NotRequested => {}
    }
    println!("{}", elements);

    if let Some(path) = &cli.output {
        let mut writer = trajectory::writer_for_path(path)?;
        trajectory::write_header(writer.as_mut())?;
        write_buffer(writer.as_mut(), "ship", model.trajectory())?;
        write_buffer(writer.as_mut(), "earth", model.earth_trajectory())?;
        write_buffer(writer.as_mut(), "jupiter", model.jupiter_trajectory())?;
        writer.flush()?;
        if path.as_os_str() != "-" {
            println!("Trajectories: {}", path.display());
        }
    }

    if let Some(path) = &cli.sidecar {
        let generated_utc = Utc::now().to_rfc3339();
        let meta = Metadata {
            scenario: &config.name,
            generated_utc: &generated_utc,
            integrator: model.integrator().as_str(),
        };
        let stats = RunStats {
            ticks: cli.ticks,
            dt_s: model.dt_s(),
            time_scale: model.time_scale(),
            elapsed_s: model.time_s(),
        };
        let ship = StateSummary {
            position_km: [state.position_km.x, state.position_km.y],
            velocity_km_s: [state.velocity_km_s.x, state.velocity_km_s.y],
        };
        let orbit = orbit_summary(&elements);
        let alignment = match outcome {
            AlignmentOutcome::Aligned(solution) => Some(AlignmentSummary {
                phase_angle_rad: solution.phase_angle_rad,
                intercept_time_s: solution.intercept_time_s,
                ship_angle_rad: solution.ship_angle_rad,
                encounter_radius_km: solution.encounter_radius_km,
                integration_steps: solution.integration_steps,
            }),
            _ => None,
        };
        write_run_sidecar(path, &meta, &stats, &ship, &orbit, alignment.as_ref())?;
        println!("Run summary : {}", path.display());
    }

    Ok(())
}

fn write_buffer(
    writer: &mut dyn Write,
    body: &str,
    buffer: &TrajectoryBuffer,
) -> std::io::Result<()> {
    for (point_index, point) in buffer.iter().enumerate() {
        Record {
            body,
            point_index,
            x_km: point.x,
            y_km: point.y,
            is_break: TrajectoryBuffer::is_break_point(*point),
        }
        .write_to(writer)?;
    }
    Ok(())
}

fn orbit_summary(elements: &OrbitalElements) -> OrbitSummary {
    OrbitSummary {
        radius_km: elements.radius_km,
        speed_km_s: elements.speed_km_s,
        specific_energy_km2_s2: elements.specific_energy_km2_s2,
        angular_momentum_km2_s: elements.angular_momentum_km2_s,
        semi_major_axis_km: elements.semi_major_axis_km,
        eccentricity: elements.eccentricity,
        periapsis_km: elements.periapsis_km,
        apoapsis_km: elements.apoapsis_km,
        true_anomaly_rad: elements.true_anomaly_rad,
        class: elements.class.to_string(),
    }
}
