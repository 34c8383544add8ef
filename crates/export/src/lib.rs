//! Export helpers for trajectory CSV artifacts and JSON run sidecars.

pub mod trajectory {
    use std::fs::{self, File};
    use std::io::{self, BufWriter, Write};
    use std::path::Path;

    /// Column layout of trajectory CSV artifacts.
    pub const HEADER: &str = "body,point_index,x_km,y_km,is_break";

    /// Create a writer for the target path, handling stdout (`-`) by convention.
    pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
        if path == Path::new("-") {
            return Ok(Box::new(BufWriter::new(io::stdout())));
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = File::create(path)?;
        Ok(Box::new(BufWriter::new(file)))
    }

    /// Write the standard trajectory CSV header.
    pub fn write_header(writer: &mut dyn Write) -> io::Result<()> {
        writeln!(writer, "{}", HEADER)
    }

    /// CSV row for one trajectory sample.
    #[derive(Debug, Clone)]
    pub struct Record<'a> {
        pub body: &'a str,
        pub point_index: usize,
        pub x_km: f64,
        pub y_km: f64,
        pub is_break: bool,
    }

    impl<'a> Record<'a> {
        /// Serialize the record to CSV, matching the standard header ordering.
        ///
        /// Break rows leave their coordinate cells empty.
        pub fn write_to(&self, writer: &mut dyn Write) -> io::Result<()> {
            if self.is_break {
                writeln!(writer, "{},{},,,true", self.body, self.point_index)
            } else {
                writeln!(
                    writer,
                    "{},{},{:.3},{:.3},false",
                    self.body, self.point_index, self.x_km, self.y_km
                )
            }
        }
    }
}

pub mod summary {
    use serde::Serialize;
    use serde_json::to_writer_pretty;
    use std::fs::{self, File};
    use std::io;
    use std::path::Path;

    /// Ship state snapshot in a run sidecar.
    #[derive(Debug, Clone, Serialize)]
    pub struct StateSummary {
        pub position_km: [f64; 2],
        pub velocity_km_s: [f64; 2],
    }

    /// Orbital-elements snapshot in a run sidecar.
    #[derive(Debug, Clone, Serialize)]
    pub struct OrbitSummary {
        pub radius_km: f64,
        pub speed_km_s: f64,
        pub specific_energy_km2_s2: f64,
        pub angular_momentum_km2_s: f64,
        pub semi_major_axis_km: f64,
        pub eccentricity: f64,
        pub periapsis_km: f64,
        pub apoapsis_km: f64,
        pub true_anomaly_rad: f64,
        pub class: String,
    }

    /// Alignment block in a run sidecar.
    #[derive(Debug, Clone, Serialize)]
    pub struct AlignmentSummary {
        pub phase_angle_rad: f64,
        pub intercept_time_s: f64,
        pub ship_angle_rad: f64,
        pub encounter_radius_km: f64,
        pub integration_steps: usize,
    }

    /// Metadata describing the run.
    #[derive(Debug)]
    pub struct Metadata<'a> {
        pub scenario: &'a str,
        pub generated_utc: &'a str,
        pub integrator: &'a str,
    }

    /// Numbers characterizing the run itself.
    #[derive(Debug, Clone)]
    pub struct RunStats {
        pub ticks: u64,
        pub dt_s: f64,
        pub time_scale: f64,
        pub elapsed_s: f64,
    }

    #[derive(Serialize)]
    struct RunSidecar<'a> {
        scenario: &'a str,
        generated_utc: &'a str,
        integrator: &'a str,
        ticks: u64,
        dt_s: f64,
        time_scale: f64,
        elapsed_s: f64,
        elapsed_days: f64,
        ship: &'a StateSummary,
        orbit: &'a OrbitSummary,
        #[serde(skip_serializing_if = "Option::is_none")]
        alignment: Option<&'a AlignmentSummary>,
    }

    /// Write the JSON sidecar describing a propagation run.
    pub fn write_run_sidecar(
        output: &Path,
        meta: &Metadata<'_>,
        stats: &RunStats,
        ship: &StateSummary,
        orbit: &OrbitSummary,
        alignment: Option<&AlignmentSummary>,
    ) -> io::Result<()> {
        if let Some(parent) = output.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let sidecar = RunSidecar {
            scenario: meta.scenario,
            generated_utc: meta.generated_utc,
            integrator: meta.integrator,
            ticks: stats.ticks,
            dt_s: stats.dt_s,
            time_scale: stats.time_scale,
            elapsed_s: stats.elapsed_s,
            elapsed_days: stats.elapsed_s / 86_400.0,
            ship,
            orbit,
            alignment,
        };

        to_writer_pretty(File::create(output)?, &sidecar)?;
        Ok(())
    }
}
