use std::collections::BTreeMap;
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(author, version, about = "Summarize a trajectory CSV artifact")]
struct Cli {
    /// Trajectory CSV produced by the propagate tool
    #[arg(long)]
    input: PathBuf,

    /// Fractional margin added around the tight bounds
    #[arg(long, default_value_t = 0.1)]
    margin: f64,
}

#[derive(Default)]
struct BodyStats {
    points: usize,
    breaks: usize,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if !(cli.margin.is_finite() && cli.margin >= 0.0) {
        return Err(anyhow::anyhow!(
            "Margin must be a non-negative finite fraction, got {}",
            cli.margin
        ));
    }
    let mut reader = csv::Reader::from_path(&cli.input)?;

    let mut stats: BTreeMap<String, BodyStats> = BTreeMap::new();
    let mut min_x = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;

    for result in reader.records() {
        let record = result?;
        let body = record.get(0).unwrap_or("").to_string();
        let entry = stats.entry(body).or_default();
        if record.get(4) == Some("true") {
            entry.breaks += 1;
            continue;
        }
        entry.points += 1;
        if let (Some(Ok(x)), Some(Ok(y))) = (
            record.get(2).map(str::parse::<f64>),
            record.get(3).map(str::parse::<f64>),
        ) {
            if x.is_finite() && y.is_finite() {
                min_x = min_x.min(x);
                max_x = max_x.max(x);
                min_y = min_y.min(y);
                max_y = max_y.max(y);
            }
        }
    }

    println!("=== Trajectory Summary ===");
    for (body, entry) in &stats {
        println!(
            "{:<8}: {} points, {} breaks",
            body, entry.points, entry.breaks
        );
    }

    if min_x.is_finite() && max_x.is_finite() && min_y.is_finite() && max_y.is_finite() {
        let pad_x = (max_x - min_x).max(1.0) * cli.margin;
        let pad_y = (max_y - min_y).max(1.0) * cli.margin;
        println!(
            "Tight bounds: x [{:.0}, {:.0}] km, y [{:.0}, {:.0}] km",
            min_x, max_x, min_y, max_y
        );
        println!(
            "World bounds: x [{:.0}, {:.0}] km, y [{:.0}, {:.0}] km",
            min_x - pad_x,
            max_x + pad_x,
            min_y - pad_y,
            max_y + pad_y
        );
    } else {
        println!("No finite samples; bounds unavailable.");
    }

    Ok(())
}
