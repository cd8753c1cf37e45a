mod error;

use clap::{Parser, Subcommand};
use lab_core::units::si;
use lab_reduce::{GravityConfig, estimate_gravity, table};
use lab_sim::config as scenario;
use lab_sim::{Frame, PendulaConfig, SnookerConfig, frames_csv, run_pendula, run_snooker};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use crate::error::{CliError, CliResult};

#[derive(Parser)]
#[command(name = "lab-cli")]
#[command(about = "Pendulum lab reduction and lecture demonstrations", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate g from a pendulum-period sample file
    Gravity {
        /// CSV file with `time` and `nattempts` columns
        samples: PathBuf,
        /// YAML file with `length_cm` / `dlength_cm`
        #[arg(long)]
        config: Option<PathBuf>,
        /// Pendulum length in cm (overrides config)
        #[arg(long)]
        length_cm: Option<f64>,
        /// Pendulum length uncertainty in cm (overrides config)
        #[arg(long)]
        dlength_cm: Option<f64>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Integrate two independent pendula and export the bob positions
    Pendula {
        /// YAML scenario file (defaults to the lecture setup)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Integrate two colliding discs and export their positions
    Snooker {
        /// YAML scenario file (defaults to the lecture setup)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> CliResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Gravity {
            samples,
            config,
            length_cm,
            dlength_cm,
            json,
        } => cmd_gravity(&samples, config.as_deref(), length_cm, dlength_cm, json),
        Commands::Pendula { config, output } => cmd_pendula(config.as_deref(), output.as_deref()),
        Commands::Snooker { config, output } => cmd_snooker(config.as_deref(), output.as_deref()),
    }
}

fn cmd_gravity(
    samples: &Path,
    config: Option<&Path>,
    length_cm: Option<f64>,
    dlength_cm: Option<f64>,
    json: bool,
) -> CliResult<()> {
    let mut cfg = match config {
        Some(path) => GravityConfig::load_yaml(path)?,
        None => GravityConfig::default(),
    };
    if let Some(l) = length_cm {
        cfg.length_cm = l;
    }
    if let Some(dl) = dlength_cm {
        cfg.dlength_cm = dl;
    }

    let table = table::load(samples)?;
    let estimate = estimate_gravity(&table, &cfg)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&estimate.report())?);
    } else {
        println!("{}", estimate);
    }
    Ok(())
}

fn cmd_pendula(config: Option<&Path>, output: Option<&Path>) -> CliResult<()> {
    let cfg: PendulaConfig = match config {
        Some(path) => scenario::load_yaml(path)?,
        None => PendulaConfig::default(),
    };
    let run = run_pendula(&cfg)?;
    write_frames(&run.frames(), output)
}

fn cmd_snooker(config: Option<&Path>, output: Option<&Path>) -> CliResult<()> {
    let cfg: SnookerConfig = match config {
        Some(path) => scenario::load_yaml(path)?,
        None => SnookerConfig::default(),
    };
    let run = run_snooker(&cfg)?;
    write_frames(&run.frames(), output)?;

    if output.is_some() {
        if run.events.is_empty() {
            println!("No collision within {:.2} s", cfg.t_stop_s);
        }
        for ev in &run.events {
            println!("initial angle = {:.2} [deg]", cfg.alpha_deg);
            println!("scattering angle = {:.2} [deg]", ev.scattering_deg);
            println!(
                "  at t = {:.2} s, contact normal = {:.2} [deg]",
                ev.t_s,
                si::degrees(lab_core::rad(ev.beta_rad))
            );
        }
    }
    Ok(())
}

fn write_frames(frames: &[Frame], output: Option<&Path>) -> CliResult<()> {
    let csv = frames_csv(frames);

    if let Some(path) = output {
        std::fs::write(path, csv).map_err(|source| CliError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(samples = frames.len(), path = %path.display(), "wrote trajectory");
        println!("✓ Exported {} samples to {}", frames.len(), path.display());
    } else {
        print!("{}", csv);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frames_are_written_to_output_file() {
        let dir = std::env::temp_dir().join("lab_cli_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("frames.csv");
        let frames = [Frame {
            t: 0.0,
            p1: [-0.4, 0.0],
            p2: [0.0, 0.0],
        }];

        write_frames(&frames, Some(&path)).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "t,x1,y1,x2,y2\n0,-0.4,0,0,0\n");
    }

    #[test]
    fn unwritable_output_reports_path() {
        let path = Path::new("/nonexistent/dir/frames.csv");
        let err = write_frames(&[], Some(path)).unwrap_err();
        assert!(matches!(err, CliError::Write { .. }));
    }
}
