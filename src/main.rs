use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use log::{debug, LevelFilter};

use tuning_trajectory::editor::format_table;
use tuning_trajectory::{mix_from_percent, CurveKind, Preset, TrajectoryBuilder, Tuning};

/// Morph between musical tuning systems
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the preset tuning systems
    Presets,
    /// Show the ratio table of a preset
    Show {
        /// Preset name or 0-based index
        preset: Preset,
    },
    /// Interpolate between two presets at one mix position
    Morph {
        /// Source preset name or index
        source: Preset,

        /// Destination preset name or index
        dest: Preset,

        /// Mix position, 0 = source, 1 = destination
        #[arg(long, default_value_t = 0.5, conflicts_with = "percent", allow_hyphen_values = true)]
        mix: f64,

        /// Mix position as a 0-100 fader value
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
        percent: Option<u8>,

        /// Interpolation curve: linear, half-cosine, exponential
        #[arg(long, default_value = "linear")]
        curve: CurveKind,
    },
    /// Print a trajectory of evenly spaced tunings between two presets
    Sweep {
        /// Source preset name or index
        source: Preset,

        /// Destination preset name or index
        dest: Preset,

        /// Number of tunings from source to destination inclusive
        #[arg(long, default_value_t = 5)]
        steps: usize,

        /// Interpolation curve: linear, half-cosine, exponential
        #[arg(long, default_value = "linear")]
        curve: CurveKind,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(default_level)
        .parse_default_env()
        .init();

    match args.command {
        Commands::Presets => {
            for preset in Preset::ALL {
                println!("{}: {}", preset.index(), preset.label());
            }
        }
        Commands::Show { preset } => {
            let tuning = Tuning::from_preset(preset)?;
            print_tuning(&preset.to_string(), &tuning, args.json)?;
        }
        Commands::Morph {
            source,
            dest,
            mix,
            percent,
            curve,
        } => {
            let mix = percent.map(mix_from_percent).unwrap_or(mix);
            if !mix.is_finite() {
                bail!("mix position must be a finite number (got {})", mix);
            }
            debug!("morph {} -> {} at {} ({})", source, dest, mix, curve);

            let tuning = TrajectoryBuilder::new(&source.ratios(), &dest.ratios())?
                .curve(curve)
                .at(mix)
                .with_context(|| format!("Failed to morph {} -> {}", source, dest))?;

            let title = format!("{} -> {} @ {} ({})", source, dest, mix, curve);
            print_tuning(&title, &tuning, args.json)?;
        }
        Commands::Sweep {
            source,
            dest,
            steps,
            curve,
        } => {
            let tunings = TrajectoryBuilder::new(&source.ratios(), &dest.ratios())?
                .curve(curve)
                .sweep(steps)
                .with_context(|| format!("Failed to sweep {} -> {}", source, dest))?;

            if args.json {
                println!("{}", serde_json::to_string_pretty(&tunings)?);
            } else {
                for (i, tuning) in tunings.iter().enumerate() {
                    let title = format!("{} -> {} step {}/{} ({})", source, dest, i + 1, steps, curve);
                    print_tuning(&title, tuning, false)?;
                }
            }
        }
    }

    Ok(())
}

fn print_tuning(title: &str, tuning: &Tuning, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(tuning)?);
    } else {
        println!("{}", title);
        println!("{}", format_table(tuning));
    }
    Ok(())
}
