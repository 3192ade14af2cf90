//! LED Wall Curvature Calculator
//!
//! Entry point for the ledwall-curvature command line tool.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use ledwall_curvature::config::ProjectConfig;
use ledwall_curvature::designer::WallDesigner;
use ledwall_curvature::export::{load_project, save_project, ResultExporter};
use ledwall_curvature::{CalculationResult, Section};

/// Curved LED wall dimension calculator.
#[derive(Parser)]
#[command(name = "ledwall-curvature")]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate a wall from sections given on the command line.
    Calc {
        /// Section as <modules>:<angle per module in degrees>, repeatable.
        #[arg(short, long = "section", value_name = "MODULES:ANGLE", allow_hyphen_values = true)]
        sections: Vec<Section>,

        /// Print the full result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Calculate a wall from a project file (.json or XML).
    Project {
        /// Project file to load.
        path: PathBuf,

        /// Write the result to this file (.json or XML).
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the full result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Write a project file, from the given sections or the default layout.
    Init {
        /// Project file to create.
        path: PathBuf,

        /// Project name.
        #[arg(short, long, default_value = "Untitled Wall")]
        name: String,

        /// Section as <modules>:<angle per module in degrees>, repeatable.
        #[arg(short, long = "section", value_name = "MODULES:ANGLE", allow_hyphen_values = true)]
        sections: Vec<Section>,
    },
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Calc { sections, json } => {
            let mut designer = if sections.is_empty() {
                log::info!("No sections given, using the default layout");
                WallDesigner::new()
            } else {
                WallDesigner::from_sections(sections)
            };
            print_result(designer.calculate(), json)?;
        }
        Commands::Project { path, output, json } => {
            let project = load_project(&path)
                .with_context(|| format!("Failed to load project {}", path.display()))?;
            let mut designer = WallDesigner::from_project(&project);
            let result = designer.calculate();

            print_result(result, json)?;

            if let Some(output) = output {
                ResultExporter::export(result, &output)
                    .with_context(|| format!("Failed to export result to {}", output.display()))?;
            }
        }
        Commands::Init {
            path,
            name,
            sections,
        } => {
            let project = if sections.is_empty() {
                ProjectConfig::new(name)
            } else {
                WallDesigner::from_sections(sections).to_project(name)
            };
            log::info!(
                "Writing project '{}' with {} modules",
                project.name,
                project.total_modules()
            );
            save_project(&project, &path)
                .with_context(|| format!("Failed to write project {}", path.display()))?;
        }
    }

    Ok(())
}

fn print_result(result: &CalculationResult, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", ResultExporter::to_json(result)?);
        return Ok(());
    }

    println!("{}", result);
    if !result.has_visible_shape() {
        log::warn!("Wall has no horizontal extent, nothing to draw");
    }
    Ok(())
}
