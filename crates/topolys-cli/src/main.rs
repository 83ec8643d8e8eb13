//! Topolys command-line entry point

mod surfaces;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use topolys::constants::DEFAULT_TOLERANCE;
use topolys::{FaceId, Model};

use crate::surfaces::{SharedBoundary, add_surface, load_surfaces, shared_boundaries};

#[derive(Parser)]
#[command(name = "topolys")]
#[command(about = "Connect planar building surfaces into a shared topology")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build a model from a JSON surface list and report shared boundaries
    Build {
        /// JSON array of `{name, type, points, holes}` surfaces
        input: PathBuf,
        /// Distance under which two points are the same vertex
        #[arg(long, default_value_t = DEFAULT_TOLERANCE)]
        tolerance: f64,
        /// Write the model as JSON
        #[arg(long)]
        json: Option<PathBuf>,
        /// Write the entity graph as Graphviz
        #[arg(long)]
        dot: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "topolys=info,topolys_cli=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Build {
            input,
            tolerance,
            json,
            dot,
        } => {
            let (model, names, faces) = build(&input, tolerance)?;
            print!("{}", report(&model, &names, &faces));
            if let Some(path) = json {
                write_output(&path, &model.to_json()?)?;
            }
            if let Some(path) = dot {
                write_output(&path, &model.to_graphviz())?;
            }
            Ok(())
        }
    }
}

/// Build a model from every surface in `input`, returning surface names and
/// faces in input order
fn build(input: &Path, tolerance: f64) -> Result<(Model, Vec<String>, Vec<FaceId>)> {
    let surfaces = load_surfaces(input)?;
    let mut model = Model::with_tolerance(tolerance)?;
    tracing::info!(
        "Building {} surfaces from {} (tolerance {})",
        surfaces.len(),
        input.display(),
        tolerance
    );

    let mut faces = Vec::with_capacity(surfaces.len());
    for surface in &surfaces {
        faces.push(add_surface(&mut model, surface)?);
    }
    let names = surfaces.into_iter().map(|s| s.name).collect();
    Ok((model, names, faces))
}

fn report(model: &Model, names: &[String], faces: &[FaceId]) -> String {
    let mut out = format!(
        "{} vertices, {} edges, {} directed edges, {} wires, {} faces\n",
        model.vertices().len(),
        model.edges().len(),
        model.directed_edges().len(),
        model.wires().len(),
        model.faces().len()
    );
    for SharedBoundary {
        first,
        second,
        edges,
        length,
    } in shared_boundaries(model, faces)
    {
        out.push_str(&format!(
            "{} | {}: {} shared edges, length {:.3}\n",
            names[first], names[second], edges, length
        ));
    }
    out
}

fn write_output(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!("Wrote {}", path.display());
    Ok(())
}
