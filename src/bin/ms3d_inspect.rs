use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ms3d_tools_lib::ms3d::{self, ModelDocument};
use ms3d_tools_lib::validation::{self, ValidationOptions, ValidationSeverity};

#[derive(Parser)]
#[command(name = "ms3d_inspect")]
#[command(about = "Decode a MilkShape3D (.ms3d) file and report its contents")]
struct Cli {
    /// Input .ms3d file
    input: PathBuf,

    /// Print the decoded model as JSON
    #[arg(long)]
    json: bool,

    /// Only print counts (with --json, print the summary instead of the full model)
    #[arg(long)]
    summary: bool,

    /// Treat out-of-range table indices as errors and exit non-zero
    #[arg(long)]
    strict: bool,

    /// Resolve texture and alpha-map paths against this directory and check they exist
    #[arg(long)]
    texture_root: Option<PathBuf>,

    /// Enable debug logging (RUST_LOG is honoured otherwise)
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(2),
        Err(e) => {
            eprintln!("Failed to load MS3D file: {:?}", e);
            std::process::exit(1);
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Returns `Ok(false)` when strict validation fails.
fn run(cli: &Cli) -> Result<bool> {
    let doc = ms3d::load_ms3d(&cli.input)?;

    let options = if cli.strict {
        ValidationOptions::strict()
    } else {
        ValidationOptions::default()
    };
    let report = validation::validate_document(&doc, &options);

    if cli.json {
        let out = if cli.summary {
            serde_json::to_string_pretty(&doc.summary())?
        } else {
            serde_json::to_string_pretty(&doc)?
        };
        println!("{}", out);
    } else {
        print_report(&doc, cli.summary);
    }

    for item in &report.items {
        let level = match item.severity {
            ValidationSeverity::Error => "error",
            ValidationSeverity::Warning => "warning",
            ValidationSeverity::Info => "info",
        };
        eprintln!("{}: [{}] {}", level, item.code, item.message);
    }

    if let Some(root) = &cli.texture_root {
        check_textures(&doc, root);
    }

    Ok(report.is_valid)
}

fn print_report(doc: &ModelDocument, summary_only: bool) {
    let summary = doc.summary();
    println!("MS3D Header: {}", summary.id);
    println!("MS3D Version: {}", summary.version);
    println!("Num Vertices: {}", summary.vertex_count);
    println!("Num Triangles: {}", summary.triangle_count);
    println!("Num Meshes: {}", summary.mesh_count);
    println!("Num Materials: {}", summary.material_count);
    if summary.trailing_bytes > 0 {
        println!("Trailing bytes: {}", summary.trailing_bytes);
    }

    if summary_only {
        return;
    }

    for (i, mesh) in doc.meshes.iter().enumerate() {
        println!(
            "Mesh {}: Name='{}', NumTriangles={}, MaterialIndex={}, Flags={}",
            i,
            mesh.name,
            mesh.triangle_indices.len(),
            mesh.material_index,
            mesh.flags
        );
    }

    for (i, mat) in doc.materials.iter().enumerate() {
        println!(
            "Material {}: Name='{}', Texture='{}', Alphamap='{}'",
            i, mat.name, mat.texture_path, mat.alpha_map_path
        );
    }
}

fn check_textures(doc: &ModelDocument, root: &Path) {
    for mat in &doc.materials {
        let paths = [
            ("texture", mat.resolve_texture(root)),
            ("alpha map", mat.resolve_alpha_map(root)),
        ];
        for (kind, path) in paths {
            let Some(path) = path else { continue };
            if path.exists() {
                println!("Found {} for '{}': {}", kind, mat.name, path.display());
            } else {
                eprintln!("Missing {} for '{}': {}", kind, mat.name, path.display());
            }
        }
    }
}
