use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use ptrguard_core::config::{load_config, Config, DEFAULT_CONFIG_TOML};
use ptrguard_core::orchestrator::{diagnostics_for, run_inference};
use ptrguard_diagnostics::render::format_human;

#[derive(Parser)]
#[command(name = "ptrguard")]
#[command(about = "Nullability inference for pointer-typed function signatures")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Infer slot nullability from an analysis input file
    Infer {
        /// JSON analysis input (symbols, slot counts, evidence samples)
        input: PathBuf,
        /// Output format: human (diagnostics) or json (raw inference records)
        #[arg(long, default_value = "human")]
        format: String,
        /// Include trivial inferences (annotated, no conflicts)
        #[arg(long)]
        trivial: bool,
        /// Suppress per-sample evidence notes
        #[arg(long)]
        no_evidence: bool,
    },
    /// Resolve a type expression to its nullability annotation sequence
    Resolve {
        /// JSON resolve request (alias environment and type expression)
        input: PathBuf,
    },
    /// Initialize ptrguard in the current project
    Init,
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Infer {
            input,
            format,
            trivial,
            no_evidence,
        } => cmd_infer(&input, &format, trivial, no_evidence),
        Commands::Resolve { input } => cmd_resolve(&input),
        Commands::Init => cmd_init(),
    }
}

fn cmd_infer(
    input: &PathBuf,
    format: &str,
    trivial: bool,
    no_evidence: bool,
) -> anyhow::Result<ExitCode> {
    let analysis = ptrguard_ir::load_analysis_input(input)?;

    let start_dir = std::env::current_dir()?;
    let mut config: Config = load_config(&start_dir);
    if trivial {
        config.report.include_trivial = true;
    }
    if no_evidence {
        config.report.show_evidence = false;
    }

    let results = run_inference(&analysis, &config);
    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&results)?),
        "human" => {
            let diags = diagnostics_for(&results, &config);
            print!("{}", format_human(&diags));
        }
        other => anyhow::bail!("unknown format: {other} (expected human or json)"),
    }
    Ok(ExitCode::SUCCESS)
}

fn cmd_resolve(input: &PathBuf) -> anyhow::Result<ExitCode> {
    let request = ptrguard_ir::load_resolve_request(input)?;
    let sequence = ptrguard_resolve::resolve(&request.type_expr, &request.environment)?;
    println!("{}", serde_json::to_string(&sequence)?);
    Ok(ExitCode::SUCCESS)
}

fn cmd_init() -> anyhow::Result<ExitCode> {
    let path = std::env::current_dir()?.join("ptrguard.toml");
    if path.exists() {
        eprintln!("ptrguard.toml already exists");
        return Ok(ExitCode::from(1));
    }
    std::fs::write(&path, DEFAULT_CONFIG_TOML)?;
    println!("created ptrguard.toml");
    Ok(ExitCode::SUCCESS)
}
