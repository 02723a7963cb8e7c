use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use n8n_node_types::{
    NodePackage, NodeTypeReport, denormalize_node_type, get_node_type_variations,
    json_output::LintJsonOutput,
    lint::lint_workflow,
    loader::{
        load_workflow_from_path, load_workflow_from_str_with_source,
        load_workflow_value_from_path,
    },
    normalize_batch, normalize_to_full_form, normalize_with_details, normalize_workflow_value,
};
use std::{
    ffi::OsStr,
    fs,
    io::{self, Read, Write},
    path::{Path, PathBuf},
    process,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "N8N_NODE_TYPES_LOG";

#[derive(Parser, Debug)]
#[command(name = "n8n-node-types", about = "Normalize and classify n8n node types")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the full form of each node type.
    Normalize(NormalizeArgs),
    /// Convert a full-form node type back to its short form.
    Denormalize(DenormalizeArgs),
    /// Show every classification for a node type.
    Inspect(InspectArgs),
    /// List the spellings worth trying when looking a node type up.
    Variations(VariationsArgs),
    /// Normalize the node types inside a workflow JSON file.
    Workflow(WorkflowArgs),
    /// Lint workflow files for node-type problems.
    Doctor(DoctorArgs),
}

#[derive(Args, Debug)]
struct NormalizeArgs {
    /// Node types to normalize.
    #[arg(required = true)]
    types: Vec<String>,
    /// Emit per-type normalization details (implies --json).
    #[arg(long)]
    details: bool,
    /// Emit JSON instead of one type per line.
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PackageArg {
    Base,
    Langchain,
}

impl From<PackageArg> for NodePackage {
    fn from(value: PackageArg) -> Self {
        match value {
            PackageArg::Base => NodePackage::Base,
            PackageArg::Langchain => NodePackage::Langchain,
        }
    }
}

#[derive(Args, Debug)]
struct DenormalizeArgs {
    /// Full-form node type.
    node_type: String,
    /// Package whose prefix should be shortened.
    #[arg(long, value_enum, default_value = "base")]
    package: PackageArg,
}

#[derive(Args, Debug)]
struct InspectArgs {
    node_type: String,
    /// Emit the report as JSON.
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct VariationsArgs {
    node_type: String,
}

#[derive(Args, Debug)]
struct WorkflowArgs {
    /// Workflow JSON file.
    file: PathBuf,
    /// Rewrite the file in place instead of printing to stdout.
    #[arg(long)]
    write: bool,
}

#[derive(Args, Debug)]
struct DoctorArgs {
    /// Emit a machine-readable JSON payload for a single workflow.
    #[arg(long)]
    json: bool,
    /// Read the workflow from stdin (requires --json).
    #[arg(long)]
    stdin: bool,
    /// Workflow files or directories to lint.
    #[arg(required_unless_present = "stdin")]
    targets: Vec<PathBuf>,
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Normalize(args) => handle_normalize(args),
        Commands::Denormalize(args) => handle_denormalize(args),
        Commands::Inspect(args) => handle_inspect(args),
        Commands::Variations(args) => handle_variations(args),
        Commands::Workflow(args) => handle_workflow(args),
        Commands::Doctor(args) => handle_doctor(args),
    };
    if let Err(err) = result {
        eprintln!("{err:#}");
        process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn handle_normalize(args: NormalizeArgs) -> Result<()> {
    if args.details {
        let details: Vec<_> = args
            .types
            .iter()
            .map(|t| normalize_with_details(t))
            .collect();
        return write_stdout_line(&serde_json::to_string_pretty(&details)?);
    }
    if args.json {
        let batch = normalize_batch(&args.types);
        return write_stdout_line(&serde_json::to_string_pretty(&batch)?);
    }
    for node_type in &args.types {
        write_stdout_line(&normalize_to_full_form(node_type))?;
    }
    Ok(())
}

fn handle_denormalize(args: DenormalizeArgs) -> Result<()> {
    write_stdout_line(&denormalize_node_type(
        &args.node_type,
        args.package.into(),
    ))
}

fn handle_inspect(args: InspectArgs) -> Result<()> {
    let report = NodeTypeReport::new(&args.node_type);
    if args.json {
        write_stdout_line(&serde_json::to_string_pretty(&report)?)
    } else {
        write_stdout_line(&report.to_text())
    }
}

fn handle_variations(args: VariationsArgs) -> Result<()> {
    for variation in get_node_type_variations(&args.node_type) {
        write_stdout_line(&variation)?;
    }
    Ok(())
}

fn handle_workflow(args: WorkflowArgs) -> Result<()> {
    let value = load_workflow_value_from_path(&args.file)?;
    let normalized = normalize_workflow_value(&value);
    let mut text = serde_json::to_string_pretty(&normalized)?;
    text.push('\n');
    if args.write {
        if normalized == value {
            info!(file = %args.file.display(), "node types already in full form");
            return Ok(());
        }
        fs::write(&args.file, text)
            .with_context(|| format!("failed to write {}", args.file.display()))?;
        write_stdout_line(&format!("Normalized node types in {}", args.file.display()))
    } else {
        write_stdout_line(text.trim_end())
    }
}

fn handle_doctor(args: DoctorArgs) -> Result<()> {
    if args.stdin && !args.json {
        anyhow::bail!("--stdin currently requires --json");
    }
    if args.stdin && !args.targets.is_empty() {
        anyhow::bail!("--stdin cannot be combined with file targets");
    }

    if args.json {
        let stdin_content = if args.stdin {
            Some(read_stdin_workflow()?)
        } else {
            None
        };
        return run_json(&args.targets, stdin_content);
    }

    let mut failures = 0usize;
    for target in &args.targets {
        lint_path(target, &mut failures)?;
    }

    if failures == 0 {
        println!("All workflows valid");
        Ok(())
    } else {
        Err(anyhow::anyhow!("{failures} workflow(s) failed validation"))
    }
}

fn lint_path(path: &Path, failures: &mut usize) -> Result<()> {
    if path.is_file() {
        lint_file(path, failures);
    } else if path.is_dir() {
        let entries = fs::read_dir(path)
            .with_context(|| format!("failed to read directory {}", path.display()))?;
        for entry in entries {
            let entry = entry
                .with_context(|| format!("failed to read directory entry in {}", path.display()))?;
            lint_path(&entry.path(), failures)?;
        }
    } else {
        anyhow::bail!("no such file or directory: {}", path.display());
    }
    Ok(())
}

fn lint_file(path: &Path, failures: &mut usize) {
    if path.extension() != Some(OsStr::new("json")) {
        debug!(path = %path.display(), "skipping non-JSON file");
        return;
    }

    match load_workflow_from_path(path) {
        Ok(workflow) => {
            let errors = lint_workflow(&workflow);
            if errors.is_empty() {
                println!("OK  {} ({} nodes)", path.display(), workflow.nodes.len());
            } else {
                *failures += 1;
                eprintln!("ERR {}:", path.display());
                for err in errors {
                    eprintln!("  {err}");
                }
            }
        }
        Err(err) => {
            *failures += 1;
            eprintln!("ERR {}: {err}", path.display());
        }
    }
}

fn run_json(targets: &[PathBuf], stdin_content: Option<String>) -> Result<()> {
    let (content, source) = if let Some(stdin_workflow) = stdin_content {
        (stdin_workflow, "<stdin>".to_string())
    } else {
        if targets.len() != 1 {
            anyhow::bail!("--json mode expects exactly one target file");
        }
        let target = &targets[0];
        if target.is_dir() {
            anyhow::bail!(
                "--json target must be a file, found directory {}",
                target.display()
            );
        }
        let content = fs::read_to_string(target)
            .with_context(|| format!("failed to read {}", target.display()))?;
        (content, target.display().to_string())
    };

    let output = match load_workflow_from_str_with_source(&content, source.clone()) {
        Ok(workflow) => {
            let errors = lint_workflow(&workflow);
            if errors.is_empty() {
                LintJsonOutput::success(Some(source), workflow.nodes.len())
            } else {
                LintJsonOutput::lint_failure(errors, Some(source))
            }
        }
        Err(err) => LintJsonOutput::error(&err, Some(source)),
    };
    let ok = output.ok;
    write_stdout_line(&output.into_string())?;
    if ok {
        Ok(())
    } else {
        process::exit(1);
    }
}

fn read_stdin_workflow() -> Result<String> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .context("failed to read workflow JSON from stdin")?;
    Ok(buf)
}

fn write_stdout_line(line: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    match writeln!(stdout, "{line}") {
        Ok(_) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        Err(e) => Err(e.into()),
    }
}
