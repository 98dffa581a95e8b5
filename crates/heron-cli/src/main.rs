use clap::Parser;
use heron::acyclic;
use heron::{Direction, LayoutRequest, LayoutResult};
use serde::Serialize;
use serde_json::Value;
use std::io::{Read, Write};
use std::path::PathBuf;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid layout request: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Layout(#[from] heron::Error),
}

impl CliError {
    /// Machine-readable form for `--error-json`.
    fn to_json(&self) -> Value {
        match self {
            CliError::Layout(err) => serde_json::to_value(err)
                .unwrap_or_else(|_| serde_json::json!({ "kind": "Layout", "message": err.to_string() })),
            CliError::Io(err) => serde_json::json!({ "kind": "Io", "message": err.to_string() }),
            CliError::Json(err) => {
                serde_json::json!({ "kind": "InvalidRequest", "message": err.to_string() })
            }
        }
    }
}

/// Lay out a flow graph given as JSON.
///
/// The input is a layout request: `{"nodes": [{"id": ...}], "edges": [{"source": ..., "target":
/// ...}], "config": {...}}`. The result (node boxes, edge routes and the diagram size) is written
/// as JSON.
#[derive(Parser, Debug)]
#[command(name = "heron", author, version, about, long_about)]
struct Args {
    /// Request file; `-` or nothing reads stdin
    input: Option<String>,

    /// Override the request's layout direction (TB or LR)
    #[arg(short, long)]
    direction: Option<Direction>,

    /// Drop back edges before layout instead of failing on cycles
    #[arg(long)]
    break_cycles: bool,

    /// Lay out graphs without edges as a single rank instead of returning an empty result
    #[arg(long)]
    allow_edgeless: bool,

    /// Pretty-print the output JSON
    #[arg(long)]
    pretty: bool,

    /// Write the result here instead of stdout
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Report failures as a JSON object on stdout
    #[arg(long)]
    error_json: bool,

    /// Log level (off, error, warn, info, debug, trace); RUST_LOG takes precedence
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String, CliError> {
    Ok(if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    })
}

fn write_output(out: Option<&PathBuf>, text: &str) -> Result<(), CliError> {
    match out {
        Some(path) => {
            std::fs::write(path, format!("{text}\n"))?;
            info!(path = %path.display(), "wrote layout");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{text}")?;
        }
    }
    Ok(())
}

fn set_direction(request: &mut Value, direction: Direction) {
    let Some(obj) = request.as_object_mut() else {
        return;
    };
    let config = obj
        .entry("config")
        .or_insert_with(|| Value::Object(serde_json::Map::new()));
    if let Some(config) = config.as_object_mut() {
        config.insert("direction".to_string(), Value::from(direction.as_str()));
    }
}

fn build_request(args: &Args, text: &str) -> Result<LayoutRequest, CliError> {
    let mut value: Value = serde_json::from_str(text)?;
    // Override before deserializing so separations the request leaves out follow the new
    // direction.
    if let Some(direction) = args.direction {
        set_direction(&mut value, direction);
    }
    let mut request: LayoutRequest = serde_json::from_value(value)?;
    if args.allow_edgeless {
        request.config.require_edges = false;
    }
    if args.break_cycles {
        let kept = acyclic::break_cycles(&request.nodes, &request.edges);
        let dropped = request.edges.len() - kept.len();
        if dropped > 0 {
            warn!(dropped, "dropped back edges to break cycles");
        }
        request.edges = kept;
    }
    Ok(request)
}

fn run(args: &Args) -> Result<(), CliError> {
    let text = read_input(args.input.as_deref())?;
    let request = build_request(args, &text)?;
    debug!(
        nodes = request.nodes.len(),
        edges = request.edges.len(),
        direction = %request.config.direction,
        "parsed request"
    );

    let result: LayoutResult = heron::layout_request(&request)?;
    info!(
        nodes = result.nodes.len(),
        width = result.width,
        height = result.height,
        "layout done"
    );

    let text = to_json(&result, args.pretty)?;
    write_output(args.out.as_ref(), &text)
}

fn main() {
    let args = Args::parse();
    init_tracing(&args.log_level);

    if let Err(err) = run(&args) {
        if args.error_json {
            let body = serde_json::json!({ "error": err.to_json() });
            println!("{body}");
        } else {
            eprintln!("{err}");
        }
        std::process::exit(1);
    }
}
