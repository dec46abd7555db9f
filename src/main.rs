//! circuit-vis - Main Entry Point
//!
//! Generates flowcharts for separation circuits.
//!
//! # Usage
//!
//! ```bash
//! # Decode a literal circuit vector to DOT on stdout
//! circuit-vis vector 0 3 1 3 2 3 5 4 7 6 3 3 8
//!
//! # Decode a vector/weights data file and write JSON
//! circuit-vis --format json --output circuit.json data circuit.txt
//!
//! # Parse a text-grammar file
//! circuit-vis text circuit.gv | dot -Tpng -o circuit.png
//!
//! # Show the effective configuration
//! circuit-vis --dump-config
//! ```

use anyhow::Context;
use circuit_vis::{AppConfig, CircuitSource, FlowchartJob, OutputFormat};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

#[derive(Parser)]
#[command(name = "circuit-vis")]
#[command(about = "Generate flowcharts for separation circuits")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Write the rendered graph here instead of stdout
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Output format (dot or json); defaults to the configured one
    #[arg(short, long, global = true)]
    format: Option<OutputFormat>,

    /// Also write logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    dump_config: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a literal circuit vector
    Vector {
        /// Feed unit followed by (primary, secondary) destination pairs
        #[arg(required = true, num_args = 1..)]
        values: Vec<u32>,
    },

    /// Decode a data file: vector on the first line, optional weights on the second
    Data {
        path: PathBuf,
    },

    /// Parse a text-grammar file (`A -> B [label=conc]`)
    Text {
        path: PathBuf,
    },
}

impl Commands {
    fn source(self) -> CircuitSource {
        match self {
            Commands::Vector { values } => CircuitSource::Vector(values),
            Commands::Data { path } => CircuitSource::DataFile(path),
            Commands::Text { path } => CircuitSource::TextFile(path),
        }
    }
}

fn init_logging(log_file: Option<&Path>) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,circuit_vis=debug"));

    let (file_layer, guard) = match log_file {
        Some(path) => {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            let name = path
                .file_name()
                .with_context(|| format!("Invalid log file path {:?}", path))?;
            let appender = tracing_appender::rolling::never(dir, name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(writer)
                .boxed();
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .init();

    Ok(guard)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Held until exit so buffered log lines are flushed
    let _guard = init_logging(cli.log_file.as_deref())?;

    let config = AppConfig::resolve(cli.config.as_deref()).context("Failed to load config")?;

    if cli.dump_config {
        println!("{}", config.to_json()?);
        return Ok(());
    }

    let Some(command) = cli.command else {
        anyhow::bail!("No input given; use `vector`, `data` or `text` (see --help)");
    };

    let format = cli.format.unwrap_or(config.render.format);
    let job = FlowchartJob::new(&config);
    let renderer = job.renderer(format);
    let bytes = job
        .run(&command.source(), renderer.as_ref())
        .context("Failed to generate flowchart")?;

    match &cli.output {
        Some(path) => {
            std::fs::write(path, &bytes)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Wrote {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&bytes)?;
            stdout.flush()?;
        }
    }

    Ok(())
}
