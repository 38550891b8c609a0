//! lngraph CLI entrypoint

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, ValueEnum};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use lngraph::export::GraphmlConfig;
use lngraph::model::GraphMeta;
use lngraph::{ConvertConfig, OutputFormat, convert};

#[derive(Parser, Debug)]
#[command(name = "lngraph")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Convert a Lightning channel graph to GraphML")]
#[command(long_about = r#"
Reads the JSON written by `lncli describegraph` and prints the channel graph
as GraphML (or Graphviz DOT) on standard output.

EXAMPLES:
  lncli describegraph > graph.json
  lngraph --input graph.json > graph.graphml

  # one edge per direction, each with the policy of the forwarding node
  lngraph --input graph.json --directed > directed.graphml

ENVIRONMENT VARIABLES:
  LNGRAPH_INPUT   Input file
  LNGRAPH_FORMAT  Output format (graphml, dot)
  RUST_LOG        Log filter, logs go to stderr
"#)]
struct Cli {
  /// Channel graph JSON file
  #[arg(short, long, env = "LNGRAPH_INPUT")]
  input: Option<PathBuf>,

  /// Expand every channel into two directed edges
  #[arg(short, long)]
  directed: bool,

  /// Output format
  #[arg(short, long, value_enum, env = "LNGRAPH_FORMAT", default_value_t = FormatArg::Graphml)]
  format: FormatArg,

  /// Graph id written to the output
  #[arg(long, default_value = "LND")]
  graph_id: String,

  /// Write GraphML without indentation
  #[arg(long)]
  compact: bool,

  /// Increase log verbosity (-v info, -vv debug, -vvv trace)
  #[arg(short, long, action = clap::ArgAction::Count)]
  verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormatArg {
  Graphml,
  Dot,
}

impl From<FormatArg> for OutputFormat {
  fn from(arg: FormatArg) -> Self {
    match arg {
      FormatArg::Graphml => OutputFormat::Graphml,
      FormatArg::Dot => OutputFormat::Dot,
    }
  }
}

impl Cli {
  /// Rejects option combinations the argument parser cannot express.
  fn validate(&self) -> std::result::Result<(), clap::Error> {
    if self.compact && self.format == FormatArg::Dot {
      return Err(Cli::command().error(
        ErrorKind::ArgumentConflict,
        "--compact only applies to --format graphml",
      ));
    }
    Ok(())
  }

  fn into_config(self) -> ConvertConfig {
    let mut config = ConvertConfig::new()
      .with_directed(self.directed)
      .with_format(self.format.into())
      .with_meta(GraphMeta::default().with_id(self.graph_id));

    if let Some(input) = self.input {
      config = config.with_input(input);
    }
    if self.compact {
      config = config.with_graphml(GraphmlConfig::default().with_indent(None));
    }
    config
  }
}

fn init_tracing(verbose: u8) {
  let filter = match verbose {
    0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    1 => EnvFilter::new("info"),
    2 => EnvFilter::new("debug"),
    _ => EnvFilter::new("trace"),
  };

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_target(false)
    .with_writer(std::io::stderr)
    .init();
}

fn run(cli: Cli) -> Result<()> {
  let config = cli.into_config();
  debug!(?config, "starting conversion");

  let document = convert(&config)?;

  let mut stdout = std::io::stdout().lock();
  stdout
    .write_all(document.as_bytes())
    .and_then(|()| stdout.flush())
    .context("failed to write output")?;
  Ok(())
}

fn main() -> ExitCode {
  let cli = Cli::parse();
  if let Err(err) = cli.validate() {
    err.exit();
  }
  init_tracing(cli.verbose);

  match run(cli) {
    Ok(()) => ExitCode::SUCCESS,
    Err(err) => {
      eprintln!("error: {:#}", err);
      ExitCode::FAILURE
    }
  }
}
