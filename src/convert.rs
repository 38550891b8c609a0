//! # Conversion
//!
//! One run: load, optionally expand, render. The document is built completely in
//! memory, so a failure at any step leaves nothing half-written.

use crate::config::{ConvertConfig, OutputFormat};
use crate::error::{ConvertError, Result};
use crate::expand::expand;
use crate::export::{DotWriter, GraphExporter, GraphmlWriter};
use crate::loader::load_graph;
use crate::model::{Graph, GraphEdge};
use crate::schema::KeyRegistry;
use tracing::info;

/// Renders an already loaded graph according to `config`.
///
/// Expansion is applied when `config.directed` is set. `config.input` is ignored.
///
/// # Errors
///
/// Returns [`ConvertError::Serialization`] if rendering fails.
pub fn render(graph: &Graph, config: &ConvertConfig) -> Result<String> {
  let registry = KeyRegistry::lightning();

  if config.directed {
    let directed = expand(graph);
    render_with(&directed, &registry, config)
  } else {
    render_with(graph, &registry, config)
  }
}

fn render_with<E: GraphEdge>(
  graph: &Graph<E>,
  registry: &KeyRegistry,
  config: &ConvertConfig,
) -> Result<String> {
  match config.format {
    OutputFormat::Graphml => GraphmlWriter::new(config.graphml.clone()).export(graph, registry),
    OutputFormat::Dot => DotWriter::new(config.dot.clone()).export(graph, registry),
  }
}

/// Reads `config.input` and renders it.
///
/// # Errors
///
/// - [`ConvertError::Config`] if no input file is configured.
/// - [`ConvertError::Io`] or [`ConvertError::Parse`] if the input cannot be loaded.
/// - [`ConvertError::Serialization`] if rendering fails.
///
/// # Example
///
/// ```rust
/// use lngraph::{convert, ConvertConfig, ConvertError};
///
/// let err = convert(&ConvertConfig::new()).unwrap_err();
/// assert!(matches!(err, ConvertError::Config(_)));
/// ```
pub fn convert(config: &ConvertConfig) -> Result<String> {
  let input = config
    .input
    .as_deref()
    .ok_or_else(|| ConvertError::config("no input file specified"))?;

  let graph = load_graph(input, config.meta.clone())?;
  let document = render(&graph, config)?;

  info!(
    format = %config.format,
    directed = config.directed,
    bytes = document.len(),
    "converted channel graph"
  );
  Ok(document)
}
