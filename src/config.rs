//! Settings for one conversion run.

use crate::export::{DotConfig, GraphmlConfig};
use crate::model::GraphMeta;
use std::fmt;
use std::path::PathBuf;

/// Document format to produce.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum OutputFormat {
  /// GraphML.
  #[default]
  Graphml,
  /// Graphviz DOT.
  Dot,
}

impl fmt::Display for OutputFormat {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      OutputFormat::Graphml => f.write_str("graphml"),
      OutputFormat::Dot => f.write_str("dot"),
    }
  }
}

/// Configuration for a conversion.
///
/// # Example
///
/// ```rust
/// use lngraph::config::{ConvertConfig, OutputFormat};
///
/// let config = ConvertConfig::new()
///     .with_input("describegraph.json")
///     .with_directed(true)
///     .with_format(OutputFormat::Dot);
/// assert!(config.directed);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvertConfig {
  /// JSON file to read. Required.
  pub input: Option<PathBuf>,
  /// Expand each channel into two directed edges before rendering.
  pub directed: bool,
  /// Output format.
  pub format: OutputFormat,
  /// Graph-level metadata written to the output.
  pub meta: GraphMeta,
  /// GraphML settings, used when `format` is GraphML.
  pub graphml: GraphmlConfig,
  /// DOT settings, used when `format` is DOT.
  pub dot: DotConfig,
}

impl ConvertConfig {
  /// Creates a configuration with defaults and no input.
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  /// Sets the input file.
  #[must_use]
  pub fn with_input(mut self, input: impl Into<PathBuf>) -> Self {
    self.input = Some(input.into());
    self
  }

  /// Enables or disables directed expansion.
  #[must_use]
  pub fn with_directed(mut self, directed: bool) -> Self {
    self.directed = directed;
    self
  }

  /// Sets the output format.
  #[must_use]
  pub fn with_format(mut self, format: OutputFormat) -> Self {
    self.format = format;
    self
  }

  /// Sets the graph metadata.
  #[must_use]
  pub fn with_meta(mut self, meta: GraphMeta) -> Self {
    self.meta = meta;
    self
  }

  /// Sets the GraphML settings.
  #[must_use]
  pub fn with_graphml(mut self, graphml: GraphmlConfig) -> Self {
    self.graphml = graphml;
    self
  }

  /// Sets the DOT settings.
  #[must_use]
  pub fn with_dot(mut self, dot: DotConfig) -> Self {
    self.dot = dot;
    self
  }
}
