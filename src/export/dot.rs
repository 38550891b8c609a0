//! Graphviz DOT output.
//!
//! Node ids are public keys and are written quoted, so they need no sanitizing.
//! Every present attribute of an edge becomes a DOT attribute; the channel id is
//! written as `key`.

use super::GraphExporter;
use crate::attributes::present;
use crate::error::{ConvertError, Result};
use crate::model::{Graph, GraphEdge};
use crate::schema::KeyRegistry;
use std::fmt::{self, Write};
use tracing::debug;

/// Configuration for DOT output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotConfig {
  /// Graph name after `digraph` / `graph`.
  pub name: String,
}

impl Default for DotConfig {
  fn default() -> Self {
    Self {
      name: "LightningNetwork".to_string(),
    }
  }
}

impl DotConfig {
  /// Sets the graph name.
  #[must_use]
  pub fn with_name(mut self, name: impl Into<String>) -> Self {
    self.name = name.into();
    self
  }
}

/// Writes graphs as Graphviz DOT.
#[derive(Debug, Clone, Default)]
pub struct DotWriter {
  config: DotConfig,
}

impl DotWriter {
  /// Creates a writer with the given configuration.
  #[must_use]
  pub fn new(config: DotConfig) -> Self {
    Self { config }
  }
}

impl GraphExporter for DotWriter {
  fn export<E: GraphEdge>(&self, graph: &Graph<E>, _registry: &KeyRegistry) -> Result<String> {
    let mut output = String::new();
    self
      .write_dot(graph, &mut output)
      .map_err(ConvertError::serialization)?;

    debug!(
      nodes = graph.num_nodes(),
      edges = graph.num_edges(),
      bytes = output.len(),
      "rendered dot"
    );
    Ok(output)
  }
}

impl DotWriter {
  fn write_dot<E: GraphEdge>(&self, graph: &Graph<E>, output: &mut String) -> fmt::Result {
    let (kind, arrow) = if E::DIRECTED {
      ("digraph", "->")
    } else {
      ("graph", "--")
    };

    writeln!(output, "{} \"{}\" {{", kind, escape_dot_string(&self.config.name))?;

    for node in &graph.nodes {
      write!(output, "  \"{}\"", escape_dot_string(&node.pub_key))?;
      match present(&node.data).find(|d| d.key == "name") {
        Some(alias) => writeln!(
          output,
          " [label=\"{}\"];",
          escape_dot_string(&alias.value.to_string())
        )?,
        None => writeln!(output, ";")?,
      }
    }

    for edge in &graph.edges {
      write!(
        output,
        "  \"{}\" {} \"{}\" [key=\"{}\"",
        escape_dot_string(edge.source()),
        arrow,
        escape_dot_string(edge.target()),
        escape_dot_string(edge.id())
      )?;
      for d in present(edge.data()) {
        write!(
          output,
          ", {}=\"{}\"",
          d.key,
          escape_dot_string(&d.value.to_string())
        )?;
      }
      writeln!(output, "];")?;
    }

    writeln!(output, "}}")
  }
}

/// Escapes special characters in a string for use inside a quoted DOT id.
fn escape_dot_string(s: &str) -> String {
  s.replace('\\', "\\\\")
    .replace('"', "\\\"")
    .replace('\n', "\\n")
    .replace('\r', "\\r")
    .replace('\t', "\\t")
}
