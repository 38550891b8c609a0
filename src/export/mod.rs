//! # Graph Exporters
//!
//! Renders a channel graph, together with its key declarations, into a document.
//!
//! ## Supported Formats
//!
//! - **GraphML**: the primary output, readable by Gephi, yEd, NetworkX and igraph
//! - **DOT**: Graphviz DOT for quick visual inspection
//!
//! Exporters render the whole document into memory and return it. They consume
//! the model and never change it. Attributes with an empty string value are
//! skipped by every exporter (see [`crate::attributes::present`]).

mod dot;
mod graphml;

pub use dot::{DotConfig, DotWriter};
pub use graphml::{DEFAULT_FOOTER, DEFAULT_HEADER, GraphmlConfig, GraphmlWriter};

use crate::error::Result;
use crate::model::{Graph, GraphEdge};
use crate::schema::KeyRegistry;

/// Converts a graph into a serialized document.
///
/// Implementations are generic over the edge shape, so the same exporter renders
/// undirected and expanded graphs.
///
/// # Example
///
/// ```rust
/// use lngraph::export::{GraphExporter, GraphmlWriter};
/// use lngraph::model::Graph;
/// use lngraph::schema::KeyRegistry;
///
/// let graph: Graph = Graph::default();
/// let xml = GraphmlWriter::default()
///     .export(&graph, &KeyRegistry::lightning())
///     .unwrap();
/// assert!(xml.ends_with("</graphml>\n"));
/// ```
pub trait GraphExporter {
  /// Renders `graph` with the keys in `registry`.
  ///
  /// # Errors
  ///
  /// Returns [`crate::ConvertError::Serialization`] if the document cannot be
  /// produced.
  fn export<E: GraphEdge>(&self, graph: &Graph<E>, registry: &KeyRegistry) -> Result<String>;
}
