//! # Directed Expansion
//!
//! A channel is undirected, but its two endpoints each set their own fees and
//! limits for traffic they forward out. Expansion makes that asymmetry explicit:
//! every channel becomes two directed edges, one per direction, each carrying the
//! policy of the node the traffic leaves from.
//!
//! ```text
//!   node1 ──(node1_policy)──▶ node2
//!   node2 ──(node2_policy)──▶ node1
//! ```

use crate::attributes::{edge_attributes, policy_attributes};
use crate::model::{DirectedEdge, DirectedGraph, Edge, Graph, NodePolicy};
use tracing::debug;

impl Edge {
  /// Both directions of this channel, `node1 -> node2` first.
  ///
  /// # Example
  ///
  /// ```rust
  /// use lngraph::model::Edge;
  ///
  /// let edge = Edge {
  ///     channel_id: "42".to_string(),
  ///     node1_pub: "A".to_string(),
  ///     node2_pub: "B".to_string(),
  ///     ..Edge::default()
  /// };
  /// let [out, back] = edge.expand();
  /// assert_eq!((out.source.as_str(), out.target.as_str()), ("A", "B"));
  /// assert_eq!((back.source.as_str(), back.target.as_str()), ("B", "A"));
  /// assert_eq!(out.id, back.id);
  /// ```
  #[must_use]
  pub fn expand(&self) -> [DirectedEdge; 2] {
    [
      self.directed(&self.node1_pub, &self.node2_pub, &self.node1_policy),
      self.directed(&self.node2_pub, &self.node1_pub, &self.node2_policy),
    ]
  }

  fn directed(&self, source: &str, target: &str, policy: &NodePolicy) -> DirectedEdge {
    let mut data = edge_attributes(self);
    data.extend(policy_attributes(policy));

    DirectedEdge {
      id: self.channel_id.clone(),
      source: source.to_string(),
      target: target.to_string(),
      data,
    }
  }
}

/// Expands every channel of `graph` into its two directions.
///
/// Nodes and metadata are copied unchanged; the result has exactly twice as many
/// edges as `graph`. The input is left untouched.
#[must_use]
pub fn expand(graph: &Graph) -> DirectedGraph {
  let edges: Vec<DirectedEdge> = graph.edges.iter().flat_map(Edge::expand).collect();

  debug!(
    channels = graph.num_edges(),
    directed_edges = edges.len(),
    "expanded channel graph"
  );

  Graph {
    meta: graph.meta.clone(),
    nodes: graph.nodes.clone(),
    edges,
  }
}
