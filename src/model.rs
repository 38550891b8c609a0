//! # Channel Graph Model
//!
//! Typed records for a Lightning channel graph as reported by a node's
//! `describegraph` call, plus the directed form produced by expansion.
//!
//! ## Structure
//!
//! A channel graph consists of:
//! - **Nodes**: network participants identified by their public key
//! - **Edges**: undirected channels, each carrying one routing policy per endpoint
//! - **Directed edges**: one traversal direction of a channel, carrying the policy
//!   of the node the traffic leaves from
//!
//! Both graph shapes share a single container, [`Graph`], parameterised by the
//! edge record. Writers only rely on the [`GraphEdge`] contract, so they render
//! either shape without knowing which one they were handed.
//!
//! Monetary and fee fields are kept as the strings found in the input. They are
//! never parsed, so the output repeats them character for character.

use crate::attributes::Data;
use serde::{Deserialize, Deserializer};

/// Decodes `null` the same way as a missing field.
///
/// lnd reports an unknown policy as `"node1_policy": null`, which would
/// otherwise be rejected for a struct-typed field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
  D: Deserializer<'de>,
  T: Default + Deserialize<'de>,
{
  Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A network address a node advertises.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Address {
  /// Network family, e.g. `tcp`.
  #[serde(deserialize_with = "null_as_default")]
  pub network: String,
  /// Host and port.
  #[serde(deserialize_with = "null_as_default")]
  pub addr: String,
}

/// A participant in the channel graph.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Node {
  /// Unix timestamp of the node's last announcement.
  #[serde(deserialize_with = "null_as_default")]
  pub last_update: i64,
  /// Public key; the node's identity within one graph.
  #[serde(deserialize_with = "null_as_default")]
  pub pub_key: String,
  /// Display name chosen by the operator. Empty when unset.
  #[serde(deserialize_with = "null_as_default")]
  pub alias: String,
  /// Advertised addresses.
  #[serde(alias = "Addresses", deserialize_with = "null_as_default")]
  pub addresses: Vec<Address>,
  /// Display colour hint, e.g. `#3399ff`.
  #[serde(deserialize_with = "null_as_default")]
  pub color: String,
  /// Attributes derived from the typed fields. See [`Node::materialize`].
  #[serde(skip)]
  pub data: Vec<Data>,
}

/// Routing policy a node applies to traffic it forwards out over a channel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NodePolicy {
  /// CLTV delta required by the forwarding node.
  #[serde(deserialize_with = "null_as_default")]
  pub time_lock_delta: i64,
  /// Smallest HTLC accepted, in millisatoshi.
  #[serde(deserialize_with = "null_as_default")]
  pub min_htlc: String,
  /// Fixed fee per forwarded HTLC, in millisatoshi.
  #[serde(deserialize_with = "null_as_default")]
  pub fee_base_msat: String,
  /// Proportional fee, in millionths.
  #[serde(deserialize_with = "null_as_default")]
  pub fee_rate_milli_msat: String,
  /// Whether forwarding in this direction is switched off.
  #[serde(deserialize_with = "null_as_default")]
  pub disabled: bool,
}

/// An undirected channel between two nodes.
///
/// `node1_pub` and `node2_pub` are ordered by the source, not by direction.
/// Each side carries the policy for traffic leaving that side.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Edge {
  /// Short channel id.
  #[serde(deserialize_with = "null_as_default")]
  pub channel_id: String,
  /// Funding outpoint, `txid:index`.
  #[serde(deserialize_with = "null_as_default")]
  pub chan_point: String,
  /// Unix timestamp of the latest channel update.
  #[serde(deserialize_with = "null_as_default")]
  pub last_update: i64,
  /// First endpoint.
  #[serde(deserialize_with = "null_as_default")]
  pub node1_pub: String,
  /// Second endpoint.
  #[serde(deserialize_with = "null_as_default")]
  pub node2_pub: String,
  /// Channel capacity in satoshi.
  #[serde(deserialize_with = "null_as_default")]
  pub capacity: String,
  /// Policy for traffic flowing out of `node1_pub`.
  #[serde(deserialize_with = "null_as_default")]
  pub node1_policy: NodePolicy,
  /// Policy for traffic flowing out of `node2_pub`.
  #[serde(deserialize_with = "null_as_default")]
  pub node2_policy: NodePolicy,
  /// Attributes derived from the typed fields. See [`Edge::materialize`].
  #[serde(skip)]
  pub data: Vec<Data>,
}

/// One traversal direction of a channel.
///
/// Only produced by [`Edge::expand`]. The `id` is the channel id, shared with
/// the opposite direction, so it does not identify the record on its own.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectedEdge {
  /// Channel id of the originating channel.
  pub id: String,
  /// Node the traffic leaves from.
  pub source: String,
  /// Node the traffic arrives at.
  pub target: String,
  /// Shared channel facts followed by the source node's policy.
  pub data: Vec<Data>,
}

/// Graph-level settings written on the `<graph>` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphMeta {
  /// Graph id.
  pub id: String,
  /// `parse.nodeids` hint.
  pub node_ids: String,
  /// `parse.edgeids` hint.
  pub edge_ids: String,
  /// `parse.order` hint.
  pub parse_order: String,
}

impl Default for GraphMeta {
  fn default() -> Self {
    Self {
      id: "LND".to_string(),
      node_ids: "free".to_string(),
      edge_ids: "free".to_string(),
      parse_order: "nodesfirst".to_string(),
    }
  }
}

impl GraphMeta {
  /// Returns the metadata with a different graph id.
  #[must_use]
  pub fn with_id(mut self, id: impl Into<String>) -> Self {
    self.id = id.into();
    self
  }
}

/// A channel graph: metadata, nodes and one kind of edge.
///
/// `Graph` (the default) holds undirected [`Edge`]s as decoded from input;
/// [`DirectedGraph`] holds the result of expansion.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(bound(deserialize = "E: Deserialize<'de>"))]
pub struct Graph<E = Edge> {
  /// Graph-level settings. Not part of the input document.
  #[serde(skip)]
  pub meta: GraphMeta,
  /// All nodes, in input order.
  #[serde(default, deserialize_with = "null_as_default")]
  pub nodes: Vec<Node>,
  /// All edges, in input order.
  #[serde(default, deserialize_with = "null_as_default")]
  pub edges: Vec<E>,
}

/// A graph whose channels have been expanded into both directions.
pub type DirectedGraph = Graph<DirectedEdge>;

impl<E> Default for Graph<E> {
  fn default() -> Self {
    Self::new(GraphMeta::default())
  }
}

impl<E> Graph<E> {
  /// Creates an empty graph with the given metadata.
  #[must_use]
  pub fn new(meta: GraphMeta) -> Self {
    Self {
      meta,
      nodes: Vec::new(),
      edges: Vec::new(),
    }
  }

  /// Number of nodes, always equal to `nodes.len()`.
  #[must_use]
  pub fn num_nodes(&self) -> usize {
    self.nodes.len()
  }

  /// Number of edges, always equal to `edges.len()`.
  #[must_use]
  pub fn num_edges(&self) -> usize {
    self.edges.len()
  }
}

/// What a writer needs from an edge, whichever shape it has.
pub trait GraphEdge {
  /// Whether `source` to `target` is meaningful as a direction.
  const DIRECTED: bool;

  /// Edge id (the channel id).
  fn id(&self) -> &str;

  /// First endpoint, or the origin for directed edges.
  fn source(&self) -> &str;

  /// Second endpoint, or the destination for directed edges.
  fn target(&self) -> &str;

  /// Materialized attributes.
  fn data(&self) -> &[Data];
}

impl GraphEdge for Edge {
  const DIRECTED: bool = false;

  fn id(&self) -> &str {
    &self.channel_id
  }

  fn source(&self) -> &str {
    &self.node1_pub
  }

  fn target(&self) -> &str {
    &self.node2_pub
  }

  fn data(&self) -> &[Data] {
    &self.data
  }
}

impl GraphEdge for DirectedEdge {
  const DIRECTED: bool = true;

  fn id(&self) -> &str {
    &self.id
  }

  fn source(&self) -> &str {
    &self.source
  }

  fn target(&self) -> &str {
    &self.target
  }

  fn data(&self) -> &[Data] {
    &self.data
  }
}
