//! # Attribute Materialization
//!
//! Turns the typed fields of nodes, channels and policies into the generic
//! `key`/`value` list that writers render as `<data>` elements.
//!
//! Materializing always rebuilds the list from the typed fields, so running it
//! again over an unchanged record gives the same list.
//!
//! ## Presence
//!
//! An attribute whose value is the empty string is treated as absent and is never
//! rendered. Every other value is rendered, including `0`, `"0"` and `false`.
//! Writers apply this rule through [`present`].

use crate::model::{Edge, Graph, Node, NodePolicy};
use std::fmt;

/// Value of a single attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataValue {
  /// Text, including numbers kept verbatim from the input.
  String(String),
  /// Integer.
  Int(i64),
  /// Flag.
  Bool(bool),
}

impl DataValue {
  /// Whether the value should be rendered. Only the empty string is absent.
  #[must_use]
  pub fn is_present(&self) -> bool {
    !matches!(self, DataValue::String(s) if s.is_empty())
  }
}

impl fmt::Display for DataValue {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      DataValue::String(s) => f.write_str(s),
      DataValue::Int(n) => write!(f, "{}", n),
      DataValue::Bool(b) => write!(f, "{}", b),
    }
  }
}

impl From<&str> for DataValue {
  fn from(value: &str) -> Self {
    DataValue::String(value.to_string())
  }
}

impl From<String> for DataValue {
  fn from(value: String) -> Self {
    DataValue::String(value)
  }
}

impl From<i64> for DataValue {
  fn from(value: i64) -> Self {
    DataValue::Int(value)
  }
}

impl From<bool> for DataValue {
  fn from(value: bool) -> Self {
    DataValue::Bool(value)
  }
}

/// A `key`/`value` attribute attached to a node or edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Data {
  /// Id of the [`crate::schema::Key`] this value belongs to.
  pub key: String,
  /// The value.
  pub value: DataValue,
}

impl Data {
  /// Creates an attribute.
  #[must_use]
  pub fn new(key: impl Into<String>, value: impl Into<DataValue>) -> Self {
    Self {
      key: key.into(),
      value: value.into(),
    }
  }

  /// Whether this attribute should be rendered.
  #[must_use]
  pub fn is_present(&self) -> bool {
    self.value.is_present()
  }
}

/// Attributes that survive the presence rule, in their original order.
pub fn present(data: &[Data]) -> impl Iterator<Item = &Data> {
  data.iter().filter(|d| d.is_present())
}

/// `pub_key` then `name` (the alias).
#[must_use]
pub fn node_attributes(node: &Node) -> Vec<Data> {
  vec![
    Data::new("pub_key", node.pub_key.as_str()),
    Data::new("name", node.alias.as_str()),
  ]
}

/// Facts shared by both directions of a channel: `chan_point`, `last_update`,
/// `capacity`.
#[must_use]
pub fn edge_attributes(edge: &Edge) -> Vec<Data> {
  vec![
    Data::new("chan_point", edge.chan_point.as_str()),
    Data::new("last_update", edge.last_update),
    Data::new("capacity", edge.capacity.as_str()),
  ]
}

/// A policy flattened into edge attributes.
#[must_use]
pub fn policy_attributes(policy: &NodePolicy) -> Vec<Data> {
  vec![
    Data::new("time_lock_delta", policy.time_lock_delta),
    Data::new("min_htlc", policy.min_htlc.as_str()),
    Data::new("fee_base_msat", policy.fee_base_msat.as_str()),
    Data::new("fee_rate_milli_msat", policy.fee_rate_milli_msat.as_str()),
    Data::new("disabled", policy.disabled),
  ]
}

impl Node {
  /// Rebuilds [`Node::data`] from the typed fields.
  pub fn materialize(&mut self) {
    self.data = node_attributes(self);
  }
}

impl Edge {
  /// Rebuilds [`Edge::data`] from the shared channel facts.
  pub fn materialize(&mut self) {
    self.data = edge_attributes(self);
  }
}

impl Graph<Edge> {
  /// Materializes every node and edge.
  pub fn materialize(&mut self) {
    self.nodes.iter_mut().for_each(Node::materialize);
    self.edges.iter_mut().for_each(Edge::materialize);
  }
}
