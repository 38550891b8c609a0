//! # Attribute Materialization Test Suite
//!
//! Covers the attribute lists derived for nodes, channels and policies, and the
//! presence rule writers rely on.

use crate::attributes::{
  Data, DataValue, edge_attributes, node_attributes, policy_attributes, present,
};
use crate::model::{Edge, Graph, Node, NodePolicy};
use proptest::prelude::*;

fn keys(data: &[Data]) -> Vec<&str> {
  data.iter().map(|d| d.key.as_str()).collect()
}

fn sample_edge() -> Edge {
  Edge {
    channel_id: "612345678901234567".to_string(),
    chan_point: "3f1c...a9:1".to_string(),
    last_update: 1_531_000_000,
    node1_pub: "A".to_string(),
    node2_pub: "B".to_string(),
    capacity: "16777215".to_string(),
    node1_policy: NodePolicy {
      time_lock_delta: 144,
      min_htlc: "1000".to_string(),
      fee_base_msat: "1000".to_string(),
      fee_rate_milli_msat: "1".to_string(),
      disabled: false,
    },
    ..Edge::default()
  }
}

#[test]
fn test_node_attributes_order() {
  let node = Node {
    pub_key: "A".to_string(),
    alias: "Alice".to_string(),
    ..Node::default()
  };

  assert_eq!(
    node_attributes(&node),
    vec![Data::new("pub_key", "A"), Data::new("name", "Alice")]
  );
}

#[test]
fn test_edge_attributes_are_shared_facts() {
  let edge = sample_edge();
  let data = edge_attributes(&edge);

  assert_eq!(keys(&data), vec!["chan_point", "last_update", "capacity"]);
  assert_eq!(data[1].value, DataValue::Int(1_531_000_000));
  assert_eq!(data[2].value, DataValue::String("16777215".to_string()));
}

#[test]
fn test_policy_attributes_order_and_types() {
  let edge = sample_edge();
  let data = policy_attributes(&edge.node1_policy);

  assert_eq!(
    keys(&data),
    vec![
      "time_lock_delta",
      "min_htlc",
      "fee_base_msat",
      "fee_rate_milli_msat",
      "disabled"
    ]
  );
  assert_eq!(data[0].value, DataValue::Int(144));
  assert_eq!(data[4].value, DataValue::Bool(false));
}

#[test]
fn test_materialize_replaces_existing_data() {
  let mut node = Node {
    pub_key: "A".to_string(),
    data: vec![Data::new("stale", "value")],
    ..Node::default()
  };
  node.materialize();
  assert_eq!(keys(&node.data), vec!["pub_key", "name"]);
}

#[test]
fn test_materialize_is_idempotent() {
  let mut graph: Graph = Graph::default();
  graph.nodes.push(Node {
    pub_key: "A".to_string(),
    alias: "Alice".to_string(),
    ..Node::default()
  });
  graph.edges.push(sample_edge());

  graph.materialize();
  let once = graph.clone();
  graph.materialize();

  assert_eq!(graph, once);
  assert_eq!(graph.edges[0].data.len(), 3);
}

#[test]
fn test_presence_rule() {
  assert!(!DataValue::from("").is_present());
  assert!(DataValue::from("0").is_present());
  assert!(DataValue::from(0_i64).is_present());
  assert!(DataValue::from(false).is_present());
  assert!(DataValue::from(" ").is_present());
}

#[test]
fn test_present_keeps_order_and_drops_empty_strings() {
  let data = vec![
    Data::new("a", "x"),
    Data::new("b", ""),
    Data::new("c", 0_i64),
    Data::new("d", false),
  ];
  let kept: Vec<&str> = present(&data).map(|d| d.key.as_str()).collect();
  assert_eq!(kept, vec!["a", "c", "d"]);
}

#[test]
fn test_data_value_display() {
  assert_eq!(DataValue::from("007").to_string(), "007");
  assert_eq!(DataValue::from(-5_i64).to_string(), "-5");
  assert_eq!(DataValue::from(true).to_string(), "true");
}

proptest! {
  #[test]
  fn test_string_values_display_verbatim(s in ".*") {
    prop_assert_eq!(DataValue::from(s.as_str()).to_string(), s);
  }

  #[test]
  fn test_only_empty_string_is_absent(s in ".*", n in any::<i64>(), b in any::<bool>()) {
    prop_assert_eq!(Data::new("k", s.as_str()).is_present(), !s.is_empty());
    prop_assert!(Data::new("k", n).is_present());
    prop_assert!(Data::new("k", b).is_present());
  }
}
