//! # Conversion Test Suite
//!
//! End-to-end scenarios over `render` and `convert`.

use crate::config::{ConvertConfig, OutputFormat};
use crate::convert::{convert, render};
use crate::error::ConvertError;
use crate::loader::parse_graph;
use crate::model::GraphMeta;
use std::io::Write;
use tempfile::NamedTempFile;

const TWO_NODES: &str = r#"{
  "nodes": [{"pub_key": "A", "alias": "Alice"}, {"pub_key": "B", "alias": "Bob"}],
  "edges": [{
    "channel_id": "100",
    "chan_point": "abcd:0",
    "last_update": 7,
    "node1_pub": "A",
    "node2_pub": "B",
    "capacity": "0000500000",
    "node1_policy": {"time_lock_delta": 40, "min_htlc": "", "fee_base_msat": "1000", "fee_rate_milli_msat": "1", "disabled": false},
    "node2_policy": {"time_lock_delta": 144, "min_htlc": "1000", "fee_base_msat": "0", "fee_rate_milli_msat": "2", "disabled": true}
  }]
}"#;

fn edge_elements(xml: &str) -> Vec<&str> {
  xml
    .split("<edge ")
    .skip(1)
    .map(|rest| {
      let end = rest.find("</edge>").unwrap_or(rest.len());
      &rest[..end]
    })
    .collect()
}

#[test]
fn test_single_node_without_edges() {
  let graph = parse_graph(
    r#"{"nodes": [{"pub_key": "A", "alias": "Alice"}]}"#,
    GraphMeta::default(),
  )
  .unwrap();
  let xml = render(&graph, &ConvertConfig::new()).unwrap();

  assert_eq!(xml.matches("<node ").count(), 1);
  assert_eq!(xml.matches("<edge ").count(), 0);
  assert!(xml.contains("<data key=\"pub_key\">A</data>"));
  assert!(xml.contains("<data key=\"name\">Alice</data>"));
  assert!(xml.contains("parse.nodes=\"1\""));
  assert!(xml.contains("parse.edges=\"0\""));
}

#[test]
fn test_directed_expansion_renders_both_directions() {
  let graph = parse_graph(TWO_NODES, GraphMeta::default()).unwrap();
  let xml = render(&graph, &ConvertConfig::new().with_directed(true)).unwrap();

  let edges = edge_elements(&xml);
  assert_eq!(edges.len(), 2);
  assert!(edges[0].starts_with("id=\"100\" source=\"A\" target=\"B\">"));
  assert!(edges[0].contains("<data key=\"disabled\">false</data>"));
  assert!(edges[1].starts_with("id=\"100\" source=\"B\" target=\"A\">"));
  assert!(edges[1].contains("<data key=\"disabled\">true</data>"));
  assert!(xml.contains("parse.edges=\"2\""));
  assert!(xml.contains("edgedefault=\"directed\""));
}

#[test]
fn test_empty_min_htlc_is_omitted_after_expansion() {
  let graph = parse_graph(TWO_NODES, GraphMeta::default()).unwrap();
  let xml = render(&graph, &ConvertConfig::new().with_directed(true)).unwrap();

  let edges = edge_elements(&xml);
  assert!(!edges[0].contains("min_htlc"));
  assert!(edges[1].contains("<data key=\"min_htlc\">1000</data>"));
}

#[test]
fn test_amounts_survive_character_for_character() {
  let graph = parse_graph(TWO_NODES, GraphMeta::default()).unwrap();
  let xml = render(&graph, &ConvertConfig::new().with_directed(true)).unwrap();

  assert_eq!(xml.matches("<data key=\"capacity\">0000500000</data>").count(), 2);
  assert!(xml.contains("<data key=\"fee_base_msat\">0</data>"));
}

#[test]
fn test_undirected_render_keeps_channels() {
  let graph = parse_graph(TWO_NODES, GraphMeta::default()).unwrap();
  let xml = render(&graph, &ConvertConfig::new()).unwrap();

  let edges = edge_elements(&xml);
  assert_eq!(edges.len(), 1);
  assert!(edges[0].contains("<data key=\"chan_point\">abcd:0</data>"));
  assert!(!edges[0].contains("fee_base_msat"));
  assert!(xml.contains("edgedefault=\"undirected\""));
}

#[test]
fn test_dot_format() {
  let graph = parse_graph(TWO_NODES, GraphMeta::default()).unwrap();
  let config = ConvertConfig::new()
    .with_directed(true)
    .with_format(OutputFormat::Dot);
  let dot = render(&graph, &config).unwrap();

  assert!(dot.starts_with("digraph "));
  assert!(dot.contains("\"A\" -> \"B\""));
  assert!(dot.contains("\"B\" -> \"A\""));
}

#[test]
fn test_convert_requires_input() {
  let err = convert(&ConvertConfig::new()).unwrap_err();
  assert!(matches!(err, ConvertError::Config(_)));
  assert_eq!(err.to_string(), "configuration error: no input file specified");
}

#[test]
fn test_convert_reads_file_and_uses_meta() {
  let mut file = NamedTempFile::new().unwrap();
  file.write_all(TWO_NODES.as_bytes()).unwrap();

  let config = ConvertConfig::new()
    .with_input(file.path())
    .with_meta(GraphMeta::default().with_id("regtest"));
  let xml = convert(&config).unwrap();

  assert!(xml.contains("<graph id=\"regtest\""));
  assert!(xml.trim_end().ends_with("</graphml>"));
}

#[test]
fn test_convert_malformed_input_produces_no_document() {
  let mut file = NamedTempFile::new().unwrap();
  file.write_all(b"[1, 2,").unwrap();

  let result = convert(&ConvertConfig::new().with_input(file.path()));
  assert!(matches!(result, Err(ConvertError::Parse { .. })));
}
