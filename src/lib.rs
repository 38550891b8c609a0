//! # lngraph
//!
//! Converts a Lightning Network channel graph, as dumped by `lncli describegraph`,
//! into GraphML or Graphviz DOT.
//!
//! A channel is undirected in the dump, but each endpoint sets its own fees and
//! limits for traffic leaving it. Optionally, every channel is expanded into two
//! directed edges so that tools working on directed graphs see each direction
//! with the policy that actually applies to it.
//!
//! ## Key Features
//!
//! - **Typed model**: nodes, channels and policies decode straight from lnd's JSON
//! - **Directed expansion**: one edge per direction, each with its own policy
//! - **Fixed schema**: every attribute is declared once as a GraphML `<key>`
//! - **Verbatim amounts**: fee and capacity fields are copied, never reformatted
//! - **Presence rule**: empty attributes are left out instead of rendered empty
//!
//! ## Quick Start
//!
//! ```rust
//! use lngraph::export::{GraphExporter, GraphmlWriter};
//! use lngraph::loader::parse_graph;
//! use lngraph::model::GraphMeta;
//! use lngraph::schema::KeyRegistry;
//! use lngraph::expand;
//!
//! let json = r#"{
//!   "nodes": [{"pub_key": "A", "alias": "Alice"}, {"pub_key": "B"}],
//!   "edges": [{"channel_id": "1", "node1_pub": "A", "node2_pub": "B", "capacity": "500000"}]
//! }"#;
//!
//! let graph = parse_graph(json, GraphMeta::default())?;
//! let directed = expand(&graph);
//! assert_eq!(directed.num_edges(), 2);
//!
//! let xml = GraphmlWriter::default().export(&directed, &KeyRegistry::lightning())?;
//! assert!(xml.contains(r#"<edge id="1" source="B" target="A">"#));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// Documentation enforcement - treat missing docs as errors
#![deny(missing_docs)]

/// Generic node and edge attributes and the presence rule.
pub mod attributes;
/// Settings for a conversion run.
pub mod config;
/// Load, expand and render in one call.
pub mod convert;
/// Error types.
pub mod error;
/// Expansion of channels into directed edges.
pub mod expand;
/// GraphML and DOT writers.
pub mod export;
/// Reading the JSON input.
pub mod loader;
/// Channel graph records.
pub mod model;
/// GraphML key declarations.
pub mod schema;

pub use config::{ConvertConfig, OutputFormat};
pub use convert::{convert, render};
pub use error::{ConvertError, Result};
pub use expand::expand;
pub use model::{DirectedEdge, DirectedGraph, Edge, Graph, Node, NodePolicy};

#[cfg(test)]
mod attributes_test;
#[cfg(test)]
mod convert_test;
