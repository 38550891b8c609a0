//! Reading a channel graph from JSON.

use crate::error::{ConvertError, Result};
use crate::model::{Graph, GraphMeta};
use serde::de::Error as _;
use serde_json::Value;
use std::path::Path;
use tracing::{debug, info};

/// Decodes a channel graph from JSON text.
///
/// Unknown fields are ignored and missing or `null` fields take their zero value.
/// The returned graph carries `meta` and is already materialized.
///
/// # Errors
///
/// Returns [`serde_json::Error`] if `json` is not a JSON object of the expected
/// shape. A top-level array is rejected even though it would fill the fields by
/// position.
pub fn parse_graph(json: &str, meta: GraphMeta) -> std::result::Result<Graph, serde_json::Error> {
  let value: Value = serde_json::from_str(json)?;
  if !value.is_object() {
    return Err(serde_json::Error::custom(
      "expected a JSON object with `nodes` and `edges`",
    ));
  }

  let mut graph: Graph = serde_json::from_value(value)?;
  graph.meta = meta;
  graph.materialize();
  Ok(graph)
}

/// Reads and decodes the channel graph stored at `path`.
///
/// # Errors
///
/// - [`ConvertError::Io`] if the file cannot be read.
/// - [`ConvertError::Parse`] if its content is not a channel graph.
pub fn load_graph(path: &Path, meta: GraphMeta) -> Result<Graph> {
  debug!(path = %path.display(), "reading channel graph");
  let json = std::fs::read_to_string(path).map_err(|source| ConvertError::Io {
    path: path.to_path_buf(),
    source,
  })?;

  let graph = parse_graph(&json, meta).map_err(|source| ConvertError::Parse {
    path: path.to_path_buf(),
    source,
  })?;

  info!(
    path = %path.display(),
    nodes = graph.num_nodes(),
    channels = graph.num_edges(),
    "loaded channel graph"
  );
  Ok(graph)
}
