//! GraphML output.
//!
//! The document envelope (XML declaration, `<graphml>` root and closing tag) is
//! taken verbatim from [`GraphmlConfig`]. Keys, the `<graph>` element, nodes and
//! edges are written between the two through a `quick_xml` writer, which takes
//! care of escaping.

use super::GraphExporter;
use crate::attributes::{Data, present};
use crate::error::{ConvertError, Result};
use crate::model::{Graph, GraphEdge, Node};
use crate::schema::{Key, KeyRegistry};
use quick_xml::Writer;
use std::borrow::Cow;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use tracing::{debug, trace};

/// Opening of every document: XML declaration and `<graphml>` root.
pub const DEFAULT_HEADER: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<graphml xmlns="http://graphml.graphdrawing.org/xmlns"
    xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"
    xsi:schemaLocation="http://graphml.graphdrawing.org/xmlns http://graphml.graphdrawing.org/xmlns/1.0/graphml.xsd">"#;

/// Closing of every document.
pub const DEFAULT_FOOTER: &str = "</graphml>";

/// Configuration for GraphML output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphmlConfig {
  /// Text written before the keys. Must open the `<graphml>` root.
  pub header: String,
  /// Text written after the graph. Must close the `<graphml>` root.
  pub footer: String,
  /// Spaces per nesting level, or `None` for compact output.
  pub indent: Option<usize>,
}

impl Default for GraphmlConfig {
  fn default() -> Self {
    Self {
      header: DEFAULT_HEADER.to_string(),
      footer: DEFAULT_FOOTER.to_string(),
      indent: Some(2),
    }
  }
}

impl GraphmlConfig {
  /// Sets the document header.
  #[must_use]
  pub fn with_header(mut self, header: impl Into<String>) -> Self {
    self.header = header.into();
    self
  }

  /// Sets the document footer.
  #[must_use]
  pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
    self.footer = footer.into();
    self
  }

  /// Sets the indentation width, `None` for compact output.
  #[must_use]
  pub fn with_indent(mut self, indent: Option<usize>) -> Self {
    self.indent = indent;
    self
  }
}

/// Writes graphs as GraphML.
#[derive(Debug, Clone, Default)]
pub struct GraphmlWriter {
  config: GraphmlConfig,
}

impl GraphmlWriter {
  /// Creates a writer with the given configuration.
  #[must_use]
  pub fn new(config: GraphmlConfig) -> Self {
    Self { config }
  }

  /// The configuration in use.
  #[must_use]
  pub fn config(&self) -> &GraphmlConfig {
    &self.config
  }
}

impl GraphExporter for GraphmlWriter {
  fn export<E: GraphEdge>(&self, graph: &Graph<E>, registry: &KeyRegistry) -> Result<String> {
    let mut body = XmlBody::new(self.config.indent);

    for key in registry.keys() {
      body.key(key)?;
    }
    body.graph(graph)?;

    let body = String::from_utf8(body.into_inner()).map_err(ConvertError::serialization)?;

    debug!(
      nodes = graph.num_nodes(),
      edges = graph.num_edges(),
      keys = registry.len(),
      bytes = body.len(),
      "rendered graphml"
    );

    Ok(format!(
      "{header}\n{body}\n{footer}\n",
      header = self.config.header,
      footer = self.config.footer,
    ))
  }
}

/// Everything between header and footer.
struct XmlBody {
  writer: Writer<Vec<u8>>,
}

impl XmlBody {
  fn new(indent: Option<usize>) -> Self {
    let writer = match indent {
      Some(width) => Writer::new_with_indent(Vec::new(), b' ', width),
      None => Writer::new(Vec::new()),
    };
    Self { writer }
  }

  fn into_inner(self) -> Vec<u8> {
    self.writer.into_inner()
  }

  fn write(&mut self, event: Event<'_>) -> Result<()> {
    self
      .writer
      .write_event(event)
      .map_err(ConvertError::serialization)
  }

  fn key(&mut self, key: &Key) -> Result<()> {
    let mut start = BytesStart::new("key");
    start.push_attribute(("id", key.id));
    start.push_attribute(("for", key.scope.as_str()));
    start.push_attribute(("attr.name", key.name));
    start.push_attribute(("attr.type", key.key_type.as_str()));

    match key.default {
      Some(default) => {
        self.write(Event::Start(start))?;
        self.write(Event::Start(BytesStart::new("default")))?;
        self.write(Event::Text(BytesText::new(default)))?;
        self.write(Event::End(BytesEnd::new("default")))?;
        self.write(Event::End(BytesEnd::new("key")))
      }
      None => self.write(Event::Empty(start)),
    }
  }

  fn graph<E: GraphEdge>(&mut self, graph: &Graph<E>) -> Result<()> {
    let num_nodes = graph.num_nodes().to_string();
    let num_edges = graph.num_edges().to_string();
    let edge_default = if E::DIRECTED { "directed" } else { "undirected" };

    let mut start = BytesStart::new("graph");
    start.push_attribute(("id", &*xml_chars(&graph.meta.id)));
    start.push_attribute(("edgedefault", edge_default));
    start.push_attribute(("parse.nodes", num_nodes.as_str()));
    start.push_attribute(("parse.edges", num_edges.as_str()));
    start.push_attribute(("parse.nodeids", graph.meta.node_ids.as_str()));
    start.push_attribute(("parse.edgeids", graph.meta.edge_ids.as_str()));
    start.push_attribute(("parse.order", graph.meta.parse_order.as_str()));
    self.write(Event::Start(start))?;

    for node in &graph.nodes {
      self.node(node)?;
    }
    for edge in &graph.edges {
      self.edge(edge)?;
    }

    self.write(Event::End(BytesEnd::new("graph")))
  }

  fn node(&mut self, node: &Node) -> Result<()> {
    trace!(id = %node.pub_key, "node");
    let mut start = BytesStart::new("node");
    start.push_attribute(("id", &*xml_chars(&node.pub_key)));
    self.element("node", start, &node.data)
  }

  fn edge<E: GraphEdge>(&mut self, edge: &E) -> Result<()> {
    trace!(id = edge.id(), source = edge.source(), target = edge.target(), "edge");
    let mut start = BytesStart::new("edge");
    start.push_attribute(("id", &*xml_chars(edge.id())));
    start.push_attribute(("source", &*xml_chars(edge.source())));
    start.push_attribute(("target", &*xml_chars(edge.target())));
    self.element("edge", start, edge.data())
  }

  /// Writes `start`, then one `<data>` child per present attribute.
  fn element(&mut self, name: &str, start: BytesStart<'_>, data: &[Data]) -> Result<()> {
    let mut children = present(data).peekable();
    if children.peek().is_none() {
      return self.write(Event::Empty(start));
    }

    self.write(Event::Start(start))?;
    for d in children {
      let value = d.value.to_string();
      let mut data_start = BytesStart::new("data");
      data_start.push_attribute(("key", d.key.as_str()));
      self.write(Event::Start(data_start))?;
      self.write(Event::Text(BytesText::new(&xml_chars(&value))))?;
      self.write(Event::End(BytesEnd::new("data")))?;
    }
    self.write(Event::End(BytesEnd::new(name)))
  }
}

/// Whether `c` may appear in an XML 1.0 document (the `Char` production).
fn is_xml_char(c: char) -> bool {
  matches!(c, '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}')
}

/// Replaces characters XML cannot carry, even escaped, with U+FFFD.
///
/// quick-xml escapes markup characters only, so control characters such as
/// `\u{1}` have to be dealt with here.
fn xml_chars(text: &str) -> Cow<'_, str> {
  if text.chars().all(is_xml_char) {
    return Cow::Borrowed(text);
  }
  debug!(text, "replacing characters not allowed in XML");
  Cow::Owned(
    text
      .chars()
      .map(|c| if is_xml_char(c) { c } else { char::REPLACEMENT_CHARACTER })
      .collect(),
  )
}
