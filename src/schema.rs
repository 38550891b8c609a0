//! # Attribute Schema
//!
//! The fixed catalogue of GraphML `<key>` declarations. Every `<data>` element a
//! writer emits refers to one of these keys by id.
//!
//! The registry is built once per run and only read afterwards. Declaration order
//! is output order: node keys first, then edge keys.

use std::fmt;

/// Which element kind a key applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyScope {
  /// `<node>` attributes.
  Node,
  /// `<edge>` attributes.
  Edge,
}

impl KeyScope {
  /// The value of the `for` attribute.
  #[must_use]
  pub fn as_str(self) -> &'static str {
    match self {
      KeyScope::Node => "node",
      KeyScope::Edge => "edge",
    }
  }
}

impl fmt::Display for KeyScope {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Declared value type of a key, using GraphML's type names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyType {
  /// `string`
  String,
  /// `int`
  Int,
  /// `long`, for satoshi and millisatoshi amounts.
  Long,
  /// `boolean`
  Boolean,
}

impl KeyType {
  /// The value of the `attr.type` attribute.
  #[must_use]
  pub fn as_str(self) -> &'static str {
    match self {
      KeyType::String => "string",
      KeyType::Int => "int",
      KeyType::Long => "long",
      KeyType::Boolean => "boolean",
    }
  }
}

impl fmt::Display for KeyType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// A single `<key>` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key {
  /// Id that `<data key="...">` refers to.
  pub id: &'static str,
  /// Element kind the key applies to.
  pub scope: KeyScope,
  /// Display name (`attr.name`).
  pub name: &'static str,
  /// Declared type (`attr.type`).
  pub key_type: KeyType,
  /// Value assumed when an element carries no data for this key.
  pub default: Option<&'static str>,
}

impl Key {
  fn new(id: &'static str, scope: KeyScope, name: &'static str, key_type: KeyType) -> Self {
    Self {
      id,
      scope,
      name,
      key_type,
      default: None,
    }
  }

  fn with_default(mut self, default: &'static str) -> Self {
    self.default = Some(default);
    self
  }
}

/// Ordered, read-only set of key declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyRegistry {
  keys: Vec<Key>,
}

impl KeyRegistry {
  /// Keys describing a Lightning channel graph.
  ///
  /// # Example
  ///
  /// ```rust
  /// use lngraph::schema::{KeyRegistry, KeyScope};
  ///
  /// let registry = KeyRegistry::lightning();
  /// assert_eq!(registry.keys()[0].id, "pub_key");
  /// assert_eq!(registry.get("min_htlc").unwrap().default, Some("0"));
  /// assert_eq!(registry.for_scope(KeyScope::Node).count(), 2);
  /// ```
  #[must_use]
  pub fn lightning() -> Self {
    use KeyScope::{Edge, Node};

    Self {
      keys: vec![
        Key::new("pub_key", Node, "pub_key", KeyType::String),
        Key::new("name", Node, "alias", KeyType::String),
        Key::new("chan_point", Edge, "chan_point", KeyType::String),
        Key::new("last_update", Edge, "last_update", KeyType::Int),
        Key::new("capacity", Edge, "capacity", KeyType::Long),
        Key::new("time_lock_delta", Edge, "time_lock_delta", KeyType::Int),
        Key::new("min_htlc", Edge, "min_htlc", KeyType::Long).with_default("0"),
        Key::new("fee_base_msat", Edge, "fee_base_msat", KeyType::Long),
        Key::new("fee_rate_milli_msat", Edge, "fee_rate_milli_msat", KeyType::Long),
        Key::new("disabled", Edge, "disabled", KeyType::Boolean),
      ],
    }
  }

  /// All keys in declaration order.
  #[must_use]
  pub fn keys(&self) -> &[Key] {
    &self.keys
  }

  /// Looks up a key by id.
  #[must_use]
  pub fn get(&self, id: &str) -> Option<&Key> {
    self.keys.iter().find(|key| key.id == id)
  }

  /// Keys for one element kind, in declaration order.
  pub fn for_scope(&self, scope: KeyScope) -> impl Iterator<Item = &Key> {
    self.keys.iter().filter(move |key| key.scope == scope)
  }

  /// Number of declared keys.
  #[must_use]
  pub fn len(&self) -> usize {
    self.keys.len()
  }

  /// Whether no keys are declared.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.keys.is_empty()
  }
}

impl Default for KeyRegistry {
  fn default() -> Self {
    Self::lightning()
  }
}
