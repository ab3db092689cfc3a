use std::{collections::BTreeMap, fmt};

use serde::Serialize;

use super::schema::{Extensions, Schema};

/// Stable identity of a schema node within one loaded model.
///
/// Identity equality, not structural equality, determines node identity:
/// two structurally identical schemas inserted separately are distinct nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct SchemaId(u32);

impl fmt::Display for SchemaId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "schema #{}", self.0)
  }
}

/// A named schema definition plus its per-target override bag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaNode {
  pub name: String,
  pub schema: Schema,
  pub extensions: Extensions,
}

/// Arena-style store for the schema graph.
///
/// All schema references are [`SchemaId`]s into this single table, which is
/// what makes cyclic and diamond-shaped reference graphs safe: traversal is
/// always by id through identity-memoized resolution, never through owning
/// recursive object graphs.
#[derive(Debug, Clone, Default)]
pub struct SchemaStore {
  nodes: Vec<SchemaNode>,
  by_name: BTreeMap<String, SchemaId>,
}

impl SchemaStore {
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  /// Inserts a schema under the given name and returns its identity.
  pub fn insert(&mut self, name: impl Into<String>, schema: Schema) -> SchemaId {
    self.insert_with_extensions(name, schema, Extensions::default())
  }

  /// Inserts a schema with a per-target override bag.
  ///
  /// The name index keeps the last insertion for a repeated name; earlier
  /// nodes stay resolvable by id.
  pub fn insert_with_extensions(&mut self, name: impl Into<String>, schema: Schema, extensions: Extensions) -> SchemaId {
    let id = SchemaId(u32::try_from(self.nodes.len()).unwrap_or(u32::MAX));
    let name = name.into();
    self.by_name.insert(name.clone(), id);
    self.nodes.push(SchemaNode { name, schema, extensions });
    id
  }

  /// Reserves an id under a name so mutually recursive schemas can reference
  /// each other before both are defined. The placeholder is an empty object
  /// until [`SchemaStore::define`] fills it in.
  pub fn reserve(&mut self, name: impl Into<String>) -> SchemaId {
    self.insert(name, Schema::Object(crate::model::schema::ObjectSchema::default()))
  }

  /// Replaces the definition of a previously reserved node. Unknown ids are
  /// ignored; the front-end owns id bookkeeping during load.
  pub fn define(&mut self, id: SchemaId, schema: Schema) {
    if let Some(node) = self.nodes.get_mut(id.0 as usize) {
      node.schema = schema;
    }
  }

  #[must_use]
  pub fn get(&self, id: SchemaId) -> Option<&SchemaNode> {
    self.nodes.get(id.0 as usize)
  }

  /// Looks up a schema id by name.
  #[must_use]
  pub fn lookup(&self, name: &str) -> Option<SchemaId> {
    self.by_name.get(name).copied()
  }

  /// Iterates all nodes in insertion (id) order.
  pub fn iter(&self) -> impl Iterator<Item = (SchemaId, &SchemaNode)> {
    self.nodes.iter().enumerate().map(|(index, node)| {
      (SchemaId(u32::try_from(index).unwrap_or(u32::MAX)), node)
    })
  }

  /// All object schemas declaring the given node as their parent, in id order.
  #[must_use]
  pub fn subtypes_of(&self, parent: SchemaId) -> Vec<SchemaId> {
    self
      .iter()
      .filter(|(_, node)| match &node.schema {
        Schema::Object(object) => object.parent == Some(parent),
        _ => false,
      })
      .map(|(id, _)| id)
      .collect()
  }

  #[must_use]
  pub fn len(&self) -> usize {
    self.nodes.len()
  }

  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.nodes.is_empty()
  }
}
