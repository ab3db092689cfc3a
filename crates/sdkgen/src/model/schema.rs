use std::{
  collections::BTreeMap,
  hash::{Hash, Hasher},
};

use indexmap::IndexMap;
use serde::Serialize;
use strum::Display;

use super::store::SchemaId;

/// Wire-level primitive kinds understood by every target language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize)]
#[strum(serialize_all = "camelCase")]
pub enum PrimitiveKind {
  Boolean,
  Integer,
  Long,
  Float,
  Double,
  String,
  Bytes,
  Date,
  DateTime,
  Duration,
  Uuid,
  Url,
}

/// Per-target-language override bag attached to schema nodes and constants.
///
/// Keys are namespaced by target, e.g. `rust.name` or `csharp.name`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Extensions(BTreeMap<String, String>);

impl Extensions {
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  /// Adds an override entry, consuming and returning the bag.
  #[must_use]
  pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
    self.0.insert(key.into(), value.into());
    self
  }

  /// Returns the naming override for the given target language, if present.
  #[must_use]
  pub fn name_for(&self, target: &str) -> Option<&str> {
    self.0.get(&format!("{target}.name")).map(String::as_str)
  }

  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }
}

/// A language-scoped literal binding used for fixed headers and parameters.
///
/// Equality and hashing are structural over all three fields; the hash goes
/// through the canonical JSON text of `value` because `serde_json::Value` has
/// no `Hash` of its own.
#[derive(Debug, Clone, Serialize)]
pub struct ConstantValue {
  /// The primitive kind the literal is declared as.
  pub kind: PrimitiveKind,
  /// The literal itself.
  pub value: serde_json::Value,
  /// Per-target overrides.
  pub extensions: Extensions,
}

impl ConstantValue {
  #[must_use]
  pub fn new(kind: PrimitiveKind, value: serde_json::Value) -> Self {
    Self {
      kind,
      value,
      extensions: Extensions::default(),
    }
  }

  /// Whether the runtime value can actually be carried by the declared kind.
  #[must_use]
  pub fn is_representable(&self) -> bool {
    match self.kind {
      PrimitiveKind::Boolean => self.value.is_boolean(),
      PrimitiveKind::Integer | PrimitiveKind::Long => self.value.is_i64() || self.value.is_u64(),
      PrimitiveKind::Float | PrimitiveKind::Double => self.value.is_number(),
      PrimitiveKind::String
      | PrimitiveKind::Bytes
      | PrimitiveKind::Date
      | PrimitiveKind::DateTime
      | PrimitiveKind::Duration
      | PrimitiveKind::Uuid
      | PrimitiveKind::Url => self.value.is_string(),
    }
  }
}

impl PartialEq for ConstantValue {
  fn eq(&self, other: &Self) -> bool {
    self.kind == other.kind && self.value == other.value && self.extensions == other.extensions
  }
}

impl Eq for ConstantValue {}

impl Hash for ConstantValue {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.kind.hash(state);
    self.value.to_string().hash(state);
    self.extensions.hash(state);
  }
}

/// A closed or extensible enumeration of string values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumSchema {
  pub values: Vec<String>,
  /// Extensible enums must accept and round-trip unknown wire values, so the
  /// distinction is preserved all the way to the type descriptor.
  pub extensible: bool,
}

impl EnumSchema {
  #[must_use]
  pub fn closed(values: impl IntoIterator<Item = impl Into<String>>) -> Self {
    Self {
      values: values.into_iter().map(Into::into).collect(),
      extensible: false,
    }
  }

  #[must_use]
  pub fn extensible(values: impl IntoIterator<Item = impl Into<String>>) -> Self {
    Self {
      values: values.into_iter().map(Into::into).collect(),
      extensible: true,
    }
  }
}

/// A single object property referencing another schema node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Property {
  pub schema: SchemaId,
  pub required: bool,
}

/// Discriminator declaration on a polymorphic base schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Discriminator {
  /// The property whose value selects the concrete subtype.
  pub property: String,
  /// Declared tag values. An empty list means the value set is derived from
  /// the subtypes alone.
  pub values: Vec<String>,
}

/// An object schema: named properties, optional parent, optional polymorphism.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ObjectSchema {
  /// Properties in source-declaration order.
  pub properties: IndexMap<String, Property>,
  /// Parent schema this object inherits properties from.
  pub parent: Option<SchemaId>,
  /// Set when this object is the base of a polymorphic hierarchy.
  pub discriminator: Option<Discriminator>,
  /// The tag value this object claims when it is a subtype of a
  /// discriminated base.
  pub discriminator_value: Option<String>,
}

impl ObjectSchema {
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  #[must_use]
  pub fn with_property(mut self, name: impl Into<String>, schema: SchemaId, required: bool) -> Self {
    self.properties.insert(name.into(), Property { schema, required });
    self
  }

  #[must_use]
  pub fn with_parent(mut self, parent: SchemaId) -> Self {
    self.parent = Some(parent);
    self
  }

  #[must_use]
  pub fn with_discriminator(mut self, property: impl Into<String>, values: impl IntoIterator<Item = impl Into<String>>) -> Self {
    self.discriminator = Some(Discriminator {
      property: property.into(),
      values: values.into_iter().map(Into::into).collect(),
    });
    self
  }

  #[must_use]
  pub fn with_discriminator_value(mut self, value: impl Into<String>) -> Self {
    self.discriminator_value = Some(value.into());
    self
  }
}

/// A schema definition. References to other schemas are arena ids, so the
/// reference graph may contain cycles and shared subtrees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Schema {
  Primitive(PrimitiveKind),
  Enum(EnumSchema),
  Object(ObjectSchema),
  Array { element: SchemaId },
  Dictionary { value: SchemaId },
  Union { variants: Vec<SchemaId> },
  Constant(ConstantValue),
}
