use serde::Serialize;

use crate::model::{ConstantValue, PrimitiveKind, SchemaId};

/// A property of a resolved model type. Nullability in the target language is
/// the inverse of `required`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyDescriptor {
  pub name: String,
  pub descriptor: TypeDescriptor,
  pub required: bool,
}

/// A named object type with its properties flattened across the parent chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelDescriptor {
  pub name: String,
  /// Parent-chain properties first (in parent declaration order), then the
  /// schema's own.
  pub properties: Vec<PropertyDescriptor>,
}

/// A resolved enumeration. Extensible enums carry an open string fallback in
/// the target language; closed enums are a fixed value set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumDescriptor {
  pub name: String,
  pub values: Vec<String>,
  pub extensible: bool,
}

/// One variant of a discriminated union.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaggedVariant {
  pub tag_value: String,
  pub name: String,
  pub descriptor: TypeDescriptor,
}

/// A closed discriminated union: the declared subtypes plus the base shape as
/// the fallback for unknown tag values. Dispatch is on the tag, never on
/// host-language inheritance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaggedUnionDescriptor {
  pub name: String,
  /// The discriminator property.
  pub tag: String,
  pub variants: Vec<TaggedVariant>,
  /// The base model shape; unknown tag values land here instead of being
  /// coerced into an existing variant.
  pub fallback: Box<TypeDescriptor>,
}

/// An undiscriminated union of alternatives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnionDescriptor {
  pub name: String,
  pub variants: Vec<TypeDescriptor>,
}

/// A target-language type resolved from a schema node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum TypeDescriptor {
  Scalar(PrimitiveKind),
  Enum(EnumDescriptor),
  Model(ModelDescriptor),
  TaggedUnion(TaggedUnionDescriptor),
  Union(UnionDescriptor),
  List(Box<TypeDescriptor>),
  Map(Box<TypeDescriptor>),
  /// A literal-typed field with a fixed default; refuses caller override
  /// downstream at body binding, not here.
  Literal(ConstantValue),
  /// Lazy same-type reference: produced for cycles and for properties
  /// pointing at named schemas, so shared subtrees materialize exactly once.
  Reference(SchemaId),
}

impl TypeDescriptor {
  /// The declared name of named descriptors.
  #[must_use]
  pub fn name(&self) -> Option<&str> {
    match self {
      Self::Enum(e) => Some(&e.name),
      Self::Model(m) => Some(&m.name),
      Self::TaggedUnion(t) => Some(&t.name),
      Self::Union(u) => Some(&u.name),
      Self::Scalar(_) | Self::List(_) | Self::Map(_) | Self::Literal(_) | Self::Reference(_) => None,
    }
  }
}
