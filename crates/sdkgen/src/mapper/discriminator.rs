use std::collections::BTreeSet;

use super::{TaggedUnionDescriptor, TaggedVariant, TypeDescriptor, TypeMapper};
use crate::{
  errors::ModelConsistencyError,
  model::{Discriminator, ObjectSchema, Schema, SchemaId, SchemaNode},
};

/// Resolves a discriminated base schema to its closed variant set: every
/// object schema declaring the base as parent and claiming a tag value, plus
/// the base shape itself as the fallback for unknown tag values.
///
/// A tag value declared on the base with no claiming subtype is a modeling
/// error; subtypes claiming undeclared values are accepted.
pub(super) fn resolve_tagged_union(
  mapper: &mut TypeMapper<'_>,
  id: SchemaId,
  node: &SchemaNode,
  object: &ObjectSchema,
  declared: &Discriminator,
) -> Result<TypeDescriptor, ModelConsistencyError> {
  let mut variants = vec![];
  let mut claimed = BTreeSet::new();

  for child_id in mapper.store().subtypes_of(id) {
    let Some(child) = mapper.store().get(child_id) else {
      continue;
    };
    let Schema::Object(child_object) = &child.schema else {
      continue;
    };
    let Some(tag_value) = child_object.discriminator_value.clone() else {
      continue;
    };

    // Materialize the subtype so the variant reference has a backing
    // descriptor in the memo table.
    mapper.resolve(child_id)?;

    claimed.insert(tag_value.clone());
    variants.push(TaggedVariant {
      tag_value,
      name: mapper.display_name(child),
      descriptor: TypeDescriptor::Reference(child_id),
    });
  }

  for value in &declared.values {
    if !claimed.contains(value) {
      return Err(ModelConsistencyError::UnresolvedDiscriminator {
        schema: node.name.clone(),
        value: value.clone(),
      });
    }
  }

  let fallback = TypeDescriptor::Model(mapper.model_descriptor(id, node, object)?);

  Ok(TypeDescriptor::TaggedUnion(TaggedUnionDescriptor {
    name: mapper.display_name(node),
    tag: declared.property.clone(),
    variants,
    fallback: Box::new(fallback),
  }))
}
