//! Resolves schema nodes into target-language type descriptors.
//!
//! Resolution is depth-first and memoized by node identity for the lifetime
//! of one mapper, so shared subtrees materialize exactly once and cyclic
//! reference graphs terminate: a node already on the resolving stack comes
//! back as a [`TypeDescriptor::Reference`] instead of recursing.

pub mod descriptor;
mod discriminator;

use std::collections::{BTreeMap, BTreeSet};

pub use descriptor::{
  EnumDescriptor, ModelDescriptor, PropertyDescriptor, TaggedUnionDescriptor, TaggedVariant, TypeDescriptor,
  UnionDescriptor,
};

use crate::{
  errors::ModelConsistencyError,
  model::{ObjectSchema, Schema, SchemaId, SchemaNode, SchemaStore},
};

/// Memoizing schema-to-type resolver for one generation run.
#[derive(Debug)]
pub struct TypeMapper<'a> {
  store: &'a SchemaStore,
  target: String,
  resolved: BTreeMap<SchemaId, TypeDescriptor>,
  resolving: BTreeSet<SchemaId>,
}

impl<'a> TypeMapper<'a> {
  #[must_use]
  pub fn new(store: &'a SchemaStore, target: impl Into<String>) -> Self {
    Self {
      store,
      target: target.into(),
      resolved: BTreeMap::new(),
      resolving: BTreeSet::new(),
    }
  }

  pub(crate) fn store(&self) -> &'a SchemaStore {
    self.store
  }

  /// Resolves a schema node, memoized by identity.
  ///
  /// # Errors
  ///
  /// Returns a [`ModelConsistencyError`] for dangling references or an
  /// unresolved discriminator value; both are modeling errors attributable
  /// to the named node.
  pub fn resolve(&mut self, id: SchemaId) -> Result<TypeDescriptor, ModelConsistencyError> {
    if let Some(found) = self.resolved.get(&id) {
      return Ok(found.clone());
    }
    if self.resolving.contains(&id) {
      return Ok(TypeDescriptor::Reference(id));
    }

    let store = self.store;
    let node = store.get(id).ok_or(ModelConsistencyError::DanglingReference { id })?;

    self.resolving.insert(id);
    let outcome = self.resolve_node(id, node);
    self.resolving.remove(&id);

    let descriptor = outcome?;
    self.resolved.insert(id, descriptor.clone());
    Ok(descriptor)
  }

  /// Returns the already-materialized descriptor for a node, if any.
  #[must_use]
  pub fn lookup(&self, id: SchemaId) -> Option<&TypeDescriptor> {
    self.resolved.get(&id)
  }

  /// The node's name for this mapper's target language, honoring the
  /// extensions override bag.
  #[must_use]
  pub fn display_name(&self, node: &SchemaNode) -> String {
    node.extensions.name_for(&self.target).unwrap_or(&node.name).to_string()
  }

  fn resolve_node(&mut self, id: SchemaId, node: &'a SchemaNode) -> Result<TypeDescriptor, ModelConsistencyError> {
    match &node.schema {
      Schema::Primitive(kind) => Ok(TypeDescriptor::Scalar(*kind)),
      Schema::Constant(constant) => Ok(TypeDescriptor::Literal(constant.clone())),
      Schema::Enum(schema) => Ok(TypeDescriptor::Enum(EnumDescriptor {
        name: self.display_name(node),
        values: schema.values.clone(),
        extensible: schema.extensible,
      })),
      Schema::Array { element } => Ok(TypeDescriptor::List(Box::new(self.resolve_embedded(*element)?))),
      Schema::Dictionary { value } => Ok(TypeDescriptor::Map(Box::new(self.resolve_embedded(*value)?))),
      Schema::Union { variants } => {
        let resolved = variants
          .iter()
          .map(|variant| self.resolve_embedded(*variant))
          .collect::<Result<Vec<_>, _>>()?;
        Ok(TypeDescriptor::Union(UnionDescriptor {
          name: self.display_name(node),
          variants: resolved,
        }))
      }
      Schema::Object(object) => match &object.discriminator {
        Some(declared) => discriminator::resolve_tagged_union(self, id, node, object, declared),
        None => Ok(TypeDescriptor::Model(self.model_descriptor(id, node, object)?)),
      },
    }
  }

  /// Resolves a reference position. Named object/enum/union nodes are
  /// materialized into the memo table but embedded as a `Reference`, so two
  /// clients sharing a schema share one descriptor.
  fn resolve_embedded(&mut self, id: SchemaId) -> Result<TypeDescriptor, ModelConsistencyError> {
    let store = self.store;
    let node = store.get(id).ok_or(ModelConsistencyError::DanglingReference { id })?;
    match &node.schema {
      Schema::Object(_) | Schema::Enum(_) | Schema::Union { .. } => {
        self.resolve(id)?;
        Ok(TypeDescriptor::Reference(id))
      }
      Schema::Primitive(_) | Schema::Array { .. } | Schema::Dictionary { .. } | Schema::Constant(_) => self.resolve(id),
    }
  }

  /// Builds the flattened model shape: parent-chain properties first, then
  /// the schema's own, all in declaration order.
  pub(crate) fn model_descriptor(
    &mut self,
    id: SchemaId,
    node: &SchemaNode,
    object: &ObjectSchema,
  ) -> Result<ModelDescriptor, ModelConsistencyError> {
    let mut properties = vec![];
    for ancestor in self.inheritance_chain(id, object) {
      let store = self.store;
      let Some(ancestor_node) = store.get(ancestor) else {
        return Err(ModelConsistencyError::DanglingReference { id: ancestor });
      };
      if let Schema::Object(ancestor_object) = &ancestor_node.schema {
        self.collect_properties(ancestor_object, &mut properties)?;
      }
    }
    self.collect_properties(object, &mut properties)?;

    Ok(ModelDescriptor {
      name: self.display_name(node),
      properties,
    })
  }

  fn collect_properties(
    &mut self,
    object: &ObjectSchema,
    into: &mut Vec<PropertyDescriptor>,
  ) -> Result<(), ModelConsistencyError> {
    for (name, property) in &object.properties {
      into.push(PropertyDescriptor {
        name: name.clone(),
        descriptor: self.resolve_embedded(property.schema)?,
        required: property.required,
      });
    }
    Ok(())
  }

  /// Ancestors from the root of the parent chain down to (excluding) the
  /// node itself. A repeated id terminates the walk instead of looping.
  fn inheritance_chain(&self, id: SchemaId, object: &ObjectSchema) -> Vec<SchemaId> {
    let mut seen = BTreeSet::from([id]);
    let mut chain = vec![];
    let mut current = object.parent;
    while let Some(parent) = current {
      if !seen.insert(parent) {
        break;
      }
      chain.push(parent);
      current = self.store.get(parent).and_then(|node| match &node.schema {
        Schema::Object(parent_object) => parent_object.parent,
        _ => None,
      });
    }
    chain.reverse();
    chain
  }
}

#[cfg(test)]
mod tests;
