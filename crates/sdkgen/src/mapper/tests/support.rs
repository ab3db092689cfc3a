use crate::model::{PrimitiveKind, Schema, SchemaId, SchemaStore};

pub(super) const TARGET: &str = "rust";

pub(super) fn primitive(store: &mut SchemaStore, name: &str, kind: PrimitiveKind) -> SchemaId {
  store.insert(name, Schema::Primitive(kind))
}

pub(super) fn string_schema(store: &mut SchemaStore) -> SchemaId {
  primitive(store, "string", PrimitiveKind::String)
}
