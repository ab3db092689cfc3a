use crate::model::{PrimitiveKind, Schema, SchemaId, SchemaStore};

pub(super) const TARGET: &str = "rust";

pub(super) struct Fixture {
  pub(super) store: SchemaStore,
  pub(super) string: SchemaId,
  pub(super) bytes: SchemaId,
  pub(super) string_list: SchemaId,
}

impl Fixture {
  pub(super) fn new() -> Self {
    let mut store = SchemaStore::new();
    let string = store.insert("string", Schema::Primitive(PrimitiveKind::String));
    let bytes = store.insert("bytes", Schema::Primitive(PrimitiveKind::Bytes));
    let string_list = store.insert("StringList", Schema::Array { element: string });
    Self {
      store,
      string,
      bytes,
      string_list,
    }
  }
}
