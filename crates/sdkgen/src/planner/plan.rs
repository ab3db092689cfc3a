use http::Method;

use crate::{
  errors::ModelConsistencyError,
  mapper::TypeDescriptor,
  model::{ParameterLocation, ParameterStyle},
  uri::PathTemplate,
};

/// How the request body is serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodySerialization {
  None,
  Json,
  Binary,
  Form,
}

/// How the response is decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseKind {
  None,
  Typed(TypeDescriptor),
  RawStream,
}

/// The return shape of the generated method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MethodShape {
  /// A single-value return.
  Single,
  /// A poller over a long-running operation.
  Poller,
  /// A page iterator over the named item field.
  PageIterator { item_field: String },
}

/// The sync/async method pair derived from one plan. Both variants share the
/// plan; only the invocation strategy differs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodVariants {
  pub blocking: String,
  pub asynchronous: String,
}

/// One parameter binding with its resolved type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterBinding {
  pub name: String,
  pub location: ParameterLocation,
  pub style: ParameterStyle,
  pub explode: bool,
  pub required: bool,
  pub descriptor: TypeDescriptor,
}

/// A read-only method plan derived from one operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodPlan {
  pub name: String,
  pub method: Method,
  pub path: PathTemplate,
  /// Ordered path, then query, then header, then body; source-declaration
  /// order within each location.
  pub bindings: Vec<ParameterBinding>,
  pub body: BodySerialization,
  pub response: ResponseKind,
  pub shape: MethodShape,
  pub variants: MethodVariants,
}

/// Plans for one operation group. A broken operation lands in `failures` and
/// does not abort its siblings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupPlan {
  pub name: String,
  pub methods: Vec<MethodPlan>,
  pub failures: Vec<ModelConsistencyError>,
}
