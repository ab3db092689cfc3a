use http::Method;

use super::{parameter::Parameter, store::SchemaId};

/// Capability flag set upstream by the front-end and consumed by the planner;
/// never recomputed here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationCapability {
  /// Plain request/response.
  Standard,
  /// Completion is observed via polling; the planner emits a poller shape.
  LongRunning,
  /// Responses page; the planner emits a page-iterator shape over the named
  /// item field.
  Pageable { item_field: String },
}

/// One HTTP operation. Constructed once from the code model, immutable
/// thereafter; the planner derives a read-only method plan from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
  pub name: String,
  pub method: Method,
  /// Path template with `{variable}` placeholders.
  pub path: String,
  /// Source-declaration order is preserved into the method plan.
  pub parameters: Vec<Parameter>,
  pub response: Option<SchemaId>,
  pub capability: OperationCapability,
}

impl Operation {
  #[must_use]
  pub fn new(name: impl Into<String>, method: Method, path: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      method,
      path: path.into(),
      parameters: vec![],
      response: None,
      capability: OperationCapability::Standard,
    }
  }

  #[must_use]
  pub fn with_parameter(mut self, parameter: Parameter) -> Self {
    self.parameters.push(parameter);
    self
  }

  #[must_use]
  pub fn with_response(mut self, schema: SchemaId) -> Self {
    self.response = Some(schema);
    self
  }

  #[must_use]
  pub fn with_capability(mut self, capability: OperationCapability) -> Self {
    self.capability = capability;
    self
  }
}
