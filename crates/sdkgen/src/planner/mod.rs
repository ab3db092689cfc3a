//! Derives read-only method plans from operations.
//!
//! For each operation the planner orders parameter bindings (path before
//! query before header before body, each in source-declaration order), picks
//! the body-serialization and response-decoding requirements, and tags the
//! return shape from the operation's capability flag. One broken operation
//! fails only itself; siblings in the same group still plan.

pub mod plan;

pub use plan::{
  BodySerialization, GroupPlan, MethodPlan, MethodShape, MethodVariants, ParameterBinding, ResponseKind,
};

use crate::{
  errors::ModelConsistencyError,
  mapper::{TypeDescriptor, TypeMapper},
  model::{Operation, OperationCapability, OperationGroup, Parameter, ParameterLocation, ParameterStyle, PrimitiveKind},
  uri::PathTemplate,
};

/// Binding order across locations. Order within one location is the source
/// declaration order, which `Vec` iteration preserves.
const LOCATION_ORDER: [ParameterLocation; 4] = [
  ParameterLocation::Path,
  ParameterLocation::Query,
  ParameterLocation::Header,
  ParameterLocation::Body,
];

/// Plans operations against a shared type mapper.
#[derive(Debug)]
pub struct OperationPlanner<'m, 's> {
  mapper: &'m mut TypeMapper<'s>,
}

impl<'m, 's> OperationPlanner<'m, 's> {
  pub fn new(mapper: &'m mut TypeMapper<'s>) -> Self {
    Self { mapper }
  }

  /// Plans every operation in the group, containing per-operation failures.
  pub fn plan_group(&mut self, group: &OperationGroup) -> GroupPlan {
    let mut methods = vec![];
    let mut failures = vec![];
    for operation in &group.operations {
      match self.plan_operation(operation) {
        Ok(plan) => methods.push(plan),
        Err(error) => failures.push(error),
      }
    }
    GroupPlan {
      name: group.name.clone(),
      methods,
      failures,
    }
  }

  /// Derives the method plan for one operation.
  ///
  /// # Errors
  ///
  /// [`ModelConsistencyError`] for an unbound path variable, a style/location
  /// mismatch, or a schema resolution failure; fatal to this operation only.
  pub fn plan_operation(&mut self, operation: &Operation) -> Result<MethodPlan, ModelConsistencyError> {
    let template = PathTemplate::parse(&operation.path);
    self.validate(operation, &template)?;

    let mut bindings = vec![];
    for location in LOCATION_ORDER {
      for parameter in operation.parameters.iter().filter(|p| p.location == location) {
        bindings.push(ParameterBinding {
          name: parameter.name.clone(),
          location,
          style: parameter.style,
          explode: parameter.explode,
          required: parameter.required,
          descriptor: self.mapper.resolve(parameter.schema)?,
        });
      }
    }

    let body = body_serialization(&bindings);
    let response = match operation.response {
      None => ResponseKind::None,
      Some(schema) => match self.mapper.resolve(schema)? {
        TypeDescriptor::Scalar(PrimitiveKind::Bytes) => ResponseKind::RawStream,
        descriptor => ResponseKind::Typed(descriptor),
      },
    };
    let shape = match &operation.capability {
      OperationCapability::Standard => MethodShape::Single,
      OperationCapability::LongRunning => MethodShape::Poller,
      OperationCapability::Pageable { item_field } => MethodShape::PageIterator {
        item_field: item_field.clone(),
      },
    };

    Ok(MethodPlan {
      name: operation.name.clone(),
      method: operation.method.clone(),
      path: template,
      bindings,
      body,
      response,
      shape,
      variants: MethodVariants {
        blocking: operation.name.clone(),
        asynchronous: format!("{}_async", operation.name),
      },
    })
  }

  fn validate(&self, operation: &Operation, template: &PathTemplate) -> Result<(), ModelConsistencyError> {
    for parameter in &operation.parameters {
      if !style_fits_location(parameter) {
        return Err(ModelConsistencyError::MalformedStyle {
          operation: operation.name.clone(),
          parameter: parameter.name.clone(),
          style: parameter.style,
          location: parameter.location,
        });
      }
    }

    for variable in template.variable_names() {
      let bound = operation
        .parameters
        .iter()
        .any(|p| p.location == ParameterLocation::Path && p.name == variable);
      if !bound {
        return Err(ModelConsistencyError::UnboundPathVariable {
          operation: operation.name.clone(),
          variable: variable.to_string(),
        });
      }
    }

    Ok(())
  }
}

/// Style is meaningful only for path and query locations. Headers take the
/// implicit simple style; a body parameter may carry `form` as the
/// urlencoded-body marker.
fn style_fits_location(parameter: &Parameter) -> bool {
  match parameter.location {
    ParameterLocation::Path => matches!(
      parameter.style,
      ParameterStyle::Simple | ParameterStyle::Reserved | ParameterStyle::Label | ParameterStyle::Matrix
    ),
    ParameterLocation::Query => parameter.style == ParameterStyle::Form,
    ParameterLocation::Header => parameter.style == ParameterStyle::Simple,
    ParameterLocation::Body => matches!(parameter.style, ParameterStyle::Simple | ParameterStyle::Form),
  }
}

fn body_serialization(bindings: &[ParameterBinding]) -> BodySerialization {
  let Some(body) = bindings.iter().find(|b| b.location == ParameterLocation::Body) else {
    return BodySerialization::None;
  };
  if body.style == ParameterStyle::Form {
    return BodySerialization::Form;
  }
  match body.descriptor {
    TypeDescriptor::Scalar(PrimitiveKind::Bytes) => BodySerialization::Binary,
    _ => BodySerialization::Json,
  }
}

#[cfg(test)]
mod tests;
