use http::Method;

use super::support::{Fixture, TARGET};
use crate::{
  errors::ModelConsistencyError,
  mapper::TypeMapper,
  model::{Operation, OperationGroup, Parameter, ParameterLocation, ParameterStyle},
  planner::OperationPlanner,
};

#[test]
fn test_unbound_path_variable_is_fatal_to_the_operation() {
  let fixture = Fixture::new();
  let operation = Operation::new("get_widget", Method::GET, "/widgets/{id}");

  let mut mapper = TypeMapper::new(&fixture.store, TARGET);
  let mut planner = OperationPlanner::new(&mut mapper);

  assert_eq!(
    planner.plan_operation(&operation).unwrap_err(),
    ModelConsistencyError::UnboundPathVariable {
      operation: "get_widget".to_string(),
      variable: "id".to_string(),
    }
  );
}

#[test]
fn test_one_broken_operation_does_not_abort_the_group() {
  let fixture = Fixture::new();
  let group = OperationGroup::new("widgets")
    .with_operation(Operation::new("broken", Method::GET, "/widgets/{id}"))
    .with_operation(
      Operation::new("healthy", Method::GET, "/widgets/{id}")
        .with_parameter(Parameter::new("id", ParameterLocation::Path, fixture.string).required(true)),
    )
    .with_operation(Operation::new("also_healthy", Method::GET, "/widgets"));

  let mut mapper = TypeMapper::new(&fixture.store, TARGET);
  let mut planner = OperationPlanner::new(&mut mapper);
  let plan = planner.plan_group(&group);

  assert_eq!(plan.name, "widgets");
  let planned: Vec<_> = plan.methods.iter().map(|m| m.name.as_str()).collect();
  assert_eq!(planned, vec!["healthy", "also_healthy"]);
  assert_eq!(plan.failures.len(), 1);
  assert!(matches!(
    plan.failures[0],
    ModelConsistencyError::UnboundPathVariable { .. }
  ));
}

#[test]
fn test_malformed_style_combinations_are_rejected() {
  let fixture = Fixture::new();
  let mut mapper = TypeMapper::new(&fixture.store, TARGET);
  let mut planner = OperationPlanner::new(&mut mapper);

  // Form is a query expansion, never a path style.
  let form_in_path = Operation::new("get", Method::GET, "/widgets/{id}")
    .with_parameter(
      Parameter::new("id", ParameterLocation::Path, fixture.string)
        .with_style(ParameterStyle::Form)
        .required(true),
    );
  assert_eq!(
    planner.plan_operation(&form_in_path).unwrap_err(),
    ModelConsistencyError::MalformedStyle {
      operation: "get".to_string(),
      parameter: "id".to_string(),
      style: ParameterStyle::Form,
      location: ParameterLocation::Path,
    }
  );

  // Matrix belongs to path position only.
  let matrix_in_query = Operation::new("list", Method::GET, "/widgets")
    .with_parameter(Parameter::new("filter", ParameterLocation::Query, fixture.string).with_style(ParameterStyle::Matrix));
  assert!(matches!(
    planner.plan_operation(&matrix_in_query).unwrap_err(),
    ModelConsistencyError::MalformedStyle { .. }
  ));

  // Headers take the implicit simple style.
  let labeled_header = Operation::new("list", Method::GET, "/widgets")
    .with_parameter(Parameter::new("trace", ParameterLocation::Header, fixture.string).with_style(ParameterStyle::Label));
  assert!(matches!(
    planner.plan_operation(&labeled_header).unwrap_err(),
    ModelConsistencyError::MalformedStyle { .. }
  ));
}

#[test]
fn test_path_styles_beyond_simple_are_accepted() {
  let fixture = Fixture::new();
  let operation = Operation::new("find", Method::GET, "/api{version}/file{path}")
    .with_parameter(
      Parameter::new("version", ParameterLocation::Path, fixture.string)
        .with_style(ParameterStyle::Label)
        .required(true),
    )
    .with_parameter(
      Parameter::new("path", ParameterLocation::Path, fixture.string)
        .with_style(ParameterStyle::Reserved)
        .required(true),
    );

  let mut mapper = TypeMapper::new(&fixture.store, TARGET);
  let mut planner = OperationPlanner::new(&mut mapper);
  assert!(planner.plan_operation(&operation).is_ok());
}
