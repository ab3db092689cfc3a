use std::collections::BTreeMap;

use crate::{
  errors::EncodingError,
  model::ParameterStyle,
  uri::{BoundValue, PathSegment, PathTemplate, Value, render_path},
};

fn path_arg(name: &str, value: Value) -> (String, BoundValue) {
  (name.to_string(), BoundValue::new(ParameterStyle::Simple, false, value))
}

fn query_arg(name: &str, explode: bool, value: Value) -> (String, BoundValue) {
  (name.to_string(), BoundValue::new(ParameterStyle::Form, explode, value))
}

#[test]
fn test_parse_splits_literals_and_variables() {
  let template = PathTemplate::parse("/widgets/{id}/parts/{part}");

  assert_eq!(
    template.segments(),
    &[
      PathSegment::Literal("/widgets/".to_string()),
      PathSegment::Variable("id".to_string()),
      PathSegment::Literal("/parts/".to_string()),
      PathSegment::Variable("part".to_string()),
    ]
  );
  assert_eq!(template.variable_names().collect::<Vec<_>>(), vec!["id", "part"]);
}

#[test]
fn test_parse_without_variables_is_one_literal() {
  let template = PathTemplate::parse("/health");
  assert_eq!(template.segments(), &[PathSegment::Literal("/health".to_string())]);
}

#[test]
fn test_render_substitutes_and_encodes() {
  let template = PathTemplate::parse("/widgets/{id}");
  let path_args: BTreeMap<_, _> = [path_arg("id", Value::from("a/b"))].into();

  assert_eq!(render_path(&template, &path_args, &[]).unwrap(), "/widgets/a%2Fb");
}

#[test]
fn test_render_query_join_and_continuation() {
  let template = PathTemplate::parse("/widgets");
  let query = vec![
    query_arg("filter", false, Value::from("active")),
    query_arg("tag", true, Value::List(vec![Value::from("a"), Value::from("b")])),
  ];

  assert_eq!(
    render_path(&template, &BTreeMap::new(), &query).unwrap(),
    "/widgets?filter=active&tag=a&tag=b"
  );
}

#[test]
fn test_render_elides_empty_query_parameters() {
  let template = PathTemplate::parse("/widgets");
  let query = vec![
    query_arg("empty", true, Value::List(vec![])),
    query_arg("filter", false, Value::from("active")),
  ];

  // The elided parameter is omitted entirely; the continuation never emits
  // a dangling separator or a leading `?` of its own.
  assert_eq!(render_path(&template, &BTreeMap::new(), &query).unwrap(), "/widgets?filter=active");

  let all_empty = vec![query_arg("empty", true, Value::List(vec![]))];
  assert_eq!(render_path(&template, &BTreeMap::new(), &all_empty).unwrap(), "/widgets");
}

#[test]
fn test_missing_path_variable_is_reported() {
  let template = PathTemplate::parse("/widgets/{id}");

  assert_eq!(
    render_path(&template, &BTreeMap::new(), &[]).unwrap_err(),
    EncodingError::MissingRequiredParameter { name: "id".to_string() }
  );
}

#[test]
fn test_render_matrix_and_label_styles_in_path() {
  let template = PathTemplate::parse("/api{version}/find{selector}");
  let path_args: BTreeMap<_, _> = [
    (
      "version".to_string(),
      BoundValue::new(ParameterStyle::Label, false, Value::from("v2")),
    ),
    (
      "selector".to_string(),
      BoundValue::new(
        ParameterStyle::Matrix,
        true,
        Value::List(vec![Value::from("x"), Value::from("y")]),
      ),
    ),
  ]
  .into();

  assert_eq!(render_path(&template, &path_args, &[]).unwrap(), "/api.v2/find;selector=x;selector=y");
}
