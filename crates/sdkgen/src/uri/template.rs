use std::collections::BTreeMap;

use serde::Serialize;

use super::expander::{Value, expand};
use crate::{errors::EncodingError, model::ParameterStyle};

/// One piece of a parsed path template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum PathSegment {
  Literal(String),
  Variable(String),
}

/// A parsed `{variable}` path template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathTemplate {
  raw: String,
  segments: Vec<PathSegment>,
}

impl PathTemplate {
  /// Splits a template into literal and variable segments. An unclosed
  /// brace consumes the rest of the template as a variable name.
  #[must_use]
  pub fn parse(path: &str) -> Self {
    let mut segments = vec![];
    let mut last_end = 0;
    for (start, _) in path.match_indices('{') {
      if start < last_end {
        continue;
      }
      if start > last_end {
        segments.push(PathSegment::Literal(path[last_end..start].to_string()));
      }
      let end = path[start..].find('}').map_or(path.len(), |i| start + i);
      segments.push(PathSegment::Variable(path[start + 1..end].to_string()));
      last_end = (end + 1).min(path.len());
    }
    if last_end < path.len() {
      segments.push(PathSegment::Literal(path[last_end..].to_string()));
    }
    Self {
      raw: path.to_string(),
      segments,
    }
  }

  #[must_use]
  pub fn raw(&self) -> &str {
    &self.raw
  }

  #[must_use]
  pub fn segments(&self) -> &[PathSegment] {
    &self.segments
  }

  /// Template variable names in appearance order.
  pub fn variable_names(&self) -> impl Iterator<Item = &str> {
    self.segments.iter().filter_map(|segment| match segment {
      PathSegment::Variable(name) => Some(name.as_str()),
      PathSegment::Literal(_) => None,
    })
  }
}

/// A runtime value carrying its declared expansion contract.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundValue {
  pub style: ParameterStyle,
  pub explode: bool,
  pub value: Value,
}

impl BoundValue {
  #[must_use]
  pub fn new(style: ParameterStyle, explode: bool, value: Value) -> Self {
    Self { style, explode, value }
  }
}

/// Renders a full request path: every template variable expanded in place,
/// then query fragments joined with `?` and `&`.
///
/// Path variables are required; an absent one is a caller error, never
/// silently elided, since omitting a required path segment produces an
/// invalid URI. Query parameters whose expansion is empty (elided
/// collections) are omitted from the join entirely.
///
/// # Errors
///
/// [`EncodingError::MissingRequiredParameter`] for an unbound template
/// variable, plus any expansion error from the individual values.
pub fn render_path(
  template: &PathTemplate,
  path_args: &BTreeMap<String, BoundValue>,
  query_args: &[(String, BoundValue)],
) -> Result<String, EncodingError> {
  let mut rendered = String::new();
  for segment in template.segments() {
    match segment {
      PathSegment::Literal(text) => rendered.push_str(text),
      PathSegment::Variable(name) => {
        let bound = path_args.get(name).ok_or_else(|| EncodingError::MissingRequiredParameter {
          name: name.clone(),
        })?;
        rendered.push_str(&expand(bound.style, bound.explode, name, &bound.value)?);
      }
    }
  }

  let mut first = true;
  for (name, bound) in query_args {
    let fragment = expand(bound.style, bound.explode, name, &bound.value)?;
    if fragment.is_empty() {
      continue;
    }
    rendered.push(if first { '?' } else { '&' });
    rendered.push_str(&fragment);
    first = false;
  }

  Ok(rendered)
}
