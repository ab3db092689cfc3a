use serde::Serialize;
use strum::Display;

use super::store::SchemaId;

/// Where a parameter travels on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize)]
#[strum(serialize_all = "lowercase")]
pub enum ParameterLocation {
  Path,
  Query,
  Header,
  Body,
}

/// RFC 6570 serialization style. Meaningful only for path and query
/// parameters; the planner rejects other combinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize)]
#[strum(serialize_all = "lowercase")]
pub enum ParameterStyle {
  /// `{var}` — comma-joined values.
  Simple,
  /// `{+var}` — as simple, but the reserved character set passes through.
  Reserved,
  /// `{.var}` — dot-prefixed.
  Label,
  /// `{;var}` — `;name=value` pairs.
  Matrix,
  /// `{?var}` / `{&var}` — query expansion and continuation.
  Form,
}

/// One operation parameter bound to a schema node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parameter {
  pub name: String,
  pub location: ParameterLocation,
  pub style: ParameterStyle,
  /// Explode expansion; only meaningful for array/object-valued parameters.
  pub explode: bool,
  pub required: bool,
  pub schema: SchemaId,
}

impl Parameter {
  /// Creates a parameter with the location's default style, not exploded,
  /// not required.
  #[must_use]
  pub fn new(name: impl Into<String>, location: ParameterLocation, schema: SchemaId) -> Self {
    Self {
      name: name.into(),
      location,
      style: Self::default_style(location),
      explode: false,
      required: false,
      schema,
    }
  }

  /// The implicit style for a location when none is declared.
  #[must_use]
  pub fn default_style(location: ParameterLocation) -> ParameterStyle {
    match location {
      ParameterLocation::Query => ParameterStyle::Form,
      ParameterLocation::Path | ParameterLocation::Header | ParameterLocation::Body => ParameterStyle::Simple,
    }
  }

  #[must_use]
  pub fn with_style(mut self, style: ParameterStyle) -> Self {
    self.style = style;
    self
  }

  #[must_use]
  pub fn with_explode(mut self, explode: bool) -> Self {
    self.explode = explode;
    self
  }

  #[must_use]
  pub fn required(mut self, required: bool) -> Self {
    self.required = required;
    self
  }
}
