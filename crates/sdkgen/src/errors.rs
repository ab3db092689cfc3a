//! Error taxonomy for the generation core.
//!
//! Every error here is deterministic and attributable to a single node of the
//! service model; nothing in this crate is retried. Model-level problems carry
//! the offending schema/operation/client identity so a model author can be
//! pointed at the fix.

use thiserror::Error;

use crate::model::{ParameterLocation, ParameterStyle, SchemaId};

/// A structural problem in the loaded service model.
///
/// These are isolated per node: one broken schema or operation does not block
/// generation of unrelated nodes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelConsistencyError {
  /// A discriminated base declares a tag value that no subtype claims.
  #[error("schema '{schema}': discriminator value '{value}' has no matching subtype")]
  UnresolvedDiscriminator { schema: String, value: String },

  /// A path template references a variable that no path parameter binds.
  #[error("operation '{operation}': path variable '{{{variable}}}' is not bound by a path parameter")]
  UnboundPathVariable { operation: String, variable: String },

  /// A parameter declares a serialization style its location cannot carry.
  #[error("operation '{operation}', parameter '{parameter}': style '{style}' is not valid for {location} parameters")]
  MalformedStyle {
    operation: String,
    parameter: String,
    style: ParameterStyle,
    location: ParameterLocation,
  },

  /// A schema reference points outside the loaded graph.
  #[error("schema graph contains a dangling reference to {id}")]
  DanglingReference { id: SchemaId },
}

/// Invalid or conflicting client builder configuration.
///
/// Fatal to the one client being built, never to the whole run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuilderConfigurationError {
  /// A fully-formed custom pipeline was supplied together with individual
  /// policy lists or a retry override. There is no implicit precedence; the
  /// conflict is reported instead.
  #[error("client '{client}': a custom pipeline cannot be combined with per-call/per-retry policies or a retry override")]
  ConflictingConfiguration { client: String },

  /// The client has no endpoint to build a pipeline against.
  #[error("client '{client}': endpoint is required before the pipeline can be assembled")]
  MissingEndpoint { client: String },
}

/// A runtime value handed to URI expansion that violates the parameter's
/// declared style contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodingError {
  /// A required path parameter had no value. Omitting a required path
  /// segment would produce an invalid URI, so this is never silently elided.
  #[error("required parameter '{name}' has no value")]
  MissingRequiredParameter { name: String },

  /// Explode expansion was requested for a scalar value under a style where
  /// explode changes the wire shape.
  #[error("parameter '{name}': explode requires an array or object value for {style} expansion")]
  ScalarExplode { name: String, style: ParameterStyle },
}
