//! Assembles the ordered policy chain for a client builder.
//!
//! The skeleton is fixed: telemetry/user-agent first, request id, context
//! headers, caller per-call policies, exactly one retry policy, the date
//! header, caller per-retry policies, and logging last. Policies themselves
//! are opaque to the core; only their position in the chain is fixed here.

use strum::Display;

use crate::{
  errors::BuilderConfigurationError,
  model::{Client, ClientOptions, PolicySpec, RetryOptions},
};

/// Where a policy sits relative to the retry boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum PolicyPosition {
  PerCall,
  PerRetry,
  Fixed,
}

/// The kind of policy at a chain position.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum PolicyKind {
  UserAgent,
  RequestId,
  ContextHeaders,
  Custom,
  #[strum(serialize = "retry")]
  Retry(RetryOptions),
  Date,
  Logging,
}

/// One assembled chain entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyDescriptor {
  pub kind: PolicyKind,
  pub name: String,
  pub position: PolicyPosition,
}

impl PolicyDescriptor {
  fn fixed(kind: PolicyKind) -> Self {
    let name = kind.to_string();
    Self {
      kind,
      name,
      position: PolicyPosition::Fixed,
    }
  }

  fn custom(spec: &PolicySpec, position: PolicyPosition) -> Self {
    Self {
      kind: PolicyKind::Custom,
      name: spec.name.clone(),
      position,
    }
  }
}

/// Builds the ordered policy list for one client.
///
/// The single finalization point for builder state: conflicting
/// configuration is rejected here instead of being resolved by implicit
/// precedence, and exactly one retry policy is installed no matter how the
/// configuration arrived. `scoped_retry` is the environment-scoped default
/// passed down explicitly; the client's own override wins over it.
///
/// # Errors
///
/// [`BuilderConfigurationError`], fatal to this one client's build only.
pub fn assemble(client: &Client, scoped_retry: Option<RetryOptions>) -> Result<Vec<PolicyDescriptor>, BuilderConfigurationError> {
  let options = &client.options;
  if options.custom_pipeline.is_some() && options.has_policy_overrides() {
    return Err(BuilderConfigurationError::ConflictingConfiguration {
      client: client.name.clone(),
    });
  }
  if client.endpoint.trim().is_empty() {
    return Err(BuilderConfigurationError::MissingEndpoint {
      client: client.name.clone(),
    });
  }

  if let Some(custom) = &options.custom_pipeline {
    return Ok(custom.iter().map(|spec| PolicyDescriptor::custom(spec, PolicyPosition::Fixed)).collect());
  }

  Ok(assemble_default(options, scoped_retry))
}

fn assemble_default(options: &ClientOptions, scoped_retry: Option<RetryOptions>) -> Vec<PolicyDescriptor> {
  let retry = RetryOptions::resolve(options.retry, scoped_retry);

  let mut chain = vec![
    PolicyDescriptor::fixed(PolicyKind::UserAgent),
    PolicyDescriptor::fixed(PolicyKind::RequestId),
    PolicyDescriptor::fixed(PolicyKind::ContextHeaders),
  ];
  chain.extend(
    options
      .per_call_policies
      .iter()
      .map(|spec| PolicyDescriptor::custom(spec, PolicyPosition::PerCall)),
  );
  chain.push(PolicyDescriptor::fixed(PolicyKind::Retry(retry)));
  chain.push(PolicyDescriptor::fixed(PolicyKind::Date));
  chain.extend(
    options
      .per_retry_policies
      .iter()
      .map(|spec| PolicyDescriptor::custom(spec, PolicyPosition::PerRetry)),
  );
  chain.push(PolicyDescriptor::fixed(PolicyKind::Logging));
  chain
}
