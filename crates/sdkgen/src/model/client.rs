use super::{operation::Operation, store::SchemaStore};

/// A named, opaque policy supplied by configuration. The core fixes its
/// position in the chain, never its internal behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicySpec {
  pub name: String,
}

impl PolicySpec {
  #[must_use]
  pub fn new(name: impl Into<String>) -> Self {
    Self { name: name.into() }
  }
}

/// Retry policy configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, bon::Builder)]
pub struct RetryOptions {
  #[builder(default = 3)]
  pub max_retries: u32,
  #[builder(default = 800)]
  pub initial_delay_ms: u64,
  #[builder(default = 60_000)]
  pub max_delay_ms: u64,
}

impl Default for RetryOptions {
  fn default() -> Self {
    Self::builder().build()
  }
}

impl RetryOptions {
  /// Resolves the effective retry configuration with an explicit override
  /// order: explicit > environment-scoped > default. Both candidates are
  /// passed down explicitly; nothing is read from ambient state.
  #[must_use]
  pub fn resolve(explicit: Option<Self>, scoped: Option<Self>) -> Self {
    explicit.or(scoped).unwrap_or_default()
  }
}

/// Immutable client builder configuration, assembled once by the front-end
/// and validated at a single finalization point by the pipeline assembler.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientOptions {
  /// Caller-supplied policies installed before the retry policy, in
  /// insertion order.
  pub per_call_policies: Vec<PolicySpec>,
  /// Caller-supplied policies installed after the retry policy, in
  /// insertion order.
  pub per_retry_policies: Vec<PolicySpec>,
  /// Replaces the default retry policy; never duplicates it.
  pub retry: Option<RetryOptions>,
  /// A fully-formed pipeline taken verbatim. Mutually exclusive with the
  /// three fields above.
  pub custom_pipeline: Option<Vec<PolicySpec>>,
}

impl ClientOptions {
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  #[must_use]
  pub fn with_per_call_policy(mut self, policy: PolicySpec) -> Self {
    self.per_call_policies.push(policy);
    self
  }

  #[must_use]
  pub fn with_per_retry_policy(mut self, policy: PolicySpec) -> Self {
    self.per_retry_policies.push(policy);
    self
  }

  #[must_use]
  pub fn with_retry(mut self, retry: RetryOptions) -> Self {
    self.retry = Some(retry);
    self
  }

  #[must_use]
  pub fn with_custom_pipeline(mut self, policies: Vec<PolicySpec>) -> Self {
    self.custom_pipeline = Some(policies);
    self
  }

  /// Whether any individual policy or retry override was supplied.
  #[must_use]
  pub fn has_policy_overrides(&self) -> bool {
    !self.per_call_policies.is_empty() || !self.per_retry_policies.is_empty() || self.retry.is_some()
  }
}

/// An operation group: a view over a shared client pipeline, not a separate
/// ownership boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationGroup {
  pub name: String,
  pub operations: Vec<Operation>,
}

impl OperationGroup {
  #[must_use]
  pub fn new(name: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      operations: vec![],
    }
  }

  #[must_use]
  pub fn with_operation(mut self, operation: Operation) -> Self {
    self.operations.push(operation);
    self
  }
}

/// A client facade owning one pipeline configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Client {
  pub name: String,
  pub endpoint: String,
  pub groups: Vec<OperationGroup>,
  pub options: ClientOptions,
}

impl Client {
  #[must_use]
  pub fn new(name: impl Into<String>, endpoint: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      endpoint: endpoint.into(),
      groups: vec![],
      options: ClientOptions::default(),
    }
  }

  #[must_use]
  pub fn with_group(mut self, group: OperationGroup) -> Self {
    self.groups.push(group);
    self
  }

  #[must_use]
  pub fn with_options(mut self, options: ClientOptions) -> Self {
    self.options = options;
    self
  }
}

/// The fully-loaded service model handed over by the external front-end.
#[derive(Debug, Clone, Default)]
pub struct ServiceModel {
  pub schemas: SchemaStore,
  pub clients: Vec<Client>,
}

impl ServiceModel {
  #[must_use]
  pub fn new(schemas: SchemaStore) -> Self {
    Self { schemas, clients: vec![] }
  }

  #[must_use]
  pub fn with_client(mut self, client: Client) -> Self {
    self.clients.push(client);
    self
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_retry_resolution_order() {
    let explicit = RetryOptions::builder().max_retries(7).build();
    let scoped = RetryOptions::builder().max_retries(5).build();

    assert_eq!(RetryOptions::resolve(Some(explicit), Some(scoped)).max_retries, 7);
    assert_eq!(RetryOptions::resolve(None, Some(scoped)).max_retries, 5);
    assert_eq!(RetryOptions::resolve(None, None), RetryOptions::default());
  }

  #[test]
  fn test_policy_override_detection() {
    assert!(!ClientOptions::new().has_policy_overrides());
    assert!(ClientOptions::new().with_retry(RetryOptions::default()).has_policy_overrides());
    assert!(
      ClientOptions::new()
        .with_per_call_policy(PolicySpec::new("auth"))
        .has_policy_overrides()
    );
  }
}
