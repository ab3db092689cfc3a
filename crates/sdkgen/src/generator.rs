//! Orchestration for one generation run.
//!
//! A single-pass, single-threaded batch transformation: resolve every named
//! schema, plan every operation group, assemble every client pipeline, and
//! hand the result to an emitter. Per-node failures are contained as
//! warnings so one broken schema, operation, or client never aborts the run.
//!
//! ## Usage
//!
//! ```
//! use sdkgen::{Generator, model::ServiceModel};
//!
//! # fn example() -> anyhow::Result<()> {
//! let generator = Generator::new(ServiceModel::default());
//! let generation = generator.generate()?;
//! println!("resolved {} types with {} warnings", generation.stats.types_resolved, generation.stats.warnings.len());
//! # Ok(())
//! # }
//! ```

use crate::{
  emit::Emitter,
  mapper::{TypeDescriptor, TypeMapper},
  model::{RetryOptions, ServiceModel},
  pipeline::{self, PolicyDescriptor},
  planner::{GroupPlan, OperationPlanner},
};

/// Options for one generation run.
#[derive(Debug, Clone, bon::Builder)]
pub struct GeneratorOptions {
  /// Target language key used for extension naming overrides.
  #[builder(default = "rust".to_string(), into)]
  pub target: String,
  /// Environment-scoped retry default, overridden by per-client
  /// configuration.
  pub default_retry: Option<RetryOptions>,
}

impl Default for GeneratorOptions {
  fn default() -> Self {
    Self::builder().build()
  }
}

/// The generated plan for one client facade.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientPlan {
  pub name: String,
  pub endpoint: String,
  /// The ordered policy chain the client builder installs.
  pub pipeline: Vec<PolicyDescriptor>,
  pub groups: Vec<GroupPlan>,
}

/// Statistics about one generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationStats {
  pub types_resolved: usize,
  pub operations_planned: usize,
  pub operations_failed: usize,
  pub clients_built: usize,
  /// Non-fatal problems, each attributable to a single node.
  pub warnings: Vec<String>,
}

/// Everything one run produced, in emission order.
#[derive(Debug, Clone)]
pub struct Generation {
  /// Resolved named types in schema-id order.
  pub types: Vec<(String, TypeDescriptor)>,
  pub clients: Vec<ClientPlan>,
  pub stats: GenerationStats,
}

/// High-level entry point over a fully-loaded service model.
#[derive(Debug)]
pub struct Generator {
  model: ServiceModel,
  options: GeneratorOptions,
}

impl Generator {
  #[must_use]
  pub fn new(model: ServiceModel) -> Self {
    Self::with_options(model, GeneratorOptions::default())
  }

  #[must_use]
  pub fn with_options(model: ServiceModel, options: GeneratorOptions) -> Self {
    Self { model, options }
  }

  /// Runs the full pipeline: type mapping, operation planning, pipeline
  /// assembly. Deterministic: running twice over the same model yields
  /// identical output.
  ///
  /// # Errors
  ///
  /// Only infrastructure-level failures surface here; model-level problems
  /// are contained per node and reported through
  /// [`GenerationStats::warnings`].
  pub fn generate(&self) -> anyhow::Result<Generation> {
    tracing::debug!(
      schemas = self.model.schemas.len(),
      clients = self.model.clients.len(),
      target = %self.options.target,
      "starting generation"
    );

    let mut stats = GenerationStats::default();
    let mut mapper = TypeMapper::new(&self.model.schemas, self.options.target.clone());

    let mut types = vec![];
    for (id, node) in self.model.schemas.iter() {
      match mapper.resolve(id) {
        Ok(descriptor) => {
          types.push((mapper.display_name(node), descriptor));
          stats.types_resolved += 1;
        }
        Err(error) => {
          tracing::warn!(schema = %node.name, %error, "failed to resolve schema");
          stats.warnings.push(format!("failed to resolve schema '{}': {error}", node.name));
        }
      }
    }

    let mut clients = vec![];
    for client in &self.model.clients {
      let chain = match pipeline::assemble(client, self.options.default_retry) {
        Ok(chain) => chain,
        Err(error) => {
          tracing::warn!(client = %client.name, %error, "skipping client with invalid builder configuration");
          stats.warnings.push(error.to_string());
          continue;
        }
      };

      let mut planner = OperationPlanner::new(&mut mapper);
      let mut groups = vec![];
      for group in &client.groups {
        let plan = planner.plan_group(group);
        stats.operations_planned += plan.methods.len();
        stats.operations_failed += plan.failures.len();
        for failure in &plan.failures {
          stats
            .warnings
            .push(format!("client '{}', group '{}': {failure}", client.name, group.name));
        }
        groups.push(plan);
      }

      clients.push(ClientPlan {
        name: client.name.clone(),
        endpoint: client.endpoint.clone(),
        pipeline: chain,
        groups,
      });
      stats.clients_built += 1;
    }

    tracing::debug!(
      types = stats.types_resolved,
      operations = stats.operations_planned,
      warnings = stats.warnings.len(),
      "generation finished"
    );

    Ok(Generation { types, clients, stats })
  }

  /// Walks a generation in its deterministic order: types first, then
  /// clients.
  ///
  /// # Errors
  ///
  /// Propagates the first emitter failure.
  pub fn emit(&self, generation: &Generation, emitter: &mut dyn Emitter) -> anyhow::Result<()> {
    for (name, descriptor) in &generation.types {
      emitter.emit_type(name, descriptor)?;
    }
    for plan in &generation.clients {
      emitter.emit_client(plan)?;
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use http::Method;

  use super::*;
  use crate::model::{
    Client, ClientOptions, ObjectSchema, Operation, OperationGroup, Parameter, ParameterLocation, PolicySpec,
    PrimitiveKind, Schema, SchemaStore, ServiceModel,
  };

  fn small_model() -> ServiceModel {
    let mut schemas = SchemaStore::new();
    let string = schemas.insert("string", Schema::Primitive(PrimitiveKind::String));
    let widget = schemas.insert("Widget", Schema::Object(ObjectSchema::new().with_property("name", string, true)));

    let group = OperationGroup::new("widgets")
      .with_operation(
        Operation::new("get_widget", Method::GET, "/widgets/{id}")
          .with_parameter(Parameter::new("id", ParameterLocation::Path, string).required(true))
          .with_response(widget),
      )
      .with_operation(Operation::new("list_widgets", Method::GET, "/widgets"));

    ServiceModel::new(schemas).with_client(Client::new("WidgetClient", "https://widgets.example.net").with_group(group))
  }

  #[test]
  fn test_generate_small_model() {
    let generation = Generator::new(small_model()).generate().unwrap();

    assert_eq!(generation.stats.types_resolved, 2);
    assert_eq!(generation.stats.operations_planned, 2);
    assert_eq!(generation.stats.operations_failed, 0);
    assert_eq!(generation.stats.clients_built, 1);
    assert!(generation.stats.warnings.is_empty());

    let client = &generation.clients[0];
    assert_eq!(client.name, "WidgetClient");
    assert_eq!(client.pipeline.len(), 6);
    assert_eq!(client.groups[0].methods.len(), 2);
  }

  #[test]
  fn test_generation_is_deterministic() {
    let generator = Generator::new(small_model());
    let first = generator.generate().unwrap();
    let second = generator.generate().unwrap();

    assert_eq!(first.types, second.types);
    assert_eq!(first.clients, second.clients);
    assert_eq!(first.stats, second.stats);
  }

  #[test]
  fn test_broken_client_configuration_does_not_abort_the_run() {
    let model = small_model().with_client(
      Client::new("BrokenClient", "https://broken.example.net").with_options(
        ClientOptions::new()
          .with_custom_pipeline(vec![PolicySpec::new("only")])
          .with_per_call_policy(PolicySpec::new("auth")),
      ),
    );

    let generation = Generator::new(model).generate().unwrap();

    assert_eq!(generation.stats.clients_built, 1);
    assert_eq!(generation.clients[0].name, "WidgetClient");
    assert_eq!(generation.stats.warnings.len(), 1);
    assert!(generation.stats.warnings[0].contains("BrokenClient"));
  }

  #[test]
  fn test_operation_failure_is_contained_and_reported() {
    let mut model = small_model();
    model.clients[0].groups[0]
      .operations
      .push(Operation::new("broken", Method::GET, "/widgets/{missing}"));

    let generation = Generator::new(model).generate().unwrap();
    let group = &generation.clients[0].groups[0];

    assert_eq!(group.methods.len(), 2);
    assert_eq!(group.failures.len(), 1);
    assert_eq!(generation.stats.operations_failed, 1);
    assert!(generation.stats.warnings[0].contains("broken") || generation.stats.warnings[0].contains("missing"));
  }
}
