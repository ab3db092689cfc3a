//! Contract with the external rendering engine.
//!
//! The core never touches the filesystem; it hands resolved descriptors and
//! plans to an [`Emitter`] in a deterministic order and fixes *what* is
//! emitted, not how it is rendered.

use crate::{generator::ClientPlan, mapper::TypeDescriptor};

/// Receives generation output in a deterministic order: every resolved type
/// in schema-id order, then every client plan in model order.
pub trait Emitter {
  /// Emits one resolved type.
  ///
  /// # Errors
  ///
  /// Rendering failures propagate to the caller unchanged.
  fn emit_type(&mut self, name: &str, descriptor: &TypeDescriptor) -> anyhow::Result<()>;

  /// Emits one client facade: its pipeline and per-group method plans.
  ///
  /// # Errors
  ///
  /// Rendering failures propagate to the caller unchanged.
  fn emit_client(&mut self, plan: &ClientPlan) -> anyhow::Result<()>;
}

/// Test double capturing emission order.
#[derive(Debug, Default)]
pub struct RecordingEmitter {
  pub types: Vec<String>,
  pub clients: Vec<String>,
}

impl Emitter for RecordingEmitter {
  fn emit_type(&mut self, name: &str, _descriptor: &TypeDescriptor) -> anyhow::Result<()> {
    self.types.push(name.to_string());
    Ok(())
  }

  fn emit_client(&mut self, plan: &ClientPlan) -> anyhow::Result<()> {
    self.clients.push(plan.name.clone());
    Ok(())
  }
}
