//! Planning core for HTTP service client SDK generation.
//!
//! Takes a fully-loaded, language-agnostic service model (schema graph,
//! clients, operation groups) and derives everything a rendering backend
//! needs: resolved type descriptors, per-operation method plans, and ordered
//! client pipeline chains. The crate never performs I/O; output is handed to
//! an [`emit::Emitter`] in a deterministic order.
//!
//! The main stages, in the order [`Generator::generate`] runs them:
//!
//! 1. [`mapper`] resolves every schema node into a [`mapper::TypeDescriptor`],
//!    memoized by node identity so cycles and shared subtrees are safe.
//! 2. [`planner`] turns each operation into a [`planner::MethodPlan`] with
//!    ordered parameter bindings, body serialization, and a sync/async
//!    variant pair. One broken operation never aborts its group.
//! 3. [`pipeline`] assembles the fixed-skeleton policy chain for each client
//!    and rejects conflicting builder configuration outright.
//!
//! [`uri`] carries the path template and parameter expansion rules the
//! generated methods rely on at runtime.

pub mod emit;
pub mod errors;
pub mod generator;
pub mod mapper;
pub mod model;
pub mod pipeline;
pub mod planner;
pub mod uri;

pub use generator::{ClientPlan, Generation, GenerationStats, Generator, GeneratorOptions};
