//! The language-agnostic service model (IR) consumed by the generation core.
//!
//! All entities are created once when the model is loaded by the external
//! front-end and are read-only for the rest of the run. Schema references are
//! arena ids into a single [`SchemaStore`], which makes cyclic and diamond
//! reference shapes safe to traverse.

pub mod client;
pub mod operation;
pub mod parameter;
pub mod schema;
pub mod store;

pub use client::{Client, ClientOptions, OperationGroup, PolicySpec, RetryOptions, ServiceModel};
pub use operation::{Operation, OperationCapability};
pub use parameter::{Parameter, ParameterLocation, ParameterStyle};
pub use schema::{ConstantValue, Discriminator, EnumSchema, Extensions, ObjectSchema, PrimitiveKind, Property, Schema};
pub use store::{SchemaId, SchemaNode, SchemaStore};
