//! RFC 6570 expansion for the parameter styles the planner binds.
//!
//! [`expander`] is the pure per-parameter function; [`template`] composes
//! expansions into full request paths with query continuation.

pub mod expander;
pub mod template;

pub use expander::{Value, expand};
pub use template::{BoundValue, PathSegment, PathTemplate, render_path};

#[cfg(test)]
mod tests;
