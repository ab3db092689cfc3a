mod failures;
mod support;
