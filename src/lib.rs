//! Declarative schema for one component of a data-processing pipeline:
//! how its container image is built and how its container is run.
//!
//! The only operation exposed is a strict decode of a single JSON document
//! into a [`spec::ComponentSpecification`]. See the `spec` module.

pub mod spec;

pub type Result<T> = anyhow::Result<T>;
