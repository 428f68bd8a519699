//! Spec layer: JSON schema + decoded in-memory structures.
//!
//! It owns:
//! - the component specification value types (build/run/mountpoints)
//! - the strict single-document decoder

pub mod component;
pub mod decode;

pub use component::{
    BuildSpecification, ComponentSpecification, MountSpecification, RunSpecification,
};
pub use decode::read_single_specification;
