//! Strict single-document decoder for component specifications.

use crate::spec::ComponentSpecification;
use anyhow::Context;
use serde::Deserialize;
use std::io::Read;

/// Read a single ComponentSpecification JSON document from `reader`.
///
/// The stream is consumed up to the end of the document and is not assumed
/// to be seekable or reusable. Any unrecognized field at any nesting level,
/// any type mismatch, malformed JSON, or a read error on the stream fails
/// the decode; no partial value is returned. Callers that need to tell the
/// causes apart can inspect the error chain.
pub fn read_single_specification<R: Read>(reader: R) -> anyhow::Result<ComponentSpecification> {
    let mut de = serde_json::Deserializer::from_reader(reader);
    let specification = ComponentSpecification::deserialize(&mut de)
        .context("decode component specification")?;
    Ok(specification)
}
