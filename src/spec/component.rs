//! Component specification value types.
//!
//! JSON shape:
//! {
//!   "build": {
//!     "Dockerfile": "Dockerfile",      // relative path to build file
//!     "context": "."                    // relative path to build context
//!   },
//!   "run": {
//!     "env": {"KEY": "value"},          // container environment
//!     "cmd": ["python", "run.py"],      // argv, order preserved
//!     "mountpoints": [
//!       {"mountpoint": "/data", "read_only": true, "required": true}
//!     ]
//!   }
//! }
//!
//! Every struct rejects unknown fields, so a typo anywhere in the document
//! fails the decode instead of being silently dropped. Absent fields decode
//! to their zero value (empty string/map/sequence, false); absence is never
//! an error here. All paths are relative to the component directory and are
//! resolved by the caller, never by this crate.

use serde::Deserialize;
use std::collections::BTreeMap;

/// How a component of a data-processing flow is built and executed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct ComponentSpecification {
    pub build: BuildSpecification,
    pub run: RunSpecification,
}

/// How the component's container image is built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct BuildSpecification {
    /// Path to the Dockerfile used to build the component.
    #[serde(rename = "Dockerfile")]
    pub dockerfile: String,

    /// Context provided at build time.
    pub context: String,
}

/// How the component's container is started and configured at runtime.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct RunSpecification {
    /// Environment variable name -> value set in the container.
    pub env: BTreeMap<String, String>,

    /// Command invoked when starting the container.
    pub cmd: Vec<String>,

    /// Container-side paths that can accept data. Order is kept as written
    /// so downstream consumers process mounts deterministically; duplicate
    /// paths are allowed.
    pub mountpoints: Vec<MountSpecification>,
}

/// A mount point within a component: where it sits on the container side,
/// how it is mounted, and whether the runtime must supply it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct MountSpecification {
    /// Absolute path inside the container.
    pub mountpoint: String,

    pub read_only: bool,

    /// Advisory flag for the runtime wiring the component; nothing in this
    /// crate enforces it.
    pub required: bool,
}
