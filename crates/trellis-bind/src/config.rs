//! Binding configuration.
//!
//! The denylist and the resource caps are plain data so deployments can
//! tighten or extend them without touching the resolver's control flow.

use serde::{Deserialize, Serialize};

/// Substrings rejected in any field path, matched case-insensitively.
///
/// The list targets identifiers associated with system access, process
/// execution, low-level memory, reflection, and private-field naming
/// conventions. It deliberately over-blocks.
const DEFAULT_DENYLIST: &[&str] = &[
    "__",
    "os.",
    "exec",
    "system",
    "syscall",
    "unsafe",
    "reflect",
    "runtime",
    "process",
];

/// Policy applied to every incoming field path before resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetyPolicy {
    /// Maximum field path length in bytes.
    pub max_path_len: usize,
    /// Denylisted substrings, matched case-insensitively.
    pub denylist: Vec<String>,
}

impl Default for SafetyPolicy {
    fn default() -> Self {
        Self {
            max_path_len: 256,
            denylist: DEFAULT_DENYLIST.iter().map(ToString::to_string).collect(),
        }
    }
}

impl SafetyPolicy {
    /// Adds a denylist entry.
    #[must_use]
    pub fn deny(mut self, pattern: impl Into<String>) -> Self {
        self.denylist.push(pattern.into());
        self
    }
}

/// Resource caps enforced during resolution and coercion.
///
/// The caps bound the cost of a single malicious request: growth stops at
/// `max_slice_len` elements and every loop in the pipeline is bounded, so
/// no external timeout is needed to guarantee termination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindLimits {
    /// Highest index accepted in a bracketed segment.
    pub max_index: usize,
    /// Absolute cap on on-demand sequence growth.
    pub max_slice_len: usize,
    /// Maximum body items per request. Request-fatal when exceeded.
    pub max_body_items: usize,
    /// Maximum bytes per body value. Request-fatal when exceeded.
    pub max_value_bytes: usize,
    /// Maximum bytes accepted by the float parser.
    pub max_float_len: usize,
}

impl Default for BindLimits {
    fn default() -> Self {
        Self {
            max_index: 10_000,
            max_slice_len: 1_000,
            max_body_items: 1_000,
            max_value_bytes: 1_048_576,
            max_float_len: 64,
        }
    }
}
