//! Generator configuration

use crate::error::{GeneratorError, GeneratorResult};
use serde::{Deserialize, Serialize};

/// Generator configuration, usually read from a manifest's `[generator]` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Namespace of the runtime support types (`ValueObjectException`, ...)
    #[serde(default = "default_runtime_namespace")]
    pub runtime_namespace: String,

    /// Tool name written into `[GeneratedCode]`
    #[serde(default = "default_tool_name")]
    pub tool_name: String,

    /// Tool version written into `[GeneratedCode]`
    #[serde(default = "default_tool_version")]
    pub tool_version: String,

    /// Also emit the runtime support unit
    #[serde(default)]
    pub emit_runtime: bool,
}

fn default_runtime_namespace() -> String {
    "ValueObjects".to_string()
}

fn default_tool_name() -> String {
    "valobj".to_string()
}

fn default_tool_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            runtime_namespace: default_runtime_namespace(),
            tool_name: default_tool_name(),
            tool_version: default_tool_version(),
            emit_runtime: false,
        }
    }
}

impl GeneratorConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the runtime namespace
    pub fn with_runtime_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.runtime_namespace = namespace.into();
        self
    }

    /// Set the emit-runtime flag
    pub fn with_emit_runtime(mut self, emit_runtime: bool) -> Self {
        self.emit_runtime = emit_runtime;
        self
    }

    /// Check that every value can be written into generated source
    pub fn validate(&self) -> GeneratorResult<()> {
        if !is_namespace_path(&self.runtime_namespace) {
            return Err(GeneratorError::InvalidRuntimeNamespace(
                self.runtime_namespace.clone(),
            ));
        }
        if self.tool_name.trim().is_empty() {
            return Err(GeneratorError::ConfigError(
                "tool_name must not be empty".to_string(),
            ));
        }
        if self.tool_name.contains('"') || self.tool_version.contains('"') {
            return Err(GeneratorError::ConfigError(
                "tool_name and tool_version must not contain quotes".to_string(),
            ));
        }
        Ok(())
    }
}

/// `Segment(.Segment)*` where each segment is an identifier
fn is_namespace_path(namespace: &str) -> bool {
    !namespace.is_empty()
        && namespace.split('.').all(|segment| {
            let mut chars = segment.chars();
            chars
                .next()
                .is_some_and(|first| first == '_' || first.is_alphabetic())
                && chars.all(|c| c == '_' || c.is_alphanumeric())
        })
}
