use std::fmt;

use serde::{Deserialize, Serialize};

use crate::transform::name_normalizer::normalize_name;

/// A parsed API description, ready for post-processing and rendering.
///
/// Produced by the upstream parser and handed over as a YAML or JSON document.
/// `groups` is derived by the pipeline and ignored on input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IrSpec {
    pub info: IrInfo,
    #[serde(default)]
    pub operations: Vec<IrOperation>,
    #[serde(default)]
    pub models: Vec<IrModel>,
    #[serde(default, skip_deserializing)]
    pub groups: Vec<IrOperationGroup>,
}

/// API metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IrInfo {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub version: String,
}

/// Operations rendered together as one controller/service pair.
#[derive(Debug, Clone, Serialize)]
pub struct IrOperationGroup {
    pub name: NormalizedName,
    pub operations: Vec<usize>, // indices into IrSpec.operations
    /// Display description shared by the whole group, taken from the first
    /// operation's first tag.
    pub description: Option<String>,
}

/// Whether a type is wrapped in a collection, independent of its element type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContainerKind {
    #[default]
    None,
    List,
    Map,
    Set,
}

impl ContainerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContainerKind::None => "none",
            ContainerKind::List => "list",
            ContainerKind::Map => "map",
            ContainerKind::Set => "set",
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, ContainerKind::None)
    }
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A name with multiple casing variants pre-computed.
///
/// Serialized as the original string; casing variants are recomputed on load.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct NormalizedName {
    pub original: String,
    pub pascal_case: String,
    pub camel_case: String,
    pub snake_case: String,
    pub screaming_snake: String,
}

impl From<String> for NormalizedName {
    fn from(value: String) -> Self {
        normalize_name(&value)
    }
}

impl From<NormalizedName> for String {
    fn from(value: NormalizedName) -> Self {
        value.original
    }
}

impl fmt::Display for NormalizedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.original)
    }
}

// Re-export model and operation types for convenience
pub use super::models::*;
pub use super::operations::*;
