use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::types::{ContainerKind, NormalizedName};
use crate::imports::ImportSet;

/// HTTP method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Options,
    Head,
    Trace,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Head => "HEAD",
            HttpMethod::Trace => "TRACE",
        }
    }
}

/// One API endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IrOperation {
    #[serde(rename = "operation_id")]
    pub name: NormalizedName,
    pub method: HttpMethod,
    pub path: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Vec<IrTag>,
    #[serde(default)]
    pub parameters: Vec<IrParameter>,
    /// Header parameters the caller supplies implicitly; not part of the method signature.
    #[serde(default)]
    pub implicit_headers: Vec<IrParameter>,
    #[serde(default)]
    pub responses: Vec<IrResponse>,
    /// Declared return type signature; after normalization this is the base
    /// type and never `None` (absence becomes `"Void"`).
    #[serde(default)]
    pub return_type: Option<String>,
    #[serde(default)]
    pub return_container: ContainerKind,
    #[serde(default)]
    pub imports: ImportSet,
    #[serde(default)]
    pub deprecated: bool,
}

/// A tag attached to an operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IrTag {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// One declared outcome of an operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IrResponse {
    /// Status code; `"0"` is the upstream placeholder for the default success response.
    pub code: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub data_type: Option<String>,
    #[serde(default)]
    pub container: ContainerKind,
}

/// A path/query/header/cookie/body parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IrParameter {
    pub name: NormalizedName,
    pub location: IrParameterLocation,
    pub data_type: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_date: bool,
    #[serde(default)]
    pub is_date_time: bool,
    #[serde(default)]
    pub vendor_extensions: IndexMap<String, serde_json::Value>,
}

/// Parameter location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IrParameterLocation {
    Path,
    Query,
    Header,
    Cookie,
    Body,
}
