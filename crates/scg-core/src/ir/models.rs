use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::types::NormalizedName;
use crate::imports::ImportSet;

/// A named schema type rendered as a model class or enum.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IrModel {
    /// Raw schema name as it appears in the API description.
    pub name: String,
    /// Generated class name, derived from `name` by the pipeline.
    #[serde(default)]
    pub class_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub properties: Vec<IrProperty>,
    #[serde(default)]
    pub is_enum: bool,
    #[serde(default)]
    pub enum_values: Vec<String>,
    /// At least one property is enum-valued.
    #[serde(default)]
    pub has_enums: bool,
    #[serde(default)]
    pub imports: ImportSet,
    #[serde(default)]
    pub vendor_extensions: IndexMap<String, serde_json::Value>,
}

/// A field on a model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IrProperty {
    pub name: NormalizedName,
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
    pub is_byte_array: bool,
    #[serde(default)]
    pub is_enum: bool,
    #[serde(default)]
    pub example: Option<String>,
}
