use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level project configuration loaded from `.scg.yaml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScgConfig {
    pub input: String,
    pub output: String,
    pub api_package: String,
    pub model_package: String,
    pub group_by: GroupBy,
    pub options: GeneratorOptions,
    /// Extra or overriding entries for the import mapping (short name → qualified name).
    pub import_mappings: IndexMap<String, String>,
}

impl Default for ScgConfig {
    fn default() -> Self {
        Self {
            input: "ir.yaml".to_string(),
            output: "generated-code/javaSpring".to_string(),
            api_package: "ru.egartech.swagger".to_string(),
            model_package: "ru.egartech.swagger.model".to_string(),
            group_by: GroupBy::default(),
            options: GeneratorOptions::default(),
            import_mappings: IndexMap::new(),
        }
    }
}

/// Toggles that parameterize post-processing and rendering.
///
/// Read once when the run is configured; nothing mutates them afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct GeneratorOptions {
    /// Emit validation annotations (`@Valid`, `@NotNull`, ...).
    pub use_bean_validation: bool,
    /// Append `Dto` to generated model names.
    pub use_dto: bool,
    /// Emit Lombok annotations instead of hand-written accessors.
    pub use_lombok: bool,
    pub serialization_library: SerializationLibrary,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            use_bean_validation: true,
            use_dto: false,
            use_lombok: true,
            serialization_library: SerializationLibrary::Jackson,
        }
    }
}

/// Supported JSON serialization libraries. Jackson is the only one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SerializationLibrary {
    #[default]
    Jackson,
}

/// How operations are grouped into controller/service pairs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupBy {
    /// By the operation's first tag.
    #[default]
    Tag,
    /// By the first non-parameter path segment.
    Route,
}

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = ".scg.yaml";

/// Load config from a YAML file. Returns `None` if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<Option<ScgConfig>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config: ScgConfig =
        serde_yaml_ng::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(Some(config))
}

/// Generate the default config file content.
pub fn default_config_content() -> &'static str {
    r#"# scg configuration
input: ir.yaml
output: generated-code/javaSpring

api_package: ru.egartech.swagger
model_package: ru.egartech.swagger.model

group_by: tag            # tag | route

options:
  use_bean_validation: true
  use_dto: false          # append "Dto" to model class names
  use_lombok: true
  serialization_library: jackson

import_mappings: {}
  # ApiIgnore: springfox.documentation.annotations.ApiIgnore
"#
}
