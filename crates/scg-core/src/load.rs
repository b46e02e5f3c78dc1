//! Loading the IR document handed over by the upstream parser.

use std::fs;
use std::path::Path;

use crate::error::LoadError;
use crate::ir::IrSpec;

/// Parse an IR document from a YAML string.
pub fn from_yaml(input: &str) -> Result<IrSpec, LoadError> {
    Ok(serde_yaml_ng::from_str(input)?)
}

/// Parse an IR document from a JSON string.
pub fn from_json(input: &str) -> Result<IrSpec, LoadError> {
    Ok(serde_json::from_str(input)?)
}

/// Read an IR document from disk, choosing the format by file extension
/// (`.json` is JSON, everything else is YAML).
pub fn from_path(path: &Path) -> Result<IrSpec, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("yaml");
    log::debug!("loading IR from {} as {ext}", path.display());

    match ext {
        "json" => from_json(&content),
        _ => from_yaml(&content),
    }
}
