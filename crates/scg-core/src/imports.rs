//! Import identifiers collected on models and operations, and their
//! resolution to fully-qualified names.

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

pub const DATE_TIME_FORMAT: &str = "DateTimeFormat";
pub const JSON_PROPERTY: &str = "JsonProperty";
pub const JSON_VALUE: &str = "JsonValue";
pub const JSON_CREATOR: &str = "JsonCreator";
pub const ARRAYS: &str = "Arrays";
pub const API_IGNORE: &str = "ApiIgnore";

/// Ordered set of import identifiers with add-if-absent semantics.
///
/// Insertion order is kept so generated import blocks are stable between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImportSet(IndexSet<String>);

impl ImportSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an identifier. Returns `false` if it was already present.
    pub fn add(&mut self, id: &str) -> bool {
        if self.0.contains(id) {
            return false;
        }
        self.0.insert(id.to_string())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.contains(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> FromIterator<&'a str> for ImportSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut set = ImportSet::new();
        for id in iter {
            set.add(id);
        }
        set
    }
}

/// Maps short import identifiers to fully-qualified Java names.
#[derive(Debug, Clone)]
pub struct ImportMapping(IndexMap<String, String>);

impl Default for ImportMapping {
    fn default() -> Self {
        let entries = [
            (DATE_TIME_FORMAT, "org.springframework.format.annotation.DateTimeFormat"),
            (API_IGNORE, "springfox.documentation.annotations.ApiIgnore"),
            (JSON_PROPERTY, "com.fasterxml.jackson.annotation.JsonProperty"),
            (JSON_VALUE, "com.fasterxml.jackson.annotation.JsonValue"),
            (JSON_CREATOR, "com.fasterxml.jackson.annotation.JsonCreator"),
            (ARRAYS, "java.util.Arrays"),
            ("List", "java.util.List"),
            ("Map", "java.util.Map"),
            ("Set", "java.util.Set"),
            ("UUID", "java.util.UUID"),
            ("BigDecimal", "java.math.BigDecimal"),
            ("LocalDate", "java.time.LocalDate"),
            ("OffsetDateTime", "java.time.OffsetDateTime"),
            ("MultipartFile", "org.springframework.web.multipart.MultipartFile"),
        ];
        Self(
            entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }
}

impl ImportMapping {
    /// Default mapping with user entries layered on top.
    pub fn with_overrides(overrides: &IndexMap<String, String>) -> Self {
        let mut mapping = Self::default();
        for (id, qualified) in overrides {
            mapping.0.insert(id.clone(), qualified.clone());
        }
        mapping
    }

    pub fn resolve(&self, id: &str) -> Option<&str> {
        self.0.get(id).map(String::as_str)
    }

    /// Qualified names for every identifier in `imports`, in insertion order.
    /// Identifiers without a mapping are skipped.
    pub fn qualify(&self, imports: &ImportSet) -> Vec<String> {
        imports
            .iter()
            .filter_map(|id| {
                let qualified = self.resolve(id);
                if qualified.is_none() {
                    log::debug!("no import mapping for {id}");
                }
                qualified.map(str::to_string)
            })
            .collect()
    }
}
