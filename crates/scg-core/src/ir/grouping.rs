use super::types::{IrOperationGroup, IrSpec, NormalizedName};
use crate::config::GroupBy;
use crate::ir::IrOperation;
use crate::transform::name_normalizer::normalize_name;
use indexmap::IndexMap;

/// Group name for operations that carry no tag.
pub const DEFAULT_GROUP: &str = "default";

/// Group operations into controller/service pairs and derive each group's description.
///
/// Keys are compared by their PascalCase form, which names the generated
/// files, so `pet-store` and `pet_store` share one group. The group keeps the
/// name of the key seen first.
pub fn group_operations(ir: &IrSpec, group_by: GroupBy) -> Vec<IrOperationGroup> {
    let mut groups: IndexMap<String, (NormalizedName, Vec<usize>)> = IndexMap::new();

    for (i, op) in ir.operations.iter().enumerate() {
        let key = match group_by {
            GroupBy::Tag => extract_tag(op),
            GroupBy::Route => extract_path_prefix(&op.path),
        };
        let name = normalize_name(&key);
        groups
            .entry(name.pascal_case.clone())
            .or_insert_with(|| (name, Vec::new()))
            .1
            .push(i);
    }

    groups
        .into_values()
        .map(|(name, indices)| IrOperationGroup {
            description: group_description(ir, &name.original, &indices),
            name,
            operations: indices,
        })
        .collect()
}

/// First tag name, or `default` for untagged operations.
fn extract_tag(op: &IrOperation) -> String {
    op.tags
        .first()
        .map(|t| t.name.clone())
        .unwrap_or_else(|| DEFAULT_GROUP.to_string())
}

/// Extract the first meaningful path segment as a group name.
/// e.g. "/pets/{petId}" → "pets", "/store/inventory" → "store"
fn extract_path_prefix(path: &str) -> String {
    let segments: Vec<&str> = path
        .split('/')
        .filter(|s| !s.is_empty() && !s.starts_with('{'))
        .collect();

    segments.first().unwrap_or(&DEFAULT_GROUP).to_string()
}

/// The description of the first tag of the group's first operation.
///
/// Operations later in the group may carry a different first tag; that is
/// logged but the first operation still wins.
fn group_description(ir: &IrSpec, key: &str, indices: &[usize]) -> Option<String> {
    let first_description = |i: &usize| {
        ir.operations[*i]
            .tags
            .first()
            .and_then(|t| t.description.clone())
    };

    let description = indices.first().and_then(first_description);

    if indices
        .iter()
        .skip(1)
        .any(|i| first_description(i) != description)
    {
        log::warn!(
            "operations in group {key} have different tag descriptions; using the first operation's"
        );
    }

    description
}
