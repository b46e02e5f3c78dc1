use serde::Serialize;

use crate::ir::ContainerKind;

/// Marker base type for operations and responses without a body.
pub const VOID: &str = "Void";

const LIST_PREFIXES: [&str; 2] = ["List", "java.util.List"];
const MAP_PREFIXES: [&str; 2] = ["Map", "java.util.Map"];
const SET_PREFIXES: [&str; 2] = ["Set", "java.util.Set"];

/// A type signature split into its base type and container kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedType {
    pub base_type: String,
    pub container: ContainerKind,
}

impl ResolvedType {
    fn new(base_type: &str, container: ContainerKind) -> Self {
        Self {
            base_type: base_type.to_string(),
            container,
        }
    }
}

/// Split a container signature such as `List<Order>` into `("Order", List)`.
///
/// Returns `None` when the signature is not a recognized container or its
/// `<`/`>` delimiters are malformed; callers keep whatever they had.
/// A missing signature resolves to [`VOID`].
///
/// Prefixes are checked in the order list, map, set. For maps the key type is
/// dropped and the value type becomes the base type.
pub fn try_resolve(signature: Option<&str>) -> Option<ResolvedType> {
    let Some(sig) = signature else {
        return Some(ResolvedType::new(VOID, ContainerKind::None));
    };

    if has_prefix(sig, &LIST_PREFIXES) {
        generic_span(sig).map(|inner| ResolvedType::new(inner.trim(), ContainerKind::List))
    } else if has_prefix(sig, &MAP_PREFIXES) {
        generic_span(sig)
            .and_then(|inner| inner.split_once(','))
            .map(|(_key, value)| ResolvedType::new(value.trim(), ContainerKind::Map))
    } else if has_prefix(sig, &SET_PREFIXES) {
        generic_span(sig).map(|inner| ResolvedType::new(inner.trim(), ContainerKind::Set))
    } else {
        None
    }
}

/// Total form of [`try_resolve`]: unresolved signatures come back unchanged
/// with no container.
pub fn resolve(signature: Option<&str>) -> ResolvedType {
    try_resolve(signature).unwrap_or_else(|| {
        ResolvedType::new(signature.unwrap_or(VOID), ContainerKind::None)
    })
}

fn has_prefix(sig: &str, prefixes: &[&str]) -> bool {
    prefixes.iter().any(|p| sig.starts_with(p))
}

/// Text between the first `<` and the last `>`.
fn generic_span(sig: &str) -> Option<&str> {
    let start = sig.find('<')?;
    let end = sig.rfind('>')?;
    if end <= start {
        return None;
    }
    Some(&sig[start + 1..end])
}
