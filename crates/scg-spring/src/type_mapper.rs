use scg_core::ir::{ContainerKind, IrOperation};
use scg_core::transform::type_normalizer::VOID;

/// Re-wrap a base type in its container, e.g. `("Order", List)` → `List<Order>`.
/// Map keys are always `String`.
pub fn java_type(base_type: &str, container: ContainerKind) -> String {
    match container {
        ContainerKind::None => base_type.to_string(),
        ContainerKind::List => format!("List<{base_type}>"),
        ContainerKind::Set => format!("Set<{base_type}>"),
        ContainerKind::Map => format!("Map<String, {base_type}>"),
    }
}

/// Type argument of the controller's `ResponseEntity<...>`.
pub fn response_entity_type(op: &IrOperation) -> String {
    let base = op.return_type.as_deref().unwrap_or(VOID);
    java_type(base, op.return_container)
}

/// Return type of the service method; `Void` becomes a plain `void`.
pub fn service_return_type(op: &IrOperation) -> String {
    if is_void(op) {
        "void".to_string()
    } else {
        response_entity_type(op)
    }
}

pub fn is_void(op: &IrOperation) -> bool {
    op.return_container.is_none() && op.return_type.as_deref().is_none_or(|t| t == VOID)
}

/// Status code the controller answers with: the first 2xx response, else 200.
pub fn success_code(op: &IrOperation) -> String {
    op.responses
        .iter()
        .map(|r| r.code.as_str())
        .find(|code| {
            code.len() == 3 && code.starts_with('2') && code.bytes().all(|b| b.is_ascii_digit())
        })
        .unwrap_or("200")
        .to_string()
}

/// Identifiers in a type signature, e.g. `Map<String, List<Pet>>` →
/// `Map`, `String`, `List`, `Pet`.
pub fn type_identifiers(signature: &str) -> impl Iterator<Item = &str> {
    signature
        .split(|c: char| !(c.is_alphanumeric() || c == '_' || c == '.'))
        .filter(|ident| !ident.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_java_type() {
        assert_eq!(java_type("Order", ContainerKind::None), "Order");
        assert_eq!(java_type("Order", ContainerKind::List), "List<Order>");
        assert_eq!(java_type("Tag", ContainerKind::Set), "Set<Tag>");
        assert_eq!(
            java_type("Customer", ContainerKind::Map),
            "Map<String, Customer>"
        );
    }

    #[test]
    fn test_success_code_skips_ranges() {
        let mut op: IrOperation = serde_json::from_value(serde_json::json!({
            "operation_id": "listPets",
            "method": "GET",
            "path": "/pets",
            "responses": [
                { "code": "2XX" },
                { "code": "201" },
            ],
        }))
        .unwrap();
        assert_eq!(success_code(&op), "201");

        op.responses.remove(1);
        assert_eq!(success_code(&op), "200");
    }

    #[test]
    fn test_type_identifiers() {
        assert_eq!(
            type_identifiers("Map<String, Set<Tag>>").collect::<Vec<_>>(),
            vec!["Map", "String", "Set", "Tag"]
        );
        assert_eq!(
            type_identifiers("java.util.List<byte[]>").collect::<Vec<_>>(),
            vec!["java.util.List", "byte"]
        );
    }
}
