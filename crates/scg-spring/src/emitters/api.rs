use minijinja::{Environment, Value, context};
use scg_core::GeneratorError;
use scg_core::imports::ImportSet;
use scg_core::ir::{IrOperation, IrOperationGroup, IrParameter, IrParameterLocation, IrSpec};

use super::{RenderSettings, render};
use crate::filters::escape_double_quote;
use crate::type_mapper::{is_void, response_entity_type, service_return_type, success_code};

/// Emit `<Group>Controller.java`, a `@RestController` delegating to the group's service.
pub fn emit_controller(
    env: &Environment<'_>,
    ir: &IrSpec,
    group: &IrOperationGroup,
    settings: &RenderSettings<'_>,
) -> Result<String, GeneratorError> {
    let ops = group_operations(ir, group);
    let validation = settings.config.options.use_bean_validation;

    let mut op_imports = ImportSet::new();
    for op in &ops {
        for id in op.imports.iter() {
            op_imports.add(id);
        }
    }
    let signatures = controller_signatures(&ops);
    let imports = settings.collect_imports(&op_imports, signatures.iter().map(String::as_str));

    let operations: Vec<Value> = ops
        .iter()
        .map(|op| operation_context(op, validation))
        .collect();

    render(
        env,
        "controller.java.j2",
        context! {
            api_package => settings.config.api_package.clone(),
            model_package => settings.config.model_package.clone(),
            has_models => !ir.models.is_empty(),
            name => group.name.pascal_case.clone(),
            description => group.description.clone(),
            imports => imports,
            use_bean_validation => validation,
            use_lombok => settings.config.options.use_lombok,
            operations => operations,
        },
    )
}

/// Emit `<Group>Service.java`, the interface the controller calls.
pub fn emit_service(
    env: &Environment<'_>,
    ir: &IrSpec,
    group: &IrOperationGroup,
    settings: &RenderSettings<'_>,
) -> Result<String, GeneratorError> {
    let ops = group_operations(ir, group);
    let signatures = controller_signatures(&ops);
    let imports =
        settings.collect_imports(&ImportSet::new(), signatures.iter().map(String::as_str));

    let operations: Vec<Value> = ops
        .iter()
        .map(|op| operation_context(op, false))
        .collect();

    render(
        env,
        "service.java.j2",
        context! {
            api_package => settings.config.api_package.clone(),
            model_package => settings.config.model_package.clone(),
            has_models => !ir.models.is_empty(),
            name => group.name.pascal_case.clone(),
            description => group.description.clone(),
            imports => imports,
            operations => operations,
        },
    )
}

fn group_operations<'a>(ir: &'a IrSpec, group: &IrOperationGroup) -> Vec<&'a IrOperation> {
    group
        .operations
        .iter()
        .filter_map(|&i| ir.operations.get(i))
        .collect()
}

/// Every type signature that appears in a controller or service method.
fn controller_signatures(ops: &[&IrOperation]) -> Vec<String> {
    ops.iter()
        .flat_map(|op| {
            std::iter::once(response_entity_type(op))
                .chain(op.parameters.iter().map(|p| p.data_type.clone()))
        })
        .collect()
}

fn operation_context(op: &IrOperation, validation: bool) -> Value {
    let params: Vec<Value> = op
        .parameters
        .iter()
        .map(|p| {
            context! {
                name => p.name.camel_case.clone(),
                java_type => p.data_type.clone(),
                annotation => parameter_annotation(p, validation),
            }
        })
        .collect();
    let args: Vec<String> = op.parameters.iter().map(|p| p.name.camel_case.clone()).collect();
    let implicit_headers: Vec<String> = op
        .implicit_headers
        .iter()
        .map(|h| h.name.original.clone())
        .collect();

    context! {
        name => op.name.camel_case.clone(),
        method => op.method.as_str(),
        path => op.path.clone(),
        summary => op.summary.clone(),
        deprecated => op.deprecated,
        params => params,
        args => args.join(", "),
        implicit_headers => implicit_headers,
        return_type => response_entity_type(op),
        service_return_type => service_return_type(op),
        is_void => is_void(op),
        status => success_code(op),
    }
}

/// Spring binding annotation(s) placed before a controller method parameter.
fn parameter_annotation(p: &IrParameter, validation: bool) -> String {
    let mut annotation = String::new();
    if p.is_date_time {
        annotation.push_str("@DateTimeFormat(iso = DateTimeFormat.ISO.DATE_TIME) ");
    } else if p.is_date {
        annotation.push_str("@DateTimeFormat(iso = DateTimeFormat.ISO.DATE) ");
    }

    let name = escape_double_quote(p.name.original.clone());
    let binding = match p.location {
        IrParameterLocation::Path => format!("@PathVariable(\"{name}\")"),
        IrParameterLocation::Query => {
            format!("@RequestParam(value = \"{name}\", required = {})", p.required)
        }
        IrParameterLocation::Header => {
            format!("@RequestHeader(value = \"{name}\", required = {})", p.required)
        }
        IrParameterLocation::Cookie => {
            format!("@CookieValue(value = \"{name}\", required = {})", p.required)
        }
        IrParameterLocation::Body if validation => "@Valid @RequestBody".to_string(),
        IrParameterLocation::Body => "@RequestBody".to_string(),
    };
    annotation.push_str(&binding);
    annotation
}

#[cfg(test)]
mod tests {
    use super::*;
    use scg_core::transform::name_normalizer::normalize_name;

    fn param(name: &str, location: IrParameterLocation) -> IrParameter {
        IrParameter {
            name: normalize_name(name),
            location,
            data_type: "String".to_string(),
            required: true,
            description: None,
            is_date: false,
            is_date_time: false,
            vendor_extensions: Default::default(),
        }
    }

    #[test]
    fn test_parameter_annotations() {
        assert_eq!(
            parameter_annotation(&param("orderId", IrParameterLocation::Path), true),
            r#"@PathVariable("orderId")"#
        );
        assert_eq!(
            parameter_annotation(&param("X-Tenant", IrParameterLocation::Header), true),
            r#"@RequestHeader(value = "X-Tenant", required = true)"#
        );
        assert_eq!(
            parameter_annotation(&param("body", IrParameterLocation::Body), true),
            "@Valid @RequestBody"
        );
        assert_eq!(
            parameter_annotation(&param("body", IrParameterLocation::Body), false),
            "@RequestBody"
        );
    }

    #[test]
    fn test_date_parameter_annotation() {
        let mut since = param("since", IrParameterLocation::Query);
        since.required = false;
        since.is_date = true;
        assert_eq!(
            parameter_annotation(&since, true),
            r#"@DateTimeFormat(iso = DateTimeFormat.ISO.DATE) @RequestParam(value = "since", required = false)"#
        );
    }
}
