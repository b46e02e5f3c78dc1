use minijinja::{Environment, Value, context};
use scg_core::GeneratorError;
use scg_core::ir::IrModel;
use scg_core::transform::name_normalizer::normalize_name;

use super::{RenderSettings, render};

/// Emit `<ClassName>.java` for one model: a data class, or an enum for enum models.
pub fn emit_model(
    env: &Environment<'_>,
    model: &IrModel,
    settings: &RenderSettings<'_>,
) -> Result<String, GeneratorError> {
    if model.is_enum {
        return render(env, "enum.java.j2", enum_to_ctx(model, settings));
    }
    render(env, "model.java.j2", object_to_ctx(model, settings))
}

fn enum_to_ctx(model: &IrModel, settings: &RenderSettings<'_>) -> Value {
    let variants: Vec<Value> = model
        .enum_values
        .iter()
        .map(|v| {
            context! {
                name => normalize_name(v).screaming_snake,
                value => v.clone(),
            }
        })
        .collect();

    context! {
        model_package => settings.config.model_package.clone(),
        name => model.class_name.clone(),
        description => model.description.clone(),
        imports => settings.imports.qualify(&model.imports),
        variants => variants,
    }
}

fn object_to_ctx(model: &IrModel, settings: &RenderSettings<'_>) -> Value {
    let properties: Vec<Value> = model
        .properties
        .iter()
        .map(|p| {
            context! {
                name => p.name.camel_case.clone(),
                accessor => p.name.pascal_case.clone(),
                original_name => p.name.original.clone(),
                java_type => p.data_type.clone(),
                required => p.required,
                description => p.description.clone(),
                example => p.example.clone(),
                is_date => p.is_date,
                is_date_time => p.is_date_time,
            }
        })
        .collect();

    let imports = settings.collect_imports(
        &model.imports,
        model.properties.iter().map(|p| p.data_type.as_str()),
    );

    context! {
        model_package => settings.config.model_package.clone(),
        name => model.class_name.clone(),
        description => model.description.clone(),
        imports => imports,
        use_bean_validation => settings.config.options.use_bean_validation,
        use_lombok => settings.config.options.use_lombok,
        properties => properties,
    }
}
