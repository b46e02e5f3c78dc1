use crate::config::{GeneratorOptions, SerializationLibrary};
use crate::imports::{ARRAYS, DATE_TIME_FORMAT, JSON_CREATOR, JSON_PROPERTY, JSON_VALUE, ImportSet};
use crate::ir::{IrModel, IrProperty};

/// Model vendor extension requesting the nullable helper methods, which need `Arrays`.
pub const NULLABLE_HELPERS_EXTENSION: &str = "x-jackson-optional-nullable-helpers";

/// Literal example value the upstream schema uses for "no example".
const NULL_EXAMPLE: &str = "null";

/// Annotate every property of every model.
pub fn annotate_models(models: &mut [IrModel], options: &GeneratorOptions) {
    for model in models {
        annotate_model(model, options);
    }
}

/// Annotate each property of one model.
pub fn annotate_model(model: &mut IrModel, options: &GeneratorOptions) {
    let traits = ModelTraits::of(model);
    for property in &mut model.properties {
        annotate_property(&traits, &mut model.imports, property, options);
    }
}

/// The model-level facts the per-property rules consult.
#[derive(Debug, Clone, Copy)]
pub struct ModelTraits {
    pub is_enum: bool,
    pub has_enums: bool,
    pub nullable_helpers: bool,
}

impl ModelTraits {
    pub fn of(model: &IrModel) -> Self {
        Self {
            is_enum: model.is_enum,
            has_enums: model.has_enums,
            nullable_helpers: model
                .vendor_extensions
                .contains_key(NULLABLE_HELPERS_EXTENSION),
        }
    }
}

/// Add the imports one property needs to its model and clear a literal
/// `"null"` example. Only ever adds imports.
pub fn annotate_property(
    model: &ModelTraits,
    imports: &mut ImportSet,
    property: &mut IrProperty,
    options: &GeneratorOptions,
) {
    if property.is_date || property.is_date_time {
        imports.add(DATE_TIME_FORMAT);
    }

    if property.example.as_deref() == Some(NULL_EXAMPLE) {
        property.example = None;
    }

    if !model.is_enum {
        imports.add(JSON_PROPERTY);
        if model.has_enums {
            imports.add(JSON_VALUE);
        }
    } else if options.serialization_library == SerializationLibrary::Jackson {
        imports.add(JSON_CREATOR);
    }

    if property.is_byte_array || model.nullable_helpers {
        imports.add(ARRAYS);
    }
}
