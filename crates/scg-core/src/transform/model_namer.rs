use std::collections::HashMap;

use crate::config::GeneratorOptions;
use crate::ir::IrSpec;

pub const DTO_SUFFIX: &str = "Dto";

/// Turns raw schema names into generated class names.
#[derive(Debug, Clone, Copy)]
pub struct ModelNamer {
    use_dto: bool,
}

impl ModelNamer {
    pub fn new(options: &GeneratorOptions) -> Self {
        Self {
            use_dto: options.use_dto,
        }
    }

    /// Append `Dto` when suffixing is on. Not idempotent: `OrderDto` becomes
    /// `OrderDtoDto`, so call it once per raw name.
    pub fn transform(&self, raw: &str) -> String {
        if self.use_dto {
            format!("{raw}{DTO_SUFFIX}")
        } else {
            raw.to_string()
        }
    }
}

/// Set every model's class name from its raw name and point type signatures
/// that mention a model at the new class name.
///
/// Run once per IR: a second pass with suffixing on would rewrite references
/// that already carry the suffix when a raw `OrderDto` model sits next to `Order`.
pub fn apply_model_names(ir: &mut IrSpec, options: &GeneratorOptions) {
    let namer = ModelNamer::new(options);
    let mut renames = HashMap::new();

    for model in &mut ir.models {
        model.class_name = namer.transform(&model.name);
        if model.class_name != model.name {
            renames.insert(model.name.clone(), model.class_name.clone());
        }
    }

    if renames.is_empty() {
        return;
    }

    for model in &mut ir.models {
        for property in &mut model.properties {
            property.data_type = rename_references(&property.data_type, &renames);
        }
    }

    for op in &mut ir.operations {
        if let Some(rt) = op.return_type.as_mut() {
            *rt = rename_references(rt, &renames);
        }
        for response in &mut op.responses {
            if let Some(dt) = response.data_type.as_mut() {
                *dt = rename_references(dt, &renames);
            }
        }
        for param in op.parameters.iter_mut().chain(op.implicit_headers.iter_mut()) {
            param.data_type = rename_references(&param.data_type, &renames);
        }
    }
}

/// Replace whole identifiers in a type signature, e.g. `List<Order>` →
/// `List<OrderDto>`. Qualified names like `java.util.List` are left alone
/// unless the full dotted identifier matches.
fn rename_references(signature: &str, renames: &HashMap<String, String>) -> String {
    let mut out = String::with_capacity(signature.len());
    let mut ident = String::new();

    let flush = |ident: &mut String, out: &mut String| {
        if !ident.is_empty() {
            match renames.get(ident.as_str()) {
                Some(renamed) => out.push_str(renamed),
                None => out.push_str(ident),
            }
            ident.clear();
        }
    };

    for ch in signature.chars() {
        if ch.is_alphanumeric() || ch == '_' || ch == '.' || ch == '$' {
            ident.push(ch);
        } else {
            flush(&mut ident, &mut out);
            out.push(ch);
        }
    }
    flush(&mut ident, &mut out);

    out
}
