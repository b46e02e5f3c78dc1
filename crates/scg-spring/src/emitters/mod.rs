pub mod api;
pub mod models;

use minijinja::{Environment, Value};
use scg_core::GeneratorError;
use scg_core::config::ScgConfig;
use scg_core::imports::{ImportMapping, ImportSet};

use crate::filters;
use crate::type_mapper::type_identifiers;

const TEMPLATES: [(&str, &str); 4] = [
    ("controller.java.j2", include_str!("../../templates/controller.java.j2")),
    ("service.java.j2", include_str!("../../templates/service.java.j2")),
    ("model.java.j2", include_str!("../../templates/model.java.j2")),
    ("enum.java.j2", include_str!("../../templates/enum.java.j2")),
];

/// Everything the emitters read besides the IR itself.
pub struct RenderSettings<'a> {
    pub config: &'a ScgConfig,
    pub imports: ImportMapping,
}

impl<'a> RenderSettings<'a> {
    pub fn new(config: &'a ScgConfig) -> Self {
        Self {
            config,
            imports: ImportMapping::with_overrides(&config.import_mappings),
        }
    }
}

impl RenderSettings<'_> {
    /// Qualified imports for `base` plus every mapped type named in `signatures`.
    pub(crate) fn collect_imports<'s>(
        &self,
        base: &ImportSet,
        signatures: impl IntoIterator<Item = &'s str>,
    ) -> Vec<String> {
        let mut ids = base.clone();
        for sig in signatures {
            for ident in type_identifiers(sig) {
                if self.imports.resolve(ident).is_some() {
                    ids.add(ident);
                }
            }
        }
        self.imports.qualify(&ids)
    }
}

/// Template environment with the Java templates and string filters loaded.
pub fn environment() -> Result<Environment<'static>, GeneratorError> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    filters::register(&mut env);

    for (name, source) in TEMPLATES {
        env.add_template(name, source)
            .map_err(|e| render_error(name, e))?;
    }
    Ok(env)
}

pub(crate) fn render(
    env: &Environment<'_>,
    name: &str,
    ctx: Value,
) -> Result<String, GeneratorError> {
    env.get_template(name)
        .and_then(|tmpl| tmpl.render(ctx))
        .map_err(|e| render_error(name, e))
}

fn render_error(template: &str, source: minijinja::Error) -> GeneratorError {
    GeneratorError::Render {
        template: template.to_string(),
        source: Box::new(source),
    }
}
