use scg_core::config::ScgConfig;
use scg_core::ir::IrSpec;
use scg_core::{CodeGenerator, FileRole, GeneratedFile, GeneratorError};

use crate::emitters;
use crate::emitters::RenderSettings;

/// Root of generated Java sources inside the output directory.
pub const SOURCE_ROOT: &str = "src/main/java";

/// Spring controller/service/model generator.
///
/// Controllers and services are written next to each other in the API package
/// directory; routing moves them into `controller/` and `service/` afterwards.
pub struct SpringServerGenerator;

impl CodeGenerator for SpringServerGenerator {
    fn generate(
        &self,
        ir: &IrSpec,
        config: &ScgConfig,
    ) -> Result<Vec<GeneratedFile>, GeneratorError> {
        let env = emitters::environment()?;
        let settings = RenderSettings::new(config);
        let api_dir = package_dir(&config.api_package);
        let model_dir = package_dir(&config.model_package);

        let mut files = Vec::new();

        for group in &ir.groups {
            let name = &group.name.pascal_case;
            files.push(GeneratedFile {
                path: format!("{api_dir}/{name}Controller.java"),
                content: emitters::api::emit_controller(&env, ir, group, &settings)?,
                role: FileRole::Controller,
            });
            files.push(GeneratedFile {
                path: format!("{api_dir}/{name}Service.java"),
                content: emitters::api::emit_service(&env, ir, group, &settings)?,
                role: FileRole::Service,
            });
        }

        for model in &ir.models {
            files.push(GeneratedFile {
                path: format!("{model_dir}/{}.java", model.class_name),
                content: emitters::models::emit_model(&env, model, &settings)?,
                role: FileRole::Model,
            });
        }

        log::debug!("rendered {} files", files.len());
        Ok(files)
    }
}

/// `ru.egartech.swagger` → `src/main/java/ru/egartech/swagger`
fn package_dir(package: &str) -> String {
    format!("{SOURCE_ROOT}/{}", package.replace('.', "/"))
}
