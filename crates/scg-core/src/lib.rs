pub mod config;
pub mod error;
pub mod imports;
pub mod ir;
pub mod load;
pub mod output;
pub mod transform;

pub use error::GeneratorError;
pub use output::FileRole;

/// A generated file with path, content and the artifact family it belongs to.
#[derive(Debug, Clone)]
pub struct GeneratedFile {
    pub path: String,
    pub content: String,
    pub role: FileRole,
}

/// Trait for code generators that produce files from a post-processed IR spec.
pub trait CodeGenerator {
    fn generate(
        &self,
        ir: &ir::IrSpec,
        config: &config::ScgConfig,
    ) -> Result<Vec<GeneratedFile>, GeneratorError>;
}
