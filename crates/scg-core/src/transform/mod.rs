pub mod model_namer;
pub mod name_normalizer;
pub mod operation_normalizer;
pub mod pipeline;
pub mod property_annotator;
pub mod type_normalizer;

pub use pipeline::{PipelineOptions, post_process};
pub use type_normalizer::{ResolvedType, resolve, try_resolve};
