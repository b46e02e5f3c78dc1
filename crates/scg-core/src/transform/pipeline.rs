//! Post-processing stages applied to an IR before rendering.
//!
//! Stages run in the order of [`STAGES`]:
//!
//! 1. `model_names`: derive class names and rewrite model references
//! 2. `operation_imports`: imports needed by operation parameters
//! 3. `operations`: status codes, return/response types, implicit headers
//! 4. `model_properties`: per-property imports and example cleanup
//! 5. `groups`: controller/service groups and their descriptions

use crate::config::{GeneratorOptions, GroupBy};
use crate::ir::IrSpec;
use crate::ir::grouping::group_operations;

use super::model_namer::apply_model_names;
use super::operation_normalizer::{annotate_operation, normalize_operation};
use super::property_annotator::annotate_models;

/// Settings the stages read. Fixed for the whole run.
#[derive(Debug, Clone, Copy, Default)]
pub struct PipelineOptions {
    pub generator: GeneratorOptions,
    pub group_by: GroupBy,
}

/// A named step over the IR.
pub struct Stage {
    pub name: &'static str,
    pub run: fn(&mut IrSpec, &PipelineOptions),
}

pub const STAGES: &[Stage] = &[
    Stage {
        name: "model_names",
        run: |ir, opts| apply_model_names(ir, &opts.generator),
    },
    Stage {
        name: "operation_imports",
        run: |ir, _| ir.operations.iter_mut().for_each(annotate_operation),
    },
    Stage {
        name: "operations",
        run: |ir, _| ir.operations.iter_mut().for_each(normalize_operation),
    },
    Stage {
        name: "model_properties",
        run: |ir, opts| annotate_models(&mut ir.models, &opts.generator),
    },
    Stage {
        name: "groups",
        run: |ir, opts| ir.groups = group_operations(ir, opts.group_by),
    },
];

/// Run every stage over `ir` in order.
pub fn post_process(ir: &mut IrSpec, options: &PipelineOptions) {
    for stage in STAGES {
        log::debug!("running stage {}", stage.name);
        (stage.run)(ir, options);
    }
    log::info!(
        "post-processed {} operations, {} models, {} groups",
        ir.operations.len(),
        ir.models.len(),
        ir.groups.len()
    );
}
