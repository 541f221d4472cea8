//! Parameter groups of a reconstruction run

pub mod model;
pub mod optimization;
pub mod pipeline;

pub use model::{model_params, ModelSettings, MODEL_GROUP};
pub use optimization::{optimization_params, OptimizationSettings, OPTIMIZATION_GROUP};
pub use pipeline::{pipeline_params, PipelineSettings, PIPELINE_GROUP};

use crate::domain::ParamGroup;

/// Every group, in registration order.
pub fn all_groups() -> Vec<ParamGroup> {
    vec![model_params(), pipeline_params(), optimization_params()]
}
