//! Rendering pipeline switches

use crate::domain::{ParamDecl, ParamGroup, ParamKind};
use serde::{Deserialize, Serialize};

pub const PIPELINE_GROUP: &str = "Pipeline Parameters";

pub fn pipeline_params() -> ParamGroup {
    ParamGroup::new(
        PIPELINE_GROUP,
        vec![
            ParamDecl::new("convert_SHs_python", ParamKind::Bool, true),
            ParamDecl::new("compute_cov3D_python", ParamKind::Bool, false),
            ParamDecl::new("debug", ParamKind::Bool, false),
        ],
    )
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[allow(non_snake_case)]
pub struct PipelineSettings {
    pub convert_SHs_python: bool,
    pub compute_cov3D_python: bool,
    pub debug: bool,
}
