//! Scene and model loading parameters

use crate::domain::{ConfigNamespace, ParamDecl, ParamGroup, ParamKind, ParamValue};
use crate::error::ConfigError;
use crate::utils::absolutize;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const MODEL_GROUP: &str = "Loading Parameters";

pub fn model_params() -> ParamGroup {
    use ParamKind::*;
    ParamGroup::new(
        MODEL_GROUP,
        vec![
            ParamDecl::new("sh_degree", Int, 3).help("Maximum spherical-harmonics degree"),
            ParamDecl::new("_source_path", Str, "").help("Scene directory (COLMAP or Blender)"),
            ParamDecl::new("_model_path", Str, "").help("Output directory of the trained model"),
            ParamDecl::new("_images", Str, "images").help("Image subdirectory of the scene"),
            ParamDecl::new("_resolution", Int, -1)
                .help("Downscale factor for input images (-1 picks automatically)"),
            ParamDecl::new("_white_background", Bool, false).help("Use a white background"),
            ParamDecl::new("bg_dist", Int, 500),
            ParamDecl::new("data_device", Str, "cuda").help("Device that holds source images"),
            ParamDecl::new("eval", Bool, false).help("Hold out a test split"),
            ParamDecl::new("num_train_images", Int, 3),
            ParamDecl::new("camera_radius_scale", Float, 0.33),
            ParamDecl::new("random_initialisation", Bool, false)
                .help("Start from random points instead of the SfM cloud"),
        ],
    )
    .with_extract_hook(resolve_source_path)
}

/// Make `source_path` absolute. Null stays null.
fn resolve_source_path(ns: &mut ConfigNamespace) -> Result<(), ConfigError> {
    let Some(raw) = ns.get_str("source_path") else {
        return Ok(());
    };
    let resolved = absolutize(Path::new(raw))
        .map_err(|source| ConfigError::Io { path: raw.into(), source })?;
    ns.insert("source_path", Some(ParamValue::Str(resolved.to_string_lossy().into_owned())));
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSettings {
    pub sh_degree: i64,
    pub source_path: String,
    pub model_path: String,
    pub images: String,
    pub resolution: i64,
    pub white_background: bool,
    pub bg_dist: i64,
    pub data_device: String,
    pub eval: bool,
    pub num_train_images: i64,
    pub camera_radius_scale: f64,
    pub random_initialisation: bool,
}
