//! Optimization hyperparameters and regulariser schedules

use crate::domain::{ParamDecl, ParamGroup, ParamKind};
use serde::{Deserialize, Serialize};

pub const OPTIMIZATION_GROUP: &str = "Optimization Parameters";

pub fn optimization_params() -> ParamGroup {
    use ParamKind::*;
    ParamGroup::new(
        OPTIMIZATION_GROUP,
        vec![
            ParamDecl::new("iterations", Int, 30_000).help("Total optimization steps"),
            ParamDecl::new("position_lr_init", Float, 0.00016),
            ParamDecl::new("position_lr_final", Float, 0.0000016),
            ParamDecl::new("position_lr_delay_mult", Float, 0.01),
            ParamDecl::new("position_lr_max_steps", Int, 30_000),
            ParamDecl::new("feature_lr", Float, 0.0025),
            ParamDecl::new("opacity_lr", Float, 0.05),
            ParamDecl::new("scaling_lr", Float, 0.005),
            ParamDecl::new("rotation_lr", Float, 0.001),
            ParamDecl::new("percent_dense", Float, 0.01),
            ParamDecl::new("lambda_dssim", Float, 0.2).help("Weight of the D-SSIM loss term"),
            ParamDecl::new("densification_interval", Int, 100),
            ParamDecl::new("opacity_reset_interval", Int, 3000),
            ParamDecl::new("densify_from_iter", FloatList, [500.0])
                .help("Steps at which densification windows open"),
            ParamDecl::new("densify_until_iter", FloatList, [15_000.0])
                .help("Steps at which densification windows close"),
            ParamDecl::new("densify_grad_threshold", Float, 0.0002),
            ParamDecl::new("max_gaussians", Int, 1_000_000),
            ParamDecl::new("fg_reg_weight", Float, 0.02).help("Foreground regulariser weight"),
            // patch regularisation
            ParamDecl::new("skip_reconstructions", Int, -1),
            ParamDecl::new("patch_regulariser_path", Str, "")
                .help("Checkpoint of the diffusion patch prior"),
            ParamDecl::new("initial_diffusion_time", Float, 0.1),
            ParamDecl::new("final_diffusion_time", Float, 0.0),
            ParamDecl::new("patch_reg_start_step", FloatList, [500.0]),
            ParamDecl::new("patch_reg_finish_step", FloatList, [-1.0]),
            ParamDecl::new("patch_weight_start", FloatList, [1.0]),
            ParamDecl::new("patch_weight_finish", FloatList, [1.0]),
            ParamDecl::new("patch_sample_downscale_factor", Int, 4),
            ParamDecl::new("normalise_diffusion_losses", Bool, false),
            ParamDecl::new("frustum_check_patches", Bool, false),
            ParamDecl::new("debug_visualise_patches", Bool, false),
            ParamDecl::new("diffusion_batch_size", Int, 8),
            ParamDecl::new("p_sample_patch_start", Float, 0.25),
            ParamDecl::new("p_sample_patch_finish", Float, 0.25),
            ParamDecl::new("recompute_depth_iterations", Int, 100),
            ParamDecl::new("perturbation_strength_start", Float, 0.0),
            ParamDecl::new("perturbation_strength_finish", Float, 0.5),
            // frustum regularisation
            ParamDecl::new("frustum_regularise_patches", Bool, false),
            ParamDecl::new("min_near", Float, 0.05),
            ParamDecl::new("frustum_reg_initial_weight", Float, 1.0),
            ParamDecl::new("frustum_reg_final_weight", Float, 1e-2),
            // lenticular regularisation
            ParamDecl::new("lenticular_reg_initial_weight", Float, 1.0),
            ParamDecl::new("lenticular_reg_final_weight", Float, 1e-2),
        ],
    )
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationSettings {
    pub iterations: i64,
    pub position_lr_init: f64,
    pub position_lr_final: f64,
    pub position_lr_delay_mult: f64,
    pub position_lr_max_steps: i64,
    pub feature_lr: f64,
    pub opacity_lr: f64,
    pub scaling_lr: f64,
    pub rotation_lr: f64,
    pub percent_dense: f64,
    pub lambda_dssim: f64,
    pub densification_interval: i64,
    pub opacity_reset_interval: i64,
    pub densify_from_iter: Vec<f64>,
    pub densify_until_iter: Vec<f64>,
    pub densify_grad_threshold: f64,
    pub max_gaussians: i64,
    pub fg_reg_weight: f64,
    pub skip_reconstructions: i64,
    pub patch_regulariser_path: String,
    pub initial_diffusion_time: f64,
    pub final_diffusion_time: f64,
    pub patch_reg_start_step: Vec<f64>,
    pub patch_reg_finish_step: Vec<f64>,
    pub patch_weight_start: Vec<f64>,
    pub patch_weight_finish: Vec<f64>,
    pub patch_sample_downscale_factor: i64,
    pub normalise_diffusion_losses: bool,
    pub frustum_check_patches: bool,
    pub debug_visualise_patches: bool,
    pub diffusion_batch_size: i64,
    pub p_sample_patch_start: f64,
    pub p_sample_patch_finish: f64,
    pub recompute_depth_iterations: i64,
    pub perturbation_strength_start: f64,
    pub perturbation_strength_finish: f64,
    pub frustum_regularise_patches: bool,
    pub min_near: f64,
    pub frustum_reg_initial_weight: f64,
    pub frustum_reg_final_weight: f64,
    pub lenticular_reg_initial_weight: f64,
    pub lenticular_reg_final_weight: f64,
}
