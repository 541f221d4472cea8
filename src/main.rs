//! splat-args: inspect, save and resume reconstruction run configs
//!
//! Exposes the model, pipeline and optimization parameter groups on the
//! command line and merges them with a model directory's saved `cfg_args`.

use anyhow::Result;

mod cli;

fn main() -> Result<()> {
    cli::run()
}
