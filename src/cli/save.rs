//! Save command implementation

use anyhow::{bail, Result};
use clap::Command;
use splat_args::config::{save_config, MODEL_PATH_KEY};
use splat_args::params::{model_params, optimization_params, pipeline_params};
use splat_args::{ArgParser, ConfigNamespace, ParsedArgs};
use std::path::Path;

pub fn parser() -> Result<ArgParser> {
    let mut parser = ArgParser::from_command(
        Command::new("save")
            .about("Resolve a run config and write it to <model_path>/cfg_args"),
    );
    parser.add_group(model_params(), false)?;
    parser.add_group(pipeline_params(), false)?;
    parser.add_group(optimization_params(), false)?;
    Ok(parser)
}

pub fn run(parsed: ParsedArgs) -> Result<()> {
    // Extraction resolves source_path, so the saved run does not depend on
    // the working directory it was started from.
    let raw = parsed.namespace()?;
    let mut config = ConfigNamespace::new();
    for group in parsed.groups() {
        config.extend(group.group().extract(&raw)?);
    }

    let model_path = config.get_str(MODEL_PATH_KEY).unwrap_or_default();
    if model_path.is_empty() {
        bail!("--model_path (-m) is required to save a config");
    }

    let path = save_config(Path::new(model_path), &config)?;
    eprintln!("Saved config to {}", path.display());
    println!("{}", config.to_json_pretty()?);
    Ok(())
}
