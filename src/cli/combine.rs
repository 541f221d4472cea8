//! Combine command implementation

use anyhow::{Context, Result};
use clap::{Arg, Command};
use splat_args::config::combine;
use splat_args::params::{model_params, pipeline_params};
use splat_args::{ArgParser, ParsedArgs};

use super::group_by_name;

pub fn parser() -> Result<ArgParser> {
    let command = Command::new("combine")
        .about("Merge a model's saved cfg_args with command-line overrides")
        .arg(
            Arg::new("only")
                .long("only")
                .value_name("GROUP")
                .help("Print only the extracted values of this group")
                .value_parser(super::GROUP_NAMES),
        );
    let mut parser = ArgParser::from_command(command);
    // Model options left out on the command line come from the saved file.
    parser.add_group(model_params(), true)?;
    parser.add_group(pipeline_params(), false)?;
    Ok(parser)
}

pub fn run(parsed: ParsedArgs) -> Result<()> {
    let merged = combine(&parsed)?;

    let output = match parsed.matches().get_one::<String>("only") {
        Some(name) => group_by_name(name)
            .with_context(|| format!("Unknown parameter group: {name}"))?
            .extract(&merged)?,
        None => merged,
    };
    println!("{}", output.to_json_pretty()?);
    Ok(())
}
