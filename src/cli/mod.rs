//! Command-line interface for splat-args
//!
//! Subcommands are assembled with the clap builder API because their options
//! are generated from the parameter tables at startup.

use anyhow::{bail, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use splat_args::params::{model_params, optimization_params, pipeline_params};
use splat_args::ParamGroup;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod combine;
mod completions;
mod defaults;
mod save;

pub const BIN_NAME: &str = "splat-args";

/// Names accepted wherever a single group is selected.
pub const GROUP_NAMES: [&str; 3] = ["model", "pipeline", "optimization"];

pub fn group_by_name(name: &str) -> Option<ParamGroup> {
    match name {
        "model" => Some(model_params()),
        "pipeline" => Some(pipeline_params()),
        "optimization" => Some(optimization_params()),
        _ => None,
    }
}

/// Subcommand parsers, built once per process.
struct Parsers {
    save: splat_args::ArgParser,
    combine: splat_args::ArgParser,
}

impl Parsers {
    fn build() -> Result<Self> {
        Ok(Self { save: save::parser()?, combine: combine::parser()? })
    }
}

fn build_cli(parsers: &Parsers) -> Command {
    Command::new(BIN_NAME)
        .version(env!("CARGO_PKG_VERSION"))
        .about("Inspect, save and resume Gaussian-splatting run configs")
        .propagate_version(true)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging (sets log level to DEBUG)")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(defaults::command())
        .subcommand(parsers.save.command().clone())
        .subcommand(parsers.combine.command().clone())
        .subcommand(completions::command())
}

/// The full command tree, e.g. for completion generation.
pub fn cli_command() -> Result<Command> {
    Ok(build_cli(&Parsers::build()?))
}

pub fn run() -> Result<()> {
    let parsers = Parsers::build()?;
    let matches = build_cli(&parsers).get_matches();

    init_tracing(&matches);

    match matches.subcommand() {
        Some(("defaults", sub)) => defaults::run(sub),
        Some(("save", sub)) => save::run(parsers.save.with_matches(sub.clone())),
        Some(("combine", sub)) => combine::run(parsers.combine.with_matches(sub.clone())),
        Some(("completions", sub)) => completions::run(sub),
        Some((other, _)) => bail!("Unknown command: {other}"),
        None => bail!("No command given"),
    }
}

fn init_tracing(matches: &ArgMatches) {
    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if matches.get_flag("verbose") {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_tree_is_consistent() {
        cli_command().expect("cli").debug_assert();
    }

    #[test]
    fn group_names_resolve() {
        for name in GROUP_NAMES {
            assert!(group_by_name(name).is_some(), "{name}");
        }
        assert!(group_by_name("render").is_none());
    }
}
