//! Defaults command implementation

use anyhow::{Context, Result};
use clap::{Arg, ArgMatches, Command};
use splat_args::params::all_groups;
use splat_args::ConfigNamespace;

use super::{group_by_name, GROUP_NAMES};

pub fn command() -> Command {
    Command::new("defaults").about("Print declared parameter defaults as JSON").arg(
        Arg::new("group")
            .short('g')
            .long("group")
            .value_name("GROUP")
            .help("Only print this group")
            .value_parser(GROUP_NAMES),
    )
}

pub fn run(matches: &ArgMatches) -> Result<()> {
    let defaults = match matches.get_one::<String>("group") {
        Some(name) => group_by_name(name)
            .with_context(|| format!("Unknown parameter group: {name}"))?
            .defaults(),
        None => {
            let mut all = ConfigNamespace::new();
            for group in all_groups() {
                all.extend(group.defaults());
            }
            all
        }
    };
    println!("{}", defaults.to_json_pretty()?);
    Ok(())
}
