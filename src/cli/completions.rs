//! Shell completion generation

use anyhow::Result;
use clap::{value_parser, Arg, ArgMatches, Command};
use clap_complete::{generate, Shell};

use super::{cli_command, BIN_NAME};

pub fn command() -> Command {
    Command::new("completions").about("Print a shell completion script").arg(
        Arg::new("shell")
            .value_name("SHELL")
            .required(true)
            .value_parser(value_parser!(Shell)),
    )
}

pub fn run(matches: &ArgMatches) -> Result<()> {
    let Some(shell) = matches.get_one::<Shell>("shell").copied() else {
        anyhow::bail!("A shell is required");
    };
    let mut cmd = cli_command()?;
    generate(shell, &mut cmd, BIN_NAME, &mut std::io::stdout());
    Ok(())
}
