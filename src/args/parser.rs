//! Command-line parser built from parameter groups

use clap::{ArgMatches, Command};
use std::ffi::OsString;

use crate::args::binder::{check_bindable, register};
use crate::args::BoundGroup;
use crate::domain::{ConfigNamespace, ParamGroup};
use crate::error::ConfigError;

/// A clap [`Command`] together with the parameter groups bound to it.
#[derive(Debug, Clone)]
pub struct ArgParser {
    command: Command,
    groups: Vec<BoundGroup>,
}

impl ArgParser {
    pub fn new(name: &'static str) -> Self {
        Self::from_command(Command::new(name))
    }

    /// Wrap an existing command, e.g. one that already carries extra options.
    /// Repeated flags override earlier occurrences.
    pub fn from_command(command: Command) -> Self {
        Self { command: command.args_override_self(true), groups: Vec::new() }
    }

    /// Register `group`. With `fill_none`, options the user does not pass
    /// resolve to null instead of the declared default.
    pub fn add_group(
        &mut self,
        group: ParamGroup,
        fill_none: bool,
    ) -> Result<&BoundGroup, ConfigError> {
        check_bindable(&self.command, &group)?;
        let command = std::mem::take(&mut self.command);
        let (command, bound) = register(command, group, fill_none);
        self.command = command;
        self.groups.push(bound);
        Ok(&self.groups[self.groups.len() - 1])
    }

    pub fn command(&self) -> &Command {
        &self.command
    }

    pub fn groups(&self) -> &[BoundGroup] {
        &self.groups
    }

    /// Parse `argv`; the first item is the program name.
    pub fn parse_from<I, T>(&self, argv: I) -> Result<ParsedArgs, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self.command.clone().try_get_matches_from(argv)?;
        Ok(self.with_matches(matches))
    }

    /// Parse the process arguments.
    pub fn parse(&self) -> Result<ParsedArgs, ConfigError> {
        self.parse_from(std::env::args_os())
    }

    /// Attach matches produced elsewhere, e.g. by a parent command whose
    /// subcommand is this parser's command.
    pub fn with_matches(&self, matches: ArgMatches) -> ParsedArgs {
        ParsedArgs { matches, groups: self.groups.clone() }
    }
}

/// Parsed command-line arguments.
#[derive(Debug, Clone)]
pub struct ParsedArgs {
    matches: ArgMatches,
    groups: Vec<BoundGroup>,
}

impl ParsedArgs {
    pub fn matches(&self) -> &ArgMatches {
        &self.matches
    }

    pub fn groups(&self) -> &[BoundGroup] {
        &self.groups
    }

    /// Command-line values of every bound group in one namespace.
    pub fn namespace(&self) -> Result<ConfigNamespace, ConfigError> {
        let mut ns = ConfigNamespace::new();
        for group in &self.groups {
            ns.extend(group.command_line_values(&self.matches)?);
        }
        Ok(ns)
    }

    /// Extracted config of the group labelled `label`.
    pub fn extract(&self, label: &str) -> Result<ConfigNamespace, ConfigError> {
        let group = self.groups.iter().find(|g| g.label() == label).ok_or_else(|| {
            ConfigError::Extract { name: label.to_string(), reason: "group is not bound".into() }
        })?;
        group.extract(&self.matches)
    }
}
