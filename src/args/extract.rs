//! Pulling group values out of parsed arguments

use clap::ArgMatches;

use crate::args::BoundGroup;
use crate::domain::{split_marker, ConfigNamespace, ParamGroup, ParamValue};
use crate::error::ConfigError;

impl BoundGroup {
    /// Values of this group as given on the command line.
    ///
    /// Supplied options carry their parsed value. Absent options carry the
    /// declared default, or null when the group was bound with `fill_none`.
    pub fn command_line_values(&self, matches: &ArgMatches) -> Result<ConfigNamespace, ConfigError> {
        let mut ns = ConfigNamespace::new();
        for param in &self.group().params {
            let supplied = matches.try_get_one::<ParamValue>(&param.name).map_err(|e| {
                ConfigError::Extract { name: param.name.clone(), reason: e.to_string() }
            })?;
            let value = match supplied {
                Some(value) => Some(value.clone()),
                None if self.fill_none() => None,
                None => Some(param.default.clone()),
            };
            ns.insert(param.name.clone(), value);
        }
        Ok(ns)
    }

    /// Shorthand for [`ParamGroup::extract`] over this group's command-line values.
    pub fn extract(&self, matches: &ArgMatches) -> Result<ConfigNamespace, ConfigError> {
        self.group().extract(&self.command_line_values(matches)?)
    }
}

impl ParamGroup {
    /// Keep only the keys of `args` this group declares, then run the
    /// group's extract hook.
    ///
    /// `args` may be a full command-line namespace or a merged config; keys
    /// are matched with the shorthand marker stripped.
    pub fn extract(&self, args: &ConfigNamespace) -> Result<ConfigNamespace, ConfigError> {
        let mut out = ConfigNamespace::new();
        for (key, value) in args.iter() {
            if self.declares(key) {
                let (name, _) = split_marker(key);
                out.insert(name, value.cloned());
            }
        }
        if let Some(hook) = self.on_extract {
            hook(&mut out)?;
        }
        Ok(out)
    }
}
