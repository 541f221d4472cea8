//! Registering parameter groups as command-line options

use clap::{Arg, ArgAction, ArgGroup, Command};

use crate::domain::{ParamDecl, ParamGroup, ParamKind, ParamValue};
use crate::error::ConfigError;

/// A parameter group that has been registered on a command.
///
/// Options are registered without clap defaults, so an absent flag is
/// distinguishable from a supplied one. `fill_none` decides what an absent
/// flag resolves to: the declared default, or null so a persisted config
/// can fill it in.
#[derive(Debug, Clone)]
pub struct BoundGroup {
    group: ParamGroup,
    fill_none: bool,
}

impl BoundGroup {
    pub fn group(&self) -> &ParamGroup {
        &self.group
    }

    pub fn label(&self) -> &'static str {
        self.group.label
    }

    pub fn fill_none(&self) -> bool {
        self.fill_none
    }
}

/// Register one option per declared parameter of `group` on `cmd`, under a
/// help heading and argument group named after the group label.
pub fn bind_group(
    cmd: Command,
    group: ParamGroup,
    fill_none: bool,
) -> Result<(Command, BoundGroup), ConfigError> {
    check_bindable(&cmd, &group)?;
    Ok(register(cmd, group, fill_none))
}

/// Fail if `group` is invalid or any of its flags is already taken on `cmd`.
pub fn check_bindable(cmd: &Command, group: &ParamGroup) -> Result<(), ConfigError> {
    group.validate()?;

    if cmd.get_groups().any(|g| g.get_id().as_str() == group.label) {
        return Err(ConfigError::DuplicateGroup { label: group.label.to_string() });
    }

    for param in &group.params {
        let long = param.name.as_str();
        if long == "help" || (long == "version" && cmd.get_version().is_some()) {
            return Err(collision(param, format!("--{long}")));
        }
        if let Some(short) = param.short_flag() {
            if short == 'h' || (short == 'V' && cmd.get_version().is_some()) {
                return Err(collision(param, format!("-{short}")));
            }
        }

        for existing in cmd.get_arguments() {
            if existing.get_id().as_str() == long || existing.get_long() == Some(long) {
                return Err(collision(param, format!("--{long}")));
            }
            if let Some(short) = param.short_flag() {
                if existing.get_short() == Some(short) {
                    return Err(collision(param, format!("-{short}")));
                }
            }
        }
    }
    Ok(())
}

pub(crate) fn register(mut cmd: Command, group: ParamGroup, fill_none: bool) -> (Command, BoundGroup) {
    for param in &group.params {
        cmd = cmd.arg(build_arg(param, group.label, fill_none));
    }
    let ids: Vec<String> = group.params.iter().map(|p| p.name.clone()).collect();
    cmd = cmd.group(ArgGroup::new(group.label).args(ids).multiple(true).required(false));

    tracing::debug!(
        group = group.label,
        params = group.params.len(),
        fill_none,
        "registered parameter group"
    );
    (cmd, BoundGroup { group, fill_none })
}

fn collision(param: &ParamDecl, flag: String) -> ConfigError {
    ConfigError::FlagCollision { name: param.name.clone(), flag }
}

fn build_arg(param: &ParamDecl, heading: &'static str, fill_none: bool) -> Arg {
    let mut arg = Arg::new(param.name.clone())
        .long(param.name.clone())
        .help(help_text(param, fill_none))
        .help_heading(heading)
        .value_name(param.kind.value_name())
        .action(ArgAction::Set)
        .required(false);

    if let Some(short) = param.short_flag() {
        arg = arg.short(short);
    }

    match param.kind {
        // Presence means true; a trailing value, if any, is swallowed and ignored.
        ParamKind::Bool => arg
            .num_args(0..=1)
            .default_missing_value("true")
            .value_parser(parse_flag),
        ParamKind::Int => arg.allow_negative_numbers(true).value_parser(parse_int),
        ParamKind::Float => arg.allow_negative_numbers(true).value_parser(parse_float),
        ParamKind::Str => arg.value_parser(parse_str),
        ParamKind::FloatList => arg.allow_negative_numbers(true).value_parser(parse_float_list),
    }
}

fn help_text(param: &ParamDecl, fill_none: bool) -> String {
    let fallback = if fill_none {
        "[default: from saved config]".to_string()
    } else {
        format!("[default: {}]", param.default)
    };
    match param.help {
        Some(help) => format!("{help} {fallback}"),
        None => fallback,
    }
}

fn parse_flag(_raw: &str) -> Result<ParamValue, String> {
    Ok(ParamValue::Bool(true))
}

fn parse_int(raw: &str) -> Result<ParamValue, String> {
    raw.trim()
        .parse::<i64>()
        .map(ParamValue::Int)
        .map_err(|e| format!("invalid integer '{raw}': {e}"))
}

fn parse_float(raw: &str) -> Result<ParamValue, String> {
    finite_float(raw).map(ParamValue::Float)
}

fn parse_str(raw: &str) -> Result<ParamValue, String> {
    Ok(ParamValue::Str(raw.to_string()))
}

pub(crate) fn parse_float_list(raw: &str) -> Result<ParamValue, String> {
    raw.split(',')
        .map(|part| finite_float(part).map_err(|e| format!("{e} in '{raw}'")))
        .collect::<Result<Vec<_>, _>>()
        .map(ParamValue::FloatList)
}

/// Saved configs are JSON, which has no encoding for NaN or infinities.
fn finite_float(raw: &str) -> Result<f64, String> {
    let value = raw.trim().parse::<f64>().map_err(|e| format!("invalid float '{raw}': {e}"))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(format!("float '{raw}' must be finite"))
    }
}
