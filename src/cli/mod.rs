//! Command-line interface module
//!
//! Holds the command table and the dispatcher:
//! - create/init: write the default config
//! - edit/ed/e: open the config in an editor
//! - save, use, delete: manage saved versions
//! - list/ls: show saved versions
//! - print/view/cat: dump the config to stdout
pub mod create;
pub mod edit;
pub mod print;
pub mod versions;

use crate::error::{PipconfError, Result};
use crate::paths;
use crate::platform::PlatformProfile;
use clap::ValueEnum;
use std::env;
use std::ffi::{OsStr, OsString};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Program name shown in usage text
pub const PROGRAM: &str = "pipconf";

/// Everything a handler needs to know about the host, computed once
#[derive(Debug, Clone)]
pub struct Context {
    profile: PlatformProfile,
    config_path: PathBuf,
    editor: Option<String>,
}

impl Context {
    pub fn new(profile: PlatformProfile, config_path: PathBuf, editor: Option<String>) -> Self {
        Self {
            profile,
            config_path,
            editor: editor.filter(|e| !e.trim().is_empty()),
        }
    }

    /// Build the context from the home directory and `EDITOR`
    pub fn from_env(profile: PlatformProfile) -> Result<Self> {
        let config_path = paths::config_path(profile)?;
        Ok(Self::new(profile, config_path, env::var("EDITOR").ok()))
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Editor to launch: `EDITOR` when set and non-empty, else the platform default
    pub fn editor_command(&self) -> &str {
        self.editor
            .as_deref()
            .unwrap_or_else(|| self.profile.default_editor())
    }

    /// Path of the copy saved as `version`
    pub fn versioned_path(&self, version: impl AsRef<OsStr>) -> PathBuf {
        paths::versioned_path(&self.config_path, version)
    }
}

/// Command table, in usage order
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CommandKind {
    /// Create a pip config file with defaults
    #[value(name = "create", alias = "init")]
    Create,
    /// Edit the pip config file with $EDITOR
    #[value(name = "edit", aliases = ["ed", "e"])]
    Edit,
    /// Save a copy of the config as VERSION
    #[value(name = "save", alias = "s")]
    Save,
    /// Copy the config saved as VERSION over the config
    #[value(name = "use", aliases = ["get", "restore"])]
    Use,
    /// List saved VERSIONs
    #[value(name = "list", alias = "ls")]
    List,
    /// Print the config, or the one saved as VERSION, to stdout
    #[value(name = "print", aliases = ["view", "cat"])]
    Print,
    /// Remove the config saved as VERSION
    #[value(name = "delete", aliases = ["del", "remove", "rm"])]
    Delete,
}

impl CommandKind {
    /// Find the command whose name or alias is exactly `token`
    pub fn lookup(token: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(token, false).ok()
    }

    /// Parameter label shown in usage text
    pub fn param_help(self) -> &'static str {
        match self {
            CommandKind::Save | CommandKind::Use | CommandKind::Delete => "VERSION",
            CommandKind::Print => "[VERSION]",
            CommandKind::Create | CommandKind::Edit | CommandKind::List => "",
        }
    }

    /// Canonical name followed by aliases
    pub fn names(self) -> Vec<String> {
        self.to_possible_value()
            .map(|pv| pv.get_name_and_aliases().map(str::to_string).collect())
            .unwrap_or_default()
    }

    pub fn help(self) -> String {
        self.to_possible_value()
            .and_then(|pv| pv.get_help().map(|h| h.to_string()))
            .unwrap_or_default()
    }

    /// Run the handler with the full argument list, command token included
    pub fn run<W: Write>(self, ctx: &Context, args: &[OsString], out: &mut W) -> Result<()> {
        match self {
            CommandKind::Create => create::run(ctx),
            CommandKind::Edit => edit::run(ctx),
            CommandKind::Save => versions::save(ctx, args, out),
            CommandKind::Use => versions::restore(ctx, args, out),
            CommandKind::List => versions::list(ctx, out),
            CommandKind::Print => print::run(ctx, args, out),
            CommandKind::Delete => versions::delete(ctx, args),
        }
    }
}

/// Full usage text, one line per command in table order
pub fn usage() -> String {
    let rows: Vec<(String, String)> = CommandKind::value_variants()
        .iter()
        .map(|kind| {
            let mut invocation = kind.names().join("|");
            if !kind.param_help().is_empty() {
                invocation.push(' ');
                invocation.push_str(kind.param_help());
            }
            (invocation, kind.help())
        })
        .collect();
    let width = rows.iter().map(|(inv, _)| inv.len()).max().unwrap_or(0);

    let mut text = format!("Usage: {} COMMAND [VERSION]\n\nCommands:\n", PROGRAM);
    for (invocation, help) in rows {
        text.push_str(&format!("  {:<width$}  {}\n", invocation, help, width = width));
    }
    text
}

/// Resolve `args[0]` and run its handler
///
/// The context is only loaded once a command has been found, so usage
/// errors never depend on the home directory.
pub fn dispatch<W, F>(args: &[OsString], load_context: F, out: &mut W) -> Result<()>
where
    W: Write,
    F: FnOnce() -> Result<Context>,
{
    let Some(token) = args.first() else {
        return Err(PipconfError::MissingCommand);
    };

    // Non UTF-8 tokens can never name a command
    let kind = token
        .to_str()
        .and_then(CommandKind::lookup)
        .ok_or_else(|| PipconfError::UnknownCommand {
            args: join_lossy(args, " "),
        })?;

    tracing::debug!(command = ?kind, "dispatching");
    let ctx = load_context()?;
    kind.run(&ctx, args, out)
}

/// The VERSION token of a `<command> VERSION` invocation
pub fn version_param(args: &[OsString]) -> Result<&OsStr> {
    match args {
        [_, version] => Ok(version.as_os_str()),
        _ => Err(too_many_or_missing(args)),
    }
}

/// Parameter error for an argument list that is not `<command> VERSION`
pub fn too_many_or_missing(args: &[OsString]) -> PipconfError {
    PipconfError::MissingParam {
        reason: if args.len() < 2 {
            "missing version"
        } else {
            "too many parameters"
        },
        args: join_lossy(args, ""),
    }
}

/// Join tokens for diagnostics, replacing invalid UTF-8
fn join_lossy(args: &[OsString], separator: &str) -> String {
    args.iter()
        .map(|arg| arg.to_string_lossy())
        .collect::<Vec<_>>()
        .join(separator)
}
