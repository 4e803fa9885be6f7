//! Saved versions: `<config>.<VERSION>` files next to the config

use crate::cli::{version_param, Context};
use crate::error::{PipconfError, Result};
use filetime::FileTime;
use std::ffi::OsString;
use std::fs;
use std::io::Write;
use std::path::Path;
use walkdir::WalkDir;

/// Copy the config to `<config>.<VERSION>`
pub fn save<W: Write>(ctx: &Context, args: &[OsString], out: &mut W) -> Result<()> {
    let version = version_param(args)?;
    let destination = ctx.versioned_path(version);
    copy("save", ctx.config_path(), &destination, out)
}

/// Copy `<config>.<VERSION>` over the config
pub fn restore<W: Write>(ctx: &Context, args: &[OsString], out: &mut W) -> Result<()> {
    let version = version_param(args)?;
    let source = ctx.versioned_path(version);
    copy("use", &source, ctx.config_path(), out)
}

/// Remove `<config>.<VERSION>`
pub fn delete(ctx: &Context, args: &[OsString]) -> Result<()> {
    let version = version_param(args)?;
    let path = ctx.versioned_path(version);

    fs::remove_file(&path).map_err(|e| PipconfError::io(&path, e))?;
    tracing::info!(path = %path.display(), "deleted saved version");

    Ok(())
}

/// Print the suffixes of all saved versions, sorted
pub fn list<W: Write>(ctx: &Context, out: &mut W) -> Result<()> {
    writeln!(out, "Saved versions:")?;
    for version in saved_versions(ctx.config_path()) {
        writeln!(out, "  {}", version)?;
    }
    Ok(())
}

/// Suffixes of every entry named `<config file name>.*` beside the config
pub fn saved_versions(config_path: &Path) -> Vec<String> {
    let (Some(dir), Some(file_name)) = (config_path.parent(), config_path.file_name()) else {
        return Vec::new();
    };
    let prefix = format!("{}.", file_name.to_string_lossy());
    // An empty parent means the config sits in the working directory
    let dir = if dir.as_os_str().is_empty() {
        Path::new(".")
    } else {
        dir
    };

    // Only the config's own directory, like a `<config>.*` glob
    let mut versions: Vec<String> = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter_map(|entry| {
            let name = entry.file_name().to_string_lossy();
            name.strip_prefix(&prefix).map(str::to_string)
        })
        .collect();

    versions.sort();
    tracing::debug!(dir = %dir.display(), count = versions.len(), "scanned saved versions");
    versions
}

/// Copy `source` to `destination`, keeping permissions and timestamps
fn copy<W: Write>(cmd: &str, source: &Path, destination: &Path, out: &mut W) -> Result<()> {
    // Trace first so a failed copy still shows what was attempted
    writeln!(
        out,
        "(command \"{}\") {} -> {}",
        cmd,
        source.display(),
        destination.display()
    )?;

    let copy_error = |e: std::io::Error| PipconfError::Copy {
        from: source.to_path_buf(),
        to: destination.to_path_buf(),
        source: e,
    };

    fs::copy(source, destination).map_err(copy_error)?;

    // fs::copy keeps permissions but not timestamps
    let metadata = fs::metadata(source).map_err(copy_error)?;
    filetime::set_file_times(
        destination,
        FileTime::from_last_access_time(&metadata),
        FileTime::from_last_modification_time(&metadata),
    )
    .map_err(copy_error)?;

    Ok(())
}
