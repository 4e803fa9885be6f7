use crate::cli::{too_many_or_missing, Context};
use crate::error::{PipconfError, Result};
use std::ffi::OsString;
use std::fs;
use std::io::Write;

/// Dump the config, or the copy saved as `args[1]`, byte for byte
///
/// An empty VERSION means the active config.
pub fn run<W: Write>(ctx: &Context, args: &[OsString], out: &mut W) -> Result<()> {
    let path = match args {
        [_, version] if !version.is_empty() => ctx.versioned_path(version),
        [] | [_] | [_, _] => ctx.config_path().to_path_buf(),
        _ => return Err(too_many_or_missing(args)),
    };

    // Raw bytes, no decoding

    let content = fs::read(&path).map_err(|e| PipconfError::io(&path, e))?;
    out.write_all(&content)?;
    out.flush()?;

    Ok(())
}
