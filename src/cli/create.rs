use crate::cli::Context;
use crate::error::{PipconfError, Result};
use std::fs;

/// Contents written by `create`
pub const PIP_CONF_TEMPLATE: &str = "\
[global]
# Base URL of Python Package Index

index-url = https://pypi.python.org/simple/


# Extra URLs of package indexes to use in addition to --index-url.

# extra-index-url =


# Ignore package index (only looking at --find-links URLs instead).

# no-index = false


# If a url or path to an html file, then parse for links to archives.
# If a local path or file:// url that's a directory, then look for archives
# in the directory listing.

# find-links =


# Enable the processing of dependency links.

# process-dependency-links = false
";

/// Write the default config, replacing whatever is there
pub fn run(ctx: &Context) -> Result<()> {
    let config_path = ctx.config_path();

    // Create the config directory if it doesn't exist
    if let Some(parent) = config_path.parent() {
        fs::create_dir_all(parent).map_err(|e| PipconfError::io(parent, e))?;
    }

    // Always overwrite, no confirmation
    fs::write(config_path, PIP_CONF_TEMPLATE).map_err(|e| PipconfError::io(config_path, e))?;
    tracing::info!(path = %config_path.display(), "wrote default config");

    Ok(())
}
