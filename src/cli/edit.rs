use crate::cli::Context;
use crate::error::{PipconfError, Result};
use std::process::Command;

/// Open the config in the user's editor and wait for it to exit
///
/// `EDITOR` may carry flags (`code --wait`); it is split on whitespace and
/// the config path goes last. The editor's exit status does not affect the
/// result, only a failure to start it does.
pub fn run(ctx: &Context) -> Result<()> {
    let editor = ctx.editor_command();
    let config_path = ctx.config_path();
    tracing::debug!(editor, path = %config_path.display(), "launching editor");

    let mut words = editor.split_whitespace();
    let program = words.next().unwrap_or(editor);

    // Inherits stdio so terminal editors work
    let status = Command::new(program)
        .args(words)
        .arg(config_path)
        .status()
        .map_err(|e| PipconfError::EditorLaunch {
            editor: editor.to_string(),
            source: e,
        })?;

    if !status.success() {
        tracing::warn!(editor, code = ?status.code(), "editor exited with an error");
    }

    Ok(())
}
