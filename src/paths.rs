//! Config and saved-version path computation

use crate::error::{PipconfError, Result};
use crate::platform::PlatformProfile;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// Resolve the active config file under the given home directory
pub fn config_path_in(home: &Path, profile: PlatformProfile) -> PathBuf {
    home.join(profile.config_relative_path())
}

/// Resolve the active config file for the current user
pub fn config_path(profile: PlatformProfile) -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or(PipconfError::NoHomeDir)?;
    Ok(config_path_in(&home, profile))
}

/// Path of the copy saved under `suffix`: `<base>.<suffix>`
///
/// The suffix is appended verbatim. Separators inside it are not rejected,
/// so `../x` lands outside the config directory.
pub fn versioned_path(base: &Path, suffix: impl AsRef<OsStr>) -> PathBuf {
    let mut name: OsString = base.as_os_str().to_owned();
    name.push(".");
    name.push(suffix.as_ref());
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_path_posix() {
        let path = config_path_in(Path::new("/home/user"), PlatformProfile::Posix);
        assert_eq!(path, Path::new("/home/user").join(".pip/pip.conf"));
    }

    #[test]
    fn test_config_path_windows() {
        let path = config_path_in(Path::new("/home/user"), PlatformProfile::Windows);
        assert!(path.ends_with("pip/pip.ini"));
    }

    #[test]
    fn test_versioned_path_appends_suffix() {
        let base = Path::new("/home/user/.pip/pip.conf");
        assert_eq!(
            versioned_path(base, "work"),
            PathBuf::from("/home/user/.pip/pip.conf.work")
        );
    }

    #[test]
    fn test_versioned_path_keeps_suffix_verbatim() {
        let base = Path::new("/cfg/pip.conf");
        assert_eq!(
            versioned_path(base, " a.b "),
            PathBuf::from("/cfg/pip.conf. a.b ")
        );
        assert_eq!(
            versioned_path(base, "../escape"),
            PathBuf::from("/cfg/pip.conf.../escape")
        );
    }

    #[test]
    fn test_versioned_path_empty_suffix() {
        assert_eq!(
            versioned_path(Path::new("pip.conf"), ""),
            PathBuf::from("pip.conf.")
        );
    }
}
