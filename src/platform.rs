//! Host platform profile
//!
//! The platform is detected once at startup and passed around explicitly;
//! nothing else in the crate consults `cfg!(windows)`.

/// Which family of defaults applies on this host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformProfile {
    Posix,
    Windows,
}

impl PlatformProfile {
    /// Profile of the host the binary was built for
    pub fn detect() -> Self {
        if cfg!(windows) {
            PlatformProfile::Windows
        } else {
            PlatformProfile::Posix
        }
    }

    /// Pick the value matching this platform
    pub fn choice<T>(self, posix: T, windows: T) -> T {
        match self {
            PlatformProfile::Posix => posix,
            PlatformProfile::Windows => windows,
        }
    }

    /// Config file location relative to the home directory
    pub fn config_relative_path(self) -> &'static str {
        self.choice(".pip/pip.conf", "pip/pip.ini")
    }

    /// Editor used when `EDITOR` is unset or empty
    pub fn default_editor(self) -> &'static str {
        self.choice("/usr/bin/vi", "notepad.exe")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choice() {
        assert_eq!(PlatformProfile::Posix.choice("p", "w"), "p");
        assert_eq!(PlatformProfile::Windows.choice("p", "w"), "w");
    }

    #[test]
    fn test_defaults() {
        assert_eq!(PlatformProfile::Posix.config_relative_path(), ".pip/pip.conf");
        assert_eq!(PlatformProfile::Windows.config_relative_path(), "pip/pip.ini");
        assert_eq!(PlatformProfile::Posix.default_editor(), "/usr/bin/vi");
        assert_eq!(PlatformProfile::Windows.default_editor(), "notepad.exe");
    }

    #[test]
    fn test_detect_matches_build_target() {
        let expected = if cfg!(windows) {
            PlatformProfile::Windows
        } else {
            PlatformProfile::Posix
        };
        assert_eq!(PlatformProfile::detect(), expected);
    }
}
