/// Environment variable that switches counting to memory-mapped reads.
///
/// Only its presence matters; the value is ignored.
pub const USE_MAP_VAR: &str = "LINECOUNT_USE_MAP";

/// Older name for [`USE_MAP_VAR`], still honoured.
pub const LEGACY_USE_MAP_VAR: &str = "NZL_USE_MAP";

/// How file contents are read.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// Stream the file through a `BufReader`.
    #[default]
    Buffered,
    /// Map the whole file and scan the mapped bytes.
    Mapped,
}

impl Mode {
    /// One-letter tag printed in front of each report line.
    #[must_use]
    pub fn tag(self) -> char {
        match self {
            Mode::Buffered => 'f',
            Mode::Mapped => 'm',
        }
    }

    /// Line printed before any file is processed.
    #[must_use]
    pub fn banner(self) -> &'static str {
        match self {
            Mode::Buffered => "using file",
            Mode::Mapped => "using memory mapping",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Config {
    pub mode: Mode,
}

impl Config {
    /// Reads the configuration from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var_os(key))
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<std::ffi::OsString>,
    {
        let mode = match [USE_MAP_VAR, LEGACY_USE_MAP_VAR]
            .into_iter()
            .find(|key| lookup(key).is_some())
        {
            Some(key) => {
                log::debug!("{key} is set, using mapped reads");
                Mode::Mapped
            }
            None => Mode::Buffered,
        };

        Self { mode }
    }
}
