pub type MapResult<T> = Result<T, MapError>;

/// Why establishing a [`crate::mmap::MappedFile`] failed.
///
/// Every variant carries the path it was asked to map and the OS error
/// that stopped it. No resource is held when one of these is returned.
#[derive(Debug)]
pub enum MapError {
    /// The file could not be opened for reading.
    OpenFailed {
        path: std::path::PathBuf,
        source: std::io::Error,
    },
    /// The size of the opened file could not be queried.
    StatFailed {
        path: std::path::PathBuf,
        source: std::io::Error,
    },
    /// The operating system refused to map the file.
    MapFailed {
        path: std::path::PathBuf,
        source: std::io::Error,
    },
}

impl MapError {
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            MapError::OpenFailed { path, .. }
            | MapError::StatFailed { path, .. }
            | MapError::MapFailed { path, .. } => path,
        }
    }

    #[must_use]
    pub fn io_error(&self) -> &std::io::Error {
        match self {
            MapError::OpenFailed { source, .. }
            | MapError::StatFailed { source, .. }
            | MapError::MapFailed { source, .. } => source,
        }
    }

    /// The platform error code (`errno` or `GetLastError`), if there is one.
    #[must_use]
    pub fn raw_os_error(&self) -> Option<i32> {
        self.io_error().raw_os_error()
    }
}

impl std::fmt::Display for MapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MapError::OpenFailed { path, source } => {
                write!(f, "cannot open \"{}\": {source}", path.display())
            }
            MapError::StatFailed { path, source } => {
                write!(f, "cannot obtain size of \"{}\": {source}", path.display())
            }
            MapError::MapFailed { path, source } => {
                write!(f, "cannot map \"{}\": {source}", path.display())
            }
        }
    }
}

impl std::error::Error for MapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.io_error())
    }
}

impl From<MapError> for std::io::Error {
    fn from(value: MapError) -> Self {
        let kind = value.io_error().kind();
        std::io::Error::new(kind, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_path_and_step() {
        let err = MapError::StatFailed {
            path: "/tmp/some.log".into(),
            source: std::io::Error::from_raw_os_error(9),
        };

        let text = err.to_string();
        assert!(text.starts_with("cannot obtain size of \"/tmp/some.log\": "));
        assert_eq!(err.raw_os_error(), Some(9));
        assert_eq!(err.path(), std::path::Path::new("/tmp/some.log"));
    }

    #[test]
    fn test_into_io_error_keeps_kind() {
        let err = MapError::OpenFailed {
            path: "missing".into(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };

        let io_err: std::io::Error = err.into();
        assert_eq!(io_err.kind(), std::io::ErrorKind::NotFound);
        assert!(io_err.to_string().contains("missing"));
    }

    #[test]
    fn test_source_is_the_os_error() {
        let err = MapError::MapFailed {
            path: "x".into(),
            source: std::io::Error::from(std::io::ErrorKind::InvalidInput),
        };

        let source = std::error::Error::source(&err).expect("source should be set");
        assert_eq!(source.to_string(), err.io_error().to_string());
    }
}
