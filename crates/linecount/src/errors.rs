pub type CountResult<T> = Result<T, CountError>;

#[derive(Debug)]
pub enum CountError {
    /// Buffered reading of `path` failed.
    Io {
        path: std::path::PathBuf,
        source: std::io::Error,
    },
    /// The file could not be mapped.
    Map(mapping::MapError),
}

impl CountError {
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            CountError::Io { path, .. } => path,
            CountError::Map(err) => err.path(),
        }
    }
}

impl std::fmt::Display for CountError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CountError::Io { path, source } => {
                write!(f, "cannot read \"{}\": {source}", path.display())
            }
            CountError::Map(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for CountError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CountError::Io { source, .. } => Some(source),
            CountError::Map(err) => Some(err),
        }
    }
}

impl From<mapping::MapError> for CountError {
    fn from(value: mapping::MapError) -> Self {
        CountError::Map(value)
    }
}
