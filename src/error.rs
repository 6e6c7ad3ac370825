/// Failures raised while emitting a path.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The geometry or parameters cannot be drawn, nothing was written.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// The sink rejected a write. Output may be partial.
    #[error("failed writing to sink: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }
}
