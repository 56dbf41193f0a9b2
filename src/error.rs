use thiserror::Error;

/// Failures at the edges of the tracker. None of them is fatal; callers log and move on.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("surface has degenerate geometry ({width}x{height})")]
    DegenerateSurface { width: f64, height: f64 },
    #[error("no surface element matches selector `{0}`")]
    SurfaceNotFound(String),
    #[error("unknown opcode `{0}`")]
    UnknownOpcode(String),
    #[error("opcode `{0}` needs a target sprite")]
    MissingTarget(&'static str),
    #[error("opcode `{0}` is a command and reports nothing")]
    NotAReporter(&'static str),
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
