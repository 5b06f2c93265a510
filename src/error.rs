use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    /// Input parsed as JSON but does not describe a list of marker specs.
    #[error("schema error: {0}")]
    Schema(String),

    /// Input is missing, unreadable or not JSON at all.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    #[error("invalid canvas size: width={width}, height={height}")]
    InvalidCanvas { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("render backend error: {0}")]
    Backend(String),
}
