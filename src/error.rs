use std::{path::PathBuf, time::Duration};

use thiserror::Error;

/// Every way a call against the conversion service can fail.
#[derive(Error, Debug)]
pub enum ConvertioError {
    /// Network failure, non-2xx status or an unreadable response envelope.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered, but reported a failure in its envelope.
    #[error("{0}")]
    Api(String),

    #[error("invalid source file: {}", .0.display())]
    InvalidSource(PathBuf),

    #[error("conversion {id} not finished after {waited:?}")]
    Timeout { id: String, waited: Duration },

    #[error("conversion {0} reported no output")]
    MissingOutput(String),

    #[error("conversion {id} lists output file '{name}' that cannot be stored locally")]
    InvalidOutputName { id: String, name: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unexpected response data: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("no api key configured")]
    MissingApiKey,
}

pub type Result<T> = std::result::Result<T, ConvertioError>;
