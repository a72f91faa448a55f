use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Rating log error: {0}")]
    Csv(#[from] csv::Error),

    #[error("no images found in folder: {}", .dir.display())]
    EmptyCorpus { dir: PathBuf },

    #[error("score {value} is outside the Likert range 1-5")]
    InvalidScore { value: u8 },

    #[error("session is already complete; there is no image left to rate")]
    SessionExhausted,
}
