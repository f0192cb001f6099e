use crate::cue::error::CueError;
use crate::encoder::process::ProcessOutcome;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EncoderError {
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    CueError(#[from] CueError),

    #[error("{program} failed with {outcome}")]
    ProcessFailed {
        program: String,
        outcome: ProcessOutcome,
    },

    #[error("Could not capture the output of {0}")]
    MissingPipe(String),
}

pub type EncoderResult<T> = Result<T, EncoderError>;
