use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CueError {
    #[error("Cue sheet not found or unreadable: {0}")]
    NotFound(PathBuf),

    #[error("Malformed cue sheet: TRACK on line {0} appears before any FILE")]
    TrackOutsideFile(usize),

    #[error("Malformed cue sheet: INDEX on line {0} appears before any FILE")]
    IndexOutsideFile(usize),

    #[error("Malformed cue sheet: INDEX on line {0} follows a FILE before any TRACK in it")]
    IndexOutsideTrack(usize),
}

pub type CueResult<T> = Result<T, CueError>;
