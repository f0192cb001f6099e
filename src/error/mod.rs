use std::result;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Cue2Mp3Error {
    #[error("No cue sheets found in the given inputs")]
    NoCueSheetsFound,

    #[error("{failed} of {total} cue sheet(s) failed")]
    FailedInputs { failed: usize, total: usize },
}

pub type Cue2Mp3Result<T> = result::Result<T, Cue2Mp3Error>;
