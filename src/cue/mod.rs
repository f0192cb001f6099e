use crate::cue::error::{CueError, CueResult};
use crate::cue::line::{CueLine, escape_quotes, normalize_line};
use crate::cue::models::{DiscSheet, FileSection, TrackEntry};
use log::{debug, trace};
use std::path::{Path, PathBuf};

pub mod error;
pub mod line;
pub mod models;
pub mod time;

pub struct CueParser {
    cue_path: PathBuf,
}

impl CueParser {
    pub fn new(cue_path: impl AsRef<Path>) -> Self {
        Self {
            cue_path: cue_path.as_ref().to_path_buf(),
        }
    }

    /// Directory FILE and ARTWORK paths inside the sheet are relative to.
    pub fn sheet_dir(&self) -> &Path {
        self.cue_path.parent().unwrap_or(Path::new("."))
    }

    pub async fn parse(&self) -> CueResult<DiscSheet> {
        let data = tokio::fs::read(&self.cue_path).await.map_err(|err| {
            debug!("Failed to read {:?}: {err}", self.cue_path);
            CueError::NotFound(self.cue_path.clone())
        })?;

        let content = String::from_utf8_lossy(&data);
        parse_str(&content)
    }
}

/// Builds a [`DiscSheet`] from the text of a cue sheet.
///
/// Unrecognized lines are skipped. TRACK or INDEX before any FILE make the sheet
/// malformed, as does an INDEX between a FILE and its first TRACK. Metadata lines
/// in that position are dropped.
pub fn parse_str(content: &str) -> CueResult<DiscSheet> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut sheet = DiscSheet::default();

    for (line_no, raw) in content.split('\n').enumerate() {
        let line = normalize_line(raw);

        match CueLine::classify(&line) {
            CueLine::File(name) => {
                sheet.files.push(FileSection::new(name));
            }
            CueLine::Track(number) => {
                let file = sheet
                    .files
                    .last_mut()
                    .ok_or(CueError::TrackOutsideFile(line_no + 1))?;

                file.tracks.push(TrackEntry::new(number));
                sheet.total_tracks = sheet.total_tracks.max(number);
            }
            CueLine::Index(number, time) => {
                let file = sheet
                    .files
                    .last_mut()
                    .ok_or(CueError::IndexOutsideFile(line_no + 1))?;

                let track = file
                    .tracks
                    .last_mut()
                    .ok_or(CueError::IndexOutsideTrack(line_no + 1))?;

                track.indices.insert(number, time);
            }
            CueLine::Meta(key, value) => {
                let value = escape_quotes(&value);

                match sheet.files.last_mut() {
                    None => {
                        sheet.fields.insert(key, value);
                    }
                    Some(file) => match file.tracks.last_mut() {
                        Some(track) => {
                            track.fields.insert(key, value);
                        }
                        None => trace!("Dropping {key} on line {}, no open track", line_no + 1),
                    },
                }
            }
            CueLine::Unrecognized => {}
        }
    }

    debug!(
        "Parsed cue sheet with {} file(s) and {} track(s)",
        sheet.files.len(),
        sheet.total_tracks
    );

    Ok(sheet)
}
