use std::collections::BTreeMap;

/// Root of a parsed cue sheet. Album level fields act as fallbacks for every track.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiscSheet {
    pub fields: BTreeMap<String, String>,
    pub files: Vec<FileSection>,
    pub total_tracks: u32,
}

/// One `FILE "..." WAVE` block and the tracks declared inside it.
#[derive(Debug, Clone, PartialEq)]
pub struct FileSection {
    pub name: String,
    pub tracks: Vec<TrackEntry>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrackEntry {
    pub number: u32,
    pub fields: BTreeMap<String, String>,
    pub indices: BTreeMap<u32, String>,
}

/// Positional address of a track: file index in the sheet, track index in that file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackRef {
    pub file: usize,
    pub track: usize,
}

impl TrackRef {
    pub fn new(file: usize, track: usize) -> Self {
        Self { file, track }
    }

    pub fn next(&self) -> Self {
        Self {
            file: self.file,
            track: self.track + 1,
        }
    }
}

impl FileSection {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tracks: Vec::new(),
        }
    }
}

impl TrackEntry {
    pub fn new(number: u32) -> Self {
        Self {
            number,
            fields: BTreeMap::new(),
            indices: BTreeMap::new(),
        }
    }

    /// Explicit end of the track, if the sheet carries an `END` line for it.
    pub fn end(&self) -> Option<&str> {
        self.fields.get("END").map(String::as_str)
    }
}

impl DiscSheet {
    pub fn track(&self, at: TrackRef) -> Option<&TrackEntry> {
        self.files.get(at.file)?.tracks.get(at.track)
    }

    /// Looks up `field` on the addressed track, falling back to the album level.
    ///
    /// Passing `None` for `at` restricts the lookup to album level fields.
    pub fn resolve(&self, field: &str, at: Option<TrackRef>) -> Option<&str> {
        at.and_then(|at| self.track(at))
            .and_then(|track| track.fields.get(field))
            .or_else(|| self.fields.get(field))
            .map(String::as_str)
    }

    /// Every track address in sheet order: files first, then tracks in declared order.
    pub fn track_refs(&self) -> impl Iterator<Item = TrackRef> + '_ {
        self.files.iter().enumerate().flat_map(|(file, section)| {
            (0..section.tracks.len()).map(move |track| TrackRef::new(file, track))
        })
    }
}
