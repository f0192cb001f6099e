use crate::cue::models::{DiscSheet, TrackRef};
use lazy_static::lazy_static;
use regex::Regex;

pub const FRAMES_PER_SECOND: f64 = 75.0;

lazy_static! {
    static ref DISC_TIME: Regex = Regex::new(r"(\d+):(\d+):(\d+)").unwrap();
}

/// Start and duration of a track in seconds. `None` leaves that bound unconstrained.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TimeWindow {
    pub start: Option<f64>,
    pub duration: Option<f64>,
}

/// Converts `minutes:seconds:frames` (75 frames per second) to seconds.
pub fn convert_time(raw: &str) -> Option<f64> {
    let caps = DISC_TIME.captures(raw)?;
    let minutes: f64 = caps[1].parse().ok()?;
    let seconds: f64 = caps[2].parse().ok()?;
    let frames: f64 = caps[3].parse().ok()?;

    Some(minutes * 60.0 + seconds + frames / FRAMES_PER_SECOND)
}

pub fn time_at_index(sheet: &DiscSheet, at: TrackRef, index: u32) -> Option<f64> {
    sheet
        .track(at)?
        .indices
        .get(&index)
        .and_then(|raw| convert_time(raw))
}

/// Index 1 is the start. The duration comes from an explicit END when the track has one,
/// otherwise from the next track's start within the same file. The last track of a file
/// without END runs to the end of its source, and so does a track whose end is not after
/// its start.
pub fn track_window(sheet: &DiscSheet, at: TrackRef) -> TimeWindow {
    let Some(start) = time_at_index(sheet, at, 1) else {
        return TimeWindow::default();
    };

    let duration = match sheet.track(at).and_then(|track| track.end()) {
        Some(end) => convert_time(end).map(|end| end - start),
        None => time_at_index(sheet, at.next(), 1).map(|next| next - start),
    }
    .filter(|duration| *duration > 0.0);

    TimeWindow {
        start: Some(start),
        duration,
    }
}
