use crate::built_info;
use crate::cue::models::{DiscSheet, TrackRef};
use crate::cue::time::{TimeWindow, track_window};
use crate::naming::{UNKNOWN, sanitize_file_name, track_label};
use const_format::concatcp;
use std::fmt::Display;
use std::path::{Path, PathBuf};

pub const ENCODER_SETTINGS: &str = "LAME";
pub const ENCODED_BY: &str = concatcp!(built_info::PKG_NAME, " ", built_info::PKG_VERSION);

/// ID3v2 frames written for every track, in the order they are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    EncoderSettings,
    EncodedBy,
    Track,
    Disc,
    Compilation,
    Album,
    AlbumArtist,
    Title,
    Artist,
    Genre,
    Year,
    Comment,
    Composer,
}

impl Tag {
    pub fn frame_id(&self) -> &'static str {
        match self {
            Tag::EncoderSettings => "TSSE",
            Tag::EncodedBy => "TENC",
            Tag::Track => "TRCK",
            Tag::Disc => "TPOS",
            Tag::Compilation => "TCMP",
            Tag::Album => "TALB",
            Tag::AlbumArtist => "TPE2",
            Tag::Title => "TIT2",
            Tag::Artist => "TPE1",
            Tag::Genre => "TCON",
            Tag::Year => "TYER",
            Tag::Comment => "COMM",
            Tag::Composer => "TCOM",
        }
    }
}

impl Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.frame_id())
    }
}

/// Everything needed to produce one output file, independent of the encoder used.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackPlan {
    pub reference: TrackRef,
    pub label: String,
    pub output_name: String,
    pub source: PathBuf,
    pub window: TimeWindow,
    pub tags: Vec<(Tag, String)>,
    pub artwork: Option<PathBuf>,
    pub skip: bool,
}

impl TrackPlan {
    pub fn tag(&self, tag: Tag) -> Option<&str> {
        self.tags
            .iter()
            .find(|(t, _)| *t == tag)
            .map(|(_, value)| value.as_str())
    }
}

/// Plans every track of the sheet, files in sheet order and tracks in declared order.
pub fn plan_sheet(sheet: &DiscSheet, sheet_dir: &Path) -> Vec<TrackPlan> {
    sheet
        .track_refs()
        .filter_map(|at| plan_track(sheet, sheet_dir, at))
        .collect()
}

pub fn plan_track(sheet: &DiscSheet, sheet_dir: &Path, at: TrackRef) -> Option<TrackPlan> {
    let file = sheet.files.get(at.file)?;
    let track = file.tracks.get(at.track)?;

    let label = track_label(sheet, track.number);
    let title = sheet.resolve("TITLE", Some(at)).unwrap_or(UNKNOWN);
    let output_name = sanitize_file_name(Some(format!("{label} {title}.mp3").as_str()));

    let skip = sheet
        .resolve("SKIP", Some(at))
        .is_some_and(|skip| skip.eq_ignore_ascii_case("TRUE"));

    Some(TrackPlan {
        reference: at,
        label,
        output_name,
        source: sheet_dir.join(&file.name),
        window: track_window(sheet, at),
        tags: collect_tags(sheet, at, track.number),
        artwork: sheet
            .resolve("ARTWORK", Some(at))
            .map(|artwork| sheet_dir.join(artwork)),
        skip,
    })
}

fn collect_tags(sheet: &DiscSheet, at: TrackRef, number: u32) -> Vec<(Tag, String)> {
    let track = Some(at);

    let disc = sheet.resolve("DISCNUMBER", None).map(|disc| {
        match sheet.resolve("TOTALDISCS", None) {
            Some(total) => format!("{disc}/{total}"),
            None => disc.to_string(),
        }
    });

    let compilation = sheet
        .resolve("COMPILATION", track)
        .map(|flag| String::from(if is_truthy(flag) { "1" } else { "0" }));

    let resolved = |field: &str, at: Option<TrackRef>| sheet.resolve(field, at).map(str::to_string);

    [
        (Tag::EncoderSettings, Some(ENCODER_SETTINGS.to_string())),
        (Tag::EncodedBy, Some(ENCODED_BY.to_string())),
        (Tag::Track, Some(format!("{number}/{}", sheet.total_tracks))),
        (Tag::Disc, disc),
        (Tag::Compilation, compilation),
        (Tag::Album, resolved("TITLE", None)),
        (Tag::AlbumArtist, resolved("PERFORMER", None)),
        (Tag::Title, resolved("TITLE", track)),
        (Tag::Artist, resolved("PERFORMER", track)),
        (Tag::Genre, resolved("GENRE", track)),
        (Tag::Year, resolved("DATE", track)),
        (Tag::Comment, resolved("COMMENT", track)),
        (Tag::Composer, resolved("SONGWRITER", track)),
    ]
    .into_iter()
    .filter_map(|(tag, value)| value.map(|value| (tag, value)))
    .collect()
}

fn is_truthy(flag: &str) -> bool {
    let flag = flag.trim();
    flag == "1" || flag.eq_ignore_ascii_case("true") || flag.eq_ignore_ascii_case("yes")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cue::parse_str;

    const SHEET: &str = r#"REM GENRE Jazz
REM DISCNUMBER 2
REM TOTALDISCS 2
REM COMPILATION TRUE
PERFORMER "Various"
TITLE "Sampler: Vol. 1"
REM ARTWORK "cover.jpg"
FILE "disc2.flac" WAVE
  TRACK 01 AUDIO
    TITLE "Intro?"
    PERFORMER "Someone"
    INDEX 01 00:00:00
  TRACK 02 AUDIO
    INDEX 01 02:00:00
    REM SKIP true
  TRACK 03 AUDIO
    TITLE "Outro"
    SONGWRITER "Writer"
    REM END 10:00:00
    INDEX 01 05:00:00
"#;

    fn plans() -> Vec<TrackPlan> {
        let sheet = parse_str(SHEET).unwrap();
        plan_sheet(&sheet, Path::new("/music/sampler"))
    }

    #[test]
    fn plans_every_track_in_order() {
        let plans = plans();
        let labels: Vec<_> = plans.iter().map(|plan| plan.label.as_str()).collect();
        assert_eq!(labels, vec!["2-01", "2-02", "2-03"]);
        assert!(plans.iter().all(|plan| plan.source == Path::new("/music/sampler/disc2.flac")));
    }

    #[test]
    fn output_name_is_sanitized() {
        let plans = plans();
        assert_eq!(plans[0].output_name, "2-01 Intro.mp3");
        assert_eq!(plans[1].output_name, "2-02 Sampler- Vol. 1.mp3");
    }

    #[test]
    fn skip_flag_is_case_insensitive() {
        let plans = plans();
        assert!(!plans[0].skip);
        assert!(plans[1].skip);
    }

    #[test]
    fn windows_follow_track_boundaries() {
        let plans = plans();
        assert_eq!(plans[0].window.start, Some(0.0));
        assert_eq!(plans[0].window.duration, Some(120.0));
        assert_eq!(plans[2].window.start, Some(300.0));
        assert_eq!(plans[2].window.duration, Some(300.0));
    }

    #[test]
    fn artwork_is_relative_to_sheet_dir() {
        let plans = plans();
        assert_eq!(
            plans[0].artwork.as_deref(),
            Some(Path::new("/music/sampler/cover.jpg"))
        );
    }

    #[test]
    fn tags_are_resolved_and_ordered() {
        let plans = plans();
        let first = &plans[0];

        let frames: Vec<_> = first.tags.iter().map(|(tag, _)| tag.frame_id()).collect();
        assert_eq!(
            frames,
            vec![
                "TSSE", "TENC", "TRCK", "TPOS", "TCMP", "TALB", "TPE2", "TIT2", "TPE1", "TCON"
            ]
        );
        assert_eq!(first.tag(Tag::Track), Some("1/3"));
        assert_eq!(first.tag(Tag::Disc), Some("2/2"));
        assert_eq!(first.tag(Tag::Compilation), Some("1"));
        assert_eq!(first.tag(Tag::Album), Some("Sampler: Vol. 1"));
        assert_eq!(first.tag(Tag::Title), Some("Intro?"));
        assert_eq!(first.tag(Tag::Artist), Some("Someone"));
        assert_eq!(first.tag(Tag::AlbumArtist), Some("Various"));
        assert_eq!(first.tag(Tag::Year), None);
        assert_eq!(first.tag(Tag::EncodedBy), Some(ENCODED_BY));
    }

    #[test]
    fn track_inherits_album_values() {
        let plans = plans();
        let second = &plans[1];
        assert_eq!(second.tag(Tag::Title), Some("Sampler: Vol. 1"));
        assert_eq!(second.tag(Tag::Artist), Some("Various"));
        assert_eq!(plans[2].tag(Tag::Composer), Some("Writer"));
    }

    #[test]
    fn title_with_trailing_dots_keeps_them_before_extension() {
        let sheet = parse_str(
            "FILE \"a.wav\" WAVE\nTRACK 01 AUDIO\nTITLE \"Song...\"\nINDEX 01 00:00:00\n",
        )
        .unwrap();
        let plans = plan_sheet(&sheet, Path::new("."));

        assert_eq!(plans[0].output_name, "01 Song....mp3");
    }

    #[test]
    fn absent_title_names_file_unknown() {
        let sheet = parse_str("FILE \"a.wav\" WAVE\nTRACK 01 AUDIO\nINDEX 01 00:00:00\n").unwrap();
        let plans = plan_sheet(&sheet, Path::new("."));

        assert_eq!(plans[0].output_name, "01 Unknown.mp3");
        assert_eq!(plans[0].tag(Tag::Title), None);
        assert_eq!(plans[0].tag(Tag::Disc), None);
        assert_eq!(plans[0].tag(Tag::Compilation), None);
    }
}
