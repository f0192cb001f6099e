use crate::cue::models::DiscSheet;

pub const UNKNOWN: &str = "Unknown";

/// Maps metadata to a name that is safe to use as a single path component.
///
/// Distinct inputs may map to the same output.
pub fn sanitize_file_name(value: Option<&str>) -> String {
    let Some(value) = value else {
        return UNKNOWN.to_string();
    };

    let sanitized: String = value
        .chars()
        .filter(|c| *c != '?')
        .map(|c| match c {
            c if !c.is_ascii() => '-',
            '/' | '\\' | '"' | ':' | '*' => '-',
            c => c,
        })
        .collect();

    sanitized
        .trim_end_matches(|c: char| c == '.' || c.is_whitespace())
        .to_string()
}

/// `"<disc>-<track>"` on multi disc sets, `"<track>"` otherwise.
///
/// The track number is padded to two digits, or wider when the sheet has more than
/// 99 tracks.
pub fn track_label(sheet: &DiscSheet, number: u32) -> String {
    let prefix = match (sheet.resolve("DISCNUMBER", None), total_discs(sheet)) {
        (Some(disc), Some(total)) if total > 1 => format!("{disc}-"),
        _ => String::new(),
    };

    let width = sheet.total_tracks.to_string().len().max(2);
    format!("{prefix}{number:0width$}")
}

fn total_discs(sheet: &DiscSheet) -> Option<u32> {
    sheet.resolve("TOTALDISCS", None)?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet_with(fields: &[(&str, &str)], total_tracks: u32) -> DiscSheet {
        let mut sheet = DiscSheet {
            total_tracks,
            ..Default::default()
        };
        for (key, value) in fields {
            sheet.fields.insert(key.to_string(), value.to_string());
        }
        sheet
    }

    #[test]
    fn sanitize_replaces_and_removes() {
        assert_eq!(
            sanitize_file_name(Some("My/Album: \"Best\" *Hits*?")),
            "My-Album- -Best- -Hits-"
        );
        assert_eq!(sanitize_file_name(Some("a\\b")), "a-b");
    }

    #[test]
    fn sanitize_absent_is_unknown() {
        assert_eq!(sanitize_file_name(None), "Unknown");
    }

    #[test]
    fn sanitize_replaces_non_ascii() {
        assert_eq!(sanitize_file_name(Some("Café Über")), "Caf- -ber");
    }

    #[test]
    fn sanitize_strips_trailing_dots_and_spaces() {
        assert_eq!(sanitize_file_name(Some("Vol. 2... ")), "Vol. 2");
        assert_eq!(sanitize_file_name(Some("Why? ")), "Why");
        assert_eq!(sanitize_file_name(Some("Track.mp3")), "Track.mp3");
    }

    #[test]
    fn sanitize_is_idempotent() {
        for input in ["My/Album: \"Best\" *Hits*?", "Café. . ", "plain", "?.?", ""] {
            let once = sanitize_file_name(Some(input));
            assert_eq!(sanitize_file_name(Some(once.as_str())), once, "input {input:?}");
        }
    }

    #[test]
    fn label_with_disc_prefix() {
        let sheet = sheet_with(&[("DISCNUMBER", "2"), ("TOTALDISCS", "2")], 12);
        assert_eq!(track_label(&sheet, 7), "2-07");
    }

    #[test]
    fn label_without_disc_fields() {
        let sheet = sheet_with(&[], 12);
        assert_eq!(track_label(&sheet, 7), "07");
    }

    #[test]
    fn label_single_disc_set_has_no_prefix() {
        let sheet = sheet_with(&[("DISCNUMBER", "1"), ("TOTALDISCS", "1")], 9);
        assert_eq!(track_label(&sheet, 3), "03");

        let sheet = sheet_with(&[("DISCNUMBER", "1")], 9);
        assert_eq!(track_label(&sheet, 3), "03");
    }

    #[test]
    fn label_pads_to_track_count_above_99() {
        let sheet = sheet_with(&[], 120);
        assert_eq!(track_label(&sheet, 7), "007");
        assert_eq!(track_label(&sheet, 120), "120");
    }
}
