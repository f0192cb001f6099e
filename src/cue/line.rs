use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref FILE_LINE: Regex = Regex::new(r#"^\s*FILE\s+"(.*)"\s+WAVE"#).unwrap();
    static ref TRACK_LINE: Regex = Regex::new(r"^\s*TRACK\s+(\d+)\s+AUDIO").unwrap();
    static ref INDEX_LINE: Regex = Regex::new(r"^\s*INDEX\s+(\d+)\s+(.*)$").unwrap();
    static ref LEADING_JUNK: Regex = Regex::new(r"^[^A-Za-z0-9]*").unwrap();
    static ref QUOTED_PAIR: Regex = Regex::new(r#"^(\S+)\s+"(.*?)""#).unwrap();
    static ref BARE_PAIR: Regex = Regex::new(r"^(\w+)\s+(.*)$").unwrap();
}

/// A single cue sheet line after classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CueLine {
    File(String),
    Track(u32),
    Index(u32, String),
    Meta(String, String),
    Unrecognized,
}

impl CueLine {
    /// Runs the matchers in fixed order, the first one that matches decides.
    pub fn classify(line: &str) -> Self {
        match_file(line)
            .map(CueLine::File)
            .or_else(|| match_track(line).map(CueLine::Track))
            .or_else(|| match_index(line).map(|(number, time)| CueLine::Index(number, time)))
            .or_else(|| tokenize(line).map(|(key, value)| CueLine::Meta(key, value)))
            .unwrap_or(CueLine::Unrecognized)
    }
}

pub fn normalize_line(line: &str) -> String {
    line.chars().filter(|c| *c != '\r' && *c != '\n').collect()
}

pub fn match_file(line: &str) -> Option<String> {
    FILE_LINE.captures(line).map(|caps| caps[1].to_string())
}

pub fn match_track(line: &str) -> Option<u32> {
    TRACK_LINE.captures(line)?[1].parse().ok()
}

pub fn match_index(line: &str) -> Option<(u32, String)> {
    let caps = INDEX_LINE.captures(line)?;
    let number = caps[1].parse().ok()?;
    Some((number, caps[2].to_string()))
}

/// Extracts a `(key, value)` pair from a free-form metadata line.
///
/// A `REM ` prefix is dropped, so `REM GENRE "Rock"` reads like `GENRE "Rock"`.
/// Quoted values win over the bare `<word> <rest>` form. Lines matching neither
/// yield `None`.
pub fn tokenize(line: &str) -> Option<(String, String)> {
    let rest = LEADING_JUNK.replace(line, "");
    let rest = rest.trim_start();
    let rest = rest.strip_prefix("REM ").unwrap_or(rest);

    let caps = QUOTED_PAIR
        .captures(rest)
        .or_else(|| BARE_PAIR.captures(rest))?;

    Some((caps[1].to_string(), escape_quotes(&caps[2])))
}

/// Backslash-escapes every double quote that is not escaped already.
///
/// Backslashes themselves are not escaped, so a literal `\"` in the sheet reads back as
/// a plain `"` after [`unescape_quotes`].
pub fn escape_quotes(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    let mut previous = None;

    for c in value.chars() {
        if c == '"' && previous != Some('\\') {
            escaped.push('\\');
        }
        escaped.push(c);
        previous = Some(c);
    }

    escaped
}

pub fn unescape_quotes(value: &str) -> String {
    value.replace("\\\"", "\"")
}
