use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_DECODER_FLAGS: &str = "--decode --stdout --silent";
pub const DEFAULT_ENCODER_FLAGS: &str = "--quiet --preset standard --add-id3v2";
pub const DEFAULT_GAIN_FLAGS: &str = "-a -k -q";

/// CLI for splitting lossless disc images into tagged MP3 files using their cue sheets.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Cue sheets, or directories that are searched recursively for them
    #[arg(value_name = "INPUT", required = true)]
    pub inputs: Vec<PathBuf>,

    /// Root directory the "<artist>/<album>" folders are created in
    #[arg(long, short = 'o', value_name = "DESTINATION", env = "CUE2MP3_DESTINATION", default_value = ".")]
    pub destination: PathBuf,

    /// Decoder executable, reads the lossless source and writes WAV to stdout
    #[arg(long, value_name = "PATH", env = "CUE2MP3_DECODER", default_value = "flac")]
    pub decoder: PathBuf,

    #[arg(
        long,
        value_name = "FLAGS",
        env = "CUE2MP3_DECODER_FLAGS",
        default_value = DEFAULT_DECODER_FLAGS,
        allow_hyphen_values = true,
        help = "flags passed to the decoder before the time window and source file"
    )]
    pub decoder_flags: String,

    /// Encoder executable, reads WAV from stdin and writes MP3
    #[arg(long, value_name = "PATH", env = "CUE2MP3_ENCODER", default_value = "lame")]
    pub encoder: PathBuf,

    #[arg(
        long,
        value_name = "FLAGS",
        env = "CUE2MP3_ENCODER_FLAGS",
        default_value = DEFAULT_ENCODER_FLAGS,
        allow_hyphen_values = true,
        help = "flags passed to the encoder before the tag options"
    )]
    pub encoder_flags: String,

    /// Gain tool executable, run once per cue sheet over all of its output files
    #[arg(long, value_name = "PATH", env = "CUE2MP3_GAIN_TOOL", default_value = "mp3gain")]
    pub gain_tool: PathBuf,

    #[arg(
        long,
        value_name = "FLAGS",
        env = "CUE2MP3_GAIN_FLAGS",
        default_value = DEFAULT_GAIN_FLAGS,
        allow_hyphen_values = true,
        help = "flags passed to the gain tool before the output files"
    )]
    pub gain_flags: String,

    /// Skip gain normalization
    #[arg(long, env = "CUE2MP3_NO_GAIN", default_value_t = false)]
    pub no_gain: bool,

    /// Print the commands that would run without running them
    #[arg(long, short = 'n', env = "CUE2MP3_DRY_RUN", default_value_t = false)]
    pub dry_run: bool,

    /// Enable debug logging
    #[arg(long, short = 'D', env = "CUE2MP3_DEBUG", default_value_t = false)]
    pub debug: bool,
}
