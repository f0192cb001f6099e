use crate::commands::Cli;
use std::path::PathBuf;

/// Settings for the external tools that turn a track plan into a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncoderConfig {
    pub decoder: PathBuf,
    pub decoder_flags: Vec<String>,
    pub encoder: PathBuf,
    pub encoder_flags: Vec<String>,
    /// `None` disables gain normalization.
    pub gain_tool: Option<PathBuf>,
    pub gain_flags: Vec<String>,
    pub destination: PathBuf,
    pub dry_run: bool,
    pub debug: bool,
}

fn split_flags(flags: &str) -> Vec<String> {
    flags.split_whitespace().map(str::to_string).collect()
}

impl From<&Cli> for EncoderConfig {
    fn from(cli: &Cli) -> Self {
        Self {
            decoder: cli.decoder.clone(),
            decoder_flags: split_flags(&cli.decoder_flags),
            encoder: cli.encoder.clone(),
            encoder_flags: split_flags(&cli.encoder_flags),
            gain_tool: (!cli.no_gain).then(|| cli.gain_tool.clone()),
            gain_flags: split_flags(&cli.gain_flags),
            destination: cli.destination.clone(),
            dry_run: cli.dry_run,
            debug: cli.debug,
        }
    }
}
