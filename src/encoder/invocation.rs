use crate::cue::line::unescape_quotes;
use crate::encoder::config::EncoderConfig;
use crate::plan::{Tag, TrackPlan};
use std::ffi::OsString;
use std::fmt::Display;
use std::path::{Path, PathBuf};
use tokio::process::Command;

/// A program and its arguments, run without a shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: PathBuf,
    pub args: Vec<OsString>,
}

impl Invocation {
    fn new(program: &Path, flags: &[String]) -> Self {
        Self {
            program: program.to_path_buf(),
            args: flags.iter().map(OsString::from).collect(),
        }
    }

    fn arg(&mut self, arg: impl Into<OsString>) -> &mut Self {
        self.args.push(arg.into());
        self
    }

    pub fn name(&self) -> String {
        self.program.display().to_string()
    }

    pub fn command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args).kill_on_drop(true);
        command
    }
}

impl Display for Invocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            write!(f, " {:?}", arg)?;
        }
        Ok(())
    }
}

/// Formats seconds as `M:SS.mmm`, the position syntax the flac decoder accepts.
pub fn format_position(seconds: f64) -> String {
    let millis = (seconds.max(0.0) * 1000.0).round() as u64;
    let minutes = millis / 60_000;
    let secs = (millis % 60_000) / 1000;
    let fraction = millis % 1000;

    format!("{minutes}:{secs:02}.{fraction:03}")
}

pub fn decode_invocation(config: &EncoderConfig, plan: &TrackPlan) -> Invocation {
    let mut invocation = Invocation::new(&config.decoder, &config.decoder_flags);

    if let Some(start) = plan.window.start {
        invocation.arg(format!("--skip={}", format_position(start)));
    }
    if let Some(duration) = plan.window.duration {
        invocation.arg(format!("--until=+{}", format_position(duration)));
    }

    invocation.arg(&plan.source);
    invocation
}

/// Encoder reading from stdin, tagging with `--tv FRAME=value` (`--tc` for the comment)
/// and writing to `output`.
pub fn encode_invocation(config: &EncoderConfig, plan: &TrackPlan, output: &Path) -> Invocation {
    let mut invocation = Invocation::new(&config.encoder, &config.encoder_flags);

    for (tag, value) in &plan.tags {
        let value = unescape_quotes(value);
        match tag {
            Tag::Comment => invocation.arg("--tc").arg(value),
            tag => invocation.arg("--tv").arg(format!("{tag}={value}")),
        };
    }

    if let Some(artwork) = &plan.artwork {
        invocation.arg("--ti").arg(artwork);
    }

    invocation.arg("-").arg(output);
    invocation
}

pub fn gain_invocation(gain_tool: &Path, config: &EncoderConfig, outputs: &[PathBuf]) -> Invocation {
    let mut invocation = Invocation::new(gain_tool, &config.gain_flags);
    for output in outputs {
        invocation.arg(output);
    }
    invocation
}
