use crate::cue::CueParser;
use crate::cue::models::DiscSheet;
use crate::encoder::config::EncoderConfig;
use crate::encoder::error::{EncoderError, EncoderResult};
use crate::encoder::invocation::{Invocation, decode_invocation, encode_invocation, gain_invocation};
use crate::encoder::process::ProcessOutcome;
use crate::naming::{UNKNOWN, sanitize_file_name};
use crate::plan::{Tag, plan_sheet};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use log::{debug, info};
use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Stdio};
use tokio::fs;

pub mod config;
pub mod error;
pub mod invocation;
pub mod process;

/// `<destination>/<album artist>/<album title>`
pub fn output_dir(config: &EncoderConfig, sheet: &DiscSheet) -> PathBuf {
    config
        .destination
        .join(sanitize_file_name(sheet.resolve("PERFORMER", None)))
        .join(sanitize_file_name(sheet.resolve("TITLE", None)))
}

/// Parses one cue sheet and encodes each of its tracks. Returns the written files.
pub async fn convert_cue(
    pb: MultiProgress,
    config: &EncoderConfig,
    cue_path: &Path,
) -> EncoderResult<Vec<PathBuf>> {
    debug!("Parsing CUE file: {:?}", cue_path);
    let parser = CueParser::new(cue_path);
    let sheet = parser.parse().await?;
    let plans = plan_sheet(&sheet, parser.sheet_dir());

    let out_dir = output_dir(config, &sheet);
    debug!("Output directory: {:?}", out_dir);
    if !config.dry_run {
        fs::create_dir_all(&out_dir).await?;
    }

    let progress = pb.add(ProgressBar::new(plans.len() as u64));
    progress.set_style(
        ProgressStyle::with_template("{msg} [{bar:40}] {pos}/{len}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> "),
    );

    let mut outputs = Vec::new();
    for plan in &plans {
        progress.set_message(plan.label.clone());

        if plan.skip {
            info!(
                "Skipping track {} ({}) of {:?}",
                plan.label,
                plan.tag(Tag::Title).unwrap_or(UNKNOWN),
                cue_path
            );
            progress.inc(1);
            continue;
        }

        let output = out_dir.join(&plan.output_name);
        let decode = decode_invocation(config, plan);
        let encode = encode_invocation(config, plan, &output);

        if config.dry_run {
            info!("{decode} | {encode}");
        } else {
            debug!(
                "Encoding file {} track {} to {:?}",
                plan.reference.file, plan.reference.track, output
            );
            run_pipeline(&decode, &encode).await?;
        }

        outputs.push(output);
        progress.inc(1);
    }

    progress.finish_and_clear();
    pb.remove(&progress);

    let gain_tool = config.gain_tool.as_deref().filter(|_| !outputs.is_empty());
    if let Some(gain_tool) = gain_tool {
        let gain = gain_invocation(gain_tool, config, &outputs);
        if config.dry_run {
            info!("{gain}");
        } else {
            debug!("Normalizing gain for {} file(s)", outputs.len());
            let status = gain.command().status().await?;
            check(&gain, status)?;
        }
    }

    Ok(outputs)
}

/// Runs `decode | encode` and fails if either side does not exit cleanly.
async fn run_pipeline(decode: &Invocation, encode: &Invocation) -> EncoderResult<()> {
    let mut decoder = decode.command().stdout(Stdio::piped()).spawn()?;
    let stdout = decoder
        .stdout
        .take()
        .ok_or_else(|| EncoderError::MissingPipe(decode.name()))?;
    let stdin: Stdio = stdout.try_into()?;

    let encoder_status = encode.command().stdin(stdin).status().await?;
    let decoder_status = decoder.wait().await?;

    check(decode, decoder_status)?;
    check(encode, encoder_status)
}

fn check(invocation: &Invocation, status: ExitStatus) -> EncoderResult<()> {
    let outcome = ProcessOutcome::from(status);
    if outcome.success() {
        Ok(())
    } else {
        Err(EncoderError::ProcessFailed {
            program: invocation.name(),
            outcome,
        })
    }
}
