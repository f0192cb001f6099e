use crate::commands::Cli;
use crate::encoder::config::EncoderConfig;
use crate::encoder::convert_cue;
use crate::error::{Cue2Mp3Error, Cue2Mp3Result};
use crate::util::fs::collect_cue_sheets;
use anyhow::Result;
use clap::Parser;
use indicatif::MultiProgress;
use indicatif_log_bridge::LogWrapper;
use log::{error, info};

mod commands;
mod cue;
mod encoder;
mod error;
mod naming;
mod plan;
mod util;

pub mod built_info {
    // The file has been placed there by the build script.
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    let config = EncoderConfig::from(&cli);

    let logger = env_logger::builder()
        .filter_level(if config.debug {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .parse_default_env()
        .build();

    let level = logger.filter();
    let pb = MultiProgress::new();

    LogWrapper::new(pb.clone(), logger).try_init()?;
    log::set_max_level(level);

    let sheets = collect_cue_sheets(&cli.inputs).await;
    if sheets.is_empty() {
        return Err(Cue2Mp3Error::NoCueSheetsFound.into());
    }

    let mut failed = 0;
    for sheet in &sheets {
        match convert_cue(pb.clone(), &config, sheet).await {
            Ok(outputs) => info!("Finished {:?}: {} track(s)", sheet, outputs.len()),
            Err(err) => {
                error!("Skipping {:?}: {err}", sheet);
                failed += 1;
            }
        }
    }

    batch_result(failed, sheets.len())?;
    Ok(())
}

fn batch_result(failed: usize, total: usize) -> Cue2Mp3Result<()> {
    if failed == 0 {
        Ok(())
    } else {
        Err(Cue2Mp3Error::FailedInputs { failed, total })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_fails_when_any_input_failed() {
        assert!(batch_result(0, 3).is_ok());
        let err = batch_result(1, 3).unwrap_err();
        assert_eq!(err.to_string(), "1 of 3 cue sheet(s) failed");
    }
}
