use async_recursion::async_recursion;
use log::error;
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;

#[async_recursion]
pub async fn get_all_files(dir_path: &Path) -> io::Result<Vec<PathBuf>> {
    let mut dir = fs::read_dir(dir_path).await?;
    let mut files = Vec::new();

    while let Some(entry) = dir.next_entry().await? {
        let path = entry.path();

        if path.is_dir() {
            files.append(&mut get_all_files(&path).await?);
        } else {
            files.push(path);
        }
    }

    Ok(files)
}

pub fn is_cue_file(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("cue"))
}

/// Expands directories into the cue sheets below them. Other inputs are kept as given,
/// so an unreadable path is still reported by the parser.
pub async fn collect_cue_sheets(inputs: &[PathBuf]) -> Vec<PathBuf> {
    let mut sheets = Vec::new();

    for input in inputs {
        if !input.is_dir() {
            sheets.push(input.clone());
            continue;
        }

        match get_all_files(input).await {
            Ok(files) => {
                let mut found: Vec<_> = files.into_iter().filter(|f| is_cue_file(f)).collect();
                found.sort();
                sheets.append(&mut found);
            }
            Err(err) => error!("Could not search {input:?} for cue sheets: {err}"),
        }
    }

    sheets
}
