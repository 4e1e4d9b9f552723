//! `veritas-idv merge` — Merge step records into one accumulated record.

use clap::Args;
use std::path::PathBuf;

use veritas_idv::CollectedData;

use crate::config::IdvConfig;

#[derive(Args, Debug)]
pub struct MergeArgs {
    /// Step records (JSON), oldest first.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

/// Merge every file into an empty record, later files winning per field.
pub fn merge_files(files: &[PathBuf]) -> anyhow::Result<CollectedData> {
    let mut accumulated = CollectedData::default();
    for path in files {
        let step = super::read_collected(path)?;
        tracing::info!(
            path = %path.display(),
            fields = ?step.collected_types(),
            "merging step"
        );
        accumulated.merge(&step);
    }
    Ok(accumulated)
}

pub fn run(args: &MergeArgs, config: &IdvConfig) -> anyhow::Result<()> {
    let merged = merge_files(&args.files)?;
    println!("{}", super::to_json(&merged, config.output.pretty)?);
    Ok(())
}
