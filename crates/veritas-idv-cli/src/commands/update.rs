//! `veritas-idv update` — Build the data update request for a record.

use clap::Args;
use std::collections::BTreeSet;
use std::path::PathBuf;

use veritas_idv::{CollectedData, DataUpdate, FieldType};

use crate::config::IdvConfig;

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Field the server still requires. Repeatable.
    #[arg(short, long = "missing")]
    pub missing: Vec<FieldType>,

    /// Collected data record (JSON).
    pub file: PathBuf,
}

pub fn build_update(data: CollectedData, missing: &[FieldType]) -> DataUpdate {
    let missing: BTreeSet<FieldType> = missing.iter().copied().collect();
    let update = DataUpdate::new(data, &missing);
    if let Some(clear) = &update.clear_data {
        tracing::info!(fields = ?clear.fields(), "clearing fields not provided");
    }
    update
}

pub fn run(args: &UpdateArgs, config: &IdvConfig) -> anyhow::Result<()> {
    let data = super::read_collected(&args.file)?;
    let update = build_update(data, &args.missing);
    println!("{}", super::to_json(&update, config.output.pretty)?);
    Ok(())
}
