//! `veritas-idv clear` — Clear fields from a collected data record.

use clap::Args;
use std::path::PathBuf;

use veritas_idv::{CollectedData, FieldType};

use crate::config::IdvConfig;

#[derive(Args, Debug)]
pub struct ClearArgs {
    /// Field to clear (biometric_consent, face, id_document_back,
    /// id_document_front, id_document_type). Repeatable.
    #[arg(short, long = "field", required = true)]
    pub fields: Vec<FieldType>,

    /// Collected data record (JSON).
    pub file: PathBuf,
}

pub fn clear_fields(data: &CollectedData, fields: &[FieldType]) -> CollectedData {
    fields
        .iter()
        .fold(data.clone(), |data, field| data.cleared(*field))
}

pub fn run(args: &ClearArgs, config: &IdvConfig) -> anyhow::Result<()> {
    let data = super::read_collected(&args.file)?;
    let cleared = clear_fields(&data, &args.fields);
    println!("{}", super::to_json(&cleared, config.output.pretty)?);
    Ok(())
}
