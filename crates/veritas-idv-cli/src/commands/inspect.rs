//! `veritas-idv inspect` — Show what a collected data record holds.

use clap::Args;
use std::path::PathBuf;

use veritas_idv::CollectedData;

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Collected data record (JSON).
    pub file: PathBuf,
}

fn render(data: &CollectedData) -> Vec<String> {
    let collected: Vec<String> = data
        .collected_types()
        .iter()
        .map(ToString::to_string)
        .collect();

    vec![
        "Collected Data:".to_string(),
        format!(
            "  Collected:      {}",
            if collected.is_empty() {
                "(none)".to_string()
            } else {
                collected.join(", ")
            }
        ),
        format!(
            "  Document type:  {}",
            data.id_document_type()
                .map(|t| t.to_string())
                .unwrap_or_else(|| "(none)".into())
        ),
        format!(
            "  Front score:    {}",
            data.front_document_score()
                .map(|s| s.to_string())
                .unwrap_or_else(|| "(none)".into())
        ),
    ]
}

pub fn run(args: &InspectArgs) -> anyhow::Result<()> {
    let data = super::read_collected(&args.file)?;
    for line in render(&data) {
        println!("{}", line);
    }
    Ok(())
}
