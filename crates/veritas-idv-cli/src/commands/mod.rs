pub mod clear;
pub mod inspect;
pub mod merge;
pub mod update;

use anyhow::Context;
use serde::Serialize;
use std::path::Path;

use veritas_idv::CollectedData;

/// Read a collected data record from a JSON file.
pub fn read_collected(path: &Path) -> anyhow::Result<CollectedData> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let data = serde_json::from_str(&contents)
        .with_context(|| format!("{} is not valid collected data", path.display()))?;
    Ok(data)
}

/// Render `value` as JSON for stdout.
pub fn to_json<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}
