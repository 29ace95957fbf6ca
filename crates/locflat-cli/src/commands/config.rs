//! Config command implementation

use crate::config_loader::load_config;
use crate::output::OutputWriter;
use crate::output_types::{ConfigEntry, ConfigOutput};
use anyhow::Result;
use std::path::Path;

pub fn execute(output: &OutputWriter, config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;

    let entries: Vec<ConfigEntry> = config
        .to_inspection_map()
        .into_iter()
        .map(|(key, (value, source))| ConfigEntry {
            key,
            value,
            source: format!("{:?}", source),
        })
        .collect();

    if output.is_json() {
        output.result(ConfigOutput { entries })?;
    } else {
        output.section("Effective Configuration");
        output.table(entries);
    }

    Ok(())
}
