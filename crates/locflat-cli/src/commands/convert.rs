//! Convert command implementation

use crate::cli::ConvertArgs;
use crate::config_loader::load_config_with_overrides;
use crate::dry_run::{display_planned_actions, ActionType, PlannedAction};
use crate::output::OutputWriter;
use crate::output_types::ConvertOutput;
use anyhow::Result;
use locflat_core::config::CliConfigOverrides;
use locflat_core::{convert_file, plan_conversion, ConversionReport};
use std::path::Path;

pub fn execute(
    args: ConvertArgs,
    output: &OutputWriter,
    config_path: Option<&Path>,
    dry_run: bool,
) -> Result<()> {
    let config = load_config_with_overrides(
        config_path,
        CliConfigOverrides {
            input: args.input,
            output: args.output,
        },
    )?;
    let input = config.input.value.as_path();
    let destination = config.output.value.as_path();

    tracing::debug!(
        "Converting {} ({:?}) -> {} ({:?})",
        input.display(),
        config.input.source,
        destination.display(),
        config.output.source
    );

    if dry_run {
        let (records, report) = plan_conversion(input, destination)?;
        let action_type = if destination.exists() {
            ActionType::OverwriteFile
        } else {
            ActionType::CreateFile
        };
        let action = PlannedAction::new(action_type, format!("Write {}", destination.display()))
            .with_detail(format!("Records: {}", report.converted))
            .with_detail(format!("Skipped features: {}", report.skipped));
        return display_planned_actions(output, &[action], &records);
    }

    let report = convert_file(input, destination)?;

    if output.is_json() {
        output.result(to_output(&report))?;
    } else {
        output.success(format!(
            "Converted {} features ({} skipped)",
            report.converted, report.skipped
        ));
        output.info(format!("Output written to {}", report.output.display()));
    }

    Ok(())
}

fn to_output(report: &ConversionReport) -> ConvertOutput {
    ConvertOutput {
        input: report.input.display().to_string(),
        output: report.output.display().to_string(),
        total: report.total,
        converted: report.converted,
        skipped: report.skipped,
    }
}
