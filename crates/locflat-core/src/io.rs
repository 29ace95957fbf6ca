//! Reading feature collections and writing location documents

use serde_json::Value;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

use crate::error::{FlattenError, Result};
use crate::flatten::flatten_document;
use crate::models::{ConversionReport, LocationRecord};

/// Read and parse the whole input document
pub fn read_document(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path).map_err(|e| FlattenError::InputNotFound {
        path: path.to_path_buf(),
        source: e,
    })?;

    serde_json::from_str(&content).map_err(|e| FlattenError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Render records as a two-space indented JSON array
pub fn render_records(records: &[LocationRecord]) -> Result<String> {
    let mut rendered = serde_json::to_string_pretty(records)
        .map_err(|e| FlattenError::Serialization(format!("Failed to serialize records: {}", e)))?;
    rendered.push('\n');
    Ok(rendered)
}

/// Write records to `path`, replacing any existing content.
///
/// The document is staged in a temporary file next to `path` and renamed
/// over it, so a failed write leaves the previous output in place.
pub fn write_records(path: &Path, records: &[LocationRecord]) -> Result<()> {
    let rendered = render_records(records)?;
    let output_error = |e: std::io::Error| FlattenError::OutputWrite {
        path: path.to_path_buf(),
        source: e,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut staged = NamedTempFile::new_in(dir).map_err(output_error)?;
    staged.write_all(rendered.as_bytes()).map_err(output_error)?;
    if let Some(permissions) = output_permissions(path) {
        staged
            .as_file()
            .set_permissions(permissions)
            .map_err(output_error)?;
    }

    staged.persist(path).map_err(|e| output_error(e.error))?;
    Ok(())
}

/// Permissions of the file being replaced, or the usual default for a new
/// file. Staged files are created owner-only.
fn output_permissions(path: &Path) -> Option<fs::Permissions> {
    match fs::metadata(path) {
        Ok(metadata) => Some(metadata.permissions()),
        Err(_) => default_permissions(),
    }
}

#[cfg(unix)]
fn default_permissions() -> Option<fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn default_permissions() -> Option<fs::Permissions> {
    None
}

/// Read and flatten the input without touching the output location
pub fn plan_conversion(
    input: &Path,
    output: &Path,
) -> Result<(Vec<LocationRecord>, ConversionReport)> {
    let document = read_document(input)?;
    let flattened = flatten_document(&document)?;

    let report = ConversionReport {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        total: flattened.total,
        converted: flattened.records.len(),
        skipped: flattened.skipped(),
    };

    Ok((flattened.records, report))
}

/// Convert `input` into a location document at `output`.
///
/// Nothing is written unless the input was read, parsed and flattened
/// successfully.
pub fn convert_file(input: &Path, output: &Path) -> Result<ConversionReport> {
    let (records, report) = plan_conversion(input, output)?;
    write_records(output, &records)?;

    tracing::info!(
        input = %input.display(),
        output = %output.display(),
        converted = report.converted,
        skipped = report.skipped,
        "Conversion finished"
    );

    Ok(report)
}
