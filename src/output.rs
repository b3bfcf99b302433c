//! Rendering of the export report.
//!
//! The report is a count line followed by the collection as 2-space
//! indented JSON. When an output path is configured the JSON goes to that
//! file and stdout only carries the summary.

use crate::config::ExportConfig;
use crate::error::OutputError;
use crate::model::Collection;
use std::io::Write;
use std::path::Path;

/// Count line printed before the records.
pub fn summary_line(collection: &Collection) -> String {
    format!("Successfully retrieved {} records", collection.len())
}

/// Collection as indented JSON text.
pub fn render_json(collection: &Collection) -> Result<String, OutputError> {
    Ok(serde_json::to_string_pretty(collection)?)
}

/// Writes the summary line and the JSON collection to `writer`.
pub fn write_report<W: Write>(writer: &mut W, collection: &Collection) -> Result<(), OutputError> {
    let json = render_json(collection)?;
    writeln!(writer, "{}", summary_line(collection))
        .and_then(|_| writeln!(writer, "{}", json))
        .and_then(|_| writer.flush())
        .map_err(|err| OutputError::write("stdout", err))
}

/// Writes the JSON collection to a file, replacing any previous content.
pub fn write_file(path: &Path, collection: &Collection) -> Result<(), OutputError> {
    let mut json = render_json(collection)?;
    json.push('\n');
    std::fs::write(path, json).map_err(|err| OutputError::write(path.display().to_string(), err))
}

/// Emits the report according to `config`.
pub fn export<W: Write>(
    writer: &mut W,
    collection: &Collection,
    config: &ExportConfig,
) -> Result<(), OutputError> {
    match &config.output_path {
        Some(path) => {
            write_file(Path::new(path), collection)?;
            tracing::info!("Wrote {} records to {}", collection.len(), path);
            writeln!(writer, "{}", summary_line(collection))
                .and_then(|_| writeln!(writer, "Wrote {} records to {}", collection.len(), path))
                .map_err(|err| OutputError::write("stdout", err))
        }
        None => write_report(writer, collection),
    }
}
