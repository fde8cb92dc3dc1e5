use numscan_core::error::NumscanError;
use std::path::PathBuf;

use super::InputArgs;
use crate::output;

pub fn run(
    input: &InputArgs,
    output_format: &str,
    output_file: Option<PathBuf>,
    name: Option<String>,
) -> Result<(), NumscanError> {
    let doc = super::load_document(input)?;
    let document_name = name.unwrap_or_else(|| super::document_name(&input.input_file));
    let summary = doc.summary(&document_name);

    if let Some(path) = output_file {
        // Always write JSON when saving to file
        let json = serde_json::to_string_pretty(&summary)?;
        std::fs::write(&path, json)?;
        eprintln!("Summary written to {}", path.display());
    }

    match output_format {
        "json" => output::json::print(&summary)?,
        _ => output::table::print_summary(&summary, &doc.warnings),
    }

    Ok(())
}
