use numscan_core::error::NumscanError;

use super::InputArgs;
use crate::output;

pub fn run(input: &InputArgs, output_format: &str, limit: usize) -> Result<(), NumscanError> {
    let doc = super::load_document(input)?;

    match output_format {
        "json" => output::json::print(&doc)?,
        _ => println!("{}", output::table::format_pages(&doc, limit)),
    }

    Ok(())
}
