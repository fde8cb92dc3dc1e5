pub mod pages;
pub mod scan;

use clap::Args;
use numscan_core::error::NumscanError;
use numscan_core::extraction::pdftotext::PdftotextExtractor;
use numscan_core::extraction::PageRange;
use numscan_core::model::DocumentResult;
use numscan_core::AnalyzeOptions;
use std::path::{Path, PathBuf};

#[derive(Args)]
pub struct InputArgs {
    /// PDF file, or a .txt file with form-feed separated pages
    #[arg(env = "PDF_PATH")]
    pub input_file: PathBuf,

    /// First page to process (1-based)
    #[arg(long, value_name = "N")]
    pub first_page: Option<usize>,

    /// Last page to process (inclusive)
    #[arg(long, value_name = "N")]
    pub last_page: Option<usize>,

    /// Keep column layout when extracting PDF text
    #[arg(long)]
    pub layout: bool,
}

/// Read the input and run the analysis.
pub fn load_document(input: &InputArgs) -> Result<DocumentResult, NumscanError> {
    let options = AnalyzeOptions {
        pages: PageRange::new(input.first_page, input.last_page)?,
    };

    // Determine input type by extension
    let is_text = input
        .input_file
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("txt"))
        .unwrap_or(false);

    if is_text {
        let text = std::fs::read_to_string(&input.input_file)?;
        Ok(numscan_core::analyze_text(&text, &options))
    } else {
        let pdf_bytes = std::fs::read(&input.input_file)?;
        let extractor = PdftotextExtractor::new().with_layout(input.layout);
        numscan_core::analyze_pdf(&pdf_bytes, &extractor, &options)
    }
}

pub fn document_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
