use crate::error::NumscanError;
use crate::extraction::{PageContent, PageFailure, PageOutcome, PageRange, PdfExtractor};
use std::io::Write;
use std::path::Path;
use std::process::Command;

/// PDF extraction backend using pdftotext and pdfinfo (from poppler-utils).
///
/// Each page is extracted with its own pdftotext run so that one broken page
/// only loses that page.
pub struct PdftotextExtractor {
    layout: bool,
}

impl PdftotextExtractor {
    pub fn new() -> Self {
        PdftotextExtractor { layout: false }
    }

    /// Use `pdftotext -layout`, which keeps column alignment with spaces.
    pub fn with_layout(mut self, layout: bool) -> Self {
        self.layout = layout;
        self
    }

    fn extract_page(&self, pdf_path: &Path, page_number: usize) -> Result<String, NumscanError> {
        let page = page_number.to_string();
        let mut cmd = Command::new("pdftotext");
        if self.layout {
            cmd.arg("-layout");
        }
        cmd.args(["-f", page.as_str(), "-l", page.as_str()])
            .arg(pdf_path)
            .arg("-"); // output to stdout

        let stdout = run_tool("pdftotext", &mut cmd)?;
        Ok(stdout.trim_end_matches('\x0c').to_string())
    }
}

impl Default for PdftotextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfExtractor for PdftotextExtractor {
    fn extract_pages(
        &self,
        pdf_bytes: &[u8],
        range: &PageRange,
    ) -> Result<Vec<PageOutcome>, NumscanError> {
        // Write PDF bytes to a temp file
        let mut tmpfile =
            tempfile::NamedTempFile::new().map_err(|e| NumscanError::Extraction(e.to_string()))?;
        tmpfile
            .write_all(pdf_bytes)
            .map_err(|e| NumscanError::Extraction(e.to_string()))?;
        let tmp_path = tmpfile.path();

        let total_pages = page_count(tmp_path)?;
        log::info!("Found {} pages to process", total_pages);

        let pages = range
            .pages(total_pages)
            .map(|page_number| match self.extract_page(tmp_path, page_number) {
                Ok(text) => {
                    log::debug!("Page {}: extracted {} bytes", page_number, text.len());
                    Ok(PageContent { page_number, text })
                }
                Err(e) => {
                    log::error!("Error extracting page {}: {}", page_number, e);
                    Err(PageFailure {
                        page_number,
                        reason: e.to_string(),
                    })
                }
            })
            .collect();

        Ok(pages)
    }

    fn backend_name(&self) -> &str {
        "pdftotext"
    }
}

fn page_count(pdf_path: &Path) -> Result<usize, NumscanError> {
    let mut cmd = Command::new("pdfinfo");
    cmd.arg(pdf_path);
    let info = run_tool("pdfinfo", &mut cmd)?;
    parse_page_count(&info)
        .ok_or_else(|| NumscanError::PageCount("no 'Pages:' line in pdfinfo output".into()))
}

fn run_tool(tool: &'static str, cmd: &mut Command) -> Result<String, NumscanError> {
    let output = cmd.output().map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            NumscanError::ToolNotFound { tool }
        } else {
            NumscanError::Extraction(format!("{} failed: {}", tool, e))
        }
    })?;

    if !output.status.success() {
        let code = output.status.code().unwrap_or(-1);
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        return Err(NumscanError::ToolFailed { tool, code, stderr });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

fn parse_page_count(info: &str) -> Option<usize> {
    info.lines()
        .find_map(|line| line.strip_prefix("Pages:"))
        .and_then(|rest| rest.trim().parse().ok())
}
