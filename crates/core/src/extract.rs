use calamine::{open_workbook, Data, DataType, Reader, Xlsx};
use std::fs;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractorKind {
    Pdf,
    PlainText,
    Spreadsheet,
}

/// Extension (without the dot) to extractor. Matching is exact and case-sensitive.
const EXTRACTORS: &[(&str, ExtractorKind)] = &[
    ("pdf", ExtractorKind::Pdf),
    ("txt", ExtractorKind::PlainText),
    ("md", ExtractorKind::PlainText),
    ("rmd", ExtractorKind::PlainText),
    ("quarto", ExtractorKind::PlainText),
    ("yml", ExtractorKind::PlainText),
    ("xml", ExtractorKind::PlainText),
    ("tex", ExtractorKind::PlainText),
    ("cls", ExtractorKind::PlainText),
    ("py", ExtractorKind::PlainText),
    ("r", ExtractorKind::PlainText),
    ("docx", ExtractorKind::PlainText),
    ("odt", ExtractorKind::PlainText),
    ("ods", ExtractorKind::PlainText),
    ("odf", ExtractorKind::PlainText),
    ("xlsx", ExtractorKind::Spreadsheet),
];

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{path} is not valid UTF-8 text")]
    Encoding { path: PathBuf },
    #[error("could not parse PDF {path}: {message}")]
    Pdf { path: PathBuf, message: String },
    #[error("could not read spreadsheet {path}: {message}")]
    Spreadsheet { path: PathBuf, message: String },
}

pub fn supported_extensions() -> impl Iterator<Item = &'static str> {
    EXTRACTORS.iter().map(|(ext, _)| *ext)
}

pub(crate) fn extractor_for(path: &Path) -> Option<ExtractorKind> {
    let ext = path.extension()?.to_str()?;
    EXTRACTORS
        .iter()
        .find(|(known, _)| *known == ext)
        .map(|(_, kind)| *kind)
}

pub fn is_supported(path: &Path) -> bool {
    extractor_for(path).is_some()
}

/// Returns `Ok(None)` for extensions outside the allow-list.
pub fn extract_text(path: &Path) -> Result<Option<String>, ExtractError> {
    let Some(kind) = extractor_for(path) else {
        return Ok(None);
    };

    tracing::debug!(path = %path.display(), ?kind, "extracting text");
    let text = match kind {
        ExtractorKind::Pdf => extract_pdf(path)?,
        ExtractorKind::PlainText => extract_plain_text(path)?,
        ExtractorKind::Spreadsheet => extract_spreadsheet(path)?,
    };
    Ok(Some(text))
}

fn extract_plain_text(path: &Path) -> Result<String, ExtractError> {
    let bytes = fs::read(path).map_err(|source| ExtractError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    String::from_utf8(bytes).map_err(|_| ExtractError::Encoding {
        path: path.to_path_buf(),
    })
}

fn extract_pdf(path: &Path) -> Result<String, ExtractError> {
    let bytes = fs::read(path).map_err(|source| ExtractError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    // pdf-extract panics on some malformed documents
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        pdf_extract::extract_text_from_mem(&bytes)
    }));

    match result {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(err)) => Err(ExtractError::Pdf {
            path: path.to_path_buf(),
            message: err.to_string(),
        }),
        Err(_) => Err(ExtractError::Pdf {
            path: path.to_path_buf(),
            message: "the PDF parser aborted on this document".to_string(),
        }),
    }
}

fn extract_spreadsheet(path: &Path) -> Result<String, ExtractError> {
    let mut workbook: Xlsx<_> =
        open_workbook(path).map_err(|err: calamine::XlsxError| ExtractError::Spreadsheet {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;

    let mut text = String::new();
    for (_, range) in workbook.worksheets() {
        for row in range.rows() {
            for cell in row {
                if let Some(value) = cell_text(cell) {
                    text.push_str(&value);
                    text.push(' ');
                }
            }
        }
    }
    Ok(text)
}

/// Blank, zero and `false` cells are left out of the text.
fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty | Data::Int(0) | Data::Bool(false) => None,
        Data::Float(f) if *f == 0.0 => None,
        Data::String(s) if s.is_empty() => None,
        Data::DateTime(_) => cell
            .as_datetime()
            .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
            .or_else(|| Some(cell.to_string())),
        other => Some(other.to_string()),
    }
}
