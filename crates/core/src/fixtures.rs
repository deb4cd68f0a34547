//! Small readable documents for extractor and pipeline tests.

use rust_xlsxwriter::{Workbook, Worksheet};
use std::fs;
use std::path::Path;

/// Single-page PDF showing `text` in Helvetica. `text` must not contain
/// parentheses or backslashes.
pub fn write_text_pdf(path: &Path, text: &str) {
    let content = format!("BT /F1 12 Tf 72 720 Td ({text}) Tj ET");
    let objects = [
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
        "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] /Contents 4 0 R \
         /Resources << /Font << /F1 5 0 R >> >> >>"
            .to_string(),
        format!(
            "<< /Length {} >>\nstream\n{content}\nendstream",
            content.len()
        ),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>"
            .to_string(),
    ];

    let mut out = String::from("%PDF-1.4\n");
    let mut offsets = Vec::with_capacity(objects.len());
    for (index, body) in objects.iter().enumerate() {
        offsets.push(out.len());
        out.push_str(&format!("{} 0 obj\n{body}\nendobj\n", index + 1));
    }

    let xref_start = out.len();
    out.push_str(&format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1));
    for offset in offsets {
        out.push_str(&format!("{offset:010} 00000 n \n"));
    }
    out.push_str(&format!(
        "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_start}\n%%EOF\n",
        objects.len() + 1
    ));

    fs::write(path, out).expect("write pdf fixture");
}

/// One sheet with the interval in a single cell.
pub fn write_interval_workbook(path: &Path, interval: &str) {
    let mut sheet = Worksheet::new();
    sheet.write_string(0, 0, "Period:").expect("write label");
    sheet.write_string(0, 1, interval).expect("write interval");

    let mut workbook = Workbook::new();
    workbook.push_worksheet(sheet);
    workbook.save(path).expect("save workbook fixture");
}
