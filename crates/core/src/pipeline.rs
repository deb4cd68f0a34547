use crate::date::normalize_all;
use crate::extract::extract_text;
use crate::matcher::{capture_groups, compile_pattern};
use crate::rename::{build_target_name, rename_in_place};
use crate::report::{display_name, BatchReport, FileOutcome, FileReport, ProcessError, SkipReason};
use crate::sanitize::{DEFAULT_EXTENSION, DEFAULT_PREFIX};
use anyhow::{Context, Result};
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_PREVIEW_CHARS: usize = 100;

#[derive(Debug, Clone)]
pub struct RenameOptions {
    pub folder: PathBuf,
    pub pattern: String,
    pub prefix: String,
    pub output_extension: String,
    pub preview_chars: usize,
}

impl Default for RenameOptions {
    fn default() -> Self {
        Self {
            folder: PathBuf::new(),
            pattern: String::new(),
            prefix: DEFAULT_PREFIX.to_string(),
            output_extension: DEFAULT_EXTENSION.to_string(),
            preview_chars: DEFAULT_PREVIEW_CHARS,
        }
    }
}

/// Runs every file in `options.folder` through extract, match, normalize and
/// rename. Per-file problems end up in the report; only a bad folder or a bad
/// pattern fails the whole call, and they do so before any file is touched.
pub fn process_folder<F>(options: &RenameOptions, mut on_file: F) -> Result<BatchReport>
where
    F: FnMut(&FileReport),
{
    if !options.folder.is_dir() {
        anyhow::bail!("folder does not exist: {}", options.folder.display());
    }

    let regex = compile_pattern(&options.pattern)
        .with_context(|| format!("cannot use regex pattern: {}", options.pattern))?;
    let files = collect_files(&options.folder)?;
    tracing::debug!(count = files.len(), folder = %options.folder.display(), "collected files");

    let mut report = BatchReport::default();
    for path in files {
        let file_report = process_file(&path, &regex, options);
        if let FileOutcome::Failed(err) = &file_report.outcome {
            tracing::warn!(file = %display_name(&path), error = %err, "file failed");
        }
        on_file(&file_report);
        report.stats.record(&file_report.outcome);
        report.files.push(file_report);
    }

    Ok(report)
}

pub fn process_file(path: &Path, regex: &Regex, options: &RenameOptions) -> FileReport {
    let mut report = FileReport {
        path: path.to_path_buf(),
        preview: None,
        groups: None,
        outcome: FileOutcome::Skipped(SkipReason::Unsupported),
    };

    let text = match extract_text(path) {
        Ok(Some(text)) => text,
        Ok(None) => return report,
        Err(err) => {
            report.outcome = FileOutcome::Failed(err.into());
            return report;
        }
    };
    report.preview = Some(preview(&text, options.preview_chars));

    let groups = capture_groups(regex, &text);
    report.groups = groups.clone();
    // a match without capture groups carries no interval
    let Some(groups) = groups.filter(|g| !g.is_empty()) else {
        report.outcome = FileOutcome::Skipped(SkipReason::NoMatch);
        return report;
    };

    report.outcome = match rename_with_groups(path, &groups, options) {
        Ok(target) => FileOutcome::Renamed { target },
        Err(err) => FileOutcome::Failed(err),
    };
    report
}

fn rename_with_groups(
    path: &Path,
    groups: &[String],
    options: &RenameOptions,
) -> Result<PathBuf, ProcessError> {
    let parts = normalize_all(groups)?;
    let name = build_target_name(&options.prefix, &parts, &options.output_extension);
    Ok(rename_in_place(path, &name)?)
}

fn preview(text: &str, limit: usize) -> String {
    text.chars().take(limit).collect()
}

fn collect_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut out = Vec::new();
    for entry in
        fs::read_dir(root).with_context(|| format!("cannot read folder: {}", root.display()))?
    {
        let entry = entry.with_context(|| format!("cannot read entry in: {}", root.display()))?;
        let path = entry.path();
        if path.is_dir() {
            continue;
        }
        out.push(path);
    }
    out.sort();
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{write_interval_workbook, write_text_pdf};
    use tempfile::tempdir;

    const INTERVAL: &str = r"(\d{2}/\d{2}/\d{4})-(\d{2}/\d{2}/\d{4})";

    fn options(folder: &Path, prefix: &str) -> RenameOptions {
        RenameOptions {
            folder: folder.to_path_buf(),
            pattern: INTERVAL.to_string(),
            prefix: prefix.to_string(),
            ..RenameOptions::default()
        }
    }

    #[test]
    fn renames_text_file_from_its_date_interval() {
        let temp = tempdir().expect("tempdir");
        fs::write(temp.path().join("a.txt"), "Period: 01/01/2023-31/12/2023").expect("write");

        let report = process_folder(&options(temp.path(), "rpt"), |_| {}).expect("batch");

        let renamed = temp.path().join("rpt-20230101-20231231.pdf");
        assert!(renamed.exists());
        assert!(!temp.path().join("a.txt").exists());
        assert_eq!(report.stats.renamed, 1);
        let file = &report.files[0];
        assert_eq!(
            file.groups.as_deref(),
            Some(&["01/01/2023".to_string(), "31/12/2023".to_string()][..])
        );
        assert!(matches!(&file.outcome, FileOutcome::Renamed { target } if *target == renamed));
    }

    #[test]
    fn unsupported_file_is_left_untouched() {
        let temp = tempdir().expect("tempdir");
        let csv = temp.path().join("b.csv");
        fs::write(&csv, "01/01/2023-31/12/2023").expect("write");

        let report = process_folder(&options(temp.path(), "rpt"), |_| {}).expect("batch");

        assert!(csv.exists());
        assert_eq!(report.stats.skipped_unsupported, 1);
        assert!(matches!(
            report.files[0].outcome,
            FileOutcome::Skipped(SkipReason::Unsupported)
        ));
        assert!(report.files[0].preview.is_none());
    }

    #[test]
    fn file_without_match_is_left_untouched() {
        let temp = tempdir().expect("tempdir");
        let txt = temp.path().join("c.txt");
        fs::write(&txt, "no dates in here").expect("write");

        let report = process_folder(&options(temp.path(), "rpt"), |_| {}).expect("batch");

        assert!(txt.exists());
        assert_eq!(report.stats.skipped_no_match, 1);
        assert!(report.files[0].groups.is_none());
    }

    #[test]
    fn match_without_groups_counts_as_no_match() {
        let temp = tempdir().expect("tempdir");
        let txt = temp.path().join("c.txt");
        fs::write(&txt, "05/03/2024").expect("write");

        let mut opts = options(temp.path(), "rpt");
        opts.pattern = r"\d{2}/\d{2}/\d{4}".to_string();
        let report = process_folder(&opts, |_| {}).expect("batch");

        assert!(txt.exists());
        assert!(matches!(
            report.files[0].outcome,
            FileOutcome::Skipped(SkipReason::NoMatch)
        ));
    }

    #[test]
    fn bad_date_fails_only_that_file() {
        let temp = tempdir().expect("tempdir");
        fs::write(temp.path().join("a.txt"), "Period: 01/01/2023-31/12/2023").expect("write a");
        fs::write(temp.path().join("b.txt"), "Period: 45/01/2023-31/12/2023").expect("write b");
        fs::write(temp.path().join("c.txt"), "Period: 01/02/2023-28/02/2023").expect("write c");

        let report = process_folder(&options(temp.path(), "rpt"), |_| {}).expect("batch");

        assert_eq!(report.stats.scanned, 3);
        assert_eq!(report.stats.renamed, 2);
        assert_eq!(report.stats.failed, 1);
        assert!(temp.path().join("b.txt").exists());
        assert!(temp.path().join("rpt-20230201-20230228.pdf").exists());
        assert!(matches!(
            report.files[1].outcome,
            FileOutcome::Failed(ProcessError::DateFormat(_))
        ));
    }

    #[test]
    fn undecodable_file_fails_without_stopping_the_batch() {
        let temp = tempdir().expect("tempdir");
        fs::write(temp.path().join("a.docx"), [0xff, 0xfe, 0xfd]).expect("write docx");
        fs::write(temp.path().join("b.txt"), "01/01/2023-02/01/2023").expect("write txt");

        let report = process_folder(&options(temp.path(), "rpt"), |_| {}).expect("batch");

        assert!(matches!(
            report.files[0].outcome,
            FileOutcome::Failed(ProcessError::Extraction(_))
        ));
        assert!(matches!(
            report.files[1].outcome,
            FileOutcome::Renamed { .. }
        ));
    }

    #[test]
    fn callback_sees_every_file_in_sorted_order() {
        let temp = tempdir().expect("tempdir");
        fs::write(temp.path().join("b.csv"), "x").expect("write");
        fs::write(temp.path().join("a.txt"), "x").expect("write");
        fs::create_dir(temp.path().join("nested.txt")).expect("mkdir");

        let mut seen = Vec::new();
        process_folder(&options(temp.path(), "rpt"), |file| seen.push(file.file_name()))
            .expect("batch");

        assert_eq!(seen, vec!["a.txt", "b.csv"]);
    }

    #[test]
    fn preview_is_truncated_by_characters() {
        let temp = tempdir().expect("tempdir");
        let text = "é".repeat(150);
        fs::write(temp.path().join("a.txt"), &text).expect("write");

        let report = process_folder(&options(temp.path(), "rpt"), |_| {}).expect("batch");

        let preview = report.files[0].preview.as_deref().expect("preview");
        assert_eq!(preview.chars().count(), 100);
    }

    #[test]
    fn custom_output_extension_is_used() {
        let temp = tempdir().expect("tempdir");
        fs::write(temp.path().join("a.txt"), "01/01/2023-31/12/2023").expect("write");

        let mut opts = options(temp.path(), "rpt");
        opts.output_extension = "txt".to_string();
        process_folder(&opts, |_| {}).expect("batch");

        assert!(temp.path().join("rpt-20230101-20231231.txt").exists());
    }

    #[test]
    fn missing_folder_is_a_batch_error() {
        let temp = tempdir().expect("tempdir");
        let err = process_folder(&options(&temp.path().join("missing"), "rpt"), |_| {})
            .expect_err("must fail");
        assert!(err.to_string().contains("folder does not exist"));
    }

    #[test]
    fn invalid_pattern_fails_before_touching_files() {
        let temp = tempdir().expect("tempdir");
        let txt = temp.path().join("a.txt");
        fs::write(&txt, "01/01/2023-31/12/2023").expect("write");

        let mut opts = options(temp.path(), "rpt");
        opts.pattern = "(unclosed".to_string();
        let mut calls = 0;
        let err = process_folder(&opts, |_| calls += 1).expect_err("must fail");

        assert!(err.to_string().contains("cannot use regex pattern"));
        assert_eq!(calls, 0);
        assert!(txt.exists());
    }

    #[test]
    fn renames_spreadsheet_from_its_cells() {
        let temp = tempdir().expect("tempdir");
        let xlsx = temp.path().join("ledger.xlsx");
        write_interval_workbook(&xlsx, "01/04/2024-30/06/2024");

        let report = process_folder(&options(temp.path(), "q2"), |_| {}).expect("batch");

        assert_eq!(report.stats.renamed, 1);
        assert!(!xlsx.exists());
        assert!(temp.path().join("q2-20240401-20240630.pdf").exists());
        assert_eq!(
            report.files[0].preview.as_deref(),
            Some("Period: 01/04/2024-30/06/2024 ")
        );
    }

    #[test]
    fn renames_pdf_from_its_page_text() {
        let temp = tempdir().expect("tempdir");
        let pdf = temp.path().join("statement.pdf");
        write_text_pdf(&pdf, "Period: 01/01/2023-31/12/2023");

        let report = process_folder(&options(temp.path(), "rpt"), |_| {}).expect("batch");

        assert_eq!(report.stats.renamed, 1, "outcome: {:?}", report.files[0].outcome);
        assert!(temp.path().join("rpt-20230101-20231231.pdf").exists());
    }

    #[test]
    fn empty_pattern_is_rejected_up_front() {
        let temp = tempdir().expect("tempdir");
        let txt = temp.path().join("a.txt");
        fs::write(&txt, "01/01/2023-31/12/2023").expect("write");

        let mut opts = options(temp.path(), "rpt");
        opts.pattern = String::new();
        let err = process_folder(&opts, |_| {}).expect_err("must fail");

        assert!(format!("{err:#}").contains("regex pattern is empty"));
        assert!(txt.exists());
    }
}
