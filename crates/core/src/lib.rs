mod config;
mod date;
mod extract;
#[cfg(test)]
mod fixtures;
mod matcher;
mod pipeline;
mod rename;
mod report;
mod sanitize;

pub use config::{app_paths, load_config, load_config_from, save_config, AppConfig, AppPaths};
pub use date::{normalize_all, normalize_date, DateFormatError};
pub use extract::{extract_text, is_supported, supported_extensions, ExtractError};
pub use matcher::{capture_groups, compile_pattern, PatternError};
pub use pipeline::{process_file, process_folder, RenameOptions, DEFAULT_PREVIEW_CHARS};
pub use rename::{build_target_name, rename_in_place, RenameError};
pub use report::{BatchReport, BatchStats, FileOutcome, FileReport, ProcessError, SkipReason};
pub use sanitize::{DEFAULT_EXTENSION, DEFAULT_PREFIX};
