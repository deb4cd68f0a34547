mod guide;
mod interactive;

use anyhow::Result;
use clap::Parser;
use interactive::{run_menu, MenuOutcome};
use std::io;
use std::path::PathBuf;
use textdate_renamer_core::{
    app_paths, load_config, process_folder, save_config, AppConfig, BatchReport, FileOutcome,
    FileReport, RenameOptions, SkipReason,
};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "textdate-renamer")]
#[command(
    about = "Renames the files in a folder after the dates a regex finds in their text. Run with --instructions for a detailed guide."
)]
struct Cli {
    /// Print the detailed guide
    #[arg(long, default_value_t = false)]
    instructions: bool,
    /// Print example regex patterns
    #[arg(long, default_value_t = false)]
    examples: bool,
    /// Folder containing the files to rename
    #[arg(long = "folder_path")]
    folder_path: Option<PathBuf>,
    /// Regex with one group per dd/mm/yyyy date
    #[arg(long = "regex_pattern", allow_hyphen_values = true)]
    regex_pattern: Option<String>,
    /// Prefix of the new file names (default: "file")
    #[arg(long = "custom_prefix")]
    custom_prefix: Option<String>,
    /// Extension given to renamed files (default: "pdf")
    #[arg(long = "output_extension")]
    output_extension: Option<String>,
    /// Print the config file location and the effective settings
    #[arg(long = "show_config", default_value_t = false)]
    show_config: bool,
    /// Write a config file with the default settings if none exists
    #[arg(long = "init_config", default_value_t = false)]
    init_config: bool,
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    ctrlc::set_handler(|| {
        println!("Exiting the program");
        std::process::exit(0);
    })?;

    if cli.instructions {
        println!("{}", guide::instructions());
        return Ok(());
    }
    if cli.examples {
        println!("{}", guide::REGEX_EXAMPLES);
        return Ok(());
    }
    if cli.init_config {
        return cmd_init_config();
    }

    let config = load_config()?;
    if cli.show_config {
        return cmd_show_config(&config);
    }

    match (cli.folder_path, cli.regex_pattern) {
        (Some(folder), Some(pattern)) => {
            let options = build_options(
                &config,
                folder,
                pattern,
                cli.custom_prefix,
                cli.output_extension,
            );
            cmd_rename(&options)
        }
        _ => {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            let mut out = io::stdout();
            match run_menu(&mut input, &mut out)? {
                MenuOutcome::Run(run) => {
                    let prefix = run.prefix.or(cli.custom_prefix);
                    let options = build_options(
                        &config,
                        run.folder,
                        run.pattern,
                        prefix,
                        cli.output_extension,
                    );
                    cmd_rename(&options)
                }
                MenuOutcome::Exit => Ok(()),
                MenuOutcome::Interrupted => {
                    println!("Exiting the program");
                    std::process::exit(0);
                }
            }
        }
    }
}

fn setup_logging(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn build_options(
    config: &AppConfig,
    folder: PathBuf,
    pattern: String,
    prefix: Option<String>,
    output_extension: Option<String>,
) -> RenameOptions {
    RenameOptions {
        folder,
        pattern,
        prefix: prefix.unwrap_or_else(|| config.default_prefix.clone()),
        output_extension: output_extension.unwrap_or_else(|| config.output_extension.clone()),
        preview_chars: config.preview_chars,
    }
}

fn cmd_rename(options: &RenameOptions) -> Result<()> {
    let report = process_folder(options, print_file_report)?;
    print_summary(&report);
    Ok(())
}

fn cmd_show_config(config: &AppConfig) -> Result<()> {
    let paths = app_paths()?;
    println!("config file: {}", paths.config_path.display());
    println!("{}", toml::to_string_pretty(config)?);
    Ok(())
}

fn cmd_init_config() -> Result<()> {
    let paths = app_paths()?;
    if paths.config_path.exists() {
        println!("config file already exists: {}", paths.config_path.display());
        return Ok(());
    }
    save_config(&AppConfig::default())?;
    println!("wrote config file: {}", paths.config_path.display());
    Ok(())
}

fn print_file_report(file: &FileReport) {
    let name = file.file_name();
    println!("Processing file: {name}");

    if let Some(preview) = &file.preview {
        println!("Extracted text: {preview}...");
        match &file.groups {
            Some(groups) => println!("Found date interval: ({})", groups.join(", ")),
            None => println!("Found date interval: None"),
        }
    }

    match &file.outcome {
        FileOutcome::Renamed { target } => {
            let new_name = target
                .file_name()
                .map(|v| v.to_string_lossy().to_string())
                .unwrap_or_default();
            println!("Renamed file: {name} -> {new_name}");
        }
        FileOutcome::Skipped(SkipReason::NoMatch) => {
            println!("No date interval found in file: {name}");
        }
        FileOutcome::Skipped(SkipReason::Unsupported) => {
            println!("Skipping unsupported file type: {name}");
        }
        FileOutcome::Failed(err) => {
            println!("Failed to process {name}: {err}");
        }
    }
}

fn print_summary(report: &BatchReport) {
    let stats = &report.stats;
    println!(
        "\nSummary: scanned={} renamed={} unsupported={} no_match={} failed={}",
        stats.scanned,
        stats.renamed,
        stats.skipped_unsupported,
        stats.skipped_no_match,
        stats.failed
    );
}
