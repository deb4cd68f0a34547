use crate::guide::{instructions, INTRO, REGEX_EXAMPLES};
use anyhow::Result;
use std::io::{BufRead, Write};
use std::path::PathBuf;

const MENU: &str = "
Do you want to continue (Y),
get instructions (I),
get examples (E),
or exit (N)? (default=Y): ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Continue,
    Instructions,
    Examples,
    Exit,
    Invalid,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptedRun {
    pub folder: PathBuf,
    pub pattern: String,
    /// `None` when the user just pressed enter.
    pub prefix: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuOutcome {
    Run(PromptedRun),
    Exit,
    /// Input closed while waiting at a prompt.
    Interrupted,
}

pub fn parse_choice(input: &str) -> MenuChoice {
    match input.trim().to_lowercase().as_str() {
        "" | "y" => MenuChoice::Continue,
        "i" => MenuChoice::Instructions,
        "e" => MenuChoice::Examples,
        "n" => MenuChoice::Exit,
        _ => MenuChoice::Invalid,
    }
}

pub fn run_menu<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<MenuOutcome> {
    writeln!(out, "{INTRO}")?;

    loop {
        let Some(answer) = prompt(input, out, MENU)? else {
            return Ok(MenuOutcome::Interrupted);
        };

        match parse_choice(&answer) {
            MenuChoice::Continue => {
                return Ok(match prompt_run(input, out)? {
                    Some(run) => MenuOutcome::Run(run),
                    None => MenuOutcome::Interrupted,
                });
            }
            MenuChoice::Instructions => writeln!(out, "{}", instructions())?,
            MenuChoice::Examples => writeln!(out, "{REGEX_EXAMPLES}")?,
            MenuChoice::Exit => {
                writeln!(out, "Exiting the program.")?;
                return Ok(MenuOutcome::Exit);
            }
            MenuChoice::Invalid => writeln!(
                out,
                "Invalid input! Please enter either 'Y' (continue), 'I' (instructions), 'E' (examples) or 'N' (exit)."
            )?,
        }
    }
}

fn prompt_run<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<Option<PromptedRun>> {
    let Some(folder) = prompt(
        input,
        out,
        "Enter the path to the folder containing the files to be processed: ",
    )?
    else {
        return Ok(None);
    };
    let Some(pattern) = prompt(
        input,
        out,
        "Enter the regular expression pattern to search for in the files. Remember to use parentheses () to define the groups in your pattern: ",
    )?
    else {
        return Ok(None);
    };
    let Some(prefix) = prompt(
        input,
        out,
        "Enter the custom prefix for the file names (default: 'file'): ",
    )?
    else {
        return Ok(None);
    };

    let prefix = prefix.trim();
    Ok(Some(PromptedRun {
        folder: PathBuf::from(folder.trim()),
        pattern,
        prefix: (!prefix.is_empty()).then(|| prefix.to_string()),
    }))
}

/// `None` on end of input.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    message: &str,
) -> Result<Option<String>> {
    write!(out, "{message}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}
