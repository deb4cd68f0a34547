use textdate_renamer_core::supported_extensions;

pub const INTRO: &str = "
This tool uses regex patterns (text) inside the files
in a selected folder to rename them. Run it with
--help to see its usage, with --instructions for a
detailed guide, with --examples to print a list of regex
examples to help with finding the patterns you need to match.
";

pub fn instructions() -> String {
    let extensions = supported_extensions()
        .map(|ext| format!(".{ext}"))
        .collect::<Vec<_>>()
        .join(" ");

    format!(
        r"
    Use --folder_path, --regex_pattern and --custom_prefix
    to run the renaming directly, skipping interactive mode:
    'textdate-renamer --folder_path <./path_to_folder>
    --regex_pattern <regex_pattern_here> --custom_prefix <my_prefix>'

    Every file in the folder whose text matches the pattern is
    renamed. Use parentheses () to define groups in the pattern.
    Each group must capture a date written as dd/mm/yyyy. For
    two dates separated by a hyphen:

    (\d{{2}}/\d{{2}}/\d{{4}})-(\d{{2}}/\d{{2}}/\d{{4}})

    The first group captures the first date, the second group
    the second date, and the hyphen in the middle is the
    delimiter between them. Matching ignores case and only the
    first match in a file is used.

    Files are renamed to 'prefix-group1-group2.pdf' with every
    date rewritten as yyyymmdd, or 'prefix-group1.pdf' for a
    single group. The prefix defaults to 'file'. Use
    --output_extension to write something other than .pdf.

    Readable file types: {extensions}
    Other files are skipped. A file whose groups are not valid
    dates is reported and left as it is.
"
    )
}

pub const REGEX_EXAMPLES: &str = r"
    Here are some examples of regex patterns you could use:

    1. A date in the format dd/mm/yyyy:
    (\d{2}/\d{2}/\d{4})

    2. Two dates in the format dd/mm/yyyy separated by a hyphen:
    (\d{2}/\d{2}/\d{4})-(\d{2}/\d{2}/\d{4})

    3. Two dates with words around them:
    from (\d{2}/\d{2}/\d{4}) to (\d{2}/\d{2}/\d{4})

    4. A labelled period, tolerating extra spaces:
    period:\s*(\d{2}/\d{2}/\d{4})\s*-\s*(\d{2}/\d{2}/\d{4})

    5. A date in the format dd-mm-yyyy (matches, but the group
    is not renamed because it is not dd/mm/yyyy):
    (\d{2}-\d{2}-\d{4})

    6. A date in the format yyyy-mm-dd (same caveat as 5):
    (\d{4}-\d{2}-\d{2})

    7. A time in the format HH:MM (24-hour format):
    \d{2}:\d{2}

    8. An email address:
    [\w.-]+@[\w.-]+\.\w+

    9. An IP address:
    \b\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}\b

    10. A MAC address:
    ([0-9A-Fa-f]{2}[:-]){5}([0-9A-Fa-f]{2})

    11. A pattern spread over several lines with comments,
    using verbose mode:
    (?x) (\d{2}/\d{2}/\d{4})  # start
         \s*-\s*
         (\d{2}/\d{2}/\d{4})  # end

    Remember to always enclose your groups in parentheses.
    Look-around and backreferences are not supported.
";
