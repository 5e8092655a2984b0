//! Cell text cleanup: the PDFs mix non-breaking spaces, carriage returns and
//! hard-wrapped lines inside single table cells.

/// Collapses horizontal whitespace runs to single spaces, normalizes line
/// breaks, squeezes runs of blank lines and trims the result. Line breaks
/// inside the string are preserved.
pub fn normalize_ws(raw: &str) -> String {
    let hspace = regex::Regex::new(r"[ \t]+").unwrap();
    let blank_runs = regex::Regex::new(r"\n{3,}").unwrap();

    let text = raw.replace('\u{a0}', " ");
    let text = hspace.replace_all(&text, " ");
    let text = text.replace('\r', "\n");
    let text = blank_runs.replace_all(&text, "\n\n");
    text.trim().to_string()
}

/// Turns one raw table cell into dish names.
///
/// A cell holds at most one dish: when the renderer hard-wrapped a name
/// across lines, the lines are rejoined with single spaces. That includes
/// cells whose first line carries a "/" separator; those read like two
/// alternatives but are continuations in these PDFs, so they are joined
/// rather than split.
pub fn cell_to_items(raw: &str) -> Vec<String> {
    let cell = normalize_ws(raw);
    if cell.is_empty() {
        return Vec::new();
    }
    let cell = cell.replace('•', " ");
    let cell = cell.trim();

    let lines: Vec<&str> = cell
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    match lines.len() {
        0 => Vec::new(),
        1 => vec![cell.to_string()],
        _ => vec![lines.join(" ")],
    }
}
