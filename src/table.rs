//! Candidate table detection, scoring and header resolution.
//!
//! Extracted PDF text keeps the spatial layout of the menu grid but not the
//! ruling lines, and no single reconstruction works for every week's layout.
//! Several strategies each propose candidate tables; a heuristic score picks
//! the winner.

use crate::normalize::normalize_ws;
use crate::{DAY_LABELS, Table, day_for_label};

type Strategy = fn(&str) -> anyhow::Result<Vec<Table>>;

/// Detection strategies, tried independently. A failure in one only costs
/// that strategy's candidates.
const STRATEGIES: &[Strategy] = &[ruled_gutters, line_gaps, header_anchors];

/// Runs every detection strategy over the page text and collects all
/// candidates. When no strategy produces anything, a generic last-resort
/// pass turns each non-blank line into a row. An empty page yields an empty
/// set, never an error.
pub fn extract_candidates(page: &str) -> Vec<Table> {
    let mut candidates = Vec::new();
    for strategy in STRATEGIES {
        candidates.extend(strategy(page).unwrap_or_default());
    }
    if candidates.is_empty() {
        candidates.extend(any_rows(page));
    }
    candidates
}

/// Column boundaries are whitespace gutters shared by nearly all non-blank
/// lines, the text-layout remnant of vertical ruling.
fn ruled_gutters(page: &str) -> anyhow::Result<Vec<Table>> {
    let rows: Vec<Vec<char>> = page
        .lines()
        .map(|line| line.chars().collect())
        .filter(|line: &Vec<char>| line.iter().any(|c| !c.is_whitespace()))
        .collect();
    if rows.len() < 2 {
        return Ok(Vec::new());
    }

    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    let needed = rows.len() - rows.len() / 10;
    let gutter: Vec<bool> = (0..width)
        .map(|x| {
            rows.iter()
                .filter(|row| row.get(x).is_none_or(|c| c.is_whitespace()))
                .count()
                >= needed
        })
        .collect();

    let spans = cell_spans(&gutter);
    if spans.len() < 2 {
        return Ok(Vec::new());
    }

    let table = rows
        .iter()
        .map(|row| {
            spans
                .iter()
                .map(|&(start, end)| slice_chars(row, start, end))
                .collect()
        })
        .collect();
    Ok(vec![table])
}

/// Splits the x axis on runs of two or more gutter columns; a single blank
/// column stays inside its cell (word spacing).
fn cell_spans(gutter: &[bool]) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut start = 0;
    let mut x = 0;
    while x < gutter.len() {
        if gutter[x] {
            let run_start = x;
            while x < gutter.len() && gutter[x] {
                x += 1;
            }
            if x - run_start >= 2 {
                if run_start > start {
                    spans.push((start, run_start));
                }
                start = x;
            }
        } else {
            x += 1;
        }
    }
    if gutter.len() > start {
        spans.push((start, gutter.len()));
    }
    spans
}

fn slice_chars(row: &[char], start: usize, end: usize) -> String {
    row.iter()
        .skip(start)
        .take(end.saturating_sub(start))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Each line splits on runs of two or more whitespace characters, with no
/// cross-line alignment. Tolerates ragged rows.
fn line_gaps(page: &str) -> anyhow::Result<Vec<Table>> {
    let gap = regex::Regex::new(r"\s{2,}")?;
    let mut table: Table = Vec::new();
    for line in page.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        table.push(gap.split(line).map(|cell| cell.trim().to_string()).collect());
    }
    if table.iter().any(|row| row.len() >= 2) {
        Ok(vec![table])
    } else {
        Ok(Vec::new())
    }
}

/// Uses the weekday labels of a header line as column anchors: every line is
/// sliced at the character offsets where those labels start.
fn header_anchors(page: &str) -> anyhow::Result<Vec<Table>> {
    let lines: Vec<&str> = page.lines().collect();
    let mut starts = Vec::new();
    for line in &lines {
        starts = label_offsets(line);
        if starts.len() >= 3 {
            break;
        }
    }
    if starts.len() < 3 {
        return Ok(Vec::new());
    }
    if starts[0] > 0 {
        starts.insert(0, 0);
    }

    let table = lines
        .iter()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let chars: Vec<char> = line.chars().collect();
            starts
                .iter()
                .enumerate()
                .map(|(i, &start)| {
                    let end = starts.get(i + 1).copied().unwrap_or(chars.len());
                    slice_chars(&chars, start, end)
                })
                .collect()
        })
        .collect();
    Ok(vec![table])
}

/// Character offsets of recognized weekday labels in one line, sorted and
/// deduplicated.
fn label_offsets(line: &str) -> Vec<usize> {
    let upper = line.to_uppercase();
    let mut offsets = Vec::new();
    for (label, _) in DAY_LABELS {
        for (byte_pos, _) in upper.match_indices(label) {
            offsets.push(upper[..byte_pos].chars().count());
        }
    }
    offsets.sort_unstable();
    offsets.dedup();
    offsets
}

/// Last-resort pass when every strategy came up empty: each non-blank line
/// becomes a row, single-column rows allowed.
fn any_rows(page: &str) -> Vec<Table> {
    let Ok(gap) = regex::Regex::new(r"\s{2,}") else {
        return Vec::new();
    };
    let table: Table = page
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| gap.split(line).map(|cell| cell.trim().to_string()).collect())
        .collect();
    if table.is_empty() { Vec::new() } else { vec![table] }
}

/// Relative quality of a candidate: wide tables showing weekday labels near
/// the top win. Only comparable within one extraction pass.
pub fn score_table(table: &Table) -> i32 {
    if table.is_empty() {
        return -10;
    }
    let mut score = 0;
    let max_cols = table.iter().map(Vec::len).max().unwrap_or(0);
    if max_cols >= 5 {
        score += 10;
    }
    for row in table.iter().take(6) {
        let cells: Vec<String> = row
            .iter()
            .map(|cell| normalize_ws(cell).to_uppercase())
            .collect();
        for (label, _) in DAY_LABELS {
            if cells.iter().any(|cell| cell == label) {
                score += 5;
            }
        }
    }
    score + (table.len() as i32).min(30)
}

/// Keeps the highest-scoring candidate; earlier candidates win ties. A lone
/// empty candidate never wins because the running floor starts at the empty
/// table's own score.
pub fn select_best(candidates: Vec<Table>) -> Option<Table> {
    let mut best = None;
    let mut best_score = -10;
    for candidate in candidates {
        let score = score_table(&candidate);
        if score > best_score {
            best_score = score;
            best = Some(candidate);
        }
    }
    best
}

/// Column index per weekday plus the header row they were read from.
#[derive(Debug, PartialEq, Eq)]
pub struct HeaderLayout {
    pub header_row: usize,
    pub columns: [usize; 5],
}

/// Finds the header row and maps each weekday to its column.
///
/// The header is the first of the top ten rows containing at least three
/// recognized weekday labels, else row 0. Unless all five weekdays resolve
/// by label the whole mapping is replaced by positional columns 0..=4;
/// partial label matches are never mixed with positional guesses.
pub fn resolve_header(table: &Table) -> HeaderLayout {
    let mut header_row = 0;
    for (i, row) in table.iter().take(10).enumerate() {
        let cells: Vec<String> = row
            .iter()
            .map(|cell| normalize_ws(cell).to_uppercase())
            .collect();
        let hits = DAY_LABELS
            .iter()
            .filter(|(label, _)| cells.iter().any(|cell| cell == label))
            .count();
        if hits >= 3 {
            header_row = i;
            break;
        }
    }

    let mut columns: [Option<usize>; 5] = [None; 5];
    if let Some(row) = table.get(header_row) {
        for (j, cell) in row.iter().enumerate() {
            if let Some(day) = day_for_label(&normalize_ws(cell).to_uppercase()) {
                columns[day as usize] = Some(j);
            }
        }
    }

    let columns = if columns.iter().all(Option::is_some) {
        columns.map(|column| column.unwrap_or(0))
    } else {
        [0, 1, 2, 3, 4]
    };
    HeaderLayout { header_row, columns }
}
