//! Menu assembly: turns the best candidate table into per-weekday dish
//! lists and wraps them in the JSON output record.

use std::path::Path;

use chrono::Utc;
use serde::Serialize;

use crate::normalize::{cell_to_items, normalize_ws};
use crate::table::{extract_candidates, resolve_header, select_best};
use crate::{Weekday, day_for_label};

/// Row labels and footnotes that share the grid with the dishes.
const NON_DISH_PREFIXES: &[&str] = &["ÖĞRENCİ", "PERSONEL", "ASÇIBAŞI", "NOT:"];

/// Dish lists per weekday, Monday through Friday, in serving order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DayMenus {
    #[serde(rename = "Monday")]
    pub monday: Vec<String>,
    #[serde(rename = "Tuesday")]
    pub tuesday: Vec<String>,
    #[serde(rename = "Wednesday")]
    pub wednesday: Vec<String>,
    #[serde(rename = "Thursday")]
    pub thursday: Vec<String>,
    #[serde(rename = "Friday")]
    pub friday: Vec<String>,
}

impl DayMenus {
    pub fn day(&self, day: Weekday) -> &Vec<String> {
        match day {
            Weekday::Monday => &self.monday,
            Weekday::Tuesday => &self.tuesday,
            Weekday::Wednesday => &self.wednesday,
            Weekday::Thursday => &self.thursday,
            Weekday::Friday => &self.friday,
        }
    }

    pub fn day_mut(&mut self, day: Weekday) -> &mut Vec<String> {
        match day {
            Weekday::Monday => &mut self.monday,
            Weekday::Tuesday => &mut self.tuesday,
            Weekday::Wednesday => &mut self.wednesday,
            Weekday::Thursday => &mut self.thursday,
            Weekday::Friday => &mut self.friday,
        }
    }
}

/// What one extraction pass recovered from the page. Both parts can be
/// empty/absent; that is a degenerate result, not an error.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParsedMenu {
    pub days: DayMenus,
    pub date_range: Option<String>,
}

/// The JSON payload written for consumers.
#[derive(Debug, Serialize)]
pub struct MenuRecord {
    pub updated_at: String,
    pub pdf_filename: String,
    pub date_range: Option<String>,
    pub days: DayMenus,
    pub notes: String,
}

impl MenuRecord {
    pub fn new(parsed: ParsedMenu) -> Self {
        MenuRecord {
            updated_at: Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string(),
            pdf_filename: "menu.pdf".to_string(),
            date_range: parsed.date_range,
            days: parsed.days,
            notes: "Parsed from official weekly PDF (table extraction).".to_string(),
        }
    }
}

/// Finds the week's date range in the page text, e.g. "8.12.2025/12.12.2025".
/// Works on the free text, independent of any table structure.
pub fn extract_date_range(text: &str) -> Option<String> {
    let re = regex::Regex::new(r"\d{1,2}\.\d{1,2}\.\d{4}\s*/\s*\d{1,2}\.\d{1,2}\.\d{4}").ok()?;
    re.find(text)
        .map(|m| m.as_str().chars().filter(|c| !c.is_whitespace()).collect())
}

/// Extracts the menu from a PDF on disk. Only the first page is considered.
pub fn parse_menu(pdf_path: &Path) -> anyhow::Result<ParsedMenu> {
    let text = pdf_extract::extract_text(pdf_path)?;
    Ok(parse_page(first_page(&text)))
}

/// Same as [`parse_menu`] for already-loaded PDF bytes.
pub fn parse_menu_from_bytes(bytes: &[u8]) -> anyhow::Result<ParsedMenu> {
    let text = pdf_extract::extract_text_from_mem(bytes)?;
    Ok(parse_page(first_page(&text)))
}

fn first_page(text: &str) -> &str {
    text.split('\u{c}').next().unwrap_or(text)
}

/// Assembles the per-weekday dish lists from one page of extracted text.
pub fn parse_page(page: &str) -> ParsedMenu {
    let date_range = extract_date_range(&normalize_ws(page));
    let mut days = DayMenus::default();

    let Some(table) = select_best(extract_candidates(page)) else {
        return ParsedMenu { days, date_range };
    };
    let layout = resolve_header(&table);

    for row in table.iter().skip(layout.header_row + 1) {
        // Rows with at most one filled cell are separators, not data.
        let filled = row.iter().filter(|cell| !normalize_ws(cell).is_empty()).count();
        if filled <= 1 {
            continue;
        }

        let mut cells = row.clone();
        while cells.len() < 5 {
            cells.push(String::new());
        }

        for day in Weekday::ALL {
            let column = layout.columns[day as usize];
            if column >= cells.len() {
                continue;
            }
            for item in cell_to_items(&cells[column]) {
                let dish = normalize_ws(&item);
                if dish.is_empty() {
                    continue;
                }
                let upper = dish.to_uppercase();
                if NON_DISH_PREFIXES.iter().any(|p| upper.starts_with(p)) {
                    continue;
                }
                // Header labels sometimes bleed into data rows.
                if day_for_label(&upper).is_some() {
                    continue;
                }
                let list = days.day_mut(day);
                if !list.iter().any(|seen| seen.to_uppercase() == upper) {
                    list.push(dish);
                }
            }
        }
    }

    // Second safety net against day tokens that slipped through.
    for day in Weekday::ALL {
        days.day_mut(day)
            .retain(|dish| day_for_label(&normalize_ws(dish).to_uppercase()).is_none());
    }

    ParsedMenu { days, date_range }
}
