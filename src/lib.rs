//! Parses the weekly cafeteria menu PDF published by the university into a
//! JSON record of dish names per weekday (Monday through Friday).
//!
//! The PDF is rendered as a table with weekday columns, but the grid lines
//! rarely survive text extraction intact, so [`table`] reconstructs candidate
//! tables with several detection strategies and keeps the best-scoring one.

pub mod menu;
pub mod normalize;
pub mod source;
pub mod table;

/// A candidate table: rows of raw cell text. Rows may be ragged; consumers
/// treat missing cells as empty.
pub type Table = Vec<Vec<String>>;

/// Weekdays covered by the menu, in serving order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    pub const ALL: [Weekday; 5] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
        }
    }
}

/// Recognized weekday header labels, uppercase, with both the accented and
/// ASCII-folded spellings the PDFs use. New spelling variants go here.
pub const DAY_LABELS: &[(&str, Weekday)] = &[
    ("PAZARTESİ", Weekday::Monday),
    ("PAZARTESI", Weekday::Monday),
    ("SALI", Weekday::Tuesday),
    ("ÇARŞAMBA", Weekday::Wednesday),
    ("CARSAMBA", Weekday::Wednesday),
    ("PERŞEMBE", Weekday::Thursday),
    ("PERSEMBE", Weekday::Thursday),
    ("CUMA", Weekday::Friday),
];

/// Looks up an already-uppercased, whitespace-normalized string in the label
/// table.
pub fn day_for_label(label: &str) -> Option<Weekday> {
    DAY_LABELS
        .iter()
        .find(|(known, _)| *known == label)
        .map(|(_, day)| *day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accented_and_ascii_spellings_map_to_same_day() {
        assert_eq!(day_for_label("PAZARTESİ"), Some(Weekday::Monday));
        assert_eq!(day_for_label("PAZARTESI"), Some(Weekday::Monday));
        assert_eq!(day_for_label("ÇARŞAMBA"), Some(Weekday::Wednesday));
        assert_eq!(day_for_label("CARSAMBA"), Some(Weekday::Wednesday));
        assert_eq!(day_for_label("CUMA"), Some(Weekday::Friday));
        assert_eq!(day_for_label("CUMARTESİ"), None);
    }
}
