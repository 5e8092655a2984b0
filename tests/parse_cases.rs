use pretty_assertions::assert_eq;

use greenplate::menu::parse_page;

/// Renders rows as column-aligned page text with two-space gutters, the way
/// the weekly PDFs come out of text extraction.
fn page(rows: &[[&str; 5]]) -> String {
    let mut widths = [0usize; 5];
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let mut out = String::new();
    for row in rows {
        let mut line = String::new();
        for (i, cell) in row.iter().enumerate() {
            line.push_str(cell);
            if i < 4 {
                let pad = widths[i] - cell.chars().count() + 2;
                line.extend(std::iter::repeat(' ').take(pad));
            }
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

const TURKISH_HEADER: [&str; 5] = ["PAZARTESİ", "SALI", "ÇARŞAMBA", "PERŞEMBE", "CUMA"];

#[test]
fn turkish_header_row_maps_days_without_leakage() {
    let text = page(&[TURKISH_HEADER, ["Soup", "Rice", "Soup", "Pasta", "Fish"]]);
    let parsed = parse_page(&text);

    assert_eq!(parsed.days.monday, vec!["Soup"]);
    assert_eq!(parsed.days.tuesday, vec!["Rice"]);
    assert_eq!(parsed.days.wednesday, vec!["Soup"]);
    assert_eq!(parsed.days.thursday, vec!["Pasta"]);
    assert_eq!(parsed.days.friday, vec!["Fish"]);
    assert_eq!(parsed.date_range, None);
}

#[test]
fn date_range_line_above_the_grid_is_picked_up() {
    let mut text = String::from("8.12.2025/12.12.2025\n");
    text.push_str(&page(&[
        TURKISH_HEADER,
        ["Çorba", "Pilav", "Güveç", "Makarna", "Balık"],
    ]));
    let parsed = parse_page(&text);

    assert_eq!(parsed.date_range, Some("8.12.2025/12.12.2025".to_string()));
    assert_eq!(parsed.days.monday, vec!["Çorba"]);
    assert_eq!(parsed.days.friday, vec!["Balık"]);
}

#[test]
fn rows_with_a_single_filled_cell_are_spacers() {
    let text = page(&[
        TURKISH_HEADER,
        ["Çorba", "Pilav", "Güveç", "Makarna", "Balık"],
        ["", "Kapalı", "", "", ""],
        ["Salata", "Hoşaf", "Turşu", "Cacık", "Tatlı"],
    ]);
    let parsed = parse_page(&text);

    assert_eq!(parsed.days.monday, vec!["Çorba", "Salata"]);
    assert_eq!(parsed.days.tuesday, vec!["Pilav", "Hoşaf"]);
    assert!(!parsed.days.tuesday.contains(&"Kapalı".to_string()));
}

#[test]
fn duplicate_dishes_collapse_keeping_first_spelling() {
    let text = page(&[
        TURKISH_HEADER,
        ["Soup", "Rice", "Stew", "Pasta", "Fish"],
        ["soup", "Beans", "Rice", "Salad", "Kebab"],
        ["Soup", "Peas", "Figs", "Olives", "Melon"],
    ]);
    let parsed = parse_page(&text);

    assert_eq!(parsed.days.monday, vec!["Soup"]);
    assert_eq!(parsed.days.tuesday, vec!["Rice", "Beans", "Peas"]);
}

#[test]
fn garbled_header_falls_back_to_positional_columns() {
    // Friday's label is unreadable: four labels resolve, so the mapping is
    // discarded and columns 0..=4 become Monday..Friday.
    let text = page(&[
        ["PAZARTESİ", "SALI", "ÇARŞAMBA", "PERŞEMBE", "CUM@"],
        ["Çorba", "Pilav", "Güveç", "Makarna", "Balık"],
    ]);
    let parsed = parse_page(&text);

    assert_eq!(parsed.days.monday, vec!["Çorba"]);
    assert_eq!(parsed.days.friday, vec!["Balık"]);
}

#[test]
fn price_labels_and_footnotes_are_not_dishes() {
    let text = page(&[
        TURKISH_HEADER,
        ["Çorba", "Pilav", "Güveç", "Makarna", "Balık"],
        [
            "ÖĞRENCİ: 45 TL",
            "PERSONEL: 60 TL",
            "NOT: menü değişebilir",
            "ASÇIBAŞI onaylı",
            "Tatlı",
        ],
    ]);
    let parsed = parse_page(&text);

    assert_eq!(parsed.days.monday, vec!["Çorba"]);
    assert_eq!(parsed.days.tuesday, vec!["Pilav"]);
    assert_eq!(parsed.days.wednesday, vec!["Güveç"]);
    assert_eq!(parsed.days.thursday, vec!["Makarna"]);
    assert_eq!(parsed.days.friday, vec!["Balık", "Tatlı"]);
}

#[test]
fn pages_without_tables_yield_empty_days() {
    let parsed = parse_page("Üniversite yemekhanesi bu hafta kapalıdır.\n");
    assert!(parsed.days.monday.is_empty());
    assert!(parsed.days.friday.is_empty());
}
