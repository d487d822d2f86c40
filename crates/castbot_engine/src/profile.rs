//! Positional extraction of profile fields from a casting page.
//!
//! Profile pages render every attribute as a `div.col-7.table_value` cell in
//! a fixed order. The table below is the single place that knows which cell
//! holds which field; when the site markup moves, update it here.

use scraper::{ElementRef, Html, Selector};

use crate::CastingProfile;

/// CSS selector for the value cells of the profile attribute table.
pub const VALUE_SELECTOR: &str = "div.col-7.table_value";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    Name,
    Age,
    Gender,
    Country,
    City,
}

/// Field name to cell index within the matched value cells.
pub const FIELD_INDEX: [(ProfileField, usize); 5] = [
    (ProfileField::Name, 1),
    (ProfileField::Age, 2),
    (ProfileField::Gender, 4),
    (ProfileField::Country, 9),
    (ProfileField::City, 10),
];

/// Extracts a profile from page markup, or `None` when the page does not
/// carry the expected attribute table (unused id, error page, changed layout).
pub fn parse_profile(html: &str, link: &str) -> Option<CastingProfile> {
    let selector = Selector::parse(VALUE_SELECTOR).ok()?;
    let doc = Html::parse_document(html);
    let cells: Vec<ElementRef<'_>> = doc.select(&selector).collect();
    if cells.is_empty() {
        return None;
    }

    let field = |wanted: ProfileField| -> Option<String> {
        let (_, index) = FIELD_INDEX.iter().find(|(field, _)| *field == wanted)?;
        cells.get(*index).map(|cell| cell_text(*cell))
    };

    Some(CastingProfile {
        link: link.to_string(),
        name: field(ProfileField::Name)?,
        age: field(ProfileField::Age)?,
        gender: field(ProfileField::Gender)?,
        country: field(ProfileField::Country)?,
        city: field(ProfileField::City)?,
    })
}

fn cell_text(cell: ElementRef<'_>) -> String {
    cell.text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}
