mod common;

use castbot_engine::{parse_profile, CastingProfile, ProfileField, FIELD_INDEX};
use common::{full_profile_page, profile_page};
use pretty_assertions::assert_eq;

const LINK: &str = "https://acmodasi.com.ua/a_101";

#[test]
fn extracts_fields_by_position() {
    let profile = parse_profile(&full_profile_page(), LINK).expect("profile");

    assert_eq!(
        profile,
        CastingProfile {
            link: LINK.to_string(),
            name: "Anna Petrova".to_string(),
            age: "27".to_string(),
            gender: "Female".to_string(),
            country: "Ukraine".to_string(),
            city: "Kyiv".to_string(),
        }
    );
}

#[test]
fn page_without_value_cells_is_not_found() {
    let html = "<html><body><h1>Page not found</h1></body></html>";
    assert_eq!(parse_profile(html, LINK), None);
}

#[test]
fn truncated_attribute_table_is_not_found() {
    // City lives at index 10; ten cells stop short of it.
    let html = profile_page(&[(1, "Ivan")], 10);
    assert_eq!(parse_profile(&html, LINK), None);
}

#[test]
fn cell_text_is_trimmed_and_collapsed() {
    let html = profile_page(
        &[
            (1, "\n   Anna   <b>Maria</b>\n Petrova "),
            (2, " 27 "),
            (4, "Female"),
            (9, "Ukraine"),
            (10, "Kyiv"),
        ],
        11,
    );

    let profile = parse_profile(&html, LINK).expect("profile");
    assert_eq!(profile.name, "Anna Maria Petrova");
    assert_eq!(profile.age, "27");
}

#[test]
fn other_table_cells_are_ignored() {
    let html = full_profile_page().replace(
        "<div class=\"table\">",
        "<div class=\"table\"><div class=\"col-7\">decoy</div><div class=\"table_value\">decoy</div>",
    );

    let profile = parse_profile(&html, LINK).expect("profile");
    assert_eq!(profile.name, "Anna Petrova");
}

#[test]
fn field_index_table_is_the_documented_contract() {
    assert_eq!(
        FIELD_INDEX,
        [
            (ProfileField::Name, 1),
            (ProfileField::Age, 2),
            (ProfileField::Gender, 4),
            (ProfileField::Country, 9),
            (ProfileField::City, 10),
        ]
    );
}
