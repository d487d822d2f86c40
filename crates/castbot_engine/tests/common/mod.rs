#![allow(dead_code)]

/// Builds a profile page with `cells` value cells; cell `i` holds `values[i]`
/// or a placeholder.
pub fn profile_page(values: &[(usize, &str)], cells: usize) -> String {
    let mut rows = String::new();
    for index in 0..cells {
        let value = values
            .iter()
            .find(|(i, _)| *i == index)
            .map(|(_, v)| *v)
            .unwrap_or("-");
        rows.push_str(&format!(
            "<div class=\"row\"><div class=\"col-5 table_label\">label {index}</div>\
             <div class=\"col-7 table_value\">{value}</div></div>\n"
        ));
    }
    format!("<html><head><title>Profile</title></head><body><div class=\"table\">{rows}</div></body></html>")
}

pub fn full_profile_page() -> String {
    profile_page(
        &[
            (1, "Anna Petrova"),
            (2, "27"),
            (4, "Female"),
            (9, "Ukraine"),
            (10, "Kyiv"),
        ],
        12,
    )
}
