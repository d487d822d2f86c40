use castbot_core::Keyboard;
use castbot_engine::CastingProfile;
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

pub fn keyboard_markup(keyboard: Keyboard) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(keyboard.rows().into_iter().map(|row| {
        row.into_iter()
            .map(|button| InlineKeyboardButton::callback(button.label, button.data))
    }))
}

pub fn profile_text(profile: &CastingProfile) -> String {
    format!(
        "Link: {}\nName: {}\nAge: {}\nGender: {}\nCountry: {}\nCity: {}",
        profile.link, profile.name, profile.age, profile.gender, profile.country, profile.city
    )
}

#[cfg(test)]
mod tests {
    use teloxide::types::InlineKeyboardButtonKind;

    use super::*;

    fn callback_data(markup: &InlineKeyboardMarkup) -> Vec<Vec<String>> {
        markup
            .inline_keyboard
            .iter()
            .map(|row| {
                row.iter()
                    .map(|button| match &button.kind {
                        InlineKeyboardButtonKind::CallbackData(data) => data.clone(),
                        other => panic!("unexpected button kind {other:?}"),
                    })
                    .collect()
            })
            .collect()
    }

    #[test]
    fn domain_choice_is_one_row_of_three() {
        let markup = keyboard_markup(Keyboard::DomainChoice);
        assert_eq!(
            callback_data(&markup),
            vec![vec!["select_ru", "select_ua", "select_com"]]
        );
        let labels: Vec<_> = markup.inline_keyboard[0]
            .iter()
            .map(|b| b.text.as_str())
            .collect();
        assert_eq!(labels, vec!["Russia", "Ukraine", "International"]);
    }

    #[test]
    fn range_control_and_stop_buttons() {
        assert_eq!(
            callback_data(&keyboard_markup(Keyboard::RangeControl)),
            vec![vec!["set_start", "set_end", "start_scraping"]]
        );
        assert_eq!(
            callback_data(&keyboard_markup(Keyboard::Stop)),
            vec![vec!["stop_scraping"]]
        );
    }

    #[test]
    fn profile_text_lists_fields_in_order() {
        let profile = CastingProfile {
            link: "https://acmodasi.ru/a_5".to_string(),
            name: "Ivan".to_string(),
            age: "31".to_string(),
            gender: "Male".to_string(),
            country: "Russia".to_string(),
            city: "Kazan".to_string(),
        };

        assert_eq!(
            profile_text(&profile),
            "Link: https://acmodasi.ru/a_5\nName: Ivan\nAge: 31\nGender: Male\nCountry: Russia\nCity: Kazan"
        );
    }
}
