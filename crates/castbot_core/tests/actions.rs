use castbot_core::{Action, Domain, IdKind, Keyboard};

#[test]
fn callback_data_maps_to_actions() {
    assert_eq!(
        Action::from_callback_data("select_ru"),
        Some(Action::SelectDomain(Domain::Russia))
    );
    assert_eq!(
        Action::from_callback_data("select_ua"),
        Some(Action::SelectDomain(Domain::Ukraine))
    );
    assert_eq!(
        Action::from_callback_data("select_com"),
        Some(Action::SelectDomain(Domain::International))
    );
    assert_eq!(
        Action::from_callback_data("set_start"),
        Some(Action::RequestSetId(IdKind::Start))
    );
    assert_eq!(
        Action::from_callback_data("set_end"),
        Some(Action::RequestSetId(IdKind::End))
    );
    assert_eq!(
        Action::from_callback_data("start_scraping"),
        Some(Action::StartScraping)
    );
    assert_eq!(
        Action::from_callback_data("stop_scraping"),
        Some(Action::StopScraping)
    );
    assert_eq!(Action::from_callback_data("select_de"), None);
}

#[test]
fn every_button_round_trips_through_callback_data() {
    for keyboard in [Keyboard::DomainChoice, Keyboard::RangeControl, Keyboard::Stop] {
        for button in keyboard.rows().into_iter().flatten() {
            assert!(
                Action::from_callback_data(button.data).is_some(),
                "button {:?} has no action",
                button
            );
        }
    }
}

#[test]
fn start_command_is_recognised_with_bot_suffix() {
    assert_eq!(
        Action::from_message_text("/start"),
        Action::RequestDomainSelection
    );
    assert_eq!(
        Action::from_message_text("/start@castbot"),
        Action::RequestDomainSelection
    );
    assert_eq!(
        Action::from_message_text("123"),
        Action::Text("123".to_string())
    );
    assert_eq!(
        Action::from_message_text("/starting"),
        Action::Text("/starting".to_string())
    );
}

#[test]
fn domains_map_to_mirror_hosts() {
    let hosts: Vec<_> = Domain::ALL.iter().map(|d| d.host()).collect();
    assert_eq!(
        hosts,
        vec!["acmodasi.ru", "acmodasi.com.ua", "www.acmodasi.com"]
    );
}
