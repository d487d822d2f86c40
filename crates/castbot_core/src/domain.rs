/// Mirror of the casting site that a scrape run targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    Russia,
    Ukraine,
    International,
}

impl Domain {
    pub const ALL: [Domain; 3] = [Domain::Russia, Domain::Ukraine, Domain::International];

    pub fn host(self) -> &'static str {
        match self {
            Domain::Russia => "acmodasi.ru",
            Domain::Ukraine => "acmodasi.com.ua",
            Domain::International => "www.acmodasi.com",
        }
    }

    /// Button caption shown in the domain choice prompt.
    pub fn label(self) -> &'static str {
        match self {
            Domain::Russia => "Russia",
            Domain::Ukraine => "Ukraine",
            Domain::International => "International",
        }
    }

    pub fn callback_data(self) -> &'static str {
        match self {
            Domain::Russia => "select_ru",
            Domain::Ukraine => "select_ua",
            Domain::International => "select_com",
        }
    }

    pub fn from_callback_data(data: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|domain| domain.callback_data() == data)
    }
}
