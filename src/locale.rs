use crate::pet::PetAction;

/// Language used for action messages and error text.
///
/// Mood values on the wire are never localized, in any locale: `Zh` still
/// reports `"full"`, `"hungry"` and so on, not 饱饱的 / 饥饿. Only the
/// human-readable strings returned alongside the state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    Zh,
}

impl Locale {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Locale::En),
            "zh" => Some(Locale::Zh),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Zh => "zh",
        }
    }

    pub fn action_message(self, action: PetAction) -> &'static str {
        match (self, action) {
            (Locale::En, PetAction::Feed) => "pet ate happily",
            (Locale::En, PetAction::Play) => "pet played until sweaty",
            (Locale::En, PetAction::Sleep) => "pet took a long nap",
            (Locale::En, PetAction::Dance) => "pet danced an infectious dance",
            (Locale::Zh, PetAction::Feed) => "宠物吃得很开心！",
            (Locale::Zh, PetAction::Play) => "宠物玩得满头大汗！",
            (Locale::Zh, PetAction::Sleep) => "宠物睡了一大觉。",
            (Locale::Zh, PetAction::Dance) => "宠物跳了一支魔性的舞！",
        }
    }

    pub fn unknown_action(self) -> &'static str {
        match self {
            Locale::En => "unknown action",
            Locale::Zh => "未知动作",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_known_codes_case_insensitively() {
        assert_eq!(Locale::parse("en"), Some(Locale::En));
        assert_eq!(Locale::parse(" ZH "), Some(Locale::Zh));
        assert_eq!(Locale::parse("fr"), None);
        assert_eq!(Locale::parse(""), None);
    }

    #[test]
    fn every_action_has_a_message_in_every_locale() {
        for locale in [Locale::En, Locale::Zh] {
            for action in PetAction::ALL {
                assert!(!locale.action_message(action).is_empty());
            }
            assert!(!locale.unknown_action().is_empty());
        }
        assert_eq!(Locale::En.action_message(PetAction::Feed), "pet ate happily");
        assert_eq!(Locale::Zh.unknown_action(), "未知动作");
    }
}
