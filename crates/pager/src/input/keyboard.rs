use super::NavAction;
use serde::{Deserialize, Serialize};
use serde_with::DeserializeFromStr;
use strum::{Display as StrumDisplay, EnumString};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    DeserializeFromStr,
    EnumString,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum NavKey {
    #[strum(serialize = "ArrowUp", serialize = "up")]
    ArrowUp,
    #[strum(serialize = "ArrowDown", serialize = "down")]
    ArrowDown,
    #[strum(serialize = "ArrowLeft", serialize = "left")]
    ArrowLeft,
    #[strum(serialize = "ArrowRight", serialize = "right")]
    ArrowRight,
    #[strum(serialize = "PageUp", serialize = "page_up", serialize = "pgup")]
    PageUp,
    #[strum(serialize = "PageDown", serialize = "page_down", serialize = "pgdn")]
    PageDown,
    #[strum(serialize = "Home")]
    Home,
    #[strum(serialize = "End")]
    End,
    #[strum(serialize = "Space", serialize = " ")]
    Space,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct KeyMap {
    pub next: Vec<NavKey>,
    pub prev: Vec<NavKey>,
    pub first: Vec<NavKey>,
    pub last: Vec<NavKey>,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            next: vec![NavKey::ArrowDown, NavKey::ArrowRight],
            prev: vec![NavKey::ArrowUp, NavKey::ArrowLeft],
            first: Vec::new(),
            last: Vec::new(),
        }
    }
}

impl KeyMap {
    /// First binding wins when a key is listed under several actions.
    pub fn resolve(&self, key: NavKey) -> Option<NavAction> {
        [
            (&self.next, NavAction::Next),
            (&self.prev, NavAction::Prev),
            (&self.first, NavAction::First),
            (&self.last, NavAction::Last),
        ]
        .into_iter()
        .find(|(keys, _)| keys.contains(&key))
        .map(|(_, action)| action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_deserialization() {
        let cases = vec![
            ("\"down\"", NavKey::ArrowDown),
            ("\"ArrowDown\"", NavKey::ArrowDown),
            ("\"ARROWDOWN\"", NavKey::ArrowDown),
            ("\"Left\"", NavKey::ArrowLeft),
            ("\"page_up\"", NavKey::PageUp),
            ("\"PgDn\"", NavKey::PageDown),
            ("\"home\"", NavKey::Home),
            ("\" \"", NavKey::Space),
        ];

        for (json, expected) in cases {
            let deserialized: NavKey = serde_json::from_str(json).unwrap();
            assert_eq!(deserialized, expected);
        }
    }

    #[test]
    fn unknown_key_is_rejected() {
        assert!(serde_json::from_str::<NavKey>("\"escape\"").is_err());
    }

    #[test]
    fn default_map_uses_arrows_only() {
        let map = KeyMap::default();
        assert_eq!(map.resolve(NavKey::ArrowDown), Some(NavAction::Next));
        assert_eq!(map.resolve(NavKey::ArrowRight), Some(NavAction::Next));
        assert_eq!(map.resolve(NavKey::ArrowUp), Some(NavAction::Prev));
        assert_eq!(map.resolve(NavKey::ArrowLeft), Some(NavAction::Prev));
        assert_eq!(map.resolve(NavKey::Home), None);
        assert_eq!(map.resolve(NavKey::Space), None);
    }

    #[test]
    fn partial_map_keeps_default_bindings() {
        let map: KeyMap = serde_json::from_str(r#"{ "first": ["home"], "last": ["end"] }"#).unwrap();
        assert_eq!(map.resolve(NavKey::Home), Some(NavAction::First));
        assert_eq!(map.resolve(NavKey::End), Some(NavAction::Last));
        assert_eq!(map.resolve(NavKey::ArrowDown), Some(NavAction::Next));
    }
}
