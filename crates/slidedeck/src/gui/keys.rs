use gdk4::Key;
use pager::NavKey;

const BINDINGS: [(Key, NavKey); 17] = [
    (Key::Up, NavKey::ArrowUp),
    (Key::KP_Up, NavKey::ArrowUp),
    (Key::Down, NavKey::ArrowDown),
    (Key::KP_Down, NavKey::ArrowDown),
    (Key::Left, NavKey::ArrowLeft),
    (Key::KP_Left, NavKey::ArrowLeft),
    (Key::Right, NavKey::ArrowRight),
    (Key::KP_Right, NavKey::ArrowRight),
    (Key::Page_Up, NavKey::PageUp),
    (Key::KP_Page_Up, NavKey::PageUp),
    (Key::Page_Down, NavKey::PageDown),
    (Key::KP_Page_Down, NavKey::PageDown),
    (Key::Home, NavKey::Home),
    (Key::KP_Home, NavKey::Home),
    (Key::End, NavKey::End),
    (Key::KP_End, NavKey::End),
    (Key::space, NavKey::Space),
];

pub fn nav_key(key: Key) -> Option<NavKey> {
    BINDINGS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, nav)| *nav)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_and_keypad_map_alike() {
        assert_eq!(nav_key(Key::Right), Some(NavKey::ArrowRight));
        assert_eq!(nav_key(Key::KP_Right), Some(NavKey::ArrowRight));
        assert_eq!(nav_key(Key::Escape), None);
    }
}
