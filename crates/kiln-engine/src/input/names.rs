use super::types::Key;

/// Maximum key-name length considered by [`Key::from_name`].
///
/// Longer names are truncated to this many bytes before lookup, not
/// rejected. This cap is observable behavior and must not change.
pub const MAX_KEY_NAME_LEN: usize = 31;

impl Key {
    /// Canonical uppercase name for this key.
    ///
    /// Keys without a canonical name (`Unknown`) yield the empty string.
    pub fn name(self) -> &'static str {
        match self {
            Key::Escape => "ESCAPE",
            Key::Return => "RETURN",
            Key::Tab => "TAB",
            Key::Backspace => "BACKSPACE",
            Key::Space => "SPACE",

            Key::Insert => "INSERT",
            Key::Delete => "DELETE",
            Key::Home => "HOME",
            Key::End => "END",
            Key::PageUp => "PAGEUP",
            Key::PageDown => "PAGEDOWN",

            Key::Up => "UP",
            Key::Down => "DOWN",
            Key::Left => "LEFT",
            Key::Right => "RIGHT",

            Key::Shift => "SHIFT",
            Key::Control => "CTRL",
            Key::Alt => "ALT",
            Key::Meta => "META",

            Key::A => "A",
            Key::B => "B",
            Key::C => "C",
            Key::D => "D",
            Key::E => "E",
            Key::F => "F",
            Key::G => "G",
            Key::H => "H",
            Key::I => "I",
            Key::J => "J",
            Key::K => "K",
            Key::L => "L",
            Key::M => "M",
            Key::N => "N",
            Key::O => "O",
            Key::P => "P",
            Key::Q => "Q",
            Key::R => "R",
            Key::S => "S",
            Key::T => "T",
            Key::U => "U",
            Key::V => "V",
            Key::W => "W",
            Key::X => "X",
            Key::Y => "Y",
            Key::Z => "Z",

            Key::Digit0 => "0",
            Key::Digit1 => "1",
            Key::Digit2 => "2",
            Key::Digit3 => "3",
            Key::Digit4 => "4",
            Key::Digit5 => "5",
            Key::Digit6 => "6",
            Key::Digit7 => "7",
            Key::Digit8 => "8",
            Key::Digit9 => "9",

            Key::F1 => "F1",
            Key::F2 => "F2",
            Key::F3 => "F3",
            Key::F4 => "F4",
            Key::F5 => "F5",
            Key::F6 => "F6",
            Key::F7 => "F7",
            Key::F8 => "F8",
            Key::F9 => "F9",
            Key::F10 => "F10",
            Key::F11 => "F11",
            Key::F12 => "F12",

            Key::Unknown(_) => "",
        }
    }

    /// Case-insensitive lookup of a key by name.
    ///
    /// The name is uppercased into a fixed 31-byte stack buffer; anything
    /// beyond the cap is truncated before lookup. Empty and unrecognized
    /// names yield `None`.
    pub fn from_name(name: &str) -> Option<Key> {
        if name.is_empty() {
            return None;
        }

        let mut buf = [0u8; MAX_KEY_NAME_LEN];
        let len = name.len().min(MAX_KEY_NAME_LEN);
        for (dst, src) in buf[..len].iter_mut().zip(name.bytes()) {
            *dst = src.to_ascii_uppercase();
        }

        lookup(&buf[..len])
    }
}

fn lookup(name: &[u8]) -> Option<Key> {
    let key = match name {
        b"ESCAPE" => Key::Escape,
        b"RETURN" | b"ENTER" => Key::Return,
        b"TAB" => Key::Tab,
        b"BACKSPACE" => Key::Backspace,
        b"SPACE" => Key::Space,

        b"INSERT" => Key::Insert,
        b"DELETE" => Key::Delete,
        b"HOME" => Key::Home,
        b"END" => Key::End,
        b"PAGEUP" => Key::PageUp,
        b"PAGEDOWN" => Key::PageDown,

        b"UP" => Key::Up,
        b"DOWN" => Key::Down,
        b"LEFT" => Key::Left,
        b"RIGHT" => Key::Right,

        b"SHIFT" => Key::Shift,
        b"CTRL" | b"CONTROL" => Key::Control,
        b"ALT" => Key::Alt,
        b"META" => Key::Meta,

        b"A" => Key::A,
        b"B" => Key::B,
        b"C" => Key::C,
        b"D" => Key::D,
        b"E" => Key::E,
        b"F" => Key::F,
        b"G" => Key::G,
        b"H" => Key::H,
        b"I" => Key::I,
        b"J" => Key::J,
        b"K" => Key::K,
        b"L" => Key::L,
        b"M" => Key::M,
        b"N" => Key::N,
        b"O" => Key::O,
        b"P" => Key::P,
        b"Q" => Key::Q,
        b"R" => Key::R,
        b"S" => Key::S,
        b"T" => Key::T,
        b"U" => Key::U,
        b"V" => Key::V,
        b"W" => Key::W,
        b"X" => Key::X,
        b"Y" => Key::Y,
        b"Z" => Key::Z,

        b"0" => Key::Digit0,
        b"1" => Key::Digit1,
        b"2" => Key::Digit2,
        b"3" => Key::Digit3,
        b"4" => Key::Digit4,
        b"5" => Key::Digit5,
        b"6" => Key::Digit6,
        b"7" => Key::Digit7,
        b"8" => Key::Digit8,
        b"9" => Key::Digit9,

        b"F1" => Key::F1,
        b"F2" => Key::F2,
        b"F3" => Key::F3,
        b"F4" => Key::F4,
        b"F5" => Key::F5,
        b"F6" => Key::F6,
        b"F7" => Key::F7,
        b"F8" => Key::F8,
        b"F9" => Key::F9,
        b"F10" => Key::F10,
        b"F11" => Key::F11,
        b"F12" => Key::F12,

        _ => return None,
    };

    Some(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── from_name ─────────────────────────────────────────────────────────

    #[test]
    fn empty_name_is_none() {
        assert_eq!(Key::from_name(""), None);
    }

    #[test]
    fn unrecognized_name_is_none() {
        assert_eq!(Key::from_name("not_a_real_key"), None);
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(Key::from_name("a"), Some(Key::A));
        assert_eq!(Key::from_name("A"), Some(Key::A));
        assert_eq!(Key::from_name("space"), Some(Key::Space));
        assert_eq!(Key::from_name("SpAcE"), Some(Key::Space));
        assert_eq!(Key::from_name("pageup"), Some(Key::PageUp));
    }

    #[test]
    fn aliases_resolve() {
        assert_eq!(Key::from_name("enter"), Some(Key::Return));
        assert_eq!(Key::from_name("control"), Some(Key::Control));
        assert_eq!(Key::from_name("ctrl"), Some(Key::Control));
    }

    #[test]
    fn overlong_name_is_truncated_not_rejected() {
        // 40 bytes in, 31 considered. The truncated form simply fails the
        // lookup; it must not panic or error.
        let long = "x".repeat(40);
        assert_eq!(Key::from_name(&long), None);

        // Two names that only differ past the cap are equivalent.
        let a = format!("{}A", "y".repeat(MAX_KEY_NAME_LEN));
        let b = format!("{}B", "y".repeat(MAX_KEY_NAME_LEN));
        assert_eq!(Key::from_name(&a), Key::from_name(&b));
    }

    #[test]
    fn non_ascii_name_is_none() {
        assert_eq!(Key::from_name("touché"), None);
    }

    // ── name ──────────────────────────────────────────────────────────────

    #[test]
    fn name_round_trips_for_named_keys() {
        for key in [
            Key::Escape,
            Key::Return,
            Key::Space,
            Key::PageDown,
            Key::Left,
            Key::Control,
            Key::Q,
            Key::Digit0,
            Key::F12,
        ] {
            assert_eq!(Key::from_name(key.name()), Some(key));
        }
    }

    #[test]
    fn unknown_key_has_empty_name() {
        assert_eq!(Key::Unknown(0xBEEF).name(), "");
    }

    #[test]
    fn names_fit_the_buffer() {
        for key in [Key::Backspace, Key::PageDown, Key::F10] {
            assert!(key.name().len() <= MAX_KEY_NAME_LEN);
        }
    }
}
