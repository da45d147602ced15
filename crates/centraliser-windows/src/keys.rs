/// Named keys and their virtual key codes. Aliases share an entry.
const NAMED_KEYS: &[(&[&str], u32)] = &[
    (&["BACKSPACE"], 0x08),
    (&["TAB"], 0x09),
    (&["ENTER", "RETURN"], 0x0D),
    (&["PAUSE", "BREAK"], 0x13),
    (&["ESCAPE", "ESC"], 0x1B),
    (&["SPACE"], 0x20),
    (&["PAGEUP", "PGUP"], 0x21),
    (&["PAGEDOWN", "PGDN"], 0x22),
    (&["END"], 0x23),
    (&["HOME"], 0x24),
    (&["LEFT"], 0x25),
    (&["UP"], 0x26),
    (&["RIGHT"], 0x27),
    (&["DOWN"], 0x28),
    (&["PRINTSCREEN", "PRTSC"], 0x2C),
    (&["INSERT", "INS"], 0x2D),
    (&["DELETE", "DEL"], 0x2E),
    (&["NUMPAD5", "NUM5"], 0x65),
    (&["SCROLLLOCK"], 0x91),
    (&["SEMICOLON"], 0xBA),
    (&["PLUS", "EQUALS"], 0xBB),
    (&["COMMA"], 0xBC),
    (&["MINUS"], 0xBD),
    (&["PERIOD", "DOT"], 0xBE),
    (&["SLASH"], 0xBF),
    (&["BACKTICK", "GRAVE"], 0xC0),
    (&["LBRACKET"], 0xDB),
    (&["BACKSLASH"], 0xDC),
    (&["RBRACKET"], 0xDD),
    (&["QUOTE"], 0xDE),
];

/// Resolves a key name to a Windows virtual key code.
///
/// Accepts a single letter or digit, F1 to F24, and the names in
/// `NAMED_KEYS`, ignoring case.
pub fn vk_from_name(name: &str) -> Option<u32> {
    let upper = name.trim().to_ascii_uppercase();

    // Letters and digits use their ASCII code as the VK code.
    if let [ch] = upper.as_bytes()
        && (ch.is_ascii_uppercase() || ch.is_ascii_digit())
    {
        return Some(u32::from(*ch));
    }

    if let Some(rest) = upper.strip_prefix('F')
        && let Ok(n) = rest.parse::<u32>()
        && (1..=24).contains(&n)
    {
        return Some(0x70 + n - 1); // VK_F1 = 0x70
    }

    NAMED_KEYS
        .iter()
        .find(|(names, _)| names.contains(&upper.as_str()))
        .map(|&(_, vk)| vk)
}
