//! The phone keypad table.
//!
//! [`KEYS`] is the only hand-written copy of the mapping. The reverse
//! direction (character → key) is derived from it at compile time.

/// Key that every unmapped character normalizes to.
///
/// No numeric pattern can contain it, so such characters only ever match
/// themselves.
pub const UNKNOWN: char = '*';

/// Characters each key stands for, indexed by the key's digit.
pub const KEYS: [&str; 10] = [
    "+0", "1", "abc2", "def3", "ghi4", "jkl5", "mno6", "pqrs7", "tuv8", "wxyz9",
];

static REVERSE: [u8; 128] = build_reverse();

const fn build_reverse() -> [u8; 128] {
    let mut table = [UNKNOWN as u8; 128];
    let mut key = 0;
    while key < KEYS.len() {
        let chars = KEYS[key].as_bytes();
        let mut i = 0;
        while i < chars.len() {
            table[chars[i] as usize] = b'0' + key as u8;
            i += 1;
        }
        key += 1;
    }
    table
}

/// Returns every character the key `digit` stands for, or `None` if `digit`
/// is not a keypad digit.
///
/// ```
/// use t9search::keypad;
///
/// assert_eq!(keypad::letters('7'), Some("pqrs7"));
/// assert_eq!(keypad::letters('x'), None);
/// ```
pub fn letters(digit: char) -> Option<&'static str> {
    let index = digit.to_digit(10)?;
    KEYS.get(index as usize).copied()
}

/// Whether typing `digit` may produce `ch`.
pub fn accepts(digit: char, ch: char) -> bool {
    letters(digit).is_some_and(|chars| chars.contains(ch.to_ascii_lowercase()))
}

/// Returns the key that produces `ch`.
///
/// Letters are looked up case-insensitively, digits map to themselves and
/// `+` maps to `0`. Anything else yields [`UNKNOWN`].
///
/// ```
/// use t9search::keypad;
///
/// assert_eq!(keypad::digit_of('s'), '7');
/// assert_eq!(keypad::digit_of('+'), '0');
/// assert_eq!(keypad::digit_of(' '), keypad::UNKNOWN);
/// ```
pub fn digit_of(ch: char) -> char {
    if ch.is_ascii() {
        REVERSE[ch.to_ascii_lowercase() as usize] as char
    } else {
        UNKNOWN
    }
}
