const LOWERCASE: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

/// The characters a password may contain, 'a' through 'z' in order.
pub struct Alphabet;

impl Alphabet {
    pub const fn len() -> usize {
        LOWERCASE.len()
    }

    /// Maps an offset in [0, 25] to `'a' + offset`.
    pub fn letter(offset: u32) -> Option<char> {
        LOWERCASE.get(offset as usize).map(|byte| *byte as char)
    }

    /// Reduces any word onto the alphabet, `'a' + value % 26`.
    pub fn wrapping_letter(value: u32) -> char {
        LOWERCASE[value as usize % LOWERCASE.len()] as char
    }

    pub fn contains(c: char) -> bool {
        c.is_ascii_lowercase()
    }

    pub fn iter() -> impl Iterator<Item = char> {
        LOWERCASE.iter().map(|byte| *byte as char)
    }
}
