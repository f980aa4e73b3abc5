//! The fixed 26-letter alphabet used as the coordinate system for wiring
//! tables, rotor positions and plugboard leads.
//!
//! Positions are `u8` values in `0..26`. All arithmetic on positions wraps
//! modulo [`ALPHABET_SIZE`].

/// Number of symbols in the alphabet.
pub const ALPHABET_SIZE: usize = 26;

/// The alphabet in position order.
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Returns the position of an ASCII letter (either case), or `None` for any
/// other character.
///
/// # Examples
///
/// ```
/// use rotorcrypt::utils::alphabet;
///
/// assert_eq!(alphabet::index_of('A'), Some(0));
/// assert_eq!(alphabet::index_of('z'), Some(25));
/// assert_eq!(alphabet::index_of(' '), None);
/// ```
pub fn index_of(letter: char) -> Option<u8> {
    if letter.is_ascii_alphabetic() {
        Some(letter.to_ascii_uppercase() as u8 - b'A')
    } else {
        None
    }
}

/// Returns the uppercase letter at `position`, wrapping out-of-range values.
pub fn letter_at(position: u8) -> char {
    (b'A' + position % ALPHABET_SIZE as u8) as char
}

/// Adds a signed offset to a position, modulo 26.
pub fn shift(position: u8, offset: i32) -> u8 {
    (position as i32 + offset).rem_euclid(ALPHABET_SIZE as i32) as u8
}

/// Parses a 26-letter table such as `"EKMFLGDQVZNTOWYHXUSPAIBRCJ"` into a
/// position table.
///
/// Returns `None` if `table` is not exactly 26 letters. Whether the table is
/// a permutation is checked by [`is_permutation`].
pub fn parse_table(table: &str) -> Option<[u8; ALPHABET_SIZE]> {
    if table.chars().count() != ALPHABET_SIZE {
        return None;
    }
    let mut out = [0u8; ALPHABET_SIZE];
    for (slot, letter) in out.iter_mut().zip(table.chars()) {
        *slot = index_of(letter)?;
    }
    Some(out)
}

/// Renders a position table as letters.
pub fn render_table(table: &[u8; ALPHABET_SIZE]) -> String {
    table.iter().map(|&p| letter_at(p)).collect()
}

/// Returns true if every position appears exactly once in `table`.
pub fn is_permutation(table: &[u8; ALPHABET_SIZE]) -> bool {
    let mut seen = [false; ALPHABET_SIZE];
    for &p in table {
        let p = p as usize;
        if p >= ALPHABET_SIZE || seen[p] {
            return false;
        }
        seen[p] = true;
    }
    true
}

/// Returns the inverse of a permutation table.
///
/// The caller guarantees `table` is a permutation.
pub fn invert(table: &[u8; ALPHABET_SIZE]) -> [u8; ALPHABET_SIZE] {
    let mut inverse = [0u8; ALPHABET_SIZE];
    for (i, &p) in table.iter().enumerate() {
        inverse[p as usize] = i as u8;
    }
    inverse
}

/// Returns true if `table` is its own inverse and maps no letter to itself.
pub fn is_reflection(table: &[u8; ALPHABET_SIZE]) -> bool {
    table
        .iter()
        .enumerate()
        .all(|(i, &p)| {
            let p = p as usize;
            p < ALPHABET_SIZE && p != i && table[p] as usize == i
        })
}
