//! Conversions between reflector wiring tables and their wire pairs.
//!
//! A reflector connects the alphabet with 13 wires, each joining two letters.
//! Rewiring searches work on the pair view; the engine works on the table
//! view.

use crate::utils::alphabet::ALPHABET_SIZE;

/// One reflector wire, stored with the lower position first.
pub type WirePair = (u8, u8);

/// Splits an involutive wiring table into its wires, sorted by lower end.
///
/// Fixed points (letters wired to themselves) produce no pair.
pub fn wiring_pairs(table: &[u8; ALPHABET_SIZE]) -> Vec<WirePair> {
    table
        .iter()
        .enumerate()
        .filter(|&(i, &p)| (i as u8) < p)
        .map(|(i, &p)| (i as u8, p))
        .collect()
}

/// Builds a wiring table from wire pairs. Letters not covered by any pair map
/// to themselves.
pub fn pairs_to_wiring(pairs: &[WirePair]) -> [u8; ALPHABET_SIZE] {
    let mut table = [0u8; ALPHABET_SIZE];
    for (i, slot) in table.iter_mut().enumerate() {
        *slot = i as u8;
    }
    for &(a, b) in pairs {
        table[a as usize] = b;
        table[b as usize] = a;
    }
    table
}

/// Returns the pair with the lower position first.
pub fn normalized(a: u8, b: u8) -> WirePair {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
