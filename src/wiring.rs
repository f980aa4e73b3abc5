//! Wiring catalog: the closed set of rotor, reflector and entry wheel
//! variants and their permutation tables.
//!
//! The catalog is built once on first access and is read-only afterwards, so
//! any number of engines may read it concurrently.

use std::fmt;
use std::str::FromStr;

use log::trace;
use once_cell::sync::Lazy;

use crate::error::UnknownVariant;
use crate::utils::alphabet::{self, ALPHABET_SIZE};

/// What role a variant plays in the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariantKind {
    /// A signal rotor that can sit in a rotor slot.
    Rotor,
    /// A reflector, the terminal unit of the chain.
    Reflector,
    /// A static entry wheel between plugboard and rotors.
    EntryWheel,
}

/// Every wiring known to the catalog.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Variant {
    I,
    II,
    III,
    IV,
    V,
    VI,
    VII,
    VIII,
    Beta,
    Gamma,
    IK,
    IIK,
    IIIK,
    A,
    B,
    C,
    BThin,
    CThin,
    UkwK,
    Etw,
    EtwK,
}

impl Variant {
    /// All variants in catalog order.
    pub const ALL: [Variant; 21] = [
        Variant::I,
        Variant::II,
        Variant::III,
        Variant::IV,
        Variant::V,
        Variant::VI,
        Variant::VII,
        Variant::VIII,
        Variant::Beta,
        Variant::Gamma,
        Variant::IK,
        Variant::IIK,
        Variant::IIIK,
        Variant::A,
        Variant::B,
        Variant::C,
        Variant::BThin,
        Variant::CThin,
        Variant::UkwK,
        Variant::Etw,
        Variant::EtwK,
    ];

    /// The canonical name used in setup strings.
    pub fn name(self) -> &'static str {
        match self {
            Variant::I => "I",
            Variant::II => "II",
            Variant::III => "III",
            Variant::IV => "IV",
            Variant::V => "V",
            Variant::VI => "VI",
            Variant::VII => "VII",
            Variant::VIII => "VIII",
            Variant::Beta => "BETA",
            Variant::Gamma => "GAMMA",
            Variant::IK => "I_K",
            Variant::IIK => "II_K",
            Variant::IIIK => "III_K",
            Variant::A => "A",
            Variant::B => "B",
            Variant::C => "C",
            Variant::BThin => "B_THIN",
            Variant::CThin => "C_THIN",
            Variant::UkwK => "UKW_K",
            Variant::Etw => "ETW",
            Variant::EtwK => "ETW_K",
        }
    }

    pub fn kind(self) -> VariantKind {
        match self {
            Variant::A
            | Variant::B
            | Variant::C
            | Variant::BThin
            | Variant::CThin
            | Variant::UkwK => VariantKind::Reflector,
            Variant::Etw | Variant::EtwK => VariantKind::EntryWheel,
            _ => VariantKind::Rotor,
        }
    }

    pub fn is_reflector(self) -> bool {
        self.kind() == VariantKind::Reflector
    }

    pub fn is_rotor(self) -> bool {
        self.kind() == VariantKind::Rotor
    }

    /// The reflector subset of the catalog.
    pub fn reflectors() -> impl Iterator<Item = Variant> {
        Self::ALL.into_iter().filter(|v| v.is_reflector())
    }

    /// The signal rotor subset of the catalog.
    pub fn rotors() -> impl Iterator<Item = Variant> {
        Self::ALL.into_iter().filter(|v| v.is_rotor())
    }

    /// Looks up this variant's wiring.
    pub fn wiring(self) -> &'static Wiring {
        wiring_for(self)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = UnknownVariant;

    /// Parses a variant name case-insensitively (`"beta"`, `"I_K"`, `"B_THIN"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|v| v.name() == wanted)
            .ok_or_else(|| UnknownVariant {
                name: s.to_string(),
            })
    }
}

/// Set of notch positions on a rotor, one bit per alphabet position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Notches(u32);

impl Notches {
    /// A rotor without turnover notch.
    pub const NONE: Notches = Notches(0);

    /// Builds a notch set from letters, e.g. `b"ZM"`.
    const fn from_letters(letters: &[u8]) -> Self {
        let mut bits = 0u32;
        let mut i = 0;
        while i < letters.len() {
            bits |= 1u32 << (letters[i] - b'A') as u32;
            i += 1;
        }
        Notches(bits)
    }

    pub fn contains(self, position: u8) -> bool {
        (position as usize) < ALPHABET_SIZE && self.0 & (1u32 << position) != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Rotates every notch by `offset` positions.
    pub fn shifted(self, offset: i32) -> Self {
        let mut bits = 0u32;
        for p in self.positions() {
            bits |= 1u32 << alphabet::shift(p, offset);
        }
        Notches(bits)
    }

    /// Notch positions in ascending order.
    pub fn positions(self) -> impl Iterator<Item = u8> {
        (0..ALPHABET_SIZE as u8).filter(move |&p| self.contains(p))
    }
}

/// A catalog entry: forward permutation, its inverse, and notch set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wiring {
    pub variant: Variant,
    pub forward: [u8; ALPHABET_SIZE],
    pub inverse: [u8; ALPHABET_SIZE],
    pub notches: Notches,
}

impl Wiring {
    fn new(variant: Variant, letters: &[u8; ALPHABET_SIZE], notches: Notches) -> Self {
        let forward = (*letters).map(|b| b - b'A');
        Wiring {
            variant,
            forward,
            inverse: alphabet::invert(&forward),
            notches,
        }
    }

    /// The forward table rendered as letters.
    pub fn letters(&self) -> String {
        alphabet::render_table(&self.forward)
    }
}

/// Catalog indexed by `Variant as usize`.
static CATALOG: Lazy<Vec<Wiring>> = Lazy::new(|| {
    trace!("building wiring catalog");
    Variant::ALL
        .iter()
        .map(|&v| {
            let (letters, notches) = table_for(v);
            let wiring = Wiring::new(v, letters, notches);
            debug_assert!(alphabet::is_permutation(&wiring.forward));
            debug_assert!(!v.is_reflector() || alphabet::is_reflection(&wiring.forward));
            wiring
        })
        .collect()
});

fn table_for(variant: Variant) -> (&'static [u8; ALPHABET_SIZE], Notches) {
    match variant {
        // Enigma I
        Variant::I => (b"EKMFLGDQVZNTOWYHXUSPAIBRCJ", Notches::from_letters(b"Q")),
        Variant::II => (b"AJDKSIRUXBLHWTMCQGZNPYFVOE", Notches::from_letters(b"E")),
        Variant::III => (b"BDFHJLCPRTXVZNYEIWGAKMUSQO", Notches::from_letters(b"V")),
        // M3 Army
        Variant::IV => (b"ESOVPZJAYQUIRHXLNFTGKDCMWB", Notches::from_letters(b"J")),
        Variant::V => (b"VZBRGITYUPSDNHLXAWMJQOFECK", Notches::from_letters(b"Z")),
        // M3 & M4 Naval
        Variant::VI => (b"JPGVOUMFYQBENHZRDKASXLICTW", Notches::from_letters(b"ZM")),
        Variant::VII => (b"NZJHGRCXMYSWBOUFAIVLPEKQDT", Notches::from_letters(b"ZM")),
        Variant::VIII => (b"FKQHTLXOCBJSPDZRAMEWNIUYGV", Notches::from_letters(b"ZM")),
        // M4 R2
        Variant::Beta => (b"LEYJVCNIXWPBQMDRTAKZGFUHOS", Notches::NONE),
        Variant::Gamma => (b"FSOKANUERHMBTIYCWLQPZXVGJD", Notches::NONE),
        // Swiss K
        Variant::IK => (b"PEZUOHXSCVFMTBGLRINQJWAYDK", Notches::NONE),
        Variant::IIK => (b"ZOUESYDKFWPCIQXHMVBLGNJRAT", Notches::NONE),
        Variant::IIIK => (b"EHRVXGAOBQUSIMZFLYNWKTPDJC", Notches::NONE),
        // Reflectors
        Variant::A => (b"EJMZALYXVBWFCRQUONTSPIKHGD", Notches::NONE),
        Variant::B => (b"YRUHQSLDPXNGOKMIEBFZCWVJAT", Notches::NONE),
        Variant::C => (b"FVPJIAOYEDRZXWGCTKUQSBNMHL", Notches::NONE),
        Variant::BThin => (b"ENKQAUYWJICOPBLMDXZVFTHRGS", Notches::NONE),
        Variant::CThin => (b"RDOBJNTKVEHMLFCWZAXGYIPSUQ", Notches::NONE),
        Variant::UkwK => (b"IMETCGFRAYSQBZXWLHKDVUPOJN", Notches::NONE),
        // Entry wheels
        Variant::Etw => (b"ABCDEFGHIJKLMNOPQRSTUVWXYZ", Notches::NONE),
        Variant::EtwK => (b"QWERTZUIOASDFGHJKPYXCVBNML", Notches::NONE),
    }
}

/// Returns the catalog entry for `variant`.
///
/// # Examples
///
/// ```
/// use rotorcrypt::wiring::{wiring_for, Variant};
///
/// let rotor_i = wiring_for(Variant::I);
/// assert_eq!(rotor_i.letters(), "EKMFLGDQVZNTOWYHXUSPAIBRCJ");
/// assert!(rotor_i.notches.contains(16)); // Q
/// ```
pub fn wiring_for(variant: Variant) -> &'static Wiring {
    &CATALOG[variant as usize]
}

/// Looks up a wiring by textual identifier.
///
/// # Errors
/// Returns [`UnknownVariant`] if `name` is not in the catalog.
pub fn lookup(name: &str) -> Result<&'static Wiring, UnknownVariant> {
    name.parse::<Variant>().map(wiring_for)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_covers_every_variant() {
        for v in Variant::ALL {
            assert_eq!(wiring_for(v).variant, v);
        }
    }

    #[test]
    fn test_every_wiring_is_a_permutation() {
        for v in Variant::ALL {
            let w = wiring_for(v);
            assert!(alphabet::is_permutation(&w.forward), "{} is not a bijection", v);
            assert_eq!(alphabet::invert(&w.forward), w.inverse);
        }
    }

    #[test]
    fn test_reflectors_are_fixed_point_free_involutions() {
        let mut count = 0;
        for v in Variant::reflectors() {
            assert!(alphabet::is_reflection(&wiring_for(v).forward), "{} is not a reflection", v);
            count += 1;
        }
        assert_eq!(count, 6);
    }

    #[test]
    fn test_only_stepping_rotors_have_notches() {
        for v in Variant::ALL {
            let has_notch = !wiring_for(v).notches.is_empty();
            let expected = matches!(
                v,
                Variant::I
                    | Variant::II
                    | Variant::III
                    | Variant::IV
                    | Variant::V
                    | Variant::VI
                    | Variant::VII
                    | Variant::VIII
            );
            assert_eq!(has_notch, expected, "notch mismatch for {}", v);
        }
    }

    #[test]
    fn test_naval_rotors_have_two_notches() {
        let notches: Vec<u8> = wiring_for(Variant::VI).notches.positions().collect();
        assert_eq!(notches, vec![12, 25]); // M, Z
    }

    #[test]
    fn test_notches_shifted() {
        let q = Notches::from_letters(b"Q");
        assert!(q.shifted(-1).contains(15));
        assert!(q.shifted(10).contains(0));
        assert!(!q.shifted(10).contains(16));
    }

    #[test]
    fn test_parse_names_case_insensitive() {
        assert_eq!("beta".parse::<Variant>(), Ok(Variant::Beta));
        assert_eq!("Gamma".parse::<Variant>(), Ok(Variant::Gamma));
        assert_eq!("iii".parse::<Variant>(), Ok(Variant::III));
        assert_eq!("b_thin".parse::<Variant>(), Ok(Variant::BThin));
        assert_eq!("UKW_K".parse::<Variant>(), Ok(Variant::UkwK));
    }

    #[test]
    fn test_parse_unknown_name() {
        let err = "3213".parse::<Variant>().unwrap_err();
        assert_eq!(err.name, "3213");
        assert!(lookup("IX").is_err());
    }

    #[test]
    fn test_names_round_trip() {
        for v in Variant::ALL {
            assert_eq!(v.name().parse::<Variant>(), Ok(v));
        }
    }

    #[test]
    fn test_kinds() {
        assert!(Variant::B.is_reflector());
        assert!(!Variant::B.is_rotor());
        assert!(Variant::Beta.is_rotor());
        assert_eq!(Variant::Etw.kind(), VariantKind::EntryWheel);
        assert_eq!(Variant::rotors().count(), 13);
    }

    #[test]
    fn test_entry_wheel_is_identity() {
        assert_eq!(lookup("ETW").unwrap().letters(), alphabet::ALPHABET);
    }

    #[test]
    fn test_catalog_from_many_threads() {
        let handles: Vec<_> = (0..8)
            .map(|_| std::thread::spawn(|| wiring_for(Variant::B).letters()))
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), "YRUHQSLDPXNGOKMIEBFZCWVJAT");
        }
    }
}
