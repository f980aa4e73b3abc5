//! EngineConfiguration and the setup-string notation.
//!
//! A setup string lists, separated by whitespace: the rotors (leftmost
//! first), the reflector, the ring settings, the initial positions and an
//! optional plugboard, each list hyphen-delimited:
//!
//! ```text
//! BETA-GAMMA-V C 04-02-14 M-J-M KI-XN-FL
//! ```

use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::error::ConfigurationError;
use crate::plugboard::Plugboard;
use crate::utils::alphabet::{self, ALPHABET_SIZE};
use crate::wiring::Variant;

/// A validated machine configuration.
///
/// Lists are written the conventional way: index 0 is the leftmost rotor,
/// the one next to the reflector. Ring settings are 1-based (1 = `A`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfiguration {
    pub rotors: Vec<Variant>,
    pub reflector: Variant,
    pub ring_settings: Vec<u8>,
    pub positions: Vec<char>,
    pub plugboard: Plugboard,
}

impl EngineConfiguration {
    /// Builds and validates a configuration. Positions are upper-cased.
    ///
    /// # Errors
    /// Any [`ConfigurationError`] reported by [`validate`](Self::validate).
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcrypt::config::EngineConfiguration;
    /// use rotorcrypt::plugboard::Plugboard;
    /// use rotorcrypt::wiring::Variant;
    ///
    /// let config = EngineConfiguration::new(
    ///     vec![Variant::I, Variant::II, Variant::III],
    ///     Variant::B,
    ///     vec![1, 1, 1],
    ///     vec!['a', 'a', 'z'],
    ///     Plugboard::new(),
    /// )
    /// .unwrap();
    /// assert_eq!(config.to_string(), "I-II-III B 01-01-01 A-A-Z");
    /// ```
    pub fn new(
        rotors: Vec<Variant>,
        reflector: Variant,
        ring_settings: Vec<u8>,
        positions: Vec<char>,
        plugboard: Plugboard,
    ) -> Result<Self, ConfigurationError> {
        let config = EngineConfiguration {
            rotors,
            reflector,
            ring_settings,
            positions: positions.iter().map(|c| c.to_ascii_uppercase()).collect(),
            plugboard,
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks every invariant of the configuration.
    ///
    /// # Errors
    /// - [`ConfigurationError::NoRotors`] if no rotor is listed.
    /// - [`ConfigurationError::MismatchedSettings`] if rotors, ring settings
    ///   and positions differ in count.
    /// - [`ConfigurationError::NotARotor`] for a non-rotor in a rotor slot.
    /// - [`ConfigurationError::NotAReflector`] for a non-reflector in the
    ///   reflector slot.
    /// - [`ConfigurationError::InvalidRingSetting`] for rings outside 1..=26.
    /// - [`ConfigurationError::InvalidPosition`] for non-letter positions.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.rotors.is_empty() {
            return Err(ConfigurationError::NoRotors);
        }
        if self.rotors.len() != self.ring_settings.len()
            || self.rotors.len() != self.positions.len()
        {
            return Err(ConfigurationError::MismatchedSettings {
                rotors: self.rotors.len(),
                rings: self.ring_settings.len(),
                positions: self.positions.len(),
            });
        }
        if let Some(v) = self.rotors.iter().find(|v| !v.is_rotor()) {
            return Err(ConfigurationError::NotARotor(v.name().to_string()));
        }
        if !self.reflector.is_reflector() {
            return Err(not_a_reflector(self.reflector.name()));
        }
        if let Some(r) = self
            .ring_settings
            .iter()
            .find(|&&r| !(1..=ALPHABET_SIZE).contains(&(r as usize)))
        {
            return Err(ConfigurationError::InvalidRingSetting(r.to_string()));
        }
        if let Some(c) = self
            .positions
            .iter()
            .find(|&&c| alphabet::index_of(c).is_none())
        {
            return Err(ConfigurationError::InvalidPosition(c.to_string()));
        }
        Ok(())
    }
}

/// Error for a non-reflector identifier, listing the accepted ones.
pub(crate) fn not_a_reflector(name: &str) -> ConfigurationError {
    let accepted: Vec<&str> = Variant::reflectors().map(Variant::name).collect();
    ConfigurationError::NotAReflector(name.to_string(), accepted.join(", "))
}

fn parse_ring(token: &str) -> Result<u8, ConfigurationError> {
    token
        .parse::<u8>()
        .ok()
        .filter(|&r| (1..=ALPHABET_SIZE).contains(&(r as usize)))
        .ok_or_else(|| ConfigurationError::InvalidRingSetting(token.to_string()))
}

/// Parses one start position: a single letter, upper-cased.
///
/// # Errors
/// Returns [`ConfigurationError::InvalidPosition`] for anything else.
pub fn parse_position(token: &str) -> Result<char, ConfigurationError> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if alphabet::index_of(c).is_some() => Ok(c.to_ascii_uppercase()),
        _ => Err(ConfigurationError::InvalidPosition(token.to_string())),
    }
}

impl FromStr for EngineConfiguration {
    type Err = ConfigurationError;

    /// Parses `ROTORS REFLECTOR RINGS POSITIONS [PLUGS]`, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        debug!("parsing setup '{}'", s);
        let tokens: Vec<&str> = s.split_whitespace().collect();
        if !(4..=5).contains(&tokens.len()) {
            return Err(ConfigurationError::Malformed(s.to_string()));
        }

        let rotors = tokens[0]
            .split('-')
            .map(str::parse::<Variant>)
            .collect::<Result<Vec<_>, _>>()?;
        let reflector: Variant = tokens[1].parse()?;
        let ring_settings = tokens[2]
            .split('-')
            .map(parse_ring)
            .collect::<Result<Vec<_>, _>>()?;
        let positions = tokens[3]
            .split('-')
            .map(parse_position)
            .collect::<Result<Vec<_>, _>>()?;
        let plugboard = match tokens.get(4) {
            Some(plugs) => plugs.parse::<Plugboard>()?,
            None => Plugboard::new(),
        };

        EngineConfiguration::new(rotors, reflector, ring_settings, positions, plugboard)
    }
}

impl fmt::Display for EngineConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rotors: Vec<&str> = self.rotors.iter().map(|v| v.name()).collect();
        let rings: Vec<String> = self
            .ring_settings
            .iter()
            .map(|r| format!("{:02}", r))
            .collect();
        let positions: Vec<String> = self.positions.iter().map(char::to_string).collect();
        write!(
            f,
            "{} {} {} {}",
            rotors.join("-"),
            self.reflector,
            rings.join("-"),
            positions.join("-")
        )?;
        if !self.plugboard.is_empty() {
            write!(f, " {}", self.plugboard)?;
        }
        Ok(())
    }
}
