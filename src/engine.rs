//! Engine: the complete rotor cipher machine.
//!
//! Owns a rotor chain holding N signal rotors plus one reflector, the
//! plugboard, and the construction-time positions used by [`Engine::reset`].
//!
//! Per accepted character the engine:
//!
//! 1. Steps the rotors (rightmost always; double-stepping on the middle).
//! 2. Passes the signal through the plugboard.
//! 3. Passes it inward through the rotors, right to left, then the reflector.
//! 4. Passes it outward through the rotors, left to right.
//! 5. Translates out of the rightmost rotor's frame (static entry wheel).
//! 6. Passes it through the plugboard again.

use std::fmt;

use log::{debug, trace};

use crate::config::{self, EngineConfiguration};
use crate::error::{CharacterError, ConfigurationError};
use crate::plugboard::Plugboard;
use crate::rotor::{RotorChain, RotorId};
use crate::utils::alphabet::{self, ALPHABET_SIZE};
use crate::wiring::{wiring_for, Variant};

/// A configured rotor cipher machine.
///
/// Encoding is symmetric: resetting the engine and feeding back the
/// ciphertext yields the plaintext.
///
/// # Examples
///
/// ```
/// use rotorcrypt::Engine;
///
/// let mut engine = Engine::from_setup("I-II-III B 01-01-01 A-A-Z").unwrap();
/// assert_eq!(engine.encode_character('A', false).unwrap(), 'U');
/// ```
#[derive(Debug, Clone)]
pub struct Engine {
    chain: RotorChain,
    /// Signal rotors, rightmost first.
    rotors: Vec<RotorId>,
    reflector: RotorId,
    plugboard: Plugboard,
    /// Visible start positions, rightmost first.
    initial_positions: Vec<u8>,
}

impl Engine {
    /// Assembles an engine from a configuration.
    ///
    /// # Errors
    /// Returns the [`ConfigurationError`] reported by
    /// [`EngineConfiguration::validate`]. Nothing is built on error.
    pub fn new(configuration: &EngineConfiguration) -> Result<Self, ConfigurationError> {
        configuration.validate()?;
        debug!("building engine {}", configuration);

        let count = configuration.rotors.len();
        let mut chain = RotorChain::with_capacity(count + 1);
        let mut rotors = Vec::with_capacity(count);
        let mut initial_positions = Vec::with_capacity(count);

        // Configurations are written leftmost first; the chain runs rightmost first.
        for i in (0..count).rev() {
            let visible = alphabet::index_of(configuration.positions[i]).ok_or_else(|| {
                ConfigurationError::InvalidPosition(configuration.positions[i].to_string())
            })?;
            let ring = configuration.ring_settings[i] - 1;
            let id = chain.new_rotor(wiring_for(configuration.rotors[i]), ring, visible);
            if let Some(&right) = rotors.last() {
                chain.link(right, id);
            }
            rotors.push(id);
            initial_positions.push(visible);
        }

        let reflector = chain.new_reflector(wiring_for(configuration.reflector));
        if let Some(&leftmost) = rotors.last() {
            chain.link(leftmost, reflector);
        }
        debug_assert!(chain.is_reflector(reflector));

        Ok(Engine {
            chain,
            rotors,
            reflector,
            plugboard: configuration.plugboard.clone(),
            initial_positions,
        })
    }

    /// Parses a setup string and assembles the engine.
    ///
    /// # Errors
    /// Any [`ConfigurationError`] from parsing or assembly.
    pub fn from_setup(setup: &str) -> Result<Self, ConfigurationError> {
        Engine::new(&setup.parse()?)
    }

    /// Number of signal rotors, reflector excluded.
    pub fn rotor_count(&self) -> usize {
        self.rotors.len()
    }

    /// Enciphers one letter.
    ///
    /// The rotors step before the signal passes through them. A rejected
    /// character leaves the rotors untouched.
    ///
    /// # Parameters
    /// - `letter`: an ASCII letter in either case.
    /// - `reset_after`: restore the start positions once the letter is done.
    ///
    /// # Returns
    /// The enciphered letter, uppercase.
    ///
    /// # Errors
    /// Returns [`CharacterError::NotALetter`] for anything outside `a-zA-Z`.
    pub fn encode_character(
        &mut self,
        letter: char,
        reset_after: bool,
    ) -> Result<char, CharacterError> {
        let position = alphabet::index_of(letter).ok_or(CharacterError::NotALetter(letter))?;
        let out = self.press(position);
        if reset_after {
            self.reset();
        }
        Ok(alphabet::letter_at(out))
    }

    /// Enciphers a single-symbol string such as `"Q"`.
    ///
    /// # Errors
    /// Returns [`CharacterError::NotSingleSymbol`] if `symbol` is not exactly
    /// one character, otherwise as [`encode_character`](Self::encode_character).
    pub fn encode_symbol(&mut self, symbol: &str, reset_after: bool) -> Result<char, CharacterError> {
        let mut chars = symbol.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => self.encode_character(c, reset_after),
            _ => Err(CharacterError::NotSingleSymbol(symbol.to_string())),
        }
    }

    /// Enciphers a message.
    ///
    /// Letters are upper-cased and enciphered one by one. Spaces are copied
    /// to the output and do not step the rotors. The whole message is checked
    /// before the first rotor moves.
    ///
    /// # Errors
    /// Returns [`CharacterError::NotALetter`] for the first character that is
    /// neither a letter nor a space.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcrypt::Engine;
    ///
    /// let mut engine =
    ///     Engine::from_setup("I-II-III B 01-01-01 A-A-Z HL-MO-AJ-CX-BZ-SR-NI-YW-DG-PK").unwrap();
    /// let code = engine.encode_message("hello world", true).unwrap();
    /// assert_eq!(code, "RFKTM BXVVW");
    /// assert_eq!(engine.encode_message(&code, true).unwrap(), "HELLO WORLD");
    /// ```
    pub fn encode_message(&mut self, text: &str, reset_after: bool) -> Result<String, CharacterError> {
        if let Some(bad) = text
            .chars()
            .find(|&c| c != ' ' && alphabet::index_of(c).is_none())
        {
            return Err(CharacterError::NotALetter(bad));
        }

        let out: String = text
            .chars()
            .map(|c| match alphabet::index_of(c) {
                Some(position) => alphabet::letter_at(self.press(position)),
                None => c,
            })
            .collect();
        if reset_after {
            self.reset();
        }
        Ok(out)
    }

    /// Restores every signal rotor to its start position. Wiring, rings,
    /// reflector and plugboard are left as they are.
    pub fn reset(&mut self) {
        trace!("reset");
        for (&id, &visible) in self.rotors.iter().zip(&self.initial_positions) {
            self.chain.set_position(id, visible);
        }
    }

    /// The reflector's variant label and current wiring table.
    ///
    /// After [`set_reflector_wiring`](Self::set_reflector_wiring) the label
    /// is still the one the reflector was built with.
    pub fn reflector(&self) -> (Variant, [u8; ALPHABET_SIZE]) {
        (
            self.chain.variant(self.reflector),
            self.chain.forward(self.reflector),
        )
    }

    /// Replaces the reflector with a catalog reflector.
    ///
    /// # Errors
    /// Returns [`ConfigurationError::NotAReflector`] if `variant` is not a
    /// reflector.
    pub fn set_reflector(&mut self, variant: Variant) -> Result<(), ConfigurationError> {
        if !variant.is_reflector() {
            return Err(config::not_a_reflector(variant.name()));
        }
        debug!("reflector set to {}", variant);
        self.chain.set_catalog_wiring(self.reflector, wiring_for(variant));
        Ok(())
    }

    /// Replaces the reflector wiring with an arbitrary table.
    ///
    /// The table need not be an involution, which allows simulating a
    /// tampered reflector; it must still be a permutation.
    ///
    /// # Errors
    /// Returns [`ConfigurationError::InvalidWiring`] if `table` is not a
    /// permutation of the alphabet.
    pub fn set_reflector_wiring(
        &mut self,
        table: [u8; ALPHABET_SIZE],
    ) -> Result<(), ConfigurationError> {
        if !alphabet::is_permutation(&table) {
            return Err(ConfigurationError::InvalidWiring(format!("{:?}", table)));
        }
        trace!("reflector wiring set to {}", alphabet::render_table(&table));
        self.chain.set_wiring(self.reflector, table);
        Ok(())
    }

    /// Visible rotor positions, leftmost first.
    pub fn current_positions(&self) -> Vec<char> {
        self.rotors
            .iter()
            .rev()
            .map(|&id| alphabet::letter_at(self.chain.visible_position(id)))
            .collect()
    }

    /// The configuration describing the engine's current state.
    pub fn configuration(&self) -> EngineConfiguration {
        EngineConfiguration {
            rotors: self
                .rotors
                .iter()
                .rev()
                .map(|&id| self.chain.variant(id))
                .collect(),
            reflector: self.chain.variant(self.reflector),
            ring_settings: self
                .rotors
                .iter()
                .rev()
                .map(|&id| self.chain.ring(id) + 1)
                .collect(),
            positions: self.current_positions(),
            plugboard: self.plugboard.clone(),
        }
    }

    /// Steps the rotors and passes one position through the machine.
    fn press(&mut self, position: u8) -> u8 {
        self.step();
        let out = self.signal(position);
        trace!(
            "{} -> {} at {:?}",
            alphabet::letter_at(position),
            alphabet::letter_at(out),
            self.current_positions()
        );
        out
    }

    /// Advances the rotors for one keypress.
    ///
    /// Only the three rightmost rotors step. The second rotor also steps
    /// whenever it sits at its own notch.
    fn step(&mut self) {
        let turnover = self.chain.rotate(self.rotors[0]);
        let Some(&middle) = self.rotors.get(1) else {
            return;
        };
        if !turnover && !self.chain.is_at_notch(middle) {
            return;
        }
        if self.chain.rotate(middle) {
            if let Some(&third) = self.rotors.get(2) {
                self.chain.rotate(third);
            }
        }
    }

    /// Signal path for a single position, without stepping.
    fn signal(&self, position: u8) -> u8 {
        let mut pos = self.plugboard.encode(position);
        for &id in &self.rotors {
            pos = self.chain.encode_inward(id, pos);
        }
        pos = self.chain.encode_inward(self.reflector, pos);
        for &id in self.rotors.iter().rev() {
            pos = self.chain.encode_outward(id, pos);
        }
        let rightmost = self.chain.position(self.rotors[0]);
        pos = alphabet::shift(pos, -(rightmost as i32));
        self.plugboard.encode(pos)
    }
}

impl fmt::Display for Engine {
    /// Renders the current state as a setup string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.configuration())
    }
}

/// Assembles an engine from a configuration.
///
/// # Errors
/// See [`Engine::new`].
pub fn build_engine(configuration: &EngineConfiguration) -> Result<Engine, ConfigurationError> {
    Engine::new(configuration)
}
