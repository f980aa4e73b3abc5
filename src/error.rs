//! Error types for the rotorcrypt library.
//!
//! Configuration and plugboard errors are raised while a machine is being
//! assembled and never leave a partially mutated structure behind. Character
//! errors are raised per keypress and never advance the rotors.

use thiserror::Error;

/// A wiring identifier that is not part of the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown rotor or reflector variant '{name}'")]
pub struct UnknownVariant {
    /// The identifier as supplied by the caller.
    pub name: String,
}

/// Errors produced while building leads or adding them to a plugboard.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlugboardError {
    /// The lead does not connect two distinct letters of the alphabet.
    #[error("invalid lead '{0}': a lead connects two distinct letters A-Z")]
    InvalidLead(String),

    /// The plugboard already holds the maximum number of leads.
    #[error("too many plugs: specify {max} or fewer pairs")]
    TooManyPlugs { max: usize },

    /// One of the lead's letters is already connected.
    #[error("plug {lead} is already in use")]
    PlugAlreadyInUse { lead: String },
}

/// Errors produced while validating a configuration or assembling a machine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error(transparent)]
    UnknownVariant(#[from] UnknownVariant),

    #[error("invalid plugboard configuration: {0}")]
    Plugboard(#[from] PlugboardError),

    /// The configuration names no signal rotor at all.
    #[error("at least one rotor is required")]
    NoRotors,

    /// Rotor, ring setting and position counts disagree.
    #[error(
        "the number of rotors ({rotors}), ring settings ({rings}) and initial positions ({positions}) must be the same"
    )]
    MismatchedSettings {
        rotors: usize,
        rings: usize,
        positions: usize,
    },

    /// A reflector or entry wheel was placed in a rotor slot.
    #[error("{0} cannot be used as a rotor")]
    NotARotor(String),

    /// A non-reflector was placed in the reflector slot.
    #[error("invalid reflector {0}: it must be one of {1}")]
    NotAReflector(String, String),

    /// Ring settings are written 1..=26.
    #[error("ring setting {0} is outside 1..=26")]
    InvalidRingSetting(String),

    /// Initial positions are single letters A-Z.
    #[error("initial position '{0}' is not a letter A-Z")]
    InvalidPosition(String),

    /// A substituted wiring table is not a permutation of the alphabet.
    #[error("wiring is not a permutation of the alphabet: {0}")]
    InvalidWiring(String),

    /// The setup string does not have the expected shape.
    #[error("unable to set up machine from '{0}': expected 'ROTORS REFLECTOR RINGS POSITIONS [PLUGS]'")]
    Malformed(String),
}

/// Errors produced when a keypress cannot be enciphered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CharacterError {
    /// The character is outside the supported alphabet.
    #[error("'{0}' is not a letter in a-zA-Z")]
    NotALetter(char),

    /// The input was not exactly one symbol.
    #[error("expected exactly one letter, got '{0}'")]
    NotSingleSymbol(String),
}
