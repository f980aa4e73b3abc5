//! rotorcrypt: rotor cipher machine engine.
//!
//! Simulates an electromechanical rotor cipher machine: a keyboard-driven
//! substitution cipher whose alphabet changes after every character as wired
//! rotors turn, closed by a fixed reflector and wrapped in a plugboard.
//! Stepping reproduces the double-stepping of the middle rotor.
//!
//! Around the engine the crate provides a setup-string parser, an exhaustive
//! crib search over candidate configurations, and enumeration of rewired
//! reflectors.
//!
//! # Architecture
//!
//! ```text
//! alphabet / wiring  (26-letter coordinates, immutable wiring catalog)
//!     ↓
//! Plugboard          (up to 10 involutive letter swaps)
//! RotorChain         (arena of rotors + reflector, linked by RotorId)
//!     ↓
//! Engine             (stepping + full signal path)
//!     ↓
//! EngineConfiguration / setup strings
//!     ↓
//! CribSearch         (one engine per candidate, scoped worker threads)
//! ```
//!
//! # Examples
//!
//! Encode and decode a message:
//!
//! ```
//! use rotorcrypt::Engine;
//!
//! let mut engine =
//!     Engine::from_setup("I-II-III B 01-01-01 A-A-Z HL-MO-AJ-CX-BZ-SR-NI-YW-DG-PK").unwrap();
//!
//! let code = engine.encode_message("ARTIFICIALINTELLIGENCE", true).unwrap();
//! assert_eq!(code, "XABMTXRSXTLZEHCZEJBGUW");
//!
//! let text = engine.encode_message(&code, true).unwrap();
//! assert_eq!(text, "ARTIFICIALINTELLIGENCE");
//! ```
//!
//! Build a configuration by hand:
//!
//! ```
//! use rotorcrypt::{Engine, EngineConfiguration, Plugboard, Variant};
//!
//! let config = EngineConfiguration::new(
//!     vec![Variant::IV, Variant::V, Variant::Beta],
//!     Variant::B,
//!     vec![14, 9, 24],
//!     vec!['A', 'A', 'A'],
//!     Plugboard::new(),
//! )
//! .unwrap();
//!
//! let mut engine = Engine::new(&config).unwrap();
//! assert_eq!(engine.encode_character('H', false).unwrap(), 'Y');
//! ```

#![deny(clippy::all)]

pub mod breaker;
pub mod config;
pub mod engine;
pub mod error;
pub mod plugboard;
pub(crate) mod rotor;
pub mod utils;
pub mod wiring;

pub use breaker::{CribMatch, CribSearch, SearchSpace};
pub use config::EngineConfiguration;
pub use engine::{build_engine, Engine};
pub use error::{CharacterError, ConfigurationError, PlugboardError, UnknownVariant};
pub use plugboard::{PlugLead, Plugboard};
pub use wiring::{wiring_for, Variant, Wiring};
