//! Plugboard: up to ten leads, each swapping a pair of letters before the
//! signal enters the rotors and again after it leaves them.

use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::error::PlugboardError;
use crate::utils::alphabet::{self, ALPHABET_SIZE};

/// Maximum number of leads a plugboard accepts.
pub const MAX_PAIRS: usize = 10;

/// A lead connecting two distinct letters. `AG` and `GA` are the same lead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlugLead {
    one: u8,
    two: u8,
}

impl PlugLead {
    /// Connects the letters `a` and `b`.
    ///
    /// # Errors
    /// Returns [`PlugboardError::InvalidLead`] if either character is not a
    /// letter or both are the same letter.
    pub fn new(a: char, b: char) -> Result<Self, PlugboardError> {
        let invalid = || PlugboardError::InvalidLead(format!("{}{}", a, b));
        let one = alphabet::index_of(a).ok_or_else(invalid)?;
        let two = alphabet::index_of(b).ok_or_else(invalid)?;
        if one == two {
            return Err(invalid());
        }
        Ok(PlugLead { one, two })
    }

    pub fn plug_one(&self) -> u8 {
        self.one
    }

    pub fn plug_two(&self) -> u8 {
        self.two
    }

    /// Swaps `position` if it is one of this lead's ends.
    pub fn encode(&self, position: u8) -> u8 {
        if position == self.one {
            self.two
        } else if position == self.two {
            self.one
        } else {
            position
        }
    }

    fn touches(&self, position: u8) -> bool {
        position == self.one || position == self.two
    }

    fn same_wire(&self, other: &PlugLead) -> bool {
        (self.one == other.one && self.two == other.two)
            || (self.one == other.two && self.two == other.one)
    }
}

impl FromStr for PlugLead {
    type Err = PlugboardError;

    /// Parses a two-letter lead such as `"AG"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(a), Some(b), None) => PlugLead::new(a, b),
            _ => Err(PlugboardError::InvalidLead(s.to_string())),
        }
    }
}

impl fmt::Display for PlugLead {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            alphabet::letter_at(self.one),
            alphabet::letter_at(self.two)
        )
    }
}

/// Involutive partial permutation built from disjoint leads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Plugboard {
    wiring: [Option<u8>; ALPHABET_SIZE],
    leads: Vec<PlugLead>,
}

impl Plugboard {
    /// Creates an empty plugboard where every letter passes through.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a plugboard from a set of leads.
    ///
    /// # Errors
    /// Fails on the first lead [`add`](Self::add) rejects.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcrypt::plugboard::{PlugLead, Plugboard};
    ///
    /// let board = Plugboard::from_leads([
    ///     PlugLead::new('A', 'G').unwrap(),
    ///     PlugLead::new('K', 'I').unwrap(),
    /// ])
    /// .unwrap();
    /// assert_eq!(board.encode(0), 6);
    /// assert_eq!(board.encode(6), 0);
    /// assert_eq!(board.encode(3), 3);
    /// ```
    pub fn from_leads<I>(leads: I) -> Result<Self, PlugboardError>
    where
        I: IntoIterator<Item = PlugLead>,
    {
        let mut board = Plugboard::new();
        for lead in leads {
            board.add(lead)?;
        }
        Ok(board)
    }

    /// Connects a lead.
    ///
    /// Both ends are registered together, or neither is.
    ///
    /// # Errors
    /// - [`PlugboardError::TooManyPlugs`] if the board already holds
    ///   [`MAX_PAIRS`] leads.
    /// - [`PlugboardError::PlugAlreadyInUse`] if either letter is already
    ///   connected.
    pub fn add(&mut self, lead: PlugLead) -> Result<(), PlugboardError> {
        debug!("adding lead {} to plugboard {}", lead, self);
        if self.leads.len() + 1 > MAX_PAIRS {
            return Err(PlugboardError::TooManyPlugs { max: MAX_PAIRS });
        }
        if self.wiring[lead.one as usize].is_some() || self.wiring[lead.two as usize].is_some() {
            return Err(PlugboardError::PlugAlreadyInUse {
                lead: lead.to_string(),
            });
        }
        self.wiring[lead.one as usize] = Some(lead.two);
        self.wiring[lead.two as usize] = Some(lead.one);
        self.leads.push(lead);
        Ok(())
    }

    /// Disconnects a lead. Does nothing if that lead is not connected.
    pub fn remove(&mut self, lead: PlugLead) {
        debug!("removing lead {}", lead);
        if let Some(index) = self.leads.iter().position(|l| l.same_wire(&lead)) {
            self.leads.remove(index);
            self.wiring[lead.one as usize] = None;
            self.wiring[lead.two as usize] = None;
        }
    }

    /// Maps a position through the board. Applying it twice is the identity.
    pub fn encode(&self, position: u8) -> u8 {
        self.wiring
            .get(position as usize)
            .copied()
            .flatten()
            .unwrap_or(position)
    }

    /// Returns true if `position` is connected by some lead.
    pub fn is_connected(&self, position: u8) -> bool {
        self.leads.iter().any(|l| l.touches(position))
    }

    /// Connected leads, in insertion order.
    pub fn leads(&self) -> &[PlugLead] {
        &self.leads
    }

    pub fn len(&self) -> usize {
        self.leads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leads.is_empty()
    }
}

impl FromStr for Plugboard {
    type Err = PlugboardError;

    /// Parses leads written as `AB-CD-EF` (spaces also separate leads).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let leads = s
            .split(|c: char| c == '-' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .map(str::parse::<PlugLead>)
            .collect::<Result<Vec<_>, _>>()?;
        Plugboard::from_leads(leads)
    }
}

impl fmt::Display for Plugboard {
    /// Renders the leads as `AB-CD-EF`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, lead) in self.leads.iter().enumerate() {
            if i > 0 {
                f.write_str("-")?;
            }
            write!(f, "{}", lead)?;
        }
        Ok(())
    }
}
