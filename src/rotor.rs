//! RotorUnit: one wired disk of the machine.
//!
//! Rotors are stored in a [`RotorChain`] arena and referenced by [`RotorId`].
//! Each unit links to its mechanical neighbors by id, so the chain owns every
//! unit exactly once and the links are only used to read neighbor positions.
//!
//! Positions are kept ring-adjusted: a rotor whose window shows letter `w`
//! with ring setting `r` stores `p = w - r (mod 26)`. Notches are adjusted the
//! same way when the unit is built, so notch checks compare like with like.

use log::trace;

use crate::utils::alphabet::{self, ALPHABET_SIZE};
use crate::wiring::{Notches, Variant, Wiring};

/// Index of a rotor within a [`RotorChain`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotorId(pub usize);

/// State of a single rotor or reflector.
#[derive(Debug, Clone)]
pub(crate) struct RotorUnit {
    variant: Variant,
    forward: [u8; ALPHABET_SIZE],
    inverse: [u8; ALPHABET_SIZE],
    ring: u8,
    position: u8,
    notches: Notches,
    /// Neighbor towards the reflector.
    left: Option<RotorId>,
    /// Neighbor towards the keyboard.
    right: Option<RotorId>,
}

/// Arena holding the rotors of one machine, rightmost first.
#[derive(Debug, Clone, Default)]
pub(crate) struct RotorChain {
    units: Vec<RotorUnit>,
}

impl RotorChain {
    /// Creates an empty chain with room for `capacity` units.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        RotorChain {
            units: Vec::with_capacity(capacity),
        }
    }

    /// Adds a unit built from a catalog wiring.
    ///
    /// # Parameters
    /// - `wiring`: catalog entry supplying the permutation and notches.
    /// - `ring`: zero-based ring setting.
    /// - `visible`: zero-based letter shown in the window.
    ///
    /// # Returns
    /// The [`RotorId`] of the new unit. It has no neighbors until
    /// [`link`](Self::link) is called.
    pub(crate) fn new_rotor(&mut self, wiring: &Wiring, ring: u8, visible: u8) -> RotorId {
        let id = RotorId(self.units.len());
        let ring = ring % ALPHABET_SIZE as u8;
        self.units.push(RotorUnit {
            variant: wiring.variant,
            forward: wiring.forward,
            inverse: wiring.inverse,
            ring,
            position: alphabet::shift(visible, -(ring as i32)),
            notches: wiring.notches.shifted(-(ring as i32)),
            left: None,
            right: None,
        });
        id
    }

    /// Adds a reflector. Reflectors have no ring, sit at position zero and
    /// never step.
    pub(crate) fn new_reflector(&mut self, wiring: &Wiring) -> RotorId {
        self.new_rotor(wiring, 0, 0)
    }

    /// Connects `right` to `left` so that `left` is the next unit towards the
    /// reflector.
    pub(crate) fn link(&mut self, right: RotorId, left: RotorId) {
        self.units[right.0].left = Some(left);
        self.units[left.0].right = Some(right);
    }

    /// Position of `id` as seen by its neighbors, or 0 for no neighbor.
    fn relative_position(&self, id: Option<RotorId>) -> i32 {
        id.map_or(0, |n| self.units[n.0].position as i32)
    }

    /// Passes a signal from the keyboard side towards the reflector.
    ///
    /// `position` arrives in the frame of the right neighbor (the fixed
    /// entry wheel for the rightmost rotor) and leaves in this unit's frame.
    pub(crate) fn encode_inward(&self, id: RotorId, position: u8) -> u8 {
        let unit = &self.units[id.0];
        let offset = unit.position as i32 - self.relative_position(unit.right);
        let pin = alphabet::shift(position, offset);
        let out = unit.forward[pin as usize];
        trace!(
            "{} inward: {} -> pin {} -> {}",
            unit.variant,
            alphabet::letter_at(position),
            pin,
            alphabet::letter_at(out)
        );
        out
    }

    /// Passes a signal from the reflector side back towards the keyboard.
    ///
    /// `position` arrives in the frame of the left neighbor and leaves in
    /// this unit's frame, using the inverse wiring.
    pub(crate) fn encode_outward(&self, id: RotorId, position: u8) -> u8 {
        let unit = &self.units[id.0];
        let offset = unit.position as i32 - self.relative_position(unit.left);
        let pin = alphabet::shift(position, offset);
        let out = unit.inverse[pin as usize];
        trace!(
            "{} outward: {} -> pin {} -> {}",
            unit.variant,
            alphabet::letter_at(position),
            pin,
            alphabet::letter_at(out)
        );
        out
    }

    /// Advances the rotor one step.
    ///
    /// # Returns
    /// `true` if the rotor sat at a notch before stepping, meaning the
    /// neighbor on its left turns over as well.
    pub(crate) fn rotate(&mut self, id: RotorId) -> bool {
        let turnover = self.is_at_notch(id);
        let unit = &mut self.units[id.0];
        unit.position = alphabet::shift(unit.position, 1);
        turnover
    }

    pub(crate) fn is_at_notch(&self, id: RotorId) -> bool {
        let unit = &self.units[id.0];
        unit.notches.contains(unit.position)
    }

    /// A reflector is the unit with nothing further to its left.
    pub(crate) fn is_reflector(&self, id: RotorId) -> bool {
        self.units[id.0].left.is_none()
    }

    /// Ring-adjusted position, as used in offset arithmetic.
    pub(crate) fn position(&self, id: RotorId) -> u8 {
        self.units[id.0].position
    }

    /// Letter index shown in the rotor's window.
    pub(crate) fn visible_position(&self, id: RotorId) -> u8 {
        let unit = &self.units[id.0];
        alphabet::shift(unit.position, unit.ring as i32)
    }

    /// Turns the rotor so its window shows `visible`.
    pub(crate) fn set_position(&mut self, id: RotorId, visible: u8) {
        let unit = &mut self.units[id.0];
        unit.position = alphabet::shift(visible, -(unit.ring as i32));
    }

    pub(crate) fn ring(&self, id: RotorId) -> u8 {
        self.units[id.0].ring
    }

    pub(crate) fn variant(&self, id: RotorId) -> Variant {
        self.units[id.0].variant
    }

    pub(crate) fn forward(&self, id: RotorId) -> [u8; ALPHABET_SIZE] {
        self.units[id.0].forward
    }

    /// Replaces the wiring of a unit, keeping its variant label.
    ///
    /// The caller guarantees `forward` is a permutation.
    pub(crate) fn set_wiring(&mut self, id: RotorId, forward: [u8; ALPHABET_SIZE]) {
        let unit = &mut self.units[id.0];
        unit.forward = forward;
        unit.inverse = alphabet::invert(&forward);
    }

    /// Swaps in a catalog wiring, relabelling the unit.
    pub(crate) fn set_catalog_wiring(&mut self, id: RotorId, wiring: &Wiring) {
        let unit = &mut self.units[id.0];
        unit.variant = wiring.variant;
        unit.forward = wiring.forward;
        unit.inverse = wiring.inverse;
        unit.notches = wiring.notches.shifted(-(unit.ring as i32));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wiring::wiring_for;

    fn letter(c: char) -> u8 {
        alphabet::index_of(c).unwrap()
    }

    /// A lone rotor at `A` with ring `A` behaves like its raw wiring.
    fn single(variant: Variant) -> (RotorChain, RotorId) {
        let mut chain = RotorChain::with_capacity(1);
        let id = chain.new_rotor(wiring_for(variant), 0, 0);
        (chain, id)
    }

    #[test]
    fn test_rotor_i_encode() {
        let (chain, id) = single(Variant::I);
        assert_eq!(chain.encode_inward(id, letter('A')), letter('E'));
        assert_eq!(chain.encode_outward(id, letter('A')), letter('U'));
        assert_eq!(chain.encode_inward(id, letter('B')), letter('K'));
        assert_eq!(chain.encode_outward(id, letter('B')), letter('W'));
        assert_eq!(chain.encode_inward(id, letter('C')), letter('M'));
        assert_eq!(chain.encode_outward(id, letter('C')), letter('Y'));
    }

    #[test]
    fn test_rotor_ii_encode() {
        let (chain, id) = single(Variant::II);
        assert_eq!(chain.encode_inward(id, letter('A')), letter('A'));
        assert_eq!(chain.encode_outward(id, letter('A')), letter('A'));
        assert_eq!(chain.encode_inward(id, letter('B')), letter('J'));
        assert_eq!(chain.encode_outward(id, letter('B')), letter('J'));
        assert_eq!(chain.encode_inward(id, letter('C')), letter('D'));
        assert_eq!(chain.encode_outward(id, letter('C')), letter('P'));
    }

    #[test]
    fn test_rotor_iii_encode() {
        let (chain, id) = single(Variant::III);
        assert_eq!(chain.encode_inward(id, letter('A')), letter('B'));
        assert_eq!(chain.encode_outward(id, letter('A')), letter('T'));
        assert_eq!(chain.encode_inward(id, letter('C')), letter('F'));
        assert_eq!(chain.encode_outward(id, letter('C')), letter('G'));
    }

    #[test]
    fn test_inward_then_outward_is_identity_at_rest() {
        let (chain, id) = single(Variant::IV);
        for p in 0..26u8 {
            assert_eq!(chain.encode_outward(id, chain.encode_inward(id, p)), p);
        }
    }

    #[test]
    fn test_position_shifts_the_wiring() {
        // Rotor I at B: A enters pin B, which is wired to K; in the rotor's
        // own frame that is K.
        let mut chain = RotorChain::with_capacity(1);
        let id = chain.new_rotor(wiring_for(Variant::I), 0, 1);
        assert_eq!(chain.encode_inward(id, letter('A')), letter('K'));
    }

    #[test]
    fn test_ring_setting_offsets_position() {
        let mut chain = RotorChain::with_capacity(1);
        let id = chain.new_rotor(wiring_for(Variant::I), 1, 0);
        assert_eq!(chain.position(id), 25);
        assert_eq!(chain.visible_position(id), 0);
        assert_eq!(chain.ring(id), 1);
    }

    #[test]
    fn test_rotate_reports_notch() {
        // Rotor I turns over when stepping off Q.
        let mut chain = RotorChain::with_capacity(1);
        let id = chain.new_rotor(wiring_for(Variant::I), 0, letter('P'));
        assert!(!chain.rotate(id));
        assert_eq!(chain.visible_position(id), letter('Q'));
        assert!(chain.is_at_notch(id));
        assert!(chain.rotate(id));
        assert_eq!(chain.visible_position(id), letter('R'));
    }

    #[test]
    fn test_notch_follows_visible_letter_under_ring() {
        let mut chain = RotorChain::with_capacity(1);
        let id = chain.new_rotor(wiring_for(Variant::III), 7, letter('V'));
        assert!(chain.is_at_notch(id));
        assert!(chain.rotate(id));
        assert!(!chain.is_at_notch(id));
    }

    #[test]
    fn test_rotate_wraps() {
        let mut chain = RotorChain::with_capacity(1);
        let id = chain.new_rotor(wiring_for(Variant::V), 0, letter('Z'));
        assert!(chain.rotate(id));
        assert_eq!(chain.visible_position(id), 0);
    }

    #[test]
    fn test_rotor_without_notch_never_turns_over() {
        let (mut chain, id) = single(Variant::Beta);
        for _ in 0..26 {
            assert!(!chain.rotate(id));
        }
    }

    #[test]
    fn test_links_and_reflector_detection() {
        let mut chain = RotorChain::with_capacity(3);
        let right = chain.new_rotor(wiring_for(Variant::III), 0, 0);
        let middle = chain.new_rotor(wiring_for(Variant::II), 0, 0);
        let reflector = chain.new_reflector(wiring_for(Variant::B));
        chain.link(right, middle);
        chain.link(middle, reflector);

        assert!(!chain.is_reflector(right));
        assert!(!chain.is_reflector(middle));
        assert!(chain.is_reflector(reflector));
    }

    #[test]
    fn test_inward_offset_uses_right_neighbor() {
        let mut chain = RotorChain::with_capacity(2);
        let right = chain.new_rotor(wiring_for(Variant::III), 0, 3);
        let left = chain.new_rotor(wiring_for(Variant::I), 0, 3);
        chain.link(right, left);
        // Same position as its neighbor: no relative offset.
        assert_eq!(chain.encode_inward(left, letter('A')), letter('E'));
        chain.rotate(left);
        assert_eq!(chain.encode_inward(left, letter('A')), letter('K'));
    }

    #[test]
    fn test_set_position_respects_ring() {
        let mut chain = RotorChain::with_capacity(1);
        let id = chain.new_rotor(wiring_for(Variant::II), 4, 0);
        chain.rotate(id);
        chain.set_position(id, letter('M'));
        assert_eq!(chain.visible_position(id), letter('M'));
        assert_eq!(chain.position(id), letter('I'));
    }

    #[test]
    fn test_set_wiring_updates_inverse() {
        let (mut chain, id) = single(Variant::B);
        let table = wiring_for(Variant::C).forward;
        chain.set_wiring(id, table);
        assert_eq!(chain.forward(id), table);
        assert_eq!(chain.variant(id), Variant::B);
        for p in 0..26u8 {
            assert_eq!(chain.encode_outward(id, chain.encode_inward(id, p)), p);
        }
    }

    #[test]
    fn test_set_catalog_wiring_relabels() {
        let (mut chain, id) = single(Variant::B);
        chain.set_catalog_wiring(id, wiring_for(Variant::A));
        assert_eq!(chain.variant(id), Variant::A);
        assert_eq!(chain.forward(id), wiring_for(Variant::A).forward);
    }
}
