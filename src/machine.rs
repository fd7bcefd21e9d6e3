//! Machine: the assembled Enigma.
//!
//! Holds the rotor stack (left to right), the reflector and the plugboard,
//! and turns each key press into a lamp. Every key press first steps the
//! rotors, then sends the signal through plugboard, stator, rotors
//! right-to-left, reflector, rotors left-to-right, stator and plugboard.

use crate::error::{EnigmaError, Result};
use crate::plugboard::Plugboard;
use crate::reflector::Reflector;
use crate::rotor::Rotor;
use crate::utils::alphabet::{
    check_letter, contact_to_letter, letter_to_contact, NUM_CONTACTS_U8,
};
use crate::validator::{invert, Wiring};

/// A rotor sitting on the spindle.
///
/// The signal passes a rotor in both directions, so the inverse wiring is
/// computed once at installation and kept next to the rotor.
#[derive(Debug, Clone)]
struct RotorSlot {
    rotor: Rotor,
    left_to_right: Wiring,
    /// Offset of the ring relative to the wiring core, 0..26.
    ring_setting: u8,
    /// Current position, 0..26. Changes on every key press.
    rotation: u8,
}

impl RotorSlot {
    fn new(rotor: Rotor) -> Self {
        RotorSlot {
            left_to_right: invert(rotor.right_to_left()),
            rotor,
            ring_setting: 0,
            rotation: 0,
        }
    }

    fn at_turnover(&self) -> bool {
        self.rotor.is_turnover(self.rotation)
    }

    /// Moves `contact` from the chassis frame into this rotor's frame.
    fn enter(&self, contact: u8) -> u8 {
        (contact + self.rotation + NUM_CONTACTS_U8 - self.ring_setting) % NUM_CONTACTS_U8
    }

    /// Moves `contact` from this rotor's frame back to the chassis frame.
    fn leave(&self, contact: u8) -> u8 {
        (contact + self.ring_setting + NUM_CONTACTS_U8 - self.rotation) % NUM_CONTACTS_U8
    }

    fn right_to_left(&self, contact: u8) -> u8 {
        let inner = self.rotor.right_to_left()[self.enter(contact) as usize];
        self.leave(inner)
    }

    fn left_to_right(&self, contact: u8) -> u8 {
        let inner = self.left_to_right[self.enter(contact) as usize];
        self.leave(inner)
    }
}

/// The Enigma machine.
///
/// Operations mirror what an operator does with the physical machine:
/// install rotors and a reflector, set the rings, plug cables, turn the
/// rotors to the message key, then press keys.
///
/// A `Machine` is mutable state with no internal locking. Share it across
/// threads only behind an external lock, or give each session its own.
///
/// # Examples
///
/// ```
/// use enigma::{Machine, Reflector, Rotor};
///
/// let i = Rotor::new("EKMFLGDQVZNTOWYHXUSPAIBRCJ", "Q").unwrap();
/// let ii = Rotor::new("AJDKSIRUXBLHWTMCQGZNPYFVOE", "E").unwrap();
/// let iii = Rotor::new("BDFHJLCPRTXVZNYEIWGAKMUSQO", "V").unwrap();
/// let b = Reflector::new("YRUHQSLDPXNGOKMIEBFZCWVJAT").unwrap();
///
/// let mut machine = Machine::new();
/// machine.install_reflector(b);
/// machine.install_rotors(&[i, ii, iii]).unwrap();
/// machine.set_rotor_positions(b"AAA").unwrap();
///
/// assert_eq!(machine.press_key(b'A').unwrap(), b'B');
/// assert_eq!(machine.rotor_positions(), b"AAB".to_vec());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Machine {
    plugboard: Plugboard,
    reflector: Option<Reflector>,
    /// Rotor slots, left to right.
    rotors: Vec<RotorSlot>,
}

impl Machine {
    /// Creates a machine with no rotors, no reflector and an empty plugboard.
    pub fn new() -> Self {
        Self::default()
    }

    // ──────── Configuration ────────

    /// Places `rotors` on the spindle, left to right.
    ///
    /// Replaces any rotors already installed. Every slot starts with ring
    /// setting 'A' and position 'A'; settings from a previous set of
    /// rotors are never carried over.
    ///
    /// # Errors
    /// Returns [`EnigmaError::NoRotors`] if `rotors` is empty.
    pub fn install_rotors(&mut self, rotors: &[Rotor]) -> Result<()> {
        if rotors.is_empty() {
            return Err(EnigmaError::NoRotors);
        }
        self.rotors = rotors.iter().copied().map(RotorSlot::new).collect();
        Ok(())
    }

    /// Sets the ring settings, left to right, as letters ('A' = offset 0).
    ///
    /// # Errors
    /// - [`EnigmaError::CountMismatch`] if `settings` does not have one
    ///   entry per installed rotor.
    /// - [`EnigmaError::InvalidLetter`] if an entry is not 'A'..='Z'.
    ///
    /// On error no setting is changed.
    pub fn set_ring_settings(&mut self, settings: &[u8]) -> Result<()> {
        let offsets = self.per_rotor_contacts("ring settings", settings)?;
        for (slot, offset) in self.rotors.iter_mut().zip(offsets) {
            slot.ring_setting = offset;
        }
        Ok(())
    }

    /// Turns the rotors to `positions` (the message key), left to right.
    ///
    /// # Errors
    /// Same as [`set_ring_settings`](Self::set_ring_settings).
    pub fn set_rotor_positions(&mut self, positions: &[u8]) -> Result<()> {
        let rotations = self.per_rotor_contacts("rotor positions", positions)?;
        for (slot, rotation) in self.rotors.iter_mut().zip(rotations) {
            slot.rotation = rotation;
        }
        Ok(())
    }

    /// Places `reflector` at the left end of the spindle.
    pub fn install_reflector(&mut self, reflector: Reflector) {
        self.reflector = Some(reflector);
    }

    /// Replaces the whole plugboard.
    pub fn set_plugboard(&mut self, plugboard: Plugboard) {
        self.plugboard = plugboard;
    }

    fn per_rotor_contacts(&self, what: &'static str, letters: &[u8]) -> Result<Vec<u8>> {
        if letters.len() != self.rotors.len() {
            return Err(EnigmaError::CountMismatch {
                what,
                expected: self.rotors.len(),
                actual: letters.len(),
            });
        }
        letters.iter().map(|&l| letter_to_contact(l)).collect()
    }

    // ──────── Inspection ────────

    /// Current rotor positions as letters, left to right.
    pub fn rotor_positions(&self) -> Vec<u8> {
        self.rotors
            .iter()
            .map(|slot| contact_to_letter(slot.rotation))
            .collect()
    }

    /// Ring settings as letters, left to right.
    pub fn ring_settings(&self) -> Vec<u8> {
        self.rotors
            .iter()
            .map(|slot| contact_to_letter(slot.ring_setting))
            .collect()
    }

    /// Number of installed rotors.
    pub fn rotor_count(&self) -> usize {
        self.rotors.len()
    }

    /// The installed plugboard.
    pub fn plugboard(&self) -> &Plugboard {
        &self.plugboard
    }

    /// The installed reflector, if any.
    pub fn reflector(&self) -> Option<&Reflector> {
        self.reflector.as_ref()
    }

    // ──────── Typing ────────

    /// Presses `key` and returns the letter that lights up.
    ///
    /// The rotors step before the signal passes, so the first key after
    /// setting the message key is already enciphered at the next position.
    ///
    /// # Errors
    /// - [`EnigmaError::NotALetter`] if `key` is not 'A'..='Z'.
    /// - [`EnigmaError::MachineNotReady`] if rotors or reflector are missing.
    ///
    /// Rejected keys do not step the rotors.
    pub fn press_key(&mut self, key: u8) -> Result<u8> {
        check_letter(key).map_err(|_| EnigmaError::NotALetter(key as char))?;
        if self.rotors.is_empty() {
            return Err(EnigmaError::MachineNotReady("rotors"));
        }
        let reflector = self
            .reflector
            .ok_or(EnigmaError::MachineNotReady("reflector"))?;

        self.step();

        let letter = self.plugboard.map(key);
        // Stator: straight wiring.
        let mut contact = letter - b'A';

        for slot in self.rotors.iter().rev() {
            contact = slot.right_to_left(contact);
        }
        contact = reflector.reflect(contact);
        for slot in self.rotors.iter() {
            contact = slot.left_to_right(contact);
        }

        let letter = contact_to_letter(contact);
        Ok(self.plugboard.map(letter))
    }

    /// Advances the rotors for one key press.
    ///
    /// A slot steps when any of these holds, judged on the positions before
    /// this key press:
    /// - it is the rightmost slot;
    /// - its right neighbour sits at a turnover point;
    /// - it sits at its own turnover point and has a left neighbour to push
    ///   (the pawl drags it along). This is the double step of the middle
    ///   rotor.
    fn step(&mut self) {
        let last = self.rotors.len() - 1;
        let notched: Vec<bool> = self.rotors.iter().map(RotorSlot::at_turnover).collect();
        for (i, slot) in self.rotors.iter_mut().enumerate() {
            let turn = i == last || notched[i + 1] || (i > 0 && notched[i]);
            if turn {
                slot.rotation = (slot.rotation + 1) % NUM_CONTACTS_U8;
            }
        }
    }
}
