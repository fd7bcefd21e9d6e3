//! Rotor: one physical wheel type.
//!
//! A rotor has 26 contacts on each face. Each right-face contact is wired
//! to exactly one left-face contact, and a notch on the ring marks the
//! positions at which the rotor pushes its left neighbour forward.

use crate::error::{EnigmaError, Result};
use crate::utils::alphabet::{letter_to_contact, NUM_CONTACTS};
use crate::validator::{render, validate_rotor_wiring, Wiring};

/// Immutable wiring and turnover definition of a rotor type.
///
/// A `Rotor` is a small fixed-size value; copy it freely into as many
/// machines as needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rotor {
    right_to_left: Wiring,
    turnover_points: [bool; NUM_CONTACTS],
}

impl Rotor {
    /// Builds a rotor from its compact wiring string and turnover letters.
    ///
    /// # Parameters
    /// - `wiring`: 26 letters; position `i` names the left contact that
    ///   right contact `i` is wired to.
    /// - `turnovers`: one or more letters; the rotor pushes its left
    ///   neighbour when it steps away from any of these positions.
    ///
    /// # Errors
    /// - [`EnigmaError::InvalidWiringLength`] / [`EnigmaError::InvalidWiringCharacter`]
    ///   for a malformed string.
    /// - [`EnigmaError::RotorNotBijective`] if a letter is missing.
    /// - [`EnigmaError::MissingTurnover`] if `turnovers` is empty.
    /// - [`EnigmaError::InvalidLetter`] if a turnover is not 'A'..='Z'.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::Rotor;
    ///
    /// let rotor = Rotor::new("EKMFLGDQVZNTOWYHXUSPAIBRCJ", "Q").unwrap();
    /// assert!(rotor.is_turnover(16));
    /// assert!(Rotor::new("EKMFLGDQVZNTOWYHXUSPAIBRCE", "Q").is_err());
    /// ```
    pub fn new(wiring: &str, turnovers: &str) -> Result<Self> {
        let right_to_left = validate_rotor_wiring(wiring)?;
        if turnovers.is_empty() {
            return Err(EnigmaError::MissingTurnover);
        }
        let mut turnover_points = [false; NUM_CONTACTS];
        for letter in turnovers.bytes() {
            turnover_points[letter_to_contact(letter)? as usize] = true;
        }
        Ok(Rotor {
            right_to_left,
            turnover_points,
        })
    }

    /// Right-to-left contact mapping.
    pub fn right_to_left(&self) -> &Wiring {
        &self.right_to_left
    }

    /// Returns `true` if stepping away from `rotation` pushes the next rotor.
    pub fn is_turnover(&self, rotation: u8) -> bool {
        self.turnover_points
            .get(rotation as usize)
            .copied()
            .unwrap_or(false)
    }

    /// Turnover letters in alphabetical order.
    pub fn turnover_letters(&self) -> String {
        (b'A'..=b'Z')
            .zip(self.turnover_points.iter())
            .filter(|(_, &turn)| turn)
            .map(|(letter, _)| letter as char)
            .collect()
    }

    /// The compact wiring string this rotor was built from.
    pub fn wiring(&self) -> String {
        render(&self.right_to_left)
    }
}
