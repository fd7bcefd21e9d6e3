//! Reflector: the fixed wheel at the left end of the rotor stack.
//!
//! Unlike a rotor, the reflector has contacts on one face only and wires
//! them to each other in pairs. That pairing is what makes the machine
//! its own inverse.

use crate::error::Result;
use crate::validator::{render, validate_reflector_wiring, Wiring};

/// Immutable, involutive reflector wiring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reflector {
    mapping: Wiring,
}

impl Reflector {
    /// Builds a reflector from its compact wiring string.
    ///
    /// # Errors
    /// - [`EnigmaError::InvalidWiringLength`](crate::EnigmaError::InvalidWiringLength) /
    ///   [`EnigmaError::InvalidWiringCharacter`](crate::EnigmaError::InvalidWiringCharacter)
    ///   for a malformed string.
    /// - [`EnigmaError::ReflectorFixedPoint`](crate::EnigmaError::ReflectorFixedPoint)
    ///   if a letter reflects to itself.
    /// - [`EnigmaError::ReflectorNotInvolution`](crate::EnigmaError::ReflectorNotInvolution)
    ///   if the pairs are not symmetric.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::Reflector;
    ///
    /// let b = Reflector::new("YRUHQSLDPXNGOKMIEBFZCWVJAT").unwrap();
    /// assert_eq!(b.reflect(0), 24);
    /// assert_eq!(b.reflect(24), 0);
    /// ```
    pub fn new(wiring: &str) -> Result<Self> {
        let mapping = validate_reflector_wiring(wiring)?;
        Ok(Reflector { mapping })
    }

    /// Returns the contact wired to `contact`.
    ///
    /// `contact` must be below 26.
    pub fn reflect(&self, contact: u8) -> u8 {
        self.mapping[contact as usize]
    }

    /// The full contact mapping.
    pub fn mapping(&self) -> &Wiring {
        &self.mapping
    }

    /// The compact wiring string this reflector was built from.
    pub fn wiring(&self) -> String {
        render(&self.mapping)
    }
}
