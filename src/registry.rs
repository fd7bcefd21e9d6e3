//! Named rotors and reflectors.
//!
//! The machine itself only knows wirings. Code books named the wheels,
//! so a [`Registry`] maps those names to validated components. It is
//! built once, read-only afterwards, and passed to whoever needs it.

use std::collections::BTreeMap;

use crate::error::{EnigmaError, Result};
use crate::reflector::Reflector;
use crate::rotor::Rotor;

/// Historical rotor wirings: name, wiring, turnover letters.
///
/// I-V are the Enigma I wheels. VI-VIII were added for the naval M3 and
/// carry two notches each.
pub const ROTOR_WIRINGS: [(&str, &str, &str); 8] = [
    ("I", "EKMFLGDQVZNTOWYHXUSPAIBRCJ", "Q"),
    ("II", "AJDKSIRUXBLHWTMCQGZNPYFVOE", "E"),
    ("III", "BDFHJLCPRTXVZNYEIWGAKMUSQO", "V"),
    ("IV", "ESOVPZJAYQUIRHXLNFTGKDCMWB", "J"),
    ("V", "VZBRGITYUPSDNHLXAWMJQOFECK", "Z"),
    ("VI", "JPGVOUMFYQBENHZRDKASXLICTW", "ZM"),
    ("VII", "NZJHGRCXMYSWBOUFAIVLPEKQDT", "ZM"),
    ("VIII", "FKQHTLXOCBJSPDZRAMEWNIUYGV", "ZM"),
];

/// Historical reflector wirings: name, wiring.
pub const REFLECTOR_WIRINGS: [(&str, &str); 3] = [
    ("A", "EJMZALYXVBWFCRQUONTSPIKHGD"),
    ("B", "YRUHQSLDPXNGOKMIEBFZCWVJAT"),
    ("C", "FVPJIAOYEDRZXWGCTKUQSBNMHL"),
];

/// Lookup table of named components.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    rotors: BTreeMap<String, Rotor>,
    reflectors: BTreeMap<String, Reflector>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the historical wheels.
    ///
    /// # Errors
    /// Propagates validation errors; the built-in tables are valid.
    pub fn enigma_i() -> Result<Self> {
        let mut registry = Registry::new();
        for (name, wiring, turnovers) in ROTOR_WIRINGS {
            registry.add_rotor(name, Rotor::new(wiring, turnovers)?);
        }
        for (name, wiring) in REFLECTOR_WIRINGS {
            registry.add_reflector(name, Reflector::new(wiring)?);
        }
        Ok(registry)
    }

    /// Registers `rotor` under `name`, replacing any rotor of that name.
    pub fn add_rotor(&mut self, name: impl Into<String>, rotor: Rotor) {
        self.rotors.insert(name.into(), rotor);
    }

    /// Registers `reflector` under `name`, replacing any reflector of that name.
    pub fn add_reflector(&mut self, name: impl Into<String>, reflector: Reflector) {
        self.reflectors.insert(name.into(), reflector);
    }

    /// Looks up a rotor by name.
    ///
    /// # Errors
    /// Returns [`EnigmaError::UnknownRotor`] listing the known names.
    pub fn rotor(&self, name: &str) -> Result<&Rotor> {
        self.rotors.get(name).ok_or_else(|| EnigmaError::UnknownRotor {
            name: name.to_string(),
            available: self.rotor_names().join(", "),
        })
    }

    /// Looks up a reflector by name.
    ///
    /// # Errors
    /// Returns [`EnigmaError::UnknownReflector`] listing the known names.
    pub fn reflector(&self, name: &str) -> Result<&Reflector> {
        self.reflectors
            .get(name)
            .ok_or_else(|| EnigmaError::UnknownReflector {
                name: name.to_string(),
                available: self.reflector_names().join(", "),
            })
    }

    /// Rotor names in sorted order.
    pub fn rotor_names(&self) -> Vec<&str> {
        self.rotors.keys().map(String::as_str).collect()
    }

    /// Reflector names in sorted order.
    pub fn reflector_names(&self) -> Vec<&str> {
        self.reflectors.keys().map(String::as_str).collect()
    }
}
