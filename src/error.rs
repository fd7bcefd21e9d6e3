//! Error types for the Enigma library.

use thiserror::Error;

/// Broad class of an [`EnigmaError`].
///
/// Configuration errors are raised while building or setting up a machine.
/// Operational errors are raised while typing on a configured machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    Operational,
}

/// Errors produced by the Enigma library.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnigmaError {
    /// A wiring string does not have one entry per contact.
    #[error("wiring {wiring:?} has length {actual}, expected {expected}")]
    InvalidWiringLength {
        wiring: String,
        expected: usize,
        actual: usize,
    },
    /// A wiring string contains something other than 'A'..='Z'.
    #[error("wiring {wiring:?} has invalid character {found:?} at position {position}")]
    InvalidWiringCharacter {
        wiring: String,
        position: usize,
        found: char,
    },
    /// A rotor wiring leaves a letter unconnected.
    #[error("rotor wiring {wiring:?} is not a permutation: letter {missing:?} is missing")]
    RotorNotBijective { wiring: String, missing: char },
    /// A rotor was built without any turnover letter.
    #[error("rotor needs at least one turnover letter")]
    MissingTurnover,
    /// A reflector wiring connects a contact to itself.
    #[error("reflector wiring {wiring:?} maps {letter:?} to itself")]
    ReflectorFixedPoint { wiring: String, letter: char },
    /// A reflector wiring is not its own inverse.
    #[error("reflector wiring {wiring:?}: {from:?} maps to {to:?}, but {to:?} maps to {back:?}")]
    ReflectorNotInvolution {
        wiring: String,
        from: char,
        to: char,
        back: char,
    },
    /// A plugboard letter was paired with itself.
    #[error("plug pair cannot connect {0:?} to itself")]
    PlugSelfPair(char),
    /// A plugboard letter is already part of another pair.
    #[error("letter {letter:?} is already plugged to {partner:?}")]
    PlugAlreadyPaired { letter: char, partner: char },
    /// A configuration letter (ring setting, position, plug) is outside 'A'..='Z'.
    #[error("invalid letter {0:?}, expected 'A'..='Z'")]
    InvalidLetter(char),
    /// A per-rotor setting list does not match the number of installed rotors.
    #[error("expected {expected} {what}, got {actual}")]
    CountMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },
    /// `install_rotors` was called with an empty list.
    #[error("at least one rotor must be installed")]
    NoRotors,
    /// A rotor name is not in the registry.
    #[error("rotor {name:?} does not exist; options are {available}")]
    UnknownRotor { name: String, available: String },
    /// A reflector name is not in the registry.
    #[error("reflector {name:?} does not exist; options are {available}")]
    UnknownReflector { name: String, available: String },
    /// A ring setting token is neither a numeral 1..=26 nor a single letter.
    #[error("invalid ring setting {0:?}, expected 1-26 or a single letter")]
    InvalidRingSetting(String),
    /// A rotor position token is not a single letter.
    #[error("invalid rotor position {0:?}, expected a single letter")]
    InvalidPosition(String),
    /// A plug pair token is not exactly two letters.
    #[error("invalid plug pair {0:?}, expected two letters such as \"AB\"")]
    InvalidPlugPair(String),
    /// A configuration file could not be read.
    #[error("config file unreadable: {0}")]
    ConfigIo(String),
    /// A configuration file could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),
    /// A key outside 'A'..='Z' was pressed.
    #[error("cannot type {0:?}: only 'A'..='Z' and spaces are accepted")]
    NotALetter(char),
    /// A key was pressed before the machine was fully assembled.
    #[error("machine is not ready: no {0} installed")]
    MachineNotReady(&'static str),
}

impl EnigmaError {
    /// Returns whether this error comes from setup or from typing.
    pub fn kind(&self) -> ErrorKind {
        match self {
            EnigmaError::NotALetter(_) | EnigmaError::MachineNotReady(_) => ErrorKind::Operational,
            _ => ErrorKind::Configuration,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, EnigmaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_plug_already_paired() {
        let err = EnigmaError::PlugAlreadyPaired {
            letter: 'A',
            partner: 'B',
        };
        assert_eq!(format!("{}", err), "letter 'A' is already plugged to 'B'");
    }

    #[test]
    fn test_display_rotor_not_bijective() {
        let err = EnigmaError::RotorNotBijective {
            wiring: "AAB".to_string(),
            missing: 'C',
        };
        assert_eq!(
            format!("{}", err),
            "rotor wiring \"AAB\" is not a permutation: letter 'C' is missing"
        );
    }

    #[test]
    fn test_display_count_mismatch() {
        let err = EnigmaError::CountMismatch {
            what: "ring settings",
            expected: 3,
            actual: 2,
        };
        assert_eq!(format!("{}", err), "expected 3 ring settings, got 2");
    }

    #[test]
    fn test_display_machine_not_ready() {
        let err = EnigmaError::MachineNotReady("reflector");
        assert_eq!(format!("{}", err), "machine is not ready: no reflector installed");
    }

    #[test]
    fn test_kind_classification() {
        assert_eq!(EnigmaError::NotALetter('a').kind(), ErrorKind::Operational);
        assert_eq!(
            EnigmaError::MachineNotReady("rotors").kind(),
            ErrorKind::Operational
        );
        assert_eq!(EnigmaError::PlugSelfPair('A').kind(), ErrorKind::Configuration);
        assert_eq!(EnigmaError::NoRotors.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(EnigmaError::NoRotors, EnigmaError::NoRotors);
        assert_ne!(EnigmaError::NoRotors, EnigmaError::MissingTurnover);
    }

    #[test]
    fn test_error_clone() {
        let err = EnigmaError::InvalidRingSetting("27".to_string());
        let cloned = err.clone();
        assert_eq!(err, cloned);
    }
}
