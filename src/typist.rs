//! Typist: drives a machine over a whole message.

use crate::error::{EnigmaError, Result};
use crate::machine::Machine;
use crate::utils::alphabet::is_letter;

/// Types `text` on `machine` and returns the lamps, character for character.
///
/// Spaces are copied through without pressing a key, so they never move
/// the rotors. Every other character must be 'A'..='Z'. The whole text is
/// checked before the first key is pressed; a rejected message leaves the
/// rotors where they were.
///
/// Since enciphering and deciphering are the same operation, the same call
/// decrypts once the rotors are turned back to the message key.
///
/// # Errors
/// - [`EnigmaError::NotALetter`] for the first character that is neither
///   a space nor 'A'..='Z'.
/// - [`EnigmaError::MachineNotReady`] if the machine is not assembled.
///
/// # Examples
///
/// ```
/// use enigma::{type_message, Registry};
///
/// let registry = Registry::enigma_i().unwrap();
/// let mut machine = enigma::Machine::new();
/// machine.install_reflector(*registry.reflector("B").unwrap());
/// machine
///     .install_rotors(&[
///         *registry.rotor("I").unwrap(),
///         *registry.rotor("II").unwrap(),
///         *registry.rotor("III").unwrap(),
///     ])
///     .unwrap();
///
/// let secret = type_message(&mut machine, "HELLO WORLD").unwrap();
/// assert_eq!(secret.len(), 11);
/// assert_eq!(&secret[5..6], " ");
///
/// machine.set_rotor_positions(b"AAA").unwrap();
/// assert_eq!(type_message(&mut machine, &secret).unwrap(), "HELLO WORLD");
/// ```
pub fn type_message(machine: &mut Machine, text: &str) -> Result<String> {
    if let Some(bad) = text.chars().find(|&c| c != ' ' && !(c.is_ascii() && is_letter(c as u8))) {
        return Err(EnigmaError::NotALetter(bad));
    }

    let mut lamps = String::with_capacity(text.len());
    for key in text.bytes() {
        if key == b' ' {
            lamps.push(' ');
            continue;
        }
        lamps.push(machine.press_key(key)? as char);
    }
    Ok(lamps)
}
