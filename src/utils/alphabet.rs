//! Letter and contact conversion.
//!
//! Outside the rotor stack, every wire carries a letter 'A'..='Z'. Inside
//! the rotors and the reflector the same wire is a contact index 0..26.
//! The stator is the conversion point; this machine's stator is wired
//! straight, so the conversion is a plain offset from `b'A'`.

use crate::error::{EnigmaError, Result};

/// Number of contacts on each face of a rotor, and letters on the keyboard.
pub const NUM_CONTACTS: usize = 26;

/// `NUM_CONTACTS` as a `u8`, for contact arithmetic.
pub(crate) const NUM_CONTACTS_U8: u8 = NUM_CONTACTS as u8;

/// Returns `true` if `letter` is an uppercase ASCII letter.
pub fn is_letter(letter: u8) -> bool {
    letter.is_ascii_uppercase()
}

/// Checks that `letter` is an uppercase ASCII letter.
///
/// # Errors
/// Returns [`EnigmaError::InvalidLetter`] otherwise.
pub fn check_letter(letter: u8) -> Result<u8> {
    if is_letter(letter) {
        Ok(letter)
    } else {
        Err(EnigmaError::InvalidLetter(letter as char))
    }
}

/// Converts a letter to its contact index.
///
/// # Errors
/// Returns [`EnigmaError::InvalidLetter`] if `letter` is not 'A'..='Z'.
pub fn letter_to_contact(letter: u8) -> Result<u8> {
    check_letter(letter).map(|l| l - b'A')
}

/// Converts a contact index back to its letter.
///
/// `contact` must be below [`NUM_CONTACTS`].
pub fn contact_to_letter(contact: u8) -> u8 {
    debug_assert!((contact as usize) < NUM_CONTACTS);
    contact + b'A'
}

/// Renders a contact index as a `char` for error messages.
pub(crate) fn contact_char(contact: u8) -> char {
    contact_to_letter(contact) as char
}
