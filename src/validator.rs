//! Wiring validation.
//!
//! Pure predicates that decide whether a wiring is physically realizable.
//! They are separate from [`Rotor::new`](crate::Rotor::new) and
//! [`Reflector::new`](crate::Reflector::new) so hand-edited wiring can be
//! checked before it is ever installed.

use crate::error::{EnigmaError, Result};
use crate::utils::alphabet::{contact_char, NUM_CONTACTS};

/// A full contact-to-contact mapping.
pub type Wiring = [u8; NUM_CONTACTS];

/// Parses the compact string form of a wiring.
///
/// Position `i` of `s` names the contact that contact `i` connects to,
/// so `"EKMF..."` means A->E, B->K, C->M, D->F and so on. No permutation
/// check is made here.
///
/// # Errors
/// - [`EnigmaError::InvalidWiringLength`] if `s` is not 26 characters.
/// - [`EnigmaError::InvalidWiringCharacter`] if a character is not 'A'..='Z'.
pub fn parse_wiring(s: &str) -> Result<Wiring> {
    let actual = s.chars().count();
    if actual != NUM_CONTACTS {
        return Err(EnigmaError::InvalidWiringLength {
            wiring: s.to_string(),
            expected: NUM_CONTACTS,
            actual,
        });
    }

    let mut wiring = [0u8; NUM_CONTACTS];
    for (position, c) in s.chars().enumerate() {
        if !c.is_ascii_uppercase() {
            return Err(EnigmaError::InvalidWiringCharacter {
                wiring: s.to_string(),
                position,
                found: c,
            });
        }
        wiring[position] = c as u8 - b'A';
    }
    Ok(wiring)
}

/// Checks that `wiring` is a bijection on the contacts.
///
/// # Errors
/// Returns [`EnigmaError::RotorNotBijective`] naming the first letter no
/// contact connects to.
pub fn check_permutation(wiring: &Wiring) -> Result<()> {
    let mut seen = [false; NUM_CONTACTS];
    for &to in wiring {
        if let Some(slot) = seen.get_mut(to as usize) {
            *slot = true;
        }
    }
    match seen.iter().position(|&present| !present) {
        Some(missing) => Err(EnigmaError::RotorNotBijective {
            wiring: render(wiring),
            missing: contact_char(missing as u8),
        }),
        None => Ok(()),
    }
}

/// Checks that `wiring` is a fixed-point-free involution.
///
/// # Errors
/// - [`EnigmaError::ReflectorFixedPoint`] if a contact maps to itself.
/// - [`EnigmaError::ReflectorNotInvolution`] if `wiring[wiring[i]] != i`.
pub fn check_involution(wiring: &Wiring) -> Result<()> {
    for (from, &to) in wiring.iter().enumerate() {
        if to as usize == from {
            return Err(EnigmaError::ReflectorFixedPoint {
                wiring: render(wiring),
                letter: contact_char(to),
            });
        }
        let back = wiring.get(to as usize).copied();
        if back != Some(from as u8) {
            return Err(EnigmaError::ReflectorNotInvolution {
                wiring: render(wiring),
                from: contact_char(from as u8),
                to: render_contact(to),
                back: back.map_or('?', render_contact),
            });
        }
    }
    Ok(())
}

/// Validates the string form of a rotor wiring.
pub fn validate_rotor_wiring(s: &str) -> Result<Wiring> {
    let wiring = parse_wiring(s)?;
    check_permutation(&wiring)?;
    Ok(wiring)
}

/// Validates the string form of a reflector wiring.
pub fn validate_reflector_wiring(s: &str) -> Result<Wiring> {
    let wiring = parse_wiring(s)?;
    check_involution(&wiring)?;
    Ok(wiring)
}

/// Computes the inverse of a permutation.
///
/// `wiring` must already have passed [`check_permutation`].
pub(crate) fn invert(wiring: &Wiring) -> Wiring {
    let mut inverse = [0u8; NUM_CONTACTS];
    for (from, &to) in wiring.iter().enumerate() {
        inverse[to as usize] = from as u8;
    }
    inverse
}

/// Renders a wiring back to its string form.
pub(crate) fn render(wiring: &Wiring) -> String {
    wiring.iter().map(|&c| render_contact(c)).collect()
}

fn render_contact(contact: u8) -> char {
    if (contact as usize) < NUM_CONTACTS {
        contact_char(contact)
    } else {
        '?'
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROTOR_I: &str = "EKMFLGDQVZNTOWYHXUSPAIBRCJ";
    const REFLECTOR_B: &str = "YRUHQSLDPXNGOKMIEBFZCWVJAT";

    #[test]
    fn test_parse_wiring() {
        let wiring = parse_wiring(ROTOR_I).unwrap();
        assert_eq!(wiring[0], 4);
        assert_eq!(wiring[25], 9);
        assert_eq!(render(&wiring), ROTOR_I);
    }

    #[test]
    fn test_parse_wiring_length() {
        let err = parse_wiring("ABC").unwrap_err();
        assert!(matches!(
            err,
            EnigmaError::InvalidWiringLength {
                expected: 26,
                actual: 3,
                ..
            }
        ));
    }

    #[test]
    fn test_parse_wiring_bad_character() {
        let err = parse_wiring("EKMFLGDQVZNTOWYHXUSPAIBRCj").unwrap_err();
        assert!(matches!(
            err,
            EnigmaError::InvalidWiringCharacter {
                position: 25,
                found: 'j',
                ..
            }
        ));
    }

    #[test]
    fn test_permutation_missing_letter() {
        // 'J' replaced by a second 'E'.
        let err = validate_rotor_wiring("EKMFLGDQVZNTOWYHXUSPAIBRCE").unwrap_err();
        assert!(matches!(
            err,
            EnigmaError::RotorNotBijective { missing: 'J', .. }
        ));
    }

    #[test]
    fn test_permutation_out_of_range_contact() {
        let mut wiring = parse_wiring(ROTOR_I).unwrap();
        wiring[0] = 200;
        // 'E' (contact 4) is no longer reached.
        assert!(matches!(
            check_permutation(&wiring),
            Err(EnigmaError::RotorNotBijective { missing: 'E', .. })
        ));
    }

    #[test]
    fn test_invert() {
        let wiring = parse_wiring(ROTOR_I).unwrap();
        let inverse = invert(&wiring);
        for i in 0..NUM_CONTACTS {
            assert_eq!(inverse[wiring[i] as usize] as usize, i);
            assert_eq!(wiring[inverse[i] as usize] as usize, i);
        }
    }

    #[test]
    fn test_involution_accepts_reflector_b() {
        assert!(validate_reflector_wiring(REFLECTOR_B).is_ok());
    }

    #[test]
    fn test_involution_fixed_point() {
        // Swap so that A maps to A and Y maps to Y.
        let err = validate_reflector_wiring("ARUHQSLDPXNGOKMIEBFZCWVJYT").unwrap_err();
        assert!(matches!(
            err,
            EnigmaError::ReflectorFixedPoint { letter: 'A', .. }
        ));
    }

    #[test]
    fn test_involution_not_symmetric() {
        // A valid rotor permutation, but A->E while E->L.
        let err = validate_reflector_wiring(ROTOR_I).unwrap_err();
        assert!(matches!(
            err,
            EnigmaError::ReflectorNotInvolution {
                from: 'A',
                to: 'E',
                back: 'L',
                ..
            }
        ));
    }
}
