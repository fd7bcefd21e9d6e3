//! Plugboard (Steckerbrett).
//!
//! Like the reflector, a plug cable swaps two letters both ways. Unlike the
//! reflector, most letters are normally left unplugged and pass straight
//! through.

use std::fmt;

use crate::error::{EnigmaError, Result};
use crate::utils::alphabet::{contact_to_letter, letter_to_contact, NUM_CONTACTS};

/// A set of letter swaps. The empty plugboard maps every letter to itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plugboard {
    mapping: [u8; NUM_CONTACTS],
}

impl Default for Plugboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugboard {
    /// Creates a plugboard with no cables.
    pub fn new() -> Self {
        let mut mapping = [0u8; NUM_CONTACTS];
        for (contact, slot) in mapping.iter_mut().enumerate() {
            *slot = contact as u8;
        }
        Plugboard { mapping }
    }

    /// Creates a plugboard from a list of letter pairs.
    ///
    /// # Errors
    /// Fails on the first pair that [`add_pair`](Self::add_pair) rejects.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::Plugboard;
    ///
    /// let plugboard = Plugboard::from_pairs(&[(b'A', b'B'), (b'C', b'D')]).unwrap();
    /// assert_eq!(plugboard.map(b'A'), b'B');
    /// assert_eq!(plugboard.map(b'D'), b'C');
    /// assert_eq!(plugboard.map(b'E'), b'E');
    /// ```
    pub fn from_pairs(pairs: &[(u8, u8)]) -> Result<Self> {
        let mut plugboard = Plugboard::new();
        for &(left, right) in pairs {
            plugboard.add_pair(left, right)?;
        }
        Ok(plugboard)
    }

    /// Connects `left` and `right` with a cable. `(L, R)` and `(R, L)` are
    /// the same cable.
    ///
    /// # Errors
    /// - [`EnigmaError::InvalidLetter`] if either side is not 'A'..='Z'.
    /// - [`EnigmaError::PlugSelfPair`] if `left == right`.
    /// - [`EnigmaError::PlugAlreadyPaired`] if either letter already has a cable.
    ///
    /// On error the plugboard is left unchanged.
    pub fn add_pair(&mut self, left: u8, right: u8) -> Result<()> {
        let l = letter_to_contact(left)?;
        let r = letter_to_contact(right)?;
        if l == r {
            return Err(EnigmaError::PlugSelfPair(left as char));
        }
        for (contact, letter) in [(l, left), (r, right)] {
            let partner = self.mapping[contact as usize];
            if partner != contact {
                return Err(EnigmaError::PlugAlreadyPaired {
                    letter: letter as char,
                    partner: contact_to_letter(partner) as char,
                });
            }
        }
        self.mapping[l as usize] = r;
        self.mapping[r as usize] = l;
        Ok(())
    }

    /// Returns the letter plugged to `letter`, or `letter` itself.
    ///
    /// Anything outside 'A'..='Z' is returned unchanged.
    pub fn map(&self, letter: u8) -> u8 {
        match letter_to_contact(letter) {
            Ok(contact) => contact_to_letter(self.mapping[contact as usize]),
            Err(_) => letter,
        }
    }

    /// The cables as `(left, right)` letter pairs with `left < right`.
    pub fn pairs(&self) -> Vec<(u8, u8)> {
        self.mapping
            .iter()
            .enumerate()
            .filter(|&(contact, &partner)| (contact as u8) < partner)
            .map(|(contact, &partner)| (contact_to_letter(contact as u8), contact_to_letter(partner)))
            .collect()
    }

    /// Number of cables plugged in.
    pub fn len(&self) -> usize {
        self.pairs().len()
    }

    /// Returns `true` if no cable is plugged in.
    pub fn is_empty(&self) -> bool {
        self.mapping
            .iter()
            .enumerate()
            .all(|(contact, &partner)| contact as u8 == partner)
    }
}

impl fmt::Display for Plugboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pairs: Vec<String> = self
            .pairs()
            .into_iter()
            .map(|(l, r)| format!("{}{}", l as char, r as char))
            .collect();
        write!(f, "{}", pairs.join(" "))
    }
}
