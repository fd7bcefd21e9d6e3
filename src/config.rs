//! Daily key configuration.
//!
//! A [`MachineConfig`] holds one day's settings from the code book as
//! plain strings: wheel names, ring settings, plug cables and the message
//! key. It can be loaded from a JSON file and turned into a configured
//! [`Machine`] against a [`Registry`].
//!
//! ```json
//! {
//!   "reflector": "A",
//!   "rotors": ["II", "I", "III"],
//!   "ringSettings": ["24", "13", "22"],
//!   "plugPairs": ["AM", "FI", "NV", "PS", "TU", "WZ"],
//!   "positions": ["A", "B", "L"]
//! }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{EnigmaError, Result};
use crate::machine::Machine;
use crate::plugboard::Plugboard;
use crate::reflector::Reflector;
use crate::registry::Registry;
use crate::rotor::Rotor;
use crate::utils::alphabet::is_letter;

/// Number of rotors the Enigma I takes.
pub const ROTOR_COUNT: usize = 3;

/// Wiring of a rotor not in the historical tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotorSpec {
    pub wiring: String,
    pub turnovers: String,
}

/// One day's key, as written in the code book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct MachineConfig {
    /// Reflector name.
    pub reflector: String,
    /// Rotor names, left to right.
    pub rotors: Vec<String>,
    /// Ring settings, left to right: a numeral 1-26 or a letter.
    pub ring_settings: Vec<String>,
    /// Plug cables, each two letters such as `"AB"`.
    pub plug_pairs: Vec<String>,
    /// Message key, left to right: one letter per rotor.
    pub positions: Vec<String>,
    /// Extra rotors to register before resolving `rotors`.
    pub custom_rotors: BTreeMap<String, RotorSpec>,
    /// Extra reflectors to register before resolving `reflector`.
    pub custom_reflectors: BTreeMap<String, String>,
}

impl Default for MachineConfig {
    fn default() -> Self {
        MachineConfig {
            reflector: "B".to_string(),
            rotors: strings(&["I", "II", "III"]),
            ring_settings: strings(&["A", "A", "A"]),
            plug_pairs: Vec::new(),
            positions: strings(&["A", "A", "A"]),
            custom_rotors: BTreeMap::new(),
            custom_reflectors: BTreeMap::new(),
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl MachineConfig {
    /// Assembles a machine from this configuration.
    ///
    /// Custom wheels are validated and registered first, then the machine
    /// is set up in operator order: reflector, rotors, rings, plugboard,
    /// message key.
    ///
    /// # Errors
    /// Any configuration error: wrong number of rotors, ring settings or
    /// positions, unknown names, malformed tokens, invalid custom wiring or
    /// a reused plug letter.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::{type_message, MachineConfig, Registry};
    ///
    /// let registry = Registry::enigma_i().unwrap();
    /// let mut machine = MachineConfig::default().build(&registry).unwrap();
    /// assert_eq!(type_message(&mut machine, "AAAAA").unwrap(), "BDZGO");
    /// ```
    pub fn build(&self, registry: &Registry) -> Result<Machine> {
        let registry = self.extend_registry(registry)?;

        expect_count("rotors", self.rotors.len())?;
        expect_count("ring settings", self.ring_settings.len())?;
        expect_count("rotor positions", self.positions.len())?;

        let reflector = *registry.reflector(&self.reflector)?;
        let rotors = self
            .rotors
            .iter()
            .map(|name| registry.rotor(name).copied())
            .collect::<Result<Vec<Rotor>>>()?;
        let ring_settings = self
            .ring_settings
            .iter()
            .map(|token| parse_ring_setting(token))
            .collect::<Result<Vec<u8>>>()?;
        let mut plugboard = Plugboard::new();
        for token in &self.plug_pairs {
            let (left, right) = parse_plug_pair(token)?;
            plugboard.add_pair(left, right)?;
        }
        let positions = self
            .positions
            .iter()
            .map(|token| parse_position(token))
            .collect::<Result<Vec<u8>>>()?;

        let mut machine = Machine::new();
        machine.install_reflector(reflector);
        info!(reflector = %self.reflector, "reflector installed");
        machine.install_rotors(&rotors)?;
        info!(rotors = ?self.rotors, "rotors installed");
        machine.set_ring_settings(&ring_settings)?;
        info!(ring_settings = %String::from_utf8_lossy(&ring_settings), "ring settings set");
        machine.set_plugboard(plugboard);
        info!(plugboard = %machine.plugboard(), "plugboard set");
        machine.set_rotor_positions(&positions)?;
        info!(positions = %String::from_utf8_lossy(&positions), "rotor positions set");
        Ok(machine)
    }

    fn extend_registry(&self, registry: &Registry) -> Result<Registry> {
        let mut registry = registry.clone();
        for (name, custom) in &self.custom_rotors {
            registry.add_rotor(name.clone(), Rotor::new(&custom.wiring, &custom.turnovers)?);
            debug!(name = %name, wiring = %custom.wiring, "custom rotor registered");
        }
        for (name, wiring) in &self.custom_reflectors {
            registry.add_reflector(name.clone(), Reflector::new(wiring)?);
            debug!(name = %name, wiring = %wiring, "custom reflector registered");
        }
        Ok(registry)
    }
}

fn expect_count(what: &'static str, actual: usize) -> Result<()> {
    if actual == ROTOR_COUNT {
        Ok(())
    } else {
        Err(EnigmaError::CountMismatch {
            what,
            expected: ROTOR_COUNT,
            actual,
        })
    }
}

/// Loads a [`MachineConfig`] from a JSON file. Missing fields take their
/// default values.
///
/// # Errors
/// - [`EnigmaError::ConfigIo`] if the file cannot be read.
/// - [`EnigmaError::ConfigParse`] if it is not a valid configuration.
pub fn load_config(path: impl AsRef<Path>) -> Result<MachineConfig> {
    let raw_json = fs::read_to_string(&path).map_err(|e| EnigmaError::ConfigIo(format!("{e}")))?;
    serde_json::from_str(&raw_json).map_err(|e| EnigmaError::ConfigParse(format!("{e}")))
}

fn single_letter(token: &str) -> Option<u8> {
    match token.as_bytes() {
        [letter] if is_letter(*letter) => Some(*letter),
        _ => None,
    }
}

/// Parses a ring setting token into its letter.
///
/// Code books gave ring settings either as numbers 1-26 or as letters;
/// `"1"` and `"A"` are the same setting.
///
/// # Errors
/// Returns [`EnigmaError::InvalidRingSetting`] for anything else.
///
/// # Examples
///
/// ```
/// use enigma::config::parse_ring_setting;
///
/// assert_eq!(parse_ring_setting("24").unwrap(), b'X');
/// assert_eq!(parse_ring_setting("M").unwrap(), b'M');
/// assert!(parse_ring_setting("27").is_err());
/// ```
pub fn parse_ring_setting(token: &str) -> Result<u8> {
    if let Ok(number) = token.parse::<u32>() {
        return match number {
            1..=26 => Ok(b'A' + (number - 1) as u8),
            _ => Err(EnigmaError::InvalidRingSetting(token.to_string())),
        };
    }
    single_letter(token).ok_or_else(|| EnigmaError::InvalidRingSetting(token.to_string()))
}

/// Parses a rotor position token: exactly one letter.
///
/// # Errors
/// Returns [`EnigmaError::InvalidPosition`] otherwise.
pub fn parse_position(token: &str) -> Result<u8> {
    single_letter(token).ok_or_else(|| EnigmaError::InvalidPosition(token.to_string()))
}

/// Parses a plug cable token such as `"AB"`.
///
/// # Errors
/// Returns [`EnigmaError::InvalidPlugPair`] unless `token` is two letters.
pub fn parse_plug_pair(token: &str) -> Result<(u8, u8)> {
    match token.as_bytes() {
        [left, right] if is_letter(*left) && is_letter(*right) => Ok((*left, *right)),
        _ => Err(EnigmaError::InvalidPlugPair(token.to_string())),
    }
}
