//! Enigma I rotor cipher machine.
//!
//! A faithful model of the German Army Enigma I: a stack of rotating
//! substitution rotors, a fixed reflector and a plugboard, composed into a
//! reciprocal substitution cipher. Typing the ciphertext on a machine set
//! to the same key gives back the plaintext.
//!
//! # Architecture
//!
//! ```text
//! Rotor / Reflector   (immutable wiring, checked by `validator`)
//! Plugboard           (letter swaps, owned by the machine)
//!     ↓ installed into
//! Machine             (rotor slots + stepping + signal path, one key at a time)
//!     ↓ driven by
//! type_message        (whole messages, spaces passed through)
//!
//! Registry + MachineConfig  (named wheels and code book settings -> Machine)
//! ```
//!
//! # Examples
//!
//! Encrypt and decrypt with the same key:
//!
//! ```
//! use enigma::{type_message, MachineConfig, Registry};
//!
//! let registry = Registry::enigma_i().unwrap();
//! let config = MachineConfig {
//!     plug_pairs: vec!["AB".to_string(), "CD".to_string()],
//!     ..MachineConfig::default()
//! };
//!
//! let mut machine = config.build(&registry).unwrap();
//! let ciphertext = type_message(&mut machine, "AAAAA").unwrap();
//! assert_eq!(ciphertext, "BJLDS");
//!
//! machine.set_rotor_positions(b"AAA").unwrap();
//! assert_eq!(type_message(&mut machine, &ciphertext).unwrap(), "AAAAA");
//! ```
//!
//! Assemble a machine by hand:
//!
//! ```
//! use enigma::{Machine, Plugboard, Registry};
//!
//! let registry = Registry::enigma_i().unwrap();
//! let mut machine = Machine::new();
//! machine.install_reflector(*registry.reflector("B").unwrap());
//! machine
//!     .install_rotors(&[
//!         *registry.rotor("I").unwrap(),
//!         *registry.rotor("II").unwrap(),
//!         *registry.rotor("III").unwrap(),
//!     ])
//!     .unwrap();
//! machine.set_ring_settings(b"BBB").unwrap();
//! machine.set_plugboard(Plugboard::new());
//! machine.set_rotor_positions(b"AAA").unwrap();
//!
//! assert_eq!(machine.press_key(b'A').unwrap(), b'E');
//! ```

#![deny(clippy::all)]

pub mod config;
pub mod error;
pub mod machine;
pub mod plugboard;
pub mod reflector;
pub mod registry;
pub mod rotor;
pub mod typist;
pub mod utils;
pub mod validator;

pub use config::{load_config, MachineConfig};
pub use error::{EnigmaError, ErrorKind, Result};
pub use machine::Machine;
pub use plugboard::Plugboard;
pub use reflector::Reflector;
pub use registry::Registry;
pub use rotor::Rotor;
pub use typist::type_message;
