//! Property tests over arbitrary machine configurations.
//!
//! - Reciprocity: typing the ciphertext at the same key restores the message.
//! - Rotor wiring and its installed inverse are mutual inverses.
//! - Reflectors are fixed-point-free involutions.
//! - Stepping is deterministic and never maps a letter to itself.

use enigma::registry::{REFLECTOR_WIRINGS, ROTOR_WIRINGS};
use enigma::{type_message, Machine, Plugboard, Reflector, Registry, Rotor};
use proptest::prelude::*;

#[derive(Debug, Clone)]
struct Key {
    reflector: usize,
    rotors: [usize; 3],
    rings: [u8; 3],
    positions: [u8; 3],
    plugs: Vec<(u8, u8)>,
}

fn arb_letter() -> impl Strategy<Value = u8> {
    b'A'..=b'Z'
}

fn arb_plugs() -> impl Strategy<Value = Vec<(u8, u8)>> {
    (Just((b'A'..=b'Z').collect::<Vec<u8>>()).prop_shuffle(), 0..=13usize).prop_map(
        |(letters, count)| {
            letters
                .chunks(2)
                .take(count)
                .map(|pair| (pair[0], pair[1]))
                .collect()
        },
    )
}

fn arb_key() -> impl Strategy<Value = Key> {
    (
        0..REFLECTOR_WIRINGS.len(),
        [0..ROTOR_WIRINGS.len(), 0..ROTOR_WIRINGS.len(), 0..ROTOR_WIRINGS.len()],
        [arb_letter(), arb_letter(), arb_letter()],
        [arb_letter(), arb_letter(), arb_letter()],
        arb_plugs(),
    )
        .prop_map(|(reflector, rotors, rings, positions, plugs)| Key {
            reflector,
            rotors,
            rings,
            positions,
            plugs,
        })
}

fn build(key: &Key) -> Machine {
    let (_, reflector) = REFLECTOR_WIRINGS[key.reflector];
    let rotors: Vec<Rotor> = key
        .rotors
        .iter()
        .map(|&i| {
            let (_, wiring, turnovers) = ROTOR_WIRINGS[i];
            Rotor::new(wiring, turnovers).unwrap()
        })
        .collect();

    let mut machine = Machine::new();
    machine.install_reflector(Reflector::new(reflector).unwrap());
    machine.install_rotors(&rotors).unwrap();
    machine.set_ring_settings(&key.rings).unwrap();
    machine.set_plugboard(Plugboard::from_pairs(&key.plugs).unwrap());
    machine.set_rotor_positions(&key.positions).unwrap();
    machine
}

proptest! {
    #[test]
    fn prop_reciprocity(key in arb_key(), message in "[A-Z ]{0,300}") {
        let mut machine = build(&key);
        let ciphertext = type_message(&mut machine, &message).unwrap();
        prop_assert_eq!(ciphertext.len(), message.len());

        machine.set_rotor_positions(&key.positions).unwrap();
        let plaintext = type_message(&mut machine, &ciphertext).unwrap();
        prop_assert_eq!(plaintext, message);
    }

    #[test]
    fn prop_deterministic(key in arb_key(), message in "[A-Z]{1,200}") {
        let mut first = build(&key);
        let mut second = build(&key);
        for letter in message.bytes() {
            prop_assert_eq!(first.press_key(letter).unwrap(), second.press_key(letter).unwrap());
            prop_assert_eq!(first.rotor_positions(), second.rotor_positions());
        }
    }

    #[test]
    fn prop_no_letter_encrypts_to_itself(key in arb_key(), letter in arb_letter()) {
        let mut machine = build(&key);
        prop_assert_ne!(machine.press_key(letter).unwrap(), letter);
    }

    #[test]
    fn prop_plugboard_is_involution(plugs in arb_plugs(), letter in arb_letter()) {
        let plugboard = Plugboard::from_pairs(&plugs).unwrap();
        prop_assert_eq!(plugboard.map(plugboard.map(letter)), letter);
    }
}

#[test]
fn rotor_inverse_property() {
    for (name, wiring, turnovers) in ROTOR_WIRINGS {
        let rotor = Rotor::new(wiring, turnovers).unwrap();
        let right_to_left = rotor.right_to_left();
        let mut left_to_right = [0u8; 26];
        for (i, &j) in right_to_left.iter().enumerate() {
            left_to_right[j as usize] = i as u8;
        }
        for i in 0..26u8 {
            assert_eq!(left_to_right[right_to_left[i as usize] as usize], i, "rotor {name}");
            assert_eq!(right_to_left[left_to_right[i as usize] as usize], i, "rotor {name}");
        }
    }
}

#[test]
fn reflector_involution_property() {
    let registry = Registry::enigma_i().unwrap();
    for name in registry.reflector_names() {
        let reflector = registry.reflector(name).unwrap();
        for i in 0..26u8 {
            assert_ne!(reflector.reflect(i), i, "reflector {name}");
            assert_eq!(reflector.reflect(reflector.reflect(i)), i, "reflector {name}");
        }
    }
}
