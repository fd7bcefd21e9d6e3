//! Small helpers shared by the machine components.

pub mod alphabet;
