//! Domain types shared by the Blip crates.
//!
//! Holds the pieces that need neither a database nor the network: the
//! tri-state flag, the name classifier and its built-in roster, and
//! thumbnail URL composition.

pub mod classifier;
pub mod error;
pub mod roster;
pub mod thumbnail;
pub mod types;
