pub mod characters;
pub mod sync;
