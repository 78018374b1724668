//! Repository layer.
//!
//! Repositories own a clone of the pool and are built once at startup,
//! then shared through application state.

pub mod character_repo;

pub use character_repo::CharacterRepo;
