//! Repository implementations.
//!
//! Only the in-memory backend ships with this crate; production persistence
//! lives in an external collaborator reached through the same trait.

#[cfg(feature = "local-repo")]
mod local;

#[cfg(feature = "local-repo")]
pub use local::LocalRepository;
