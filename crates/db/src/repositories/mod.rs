//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async read methods that
//! accept `&SqlitePool` as the first argument.

pub mod firearm_repo;

pub use firearm_repo::FirearmRepo;
