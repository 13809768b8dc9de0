//! Domain building blocks shared by the storage and HTTP layers.

pub mod catalog;
pub mod error;
pub mod naming;
pub mod pricing;
pub mod types;
