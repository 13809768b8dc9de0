//! Row structs read back from storage.

pub mod firearm;
