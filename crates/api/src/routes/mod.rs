pub mod firearm;
pub mod health;
