pub mod firearm;
