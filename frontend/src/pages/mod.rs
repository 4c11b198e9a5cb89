pub mod intake;
pub mod spin_wheel;
