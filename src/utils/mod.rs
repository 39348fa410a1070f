pub mod sensitive;
pub mod socket;
