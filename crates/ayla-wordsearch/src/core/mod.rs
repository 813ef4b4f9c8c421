pub mod layout;
pub mod rng;
