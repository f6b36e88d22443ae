pub mod activator;
pub mod problems;
