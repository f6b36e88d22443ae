pub mod activation;
pub mod jdk;
pub mod metadata;
pub mod profile;
pub mod validation;

pub use activation::*;
pub use jdk::*;
pub use metadata::*;
pub use profile::*;
pub use validation::*;
