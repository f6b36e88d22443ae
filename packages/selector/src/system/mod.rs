pub mod jdk;
pub mod platform;

pub use jdk::JdkDetector;
pub use platform::{Architecture, OsType, PlatformDetector, PlatformInfo};
