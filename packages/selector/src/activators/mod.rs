mod file;
mod jdk;
mod os;
mod property;

pub use file::FileProfileActivator;
pub use jdk::JdkVersionProfileActivator;
pub use os::OperatingSystemProfileActivator;
pub use property::PropertyProfileActivator;

/// Splits a leading `!` off a condition value.
fn negation(value: &str) -> (bool, &str) {
    match value.strip_prefix('!') {
        Some(rest) => (true, rest.trim()),
        None => (false, value.trim()),
    }
}
