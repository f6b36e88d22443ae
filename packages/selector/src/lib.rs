pub mod activators;
pub mod context;
pub mod ports;
pub mod registry;
pub mod selector;
pub mod system;

pub use context::ActivationContext;
pub use ports::activator::{ActivationError, ActivatorKind, ProfileActivator};
pub use ports::problems::{DefaultProblemCollector, Problem, ProblemCollector, Severity};
pub use registry::ActivatorRegistry;
pub use selector::ProfileSelector;
