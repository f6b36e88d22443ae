pub mod theme;

pub use theme::{Icon, Theme};

use profile_selector::{Problem, Severity};

pub fn info(message: impl AsRef<str>) {
    eprintln!("{} {}", Theme::primary(Icon::Info), message.as_ref());
}

pub fn error(message: impl AsRef<str>) {
    eprintln!("{} {}", Theme::error(Icon::Cross), message.as_ref());
}

/// Prints one selection problem with its location and cause.
pub fn problem(problem: &Problem) {
    let label = match problem.severity {
        Severity::Error => Theme::error(format!("{} {}", Icon::Cross, problem.severity)),
        Severity::Warning => Theme::warning(format!("{} {}", Icon::Warning, problem.severity)),
    };
    eprintln!("{} {}", label, problem.message);
    eprintln!("  {} {}", Theme::muted("at"), Theme::muted(&problem.location));
    if let Some(cause) = &problem.cause {
        eprintln!("  {} {}", Theme::muted("cause:"), cause);
    }
}
