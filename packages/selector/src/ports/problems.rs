use crate::ports::activator::ActivationError;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A non-fatal issue noticed while selecting profiles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    pub severity: Severity,
    pub message: String,
    pub location: String,
    pub cause: Option<ActivationError>,
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} @ {}", self.severity, self.message, self.location)?;
        if let Some(cause) = &self.cause {
            write!(f, ": {}", cause)?;
        }
        Ok(())
    }
}

/// Sink for problems. Recording a problem never changes control flow.
pub trait ProblemCollector {
    fn add(&mut self, problem: Problem);
}

/// Keeps every problem in arrival order.
#[derive(Debug, Default, Clone)]
pub struct DefaultProblemCollector {
    problems: Vec<Problem>,
}

impl DefaultProblemCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn problems(&self) -> &[Problem] {
        &self.problems
    }

    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        self.problems
            .iter()
            .any(|p| p.severity == Severity::Error)
    }
}

impl ProblemCollector for DefaultProblemCollector {
    fn add(&mut self, problem: Problem) {
        self.problems.push(problem);
    }
}
