use std::cmp::Ordering;
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JdkSpecError {
    #[error("Invalid JDK version range '{spec}': {reason}")]
    InvalidRange { spec: String, reason: String },
    #[error("Invalid Java version '{0}'")]
    InvalidVersion(String),
}

/// A Java version compared numerically, segment by segment.
///
/// `1.8.0_292`, `17.0.2+8` and `21-ea` are all accepted; parsing stops at the
/// first segment without leading digits. Missing segments compare as zero.
#[derive(Debug, Clone)]
pub struct JavaVersion {
    raw: String,
    segments: Vec<u64>,
}

impl JavaVersion {
    pub fn parse(raw: &str) -> Result<Self, JdkSpecError> {
        let trimmed = raw.trim();
        let mut segments = Vec::new();

        for token in trimmed.split(['.', '_', '-', '+']) {
            let digits: String = token.chars().take_while(|c| c.is_ascii_digit()).collect();
            if digits.is_empty() {
                break;
            }
            let value = digits
                .parse::<u64>()
                .map_err(|_| JdkSpecError::InvalidVersion(raw.to_string()))?;
            segments.push(value);
            if digits.len() != token.len() {
                break;
            }
        }

        if segments.is_empty() {
            return Err(JdkSpecError::InvalidVersion(raw.to_string()));
        }

        Ok(Self {
            raw: trimmed.to_string(),
            segments,
        })
    }

    pub fn segments(&self) -> &[u64] {
        &self.segments
    }
}

impl fmt::Display for JavaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl Ord for JavaVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.segments.len().max(other.segments.len());
        for i in 0..len {
            let a = self.segments.get(i).copied().unwrap_or(0);
            let b = other.segments.get(i).copied().unwrap_or(0);
            match a.cmp(&b) {
                Ordering::Equal => continue,
                ordering => return ordering,
            }
        }
        Ordering::Equal
    }
}

impl PartialOrd for JavaVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for JavaVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for JavaVersion {}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Bound {
    version: JavaVersion,
    inclusive: bool,
}

/// One bracketed interval, e.g. `[11,17)` or `[1.8]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionRange {
    lower: Option<Bound>,
    upper: Option<Bound>,
}

impl VersionRange {
    pub fn contains(&self, version: &JavaVersion) -> bool {
        let above = match &self.lower {
            Some(bound) if bound.inclusive => version >= &bound.version,
            Some(bound) => version > &bound.version,
            None => true,
        };
        let below = match &self.upper {
            Some(bound) if bound.inclusive => version <= &bound.version,
            Some(bound) => version < &bound.version,
            None => true,
        };
        above && below
    }
}

/// Parsed form of an activation `jdk` value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JdkRequirement {
    /// Plain prefix match against `java.version`.
    Prefix { prefix: String, negated: bool },
    /// Union of intervals.
    Ranges {
        ranges: Vec<VersionRange>,
        negated: bool,
    },
}

impl JdkRequirement {
    pub fn parse(spec: &str) -> Result<Self, JdkSpecError> {
        let trimmed = spec.trim();
        let (negated, body) = match trimmed.strip_prefix('!') {
            Some(rest) => (true, rest.trim()),
            None => (false, trimmed),
        };

        if body.starts_with('[') || body.starts_with('(') {
            let ranges = parse_ranges(spec, body)?;
            Ok(JdkRequirement::Ranges { ranges, negated })
        } else {
            Ok(JdkRequirement::Prefix {
                prefix: body.to_string(),
                negated,
            })
        }
    }

    /// Evaluate against the running Java version string.
    pub fn matches(&self, java_version: &str) -> Result<bool, JdkSpecError> {
        match self {
            JdkRequirement::Prefix { prefix, negated } => {
                Ok(java_version.trim().starts_with(prefix.as_str()) != *negated)
            }
            JdkRequirement::Ranges { ranges, negated } => {
                let version = JavaVersion::parse(java_version)?;
                let inside = ranges.iter().any(|range| range.contains(&version));
                Ok(inside != *negated)
            }
        }
    }
}

fn parse_ranges(spec: &str, body: &str) -> Result<Vec<VersionRange>, JdkSpecError> {
    let invalid = |reason: &str| JdkSpecError::InvalidRange {
        spec: spec.to_string(),
        reason: reason.to_string(),
    };

    let mut ranges = Vec::new();
    let mut rest = body;

    while !rest.is_empty() {
        let lower_inclusive = match rest.chars().next() {
            Some('[') => true,
            Some('(') => false,
            _ => return Err(invalid("expected '[' or '('")),
        };

        let close = rest
            .find([']', ')'])
            .ok_or_else(|| invalid("unterminated range"))?;
        let upper_inclusive = rest[close..].starts_with(']');
        let inner = &rest[1..close];
        rest = rest[close + 1..].trim_start();

        let range = match inner.split_once(',') {
            None => {
                if !lower_inclusive || !upper_inclusive {
                    return Err(invalid("single version must use '[' and ']'"));
                }
                let version = parse_bound(spec, inner)?.ok_or_else(|| invalid("empty range"))?;
                VersionRange {
                    lower: Some(Bound {
                        version: version.clone(),
                        inclusive: true,
                    }),
                    upper: Some(Bound {
                        version,
                        inclusive: true,
                    }),
                }
            }
            Some((low, high)) => {
                if high.contains(',') {
                    return Err(invalid("too many bounds"));
                }
                let lower = parse_bound(spec, low)?.map(|version| Bound {
                    version,
                    inclusive: lower_inclusive,
                });
                let upper = parse_bound(spec, high)?.map(|version| Bound {
                    version,
                    inclusive: upper_inclusive,
                });
                if lower.is_none() && upper.is_none() {
                    return Err(invalid("range has no bounds"));
                }
                if let (Some(l), Some(u)) = (&lower, &upper) {
                    if l.version > u.version {
                        return Err(invalid("lower bound is greater than upper bound"));
                    }
                }
                VersionRange { lower, upper }
            }
        };
        ranges.push(range);

        if let Some(next) = rest.strip_prefix(',') {
            rest = next.trim_start();
            if rest.is_empty() {
                return Err(invalid("trailing ','"));
            }
        } else if !rest.is_empty() {
            return Err(invalid("ranges must be separated by ','"));
        }
    }

    Ok(ranges)
}

fn parse_bound(spec: &str, text: &str) -> Result<Option<JavaVersion>, JdkSpecError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }
    JavaVersion::parse(text)
        .map(Some)
        .map_err(|_| JdkSpecError::InvalidRange {
            spec: spec.to_string(),
            reason: format!("'{}' is not a version", text),
        })
}
