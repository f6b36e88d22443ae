use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The `[project]` table of a descriptor.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ProjectMetadata {
    /// Names the descriptor in validation output.
    #[serde(default)]
    pub name: String,
}
