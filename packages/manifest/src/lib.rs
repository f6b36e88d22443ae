pub mod parser;
pub mod types;

pub use parser::{ManifestFormat, ManifestParser};
pub use types::*;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A build descriptor declaring candidate profiles.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ProfileManifest {
    /// Project metadata.
    #[serde(default)]
    pub project: ProjectMetadata,

    /// Candidate profiles, in declaration order.
    #[serde(default)]
    pub profiles: Vec<Profile>,
}

impl ProfileManifest {
    /// Stamp every profile with the origin it was loaded under.
    pub fn assign_origin(&mut self, source: ProfileSource, path: Option<&Path>) {
        for profile in &mut self.profiles {
            profile.source = source;
            profile.source_file = path.map(Path::to_path_buf);
        }
    }
}
