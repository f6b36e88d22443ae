use anyhow::{Context, Result};
use std::process::Command;

/// Finds the version of the `java` binary on PATH.
pub struct JdkDetector;

impl JdkDetector {
    /// Run `java -version` and extract the quoted version string.
    pub fn detect() -> Result<String> {
        let output = Command::new("java")
            .arg("-version")
            .output()
            .context("Failed to run 'java -version'")?;

        if !output.status.success() {
            anyhow::bail!("'java -version' exited with {}", output.status);
        }

        // The banner goes to stderr on every JDK we know of.
        let banner = format!(
            "{}{}",
            String::from_utf8_lossy(&output.stderr),
            String::from_utf8_lossy(&output.stdout)
        );
        Self::parse_version(&banner)
    }

    /// Common patterns:
    /// `openjdk version "17.0.2" 2022-01-18`, `java version "1.8.0_292"`.
    pub fn parse_version(banner: &str) -> Result<String> {
        for line in banner.lines() {
            if !line.contains("version") {
                continue;
            }
            let mut quoted = line.split('"');
            if let (Some(_), Some(version)) = (quoted.next(), quoted.next()) {
                if !version.trim().is_empty() {
                    return Ok(version.trim().to_string());
                }
            }
        }

        anyhow::bail!("Could not parse Java version from output: {}", banner)
    }
}
