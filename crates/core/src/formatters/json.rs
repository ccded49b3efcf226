use crate::Result;
use crate::profile::Profile;

/// Configuration for JSON output
#[derive(Debug, Clone, Default)]
pub struct JsonConfig {
    /// Pretty print JSON output
    pub pretty: bool,
}

/// JSON formatter with configurable options
pub struct JsonFormatter {
    config: JsonConfig,
}

impl JsonFormatter {
    pub fn new(config: JsonConfig) -> Self {
        Self { config }
    }

    pub fn convert(&self, profile: &Profile) -> Result<String> {
        convert_to_json(profile, &self.config)
    }
}

/// Convert a profile to JSON. A missing name serializes as `null`.
pub fn convert_to_json(profile: &Profile, config: &JsonConfig) -> Result<String> {
    let json = if config.pretty { serde_json::to_string_pretty(profile)? } else { serde_json::to_string(profile)? };
    Ok(json)
}
