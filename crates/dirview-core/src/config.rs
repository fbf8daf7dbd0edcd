//! Configuration for reaching a directory service instance.

use serde::Deserialize;

/// Connection settings for one directory instance.
///
/// Loaded from `dirview.toml` `[directory]` section or
/// `DIRVIEW__` environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectoryConfig {
    /// Base URL of the directory service endpoint.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// ARN of the directory instance to query.
    #[serde(default)]
    pub directory_arn: String,

    /// ARN of the schema the directory was created against.
    #[serde(default)]
    pub schema_arn: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Static `Authorization` header value, if the deployment fronts the
    /// service with one. Credential resolution itself is not handled here.
    #[serde(default)]
    pub authorization: Option<String>,
}

fn default_endpoint() -> String {
    "https://clouddirectory.us-east-1.amazonaws.com".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            directory_arn: String::new(),
            schema_arn: String::new(),
            timeout_secs: default_timeout_secs(),
            authorization: None,
        }
    }
}
