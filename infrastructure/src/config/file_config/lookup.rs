//! Lookup configuration from TOML (`[lookup]` section)

use serde::{Deserialize, Serialize};

/// Raw lookup configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLookupConfig {
    /// Skip Wikipedia / DuckDuckGo and use the fallback description
    pub offline: bool,
}
