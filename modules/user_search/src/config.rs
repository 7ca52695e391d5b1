use serde::{Deserialize, Serialize};

/// Configuration for the user_search module
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserSearchConfig {
    /// Order field applied when a request omits one: `Id`, `Age` or `Name`.
    #[serde(default = "default_order_field")]
    pub default_order_field: String,
    /// Path to the JSON dataset loaded at startup.
    #[serde(default)]
    pub dataset: Option<String>,
}

impl Default for UserSearchConfig {
    fn default() -> Self {
        Self {
            default_order_field: default_order_field(),
            dataset: None,
        }
    }
}

fn default_order_field() -> String {
    "Name".to_string()
}
