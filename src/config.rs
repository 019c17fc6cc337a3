use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Extraction settings
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ExtractorConfig {
    /// CSS selector of the food stat table
    #[serde(default = "default_food_table_selector")]
    pub food_table_selector: String,
    /// CSS selector of the crafting recipe table
    #[serde(default = "default_recipe_table_selector")]
    pub recipe_table_selector: String,
    /// Base URL that relative image sources are resolved against
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Fail on non-numeric integer cells instead of emitting `null`
    #[serde(default)]
    pub strict_numbers: bool,
    /// Indent JSON output by two spaces
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            food_table_selector: default_food_table_selector(),
            recipe_table_selector: default_recipe_table_selector(),
            base_url: default_base_url(),
            strict_numbers: false,
            pretty: default_pretty(),
        }
    }
}

// Default value functions
fn default_food_table_selector() -> String {
    "#mw-content-text .mw-parser-output table.sortable".to_string()
}

fn default_recipe_table_selector() -> String {
    "#mw-content-text > div > table:not(.sortable)".to_string()
}

fn default_base_url() -> String {
    "https://icarus.fandom.com/".to_string()
}

fn default_pretty() -> bool {
    true
}

impl ExtractorConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with ICARUS__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: ICARUS__STRICT_NUMBERS
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from file and environment variables
///
/// See [`ExtractorConfig::load`] for the source priority.
pub fn load_config() -> Result<ExtractorConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("config").required(false))
        .add_source(
            Environment::with_prefix("ICARUS")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
