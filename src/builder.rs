use std::path::PathBuf;
use std::str::FromStr;

use crate::extractors::{Extractor, FoodTableExtractor, ParsingContext, RecipeTableExtractor};
use crate::model::{to_json, FoodItem, PageExtraction, Recipe};
use crate::{pipeline, ExtractError, ExtractorConfig};

/// Represents the input source for a page
#[derive(Debug, Clone)]
pub enum InputSource {
    /// HTML already in memory
    Html(String),
    /// Saved HTML file on disk
    File(PathBuf),
}

/// Which tables to extract
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// Both tables (default)
    #[default]
    Page,
    /// Only the food stat table
    Food,
    /// Only the crafting recipe table
    Recipe,
}

impl FromStr for OutputMode {
    type Err = ExtractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" | "page" => Ok(OutputMode::Page),
            "food" => Ok(OutputMode::Food),
            "recipe" => Ok(OutputMode::Recipe),
            other => Err(ExtractError::Builder(format!(
                "Unknown output mode `{other}`, expected all, food or recipe"
            ))),
        }
    }
}

/// Result of an import operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportResult {
    Page(PageExtraction),
    Food(Vec<FoodItem>),
    Recipe(Recipe),
}

impl ImportResult {
    pub fn to_json(&self, pretty: bool) -> Result<String, serde_json::Error> {
        match self {
            ImportResult::Page(page) => to_json(page, pretty),
            ImportResult::Food(items) => to_json(items, pretty),
            ImportResult::Recipe(recipe) => to_json(recipe, pretty),
        }
    }
}

/// Builder for configuring and executing table imports
#[derive(Debug, Default)]
pub struct PageImporterBuilder {
    source: Option<InputSource>,
    mode: OutputMode,
    config: Option<ExtractorConfig>,
    strict_numbers: Option<bool>,
}

impl PageImporterBuilder {
    /// Set the input source to an HTML string
    ///
    /// # Example
    /// ```
    /// use icarus_import::PageImporter;
    ///
    /// let builder = PageImporter::builder()
    ///     .html("<html><body></body></html>");
    /// ```
    pub fn html(mut self, html: impl Into<String>) -> Self {
        self.source = Some(InputSource::Html(html.into()));
        self
    }

    /// Set the input source to a saved HTML file
    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.source = Some(InputSource::File(path.into()));
        self
    }

    pub fn mode(mut self, mode: OutputMode) -> Self {
        self.mode = mode;
        self
    }

    /// Extract only the food table
    pub fn food_only(self) -> Self {
        self.mode(OutputMode::Food)
    }

    /// Extract only the recipe table
    pub fn recipe_only(self) -> Self {
        self.mode(OutputMode::Recipe)
    }

    /// Use `config` instead of [`ExtractorConfig::default`]
    pub fn config(mut self, config: ExtractorConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Fail on non-numeric integer cells, overriding the config value
    pub fn strict_numbers(mut self, strict: bool) -> Self {
        self.strict_numbers = Some(strict);
        self
    }

    /// Build and execute the import
    ///
    /// # Errors
    /// Returns `ExtractError` if:
    /// - No input source was specified
    /// - The input file cannot be read
    /// - A requested table is missing or malformed
    ///
    /// # Example
    /// ```
    /// use icarus_import::{ImportResult, PageImporter};
    ///
    /// let html = r#"<div id="mw-content-text"><div><table>
    ///     <caption>Anvil</caption>
    ///     <tbody><tr><th>Material</th><th>Amount</th></tr></tbody>
    /// </table></div></div>"#;
    ///
    /// let result = PageImporter::builder().html(html).recipe_only().build().unwrap();
    /// match result {
    ///     ImportResult::Recipe(recipe) => assert_eq!(recipe.recipe_workbench, "Anvil"),
    ///     _ => unreachable!(),
    /// }
    /// ```
    pub fn build(self) -> Result<ImportResult, ExtractError> {
        let source = self.source.ok_or_else(|| {
            ExtractError::Builder("No input source specified. Use .html() or .file()".to_string())
        })?;

        let mut config = self.config.unwrap_or_default();
        if let Some(strict) = self.strict_numbers {
            config.strict_numbers = strict;
        }

        let html = match source {
            InputSource::Html(html) => html,
            InputSource::File(path) => std::fs::read_to_string(path)?,
        };
        if html.trim().is_empty() {
            return Err(ExtractError::Builder("HTML input cannot be empty".to_string()));
        }

        let context = ParsingContext::new(&html, config);
        match self.mode {
            OutputMode::Page => pipeline::process(&context).map(ImportResult::Page),
            OutputMode::Food => FoodTableExtractor.parse(&context).map(ImportResult::Food),
            OutputMode::Recipe => RecipeTableExtractor.parse(&context).map(ImportResult::Recipe),
        }
    }
}

/// Main entry point for the builder API
pub struct PageImporter;

impl PageImporter {
    /// Creates a new builder for importing wiki tables
    pub fn builder() -> PageImporterBuilder {
        PageImporterBuilder::default()
    }
}
