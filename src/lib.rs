pub mod builder;
pub mod config;
pub mod error;
pub mod extractors;
pub mod model;
pub mod pipeline;
pub mod source;
pub mod text;

pub use builder::{ImportResult, InputSource, OutputMode, PageImporter, PageImporterBuilder};
pub use config::ExtractorConfig;
pub use error::ExtractError;
pub use model::{FoodItem, Ingredient, PageExtraction, Recipe};
pub use text::clean;

use crate::extractors::{Extractor, FoodTableExtractor, ParsingContext, RecipeTableExtractor};

/// Extract the food stat table from a saved wiki page using default settings.
pub fn extract_food_items(html: &str) -> Result<Vec<FoodItem>, ExtractError> {
    let context = ParsingContext::new(html, ExtractorConfig::default());
    FoodTableExtractor.parse(&context)
}

/// Extract the crafting recipe table from a saved wiki page using default settings.
pub fn extract_recipe(html: &str) -> Result<Recipe, ExtractError> {
    let context = ParsingContext::new(html, ExtractorConfig::default());
    RecipeTableExtractor.parse(&context)
}

/// Extract both tables from a saved wiki page.
pub fn extract_page(html: &str, config: ExtractorConfig) -> Result<PageExtraction, ExtractError> {
    let context = ParsingContext::new(html, config);
    pipeline::process(&context)
}
