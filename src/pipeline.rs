use crate::error::ExtractError;
use crate::extractors::{Extractor, FoodTableExtractor, ParsingContext, RecipeTableExtractor};
use crate::model::PageExtraction;
use log::debug;

/// Run both table extractors over one page.
///
/// A table missing from the page yields an empty food list or no recipe;
/// the page must hold at least one of them. A table that is present but
/// malformed fails the whole extraction.
pub fn process(context: &ParsingContext) -> Result<PageExtraction, ExtractError> {
    let food_items = optional(FoodTableExtractor.parse(context))?;
    let recipe = optional(RecipeTableExtractor.parse(context))?;

    match (food_items, recipe) {
        (None, None) => Err(ExtractError::TableNotFound {
            table: "food or recipe",
            selector: format!(
                "{}, {}",
                context.config.food_table_selector, context.config.recipe_table_selector
            ),
        }),
        (food_items, recipe) => Ok(PageExtraction {
            food_items: food_items.unwrap_or_default(),
            recipe,
        }),
    }
}

fn optional<T>(result: Result<T, ExtractError>) -> Result<Option<T>, ExtractError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(ExtractError::TableNotFound { table, selector }) => {
            debug!("No {table} table on page (selector `{selector}`)");
            Ok(None)
        }
        Err(err) => Err(err),
    }
}
