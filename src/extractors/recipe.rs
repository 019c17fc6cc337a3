use super::{coerce_int, descend, image_src, select_table, Extractor, ParsingContext};
use crate::config::ExtractorConfig;
use crate::error::ExtractError;
use crate::model::{Ingredient, Recipe};
use crate::source::{CellView, HtmlTable, RowView, TableSource};
use crate::text::clean;
use log::debug;
use scraper::Html;
use url::Url;

const MATERIAL_CELL: usize = 0;
const AMOUNT_CELL: usize = 1;
/// Material label wrapper inside the material cell
const MATERIAL_LABEL_PATH: [usize; 1] = [0];
/// `<td><div><span><a><img>` below the material cell
const MATERIAL_IMAGE_PATH: [usize; 4] = [0, 0, 0, 0];
/// Rows before the first ingredient
const HEADER_ROWS: usize = 1;

pub struct RecipeTableExtractor;

impl RecipeTableExtractor {
    pub fn locate<'a>(
        &self,
        document: &'a Html,
        config: &ExtractorConfig,
    ) -> Result<HtmlTable<'a>, ExtractError> {
        select_table(document, &config.recipe_table_selector, "recipe")
    }

    pub fn extract(
        &self,
        source: &dyn TableSource,
        config: &ExtractorConfig,
    ) -> Result<Recipe, ExtractError> {
        let base = Url::parse(&config.base_url)?;
        let heading = source
            .heading()
            .ok_or_else(|| ExtractError::structure("recipe table", "table has no child elements"))?;
        let recipe_workbench = clean(&heading);

        let rows = source.rows();
        let ingredient_rows: Vec<(String, &RowView)> = rows
            .iter()
            .enumerate()
            .skip(HEADER_ROWS)
            .map(|(index, row)| (format!("recipe row {}", index + 1), row))
            .collect();

        for (context, row) in &ingredient_rows {
            validate_row(row, context)?;
        }

        let ingredients = ingredient_rows
            .iter()
            .map(|(context, row)| map_row(row, &base, config.strict_numbers, context))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            "Extracted recipe for {:?} with {} ingredients",
            recipe_workbench,
            ingredients.len()
        );
        Ok(Recipe {
            recipe_workbench,
            ingredients,
        })
    }
}

impl Extractor for RecipeTableExtractor {
    type Output = Recipe;

    fn parse(&self, context: &ParsingContext) -> Result<Recipe, ExtractError> {
        debug!("Attempting to extract recipe table");
        let table = self.locate(&context.document, &context.config)?;
        self.extract(&table, &context.config)
    }
}

fn cell<'a>(row: &'a RowView, index: usize, context: &str) -> Result<&'a CellView, ExtractError> {
    row.cell(index).ok_or_else(|| {
        ExtractError::structure(
            context,
            format!("expected cell #{index} but row has {} cells", row.cells.len()),
        )
    })
}

fn validate_row(row: &RowView, context: &str) -> Result<(), ExtractError> {
    cell(row, AMOUNT_CELL, context)?;
    let material = cell(row, MATERIAL_CELL, context)?;
    descend(material, &MATERIAL_LABEL_PATH, context, "material label")?;
    descend(material, &MATERIAL_IMAGE_PATH, context, "material image")?;
    Ok(())
}

fn map_row(
    row: &RowView,
    base: &Url,
    strict: bool,
    context: &str,
) -> Result<Ingredient, ExtractError> {
    let material = cell(row, MATERIAL_CELL, context)?;
    let amount = cell(row, AMOUNT_CELL, context)?;
    let label = descend(material, &MATERIAL_LABEL_PATH, context, "material label")?;
    let img = descend(material, &MATERIAL_IMAGE_PATH, context, "material image")?;

    Ok(Ingredient {
        amount: coerce_int(&amount.text, "amount", strict)?,
        material_name: clean(&label.text),
        img_src: image_src(img, base, context)?,
    })
}
