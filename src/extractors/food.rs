use super::columns::{ColumnKind, ColumnMap, FoodField};
use super::{coerce_int, descend, image_src, select_table, Extractor, ParsingContext};
use crate::config::ExtractorConfig;
use crate::error::ExtractError;
use crate::model::FoodItem;
use crate::source::{CellView, HtmlTable, RowView, TableSource};
use log::debug;
use scraper::Html;
use url::Url;

/// Item cell layout: `<td><span><a><img></a></span><a>Name</a></td>`
const ITEM_IMAGE_PATH: [usize; 3] = [0, 0, 0];
const ITEM_LABEL_PATH: [usize; 1] = [1];

pub struct FoodTableExtractor;

enum CellValue {
    Item { name: String, img_src: String },
    Integer(Option<i64>),
    Text(String),
}

impl FoodTableExtractor {
    pub fn locate<'a>(
        &self,
        document: &'a Html,
        config: &ExtractorConfig,
    ) -> Result<HtmlTable<'a>, ExtractError> {
        select_table(document, &config.food_table_selector, "food")
    }

    /// Map every data row of `source` to a [`FoodItem`], keeping row order.
    ///
    /// All rows are validated before any is mapped, so a structural problem
    /// anywhere in the table fails the whole extraction.
    pub fn extract(
        &self,
        source: &dyn TableSource,
        config: &ExtractorConfig,
    ) -> Result<Vec<FoodItem>, ExtractError> {
        let base = Url::parse(&config.base_url)?;
        let rows = source.rows();
        let columns = ColumnMap::resolve(rows.iter().find(|row| row.is_header()));

        let data_rows: Vec<(String, &RowView)> = rows
            .iter()
            .enumerate()
            .filter(|(_, row)| !row.is_header())
            .map(|(index, row)| (format!("food row {}", index + 1), row))
            .collect();

        for (context, row) in &data_rows {
            validate_row(row, &columns, context)?;
        }

        let items = data_rows
            .iter()
            .map(|(context, row)| {
                map_row(row, &columns, &base, config.strict_numbers, context)
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!("Extracted {} food items", items.len());
        Ok(items)
    }
}

impl Extractor for FoodTableExtractor {
    type Output = Vec<FoodItem>;

    fn parse(&self, context: &ParsingContext) -> Result<Vec<FoodItem>, ExtractError> {
        debug!("Attempting to extract food table");
        let table = self.locate(&context.document, &context.config)?;
        self.extract(&table, &context.config)
    }
}

fn validate_row(row: &RowView, columns: &ColumnMap, context: &str) -> Result<(), ExtractError> {
    columns.validate_width(row, context)?;
    let item = &row.cells[columns.index(FoodField::Item)];
    descend(item, &ITEM_IMAGE_PATH, context, "item image")?;
    descend(item, &ITEM_LABEL_PATH, context, "item label")?;
    Ok(())
}

fn read_cell(
    cell: &CellView,
    kind: ColumnKind,
    field: &str,
    base: &Url,
    strict: bool,
    context: &str,
) -> Result<CellValue, ExtractError> {
    Ok(match kind {
        ColumnKind::Item => {
            let img = descend(cell, &ITEM_IMAGE_PATH, context, "item image")?;
            let label = descend(cell, &ITEM_LABEL_PATH, context, "item label")?;
            CellValue::Item {
                name: label.text.trim().to_string(),
                img_src: image_src(img, base, context)?,
            }
        }
        ColumnKind::Integer => CellValue::Integer(coerce_int(&cell.text, field, strict)?),
        ColumnKind::Text => CellValue::Text(cell.text.trim().to_string()),
    })
}

fn map_row(
    row: &RowView,
    columns: &ColumnMap,
    base: &Url,
    strict: bool,
    context: &str,
) -> Result<FoodItem, ExtractError> {
    let mut item = FoodItem::default();

    for (spec, index) in columns.columns() {
        let cell = row.cell(index).ok_or_else(|| {
            ExtractError::structure(context, format!("missing {} cell #{index}", spec.name))
        })?;
        let value = read_cell(cell, spec.kind, spec.name, base, strict, context)?;

        match (spec.field, value) {
            (FoodField::Item, CellValue::Item { name, img_src }) => {
                item.food_name = name;
                item.img_src = img_src;
            }
            (FoodField::FoodValue, CellValue::Integer(v)) => item.food_value = v,
            (FoodField::WaterValue, CellValue::Integer(v)) => item.water_value = v,
            (FoodField::MaxStamina, CellValue::Integer(v)) => item.max_stamina = v,
            (FoodField::StaminaRegen, CellValue::Integer(v)) => item.stamina_regen = v,
            (FoodField::MaxHealth, CellValue::Integer(v)) => item.max_health = v,
            (FoodField::HealthRegen, CellValue::Integer(v)) => item.health_regen = v,
            (FoodField::BuffDuration, CellValue::Text(v)) => item.buff_duration = v,
            (FoodField::SpoilDuration, CellValue::Text(v)) => item.spoil_duration = v,
            (FoodField::ExperienceGain, CellValue::Text(v)) => item.experience_gain = v,
            (FoodField::Misc, CellValue::Text(v)) => item.misc = v,
            (field, _) => {
                return Err(ExtractError::structure(
                    context,
                    format!("column kind does not fit field {field:?}"),
                ))
            }
        }
    }

    Ok(item)
}
