//! Declarative mapping from food table columns to [`FoodItem`](crate::model::FoodItem) fields.

use crate::error::ExtractError;
use crate::source::RowView;
use crate::text::clean;
use log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FoodField {
    Item,
    FoodValue,
    WaterValue,
    BuffDuration,
    SpoilDuration,
    MaxStamina,
    StaminaRegen,
    MaxHealth,
    HealthRegen,
    ExperienceGain,
    Misc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Image plus name label
    Item,
    Integer,
    Text,
}

#[derive(Debug, Clone, Copy)]
pub struct ColumnSpec {
    pub field: FoodField,
    /// JSON field name, used in error messages and logs
    pub name: &'static str,
    pub kind: ColumnKind,
    pub default_index: usize,
    /// Lowercase header captions that identify this column
    pub aliases: &'static [&'static str],
}

const FOOD_COLUMN_COUNT: usize = 11;

pub static FOOD_COLUMNS: [ColumnSpec; FOOD_COLUMN_COUNT] = [
    ColumnSpec {
        field: FoodField::Item,
        name: "foodName",
        kind: ColumnKind::Item,
        default_index: 0,
        aliases: &["item", "name", "food item"],
    },
    ColumnSpec {
        field: FoodField::FoodValue,
        name: "foodValue",
        kind: ColumnKind::Integer,
        default_index: 1,
        aliases: &["food", "food value"],
    },
    ColumnSpec {
        field: FoodField::WaterValue,
        name: "waterValue",
        kind: ColumnKind::Integer,
        default_index: 2,
        aliases: &["water", "water value"],
    },
    ColumnSpec {
        field: FoodField::BuffDuration,
        name: "buffDuration",
        kind: ColumnKind::Text,
        default_index: 3,
        aliases: &["buff duration", "duration"],
    },
    ColumnSpec {
        field: FoodField::SpoilDuration,
        name: "spoilDuration",
        kind: ColumnKind::Text,
        default_index: 4,
        aliases: &["spoil duration", "spoil time", "spoil"],
    },
    ColumnSpec {
        field: FoodField::MaxStamina,
        name: "maxStamina",
        kind: ColumnKind::Integer,
        default_index: 5,
        aliases: &["max stamina", "stamina"],
    },
    ColumnSpec {
        field: FoodField::StaminaRegen,
        name: "staminaRegen",
        kind: ColumnKind::Integer,
        default_index: 6,
        aliases: &["stamina regen", "stamina regeneration"],
    },
    ColumnSpec {
        field: FoodField::MaxHealth,
        name: "maxHealth",
        kind: ColumnKind::Integer,
        default_index: 7,
        aliases: &["max health", "health"],
    },
    ColumnSpec {
        field: FoodField::HealthRegen,
        name: "healthRegen",
        kind: ColumnKind::Integer,
        default_index: 8,
        aliases: &["health regen", "health regeneration"],
    },
    ColumnSpec {
        field: FoodField::ExperienceGain,
        name: "experienceGain",
        kind: ColumnKind::Text,
        default_index: 9,
        aliases: &["experience gain", "xp gain", "experience", "xp"],
    },
    ColumnSpec {
        field: FoodField::Misc,
        name: "misc",
        kind: ColumnKind::Text,
        default_index: 10,
        aliases: &["misc", "other", "notes"],
    },
];

/// Resolved column index of every food field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMap {
    indices: [usize; FOOD_COLUMN_COUNT],
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self::positional()
    }
}

impl ColumnMap {
    /// Columns 0 to 10 in declaration order.
    pub fn positional() -> Self {
        Self {
            indices: FOOD_COLUMNS.map(|spec| spec.default_index),
        }
    }

    /// Resolve columns by header caption. Returns `None` unless every field
    /// matches exactly one distinct column.
    pub fn from_header(header: &RowView) -> Option<Self> {
        let captions: Vec<String> = header
            .cells
            .iter()
            .map(|cell| normalize_caption(&cell.text))
            .collect();

        let mut indices = [0; FOOD_COLUMN_COUNT];
        for (slot, spec) in indices.iter_mut().zip(FOOD_COLUMNS.iter()) {
            *slot = captions
                .iter()
                .position(|caption| spec.aliases.contains(&caption.as_str()))?;
        }

        let mut seen = indices.to_vec();
        seen.sort_unstable();
        seen.dedup();
        (seen.len() == indices.len()).then_some(Self { indices })
    }

    /// Prefer header captions when they identify every column.
    pub fn resolve(header: Option<&RowView>) -> Self {
        match header.and_then(Self::from_header) {
            Some(map) => {
                debug!("Resolved food columns from header: {:?}", map.indices);
                map
            }
            None => {
                debug!("Using positional food columns");
                Self::positional()
            }
        }
    }

    pub fn index(&self, field: FoodField) -> usize {
        FOOD_COLUMNS
            .iter()
            .position(|spec| spec.field == field)
            .map(|slot| self.indices[slot])
            .unwrap_or_default()
    }

    /// Columns paired with their resolved index.
    pub fn columns(&self) -> impl Iterator<Item = (&'static ColumnSpec, usize)> + '_ {
        FOOD_COLUMNS.iter().zip(self.indices.iter().copied())
    }

    pub fn required_cells(&self) -> usize {
        self.indices.iter().max().map_or(0, |max| max + 1)
    }

    /// Check that `row` has every mapped cell.
    pub fn validate_width(&self, row: &RowView, context: &str) -> Result<(), ExtractError> {
        let required = self.required_cells();
        if row.cells.len() < required {
            let missing: Vec<&str> = self
                .columns()
                .filter(|(_, index)| *index >= row.cells.len())
                .map(|(spec, _)| spec.name)
                .collect();
            return Err(ExtractError::structure(
                context,
                format!(
                    "expected at least {required} cells but found {} (missing {})",
                    row.cells.len(),
                    missing.join(", ")
                ),
            ));
        }
        Ok(())
    }
}

fn normalize_caption(text: &str) -> String {
    clean(text)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
