use serde::{Deserialize, Serialize};

/// One row of the food stat table.
///
/// Integer fields are `None` when the cell text holds no leading number,
/// which serializes as `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodItem {
    pub food_name: String,
    pub food_value: Option<i64>,
    pub water_value: Option<i64>,
    pub buff_duration: String,
    pub spoil_duration: String,
    pub max_stamina: Option<i64>,
    pub stamina_regen: Option<i64>,
    pub max_health: Option<i64>,
    pub health_regen: Option<i64>,
    pub experience_gain: String,
    pub misc: String,
    pub img_src: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub amount: Option<i64>,
    pub material_name: String,
    pub img_src: String,
}

/// A crafting table: the workbench it is made at and its ingredients in table order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub recipe_workbench: String,
    pub ingredients: Vec<Ingredient>,
}

/// Everything extracted from a single page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageExtraction {
    pub food_items: Vec<FoodItem>,
    pub recipe: Option<Recipe>,
}

impl PageExtraction {
    pub fn to_json(&self, pretty: bool) -> Result<String, serde_json::Error> {
        to_json(self, pretty)
    }
}

/// Serialize any record with 2-space indentation, or compactly.
pub fn to_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String, serde_json::Error> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}
