use icarus_import::{extract_page, ExtractError, ExtractorConfig, ImportResult, PageImporter};
use std::env;
use std::fs;

fn create_page(food_rows: &str, recipe_rows: &str) -> String {
    format!(
        r#"
        <!DOCTYPE html>
        <html>
        <body>
        <div id="mw-content-text">
            <div class="mw-content-ltr mw-parser-output">
                <table class="sortable fandom-table">
                    <tbody>
                        <tr><th>Item</th><th>Food</th><th>Water</th><th>Buff Duration</th><th>Spoil Time</th><th>Max Stamina</th><th>Stamina Regen</th><th>Max Health</th><th>Health Regen</th><th>XP Gain</th><th>Misc</th></tr>
                        {food_rows}
                    </tbody>
                </table>
                <table class="wikitable">
                    <caption>Kitchen\n</caption>
                    <tbody>
                        <tr><th>Material</th><th>Amount</th></tr>
                        {recipe_rows}
                    </tbody>
                </table>
            </div>
        </div>
        </body>
        </html>
        "#
    )
}

const FOOD_ROW: &str = r#"<tr><td><span><a><img src="/images/Bread.png"></a></span><a>Bread</a></td><td>30</td><td>0</td><td>20m</td><td>3d</td><td>10</td><td>1</td><td>40</td><td>3</td><td>+5%</td><td>Baked</td></tr>"#;
const RECIPE_ROW: &str = r#"<tr><td><div><span><a><img src="/images/Flour.png"></a><a>Flour</a></span></div></td><td>4</td></tr>"#;

#[test]
fn test_extract_page_returns_both_tables() {
    let page = extract_page(&create_page(FOOD_ROW, RECIPE_ROW), ExtractorConfig::default()).unwrap();

    assert_eq!(page.food_items.len(), 1);
    assert_eq!(page.food_items[0].food_name, "Bread");
    assert_eq!(page.food_items[0].max_health, Some(40));

    let recipe = page.recipe.unwrap();
    assert_eq!(recipe.recipe_workbench, "Kitchen");
    assert_eq!(recipe.ingredients.len(), 1);
    assert_eq!(recipe.ingredients[0].material_name, "Flour");
    assert_eq!(recipe.ingredients[0].amount, Some(4));
}

#[test]
fn test_page_without_recipe_table() {
    let html = create_page(FOOD_ROW, RECIPE_ROW).replace("wikitable", "sortable");
    let config = ExtractorConfig {
        // Both tables are sortable now; pick the food table by its own class
        food_table_selector: "table.fandom-table".to_string(),
        ..Default::default()
    };

    let page = extract_page(&html, config).unwrap();
    assert_eq!(page.food_items.len(), 1);
    assert!(page.recipe.is_none());
}

#[test]
fn test_page_json_exposes_food_items() {
    let page = extract_page(&create_page(FOOD_ROW, RECIPE_ROW), ExtractorConfig::default()).unwrap();
    let json = page.to_json(true).unwrap();

    assert!(json.contains("\"foodItems\": ["));
    assert!(json.contains("\"foodName\": \"Bread\""));
    assert!(json.contains("\"recipeWorkbench\": \"Kitchen\""));
}

#[test]
fn test_broken_recipe_fails_page() {
    let broken = "<tr><td>Flour</td><td>4</td></tr>";
    let err = extract_page(&create_page(FOOD_ROW, broken), ExtractorConfig::default()).unwrap_err();
    assert!(matches!(err, ExtractError::StructureMismatch { .. }));
}

#[test]
fn test_builder_reads_file() {
    let path = env::temp_dir().join(format!("icarus-import-{}.html", std::process::id()));
    fs::write(&path, create_page(FOOD_ROW, RECIPE_ROW)).unwrap();

    let food = PageImporter::builder().file(&path).food_only().build().unwrap();
    let recipe = PageImporter::builder().file(&path).recipe_only().build().unwrap();
    fs::remove_file(&path).unwrap();

    match food {
        ImportResult::Food(items) => assert_eq!(items[0].food_name, "Bread"),
        other => panic!("expected food items, got {other:?}"),
    }
    match recipe {
        ImportResult::Recipe(recipe) => assert_eq!(recipe.ingredients[0].material_name, "Flour"),
        other => panic!("expected recipe, got {other:?}"),
    }
}

#[test]
fn test_builder_strict_numbers_override() {
    let row = FOOD_ROW.replace("<td>30</td>", "<td>n/a</td>");
    let html = create_page(&row, RECIPE_ROW);

    let lenient = PageImporter::builder().html(html.clone()).build().unwrap();
    match &lenient {
        ImportResult::Page(page) => assert_eq!(page.food_items[0].food_value, None),
        other => panic!("expected page, got {other:?}"),
    }
    assert!(lenient.to_json(false).unwrap().contains("\"foodValue\":null"));

    let strict = PageImporter::builder()
        .html(html)
        .strict_numbers(true)
        .build();
    assert!(matches!(strict, Err(ExtractError::InvalidNumber { .. })));
}
