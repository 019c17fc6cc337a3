use icarus_import::extractors::{Extractor, ParsingContext, RecipeTableExtractor};
use icarus_import::{extract_recipe, ExtractError, ExtractorConfig, Ingredient};

fn ingredient_row(name: &str, amount: &str) -> String {
    format!(
        r#"<tr>
            <td><div class="material"><span><a href="/wiki/{name}"><img src="/images/{name}.png" width="30"></a> <a href="/wiki/{name}">{name}</a>\n</span></div></td>
            <td>{amount}</td>
        </tr>"#
    )
}

fn create_recipe_page(caption: &str, rows: &[String]) -> String {
    format!(
        r#"
        <!DOCTYPE html>
        <html>
        <body>
        <div id="mw-content-text">
            <div class="mw-parser-output">
                <table class="article-table">
                    <caption>{caption}</caption>
                    <tbody>
                        <tr><th>Material</th><th>Amount</th></tr>
                        {}
                    </tbody>
                </table>
            </div>
        </div>
        </body>
        </html>
        "#,
        rows.concat()
    )
}

#[test]
fn test_recipe_end_to_end() {
    let html = create_recipe_page(
        r"  Workbench: Forge \n",
        &[ingredient_row("IronOre", "2"), ingredient_row("Wood", "5")],
    );

    let recipe = extract_recipe(&html).unwrap();
    assert_eq!(recipe.recipe_workbench, "Workbench: Forge");
    assert_eq!(
        recipe.ingredients,
        vec![
            Ingredient {
                amount: Some(2),
                material_name: "IronOre".to_string(),
                img_src: "https://icarus.fandom.com/images/IronOre.png".to_string(),
            },
            Ingredient {
                amount: Some(5),
                material_name: "Wood".to_string(),
                img_src: "https://icarus.fandom.com/images/Wood.png".to_string(),
            },
        ]
    );

    let json = serde_json::to_string(&recipe).unwrap();
    assert_eq!(
        json,
        r#"{"recipeWorkbench":"Workbench: Forge","ingredients":[{"amount":2,"materialName":"IronOre","imgSrc":"https://icarus.fandom.com/images/IronOre.png"},{"amount":5,"materialName":"Wood","imgSrc":"https://icarus.fandom.com/images/Wood.png"}]}"#
    );
}

#[test]
fn test_ingredient_order_is_preserved() {
    let names = ["Fiber", "Stick", "Stone", "Leather", "Bone"];
    let rows: Vec<String> = names
        .iter()
        .enumerate()
        .map(|(i, name)| ingredient_row(name, &(i + 1).to_string()))
        .collect();
    let html = create_recipe_page("Crafting Bench", &rows);

    let recipe = extract_recipe(&html).unwrap();
    let extracted: Vec<(&str, Option<i64>)> = recipe
        .ingredients
        .iter()
        .map(|i| (i.material_name.as_str(), i.amount))
        .collect();
    assert_eq!(
        extracted,
        vec![
            ("Fiber", Some(1)),
            ("Stick", Some(2)),
            ("Stone", Some(3)),
            ("Leather", Some(4)),
            ("Bone", Some(5)),
        ]
    );
}

#[test]
fn test_recipe_with_only_header() {
    let html = create_recipe_page("Mortar and Pestle", &[]);
    let recipe = extract_recipe(&html).unwrap();
    assert_eq!(recipe.recipe_workbench, "Mortar and Pestle");
    assert!(recipe.ingredients.is_empty());
}

#[test]
fn test_missing_material_image_is_fatal() {
    let broken = r#"<tr><td><div><span>Mystery</span></div></td><td>3</td></tr>"#.to_string();
    let html = create_recipe_page("Anvil", &[ingredient_row("Wood", "5"), broken]);

    let err = extract_recipe(&html).unwrap_err();
    assert!(matches!(err, ExtractError::StructureMismatch { .. }));
    assert!(err.to_string().contains("material image"));
}

#[test]
fn test_sortable_table_is_not_a_recipe() {
    let html = r#"
        <div id="mw-content-text">
            <div class="mw-parser-output">
                <table class="sortable"><tbody><tr><th>Item</th></tr></tbody></table>
            </div>
        </div>
    "#;
    assert!(matches!(
        extract_recipe(html),
        Err(ExtractError::TableNotFound { table: "recipe", .. })
    ));
}

#[test]
fn test_custom_base_url() {
    let html = create_recipe_page("Anvil", &[ingredient_row("Wood", "5")]);
    let config = ExtractorConfig {
        base_url: "https://mirror.example.org/icarus/".to_string(),
        ..Default::default()
    };
    let context = ParsingContext::new(&html, config);

    let recipe = RecipeTableExtractor.parse(&context).unwrap();
    assert_eq!(
        recipe.ingredients[0].img_src,
        "https://mirror.example.org/images/Wood.png"
    );
}
