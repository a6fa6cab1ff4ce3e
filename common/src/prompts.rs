//! プロンプト生成モジュール
//!
//! CLIとWeb(WASM)で共有されるプロンプト生成ロジック:
//! - build_identify_prompt: Step1（食材識別）用プロンプト
//! - build_recipe_prompt: Step2（レシピ生成）用プロンプト

/// Step1プロンプト生成（食材識別用）
pub fn build_identify_prompt() -> String {
    r#"You are an expert chef. Look at the attached food photograph and identify the dish and its ingredients.

## Output format (output exactly this JSON object)
{
  "dishType": "short label for the dish, e.g. Pasta",
  "ingredients": ["ingredient 1", "ingredient 2"]
}

## Notes
- List only ingredients that are visible or clearly implied by the dish
- One ingredient per entry, most prominent first
- Output the JSON object only. No explanations"#
        .to_string()
}

/// Step2プロンプト生成（レシピ生成用）
///
/// # Arguments
/// * `dish_type` - Step1で識別した料理の種類
/// * `ingredients` - Step1で識別した食材
pub fn build_recipe_prompt(dish_type: &str, ingredients: &[String]) -> String {
    let ingredient_list = if ingredients.is_empty() {
        "- (none identified)".to_string()
    } else {
        ingredients
            .iter()
            .map(|i| format!("- {}", i))
            .collect::<Vec<_>>()
            .join("\n")
    };

    format!(
        r#"You are an expert chef. Write a recipe for the dish shown in the attached photograph.

Dish type: {dish_type}
Ingredients:
{ingredient_list}

## Output format (output exactly this JSON object)
{{
  "recipeDraft": {{
    "description": "one or two sentence description of the dish",
    "instructions": ["step 1", "step 2"]
  }}
}}

## Notes
- Use the ingredients above; do not invent exotic extras
- Each instruction is a single step in cooking order, without numbering
- Output the JSON object only. No explanations"#
    )
}
