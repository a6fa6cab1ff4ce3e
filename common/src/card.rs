//! レシピカード（食材識別結果 + レシピ下書き）
//!
//! 両方そろって初めて作られるので「片方だけ存在する」状態は表現できない。

use crate::error::Result;
use crate::list_editor::EditableList;
use crate::types::{GeneratedRecipe, IngredientAnalysis};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeCard {
    pub dish_type: String,
    pub ingredients: EditableList,
    pub description: String,
    pub instructions: EditableList,
}

impl RecipeCard {
    pub fn new(analysis: IngredientAnalysis, recipe: GeneratedRecipe) -> Self {
        Self {
            dish_type: analysis.dish_type,
            ingredients: analysis.ingredients.into(),
            description: recipe.recipe_draft.description,
            instructions: recipe.recipe_draft.instructions.into(),
        }
    }

    pub fn edit_ingredient(&mut self, index: usize, value: impl Into<String>) -> Result<()> {
        self.ingredients.replace(index, value)
    }

    pub fn edit_instruction(&mut self, index: usize, value: impl Into<String>) -> Result<()> {
        self.instructions.replace(index, value)
    }

    pub fn add_instruction(&mut self) -> usize {
        self.instructions.append_blank()
    }

    pub fn delete_instruction(&mut self, index: usize) -> Result<String> {
        self.instructions.remove(index)
    }

    pub fn set_description(&mut self, value: impl Into<String>) {
        self.description = value.into();
    }
}

/// 表示モード
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditMode {
    #[default]
    Viewing,
    Editing,
}

impl EditMode {
    pub fn toggled(self) -> Self {
        match self {
            EditMode::Viewing => EditMode::Editing,
            EditMode::Editing => EditMode::Viewing,
        }
    }

    pub fn is_editing(self) -> bool {
        self == EditMode::Editing
    }

    /// トグルボタンのラベル（保存は表示モードに戻すだけ）
    pub fn toggle_label(self) -> &'static str {
        match self {
            EditMode::Viewing => "Edit",
            EditMode::Editing => "Save",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RecipeDraft;

    fn pasta_card() -> RecipeCard {
        RecipeCard::new(
            IngredientAnalysis {
                dish_type: "Pasta".to_string(),
                ingredients: vec!["tomato".to_string(), "basil".to_string()],
            },
            GeneratedRecipe {
                recipe_draft: RecipeDraft {
                    description: "A simple pasta dish".to_string(),
                    instructions: vec!["Boil water".to_string(), "Add pasta".to_string()],
                },
            },
        )
    }

    #[test]
    fn test_new_card() {
        let card = pasta_card();
        assert_eq!(card.dish_type, "Pasta");
        assert_eq!(card.ingredients.len(), 2);
        assert_eq!(card.description, "A simple pasta dish");
        assert_eq!(card.instructions.get(1), Some("Add pasta"));
    }

    #[test]
    fn test_edit_ingredient() {
        let mut card = pasta_card();
        card.edit_ingredient(1, "oregano").unwrap();
        assert_eq!(card.ingredients.get(0), Some("tomato"));
        assert_eq!(card.ingredients.get(1), Some("oregano"));
    }

    #[test]
    fn test_add_and_delete_instruction() {
        let mut card = pasta_card();
        assert_eq!(card.add_instruction(), 2);
        assert_eq!(card.instructions.as_slice(), &["Boil water", "Add pasta", ""]);

        card.delete_instruction(0).unwrap();
        assert_eq!(card.instructions.as_slice(), &["Add pasta", ""]);
    }

    #[test]
    fn test_set_description() {
        let mut card = pasta_card();
        card.set_description("Weeknight pasta");
        assert_eq!(card.description, "Weeknight pasta");
    }

    #[test]
    fn test_edit_mode_toggle() {
        let mode = EditMode::default();
        assert_eq!(mode.toggle_label(), "Edit");
        let mode = mode.toggled();
        assert!(mode.is_editing());
        assert_eq!(mode.toggle_label(), "Save");
        assert_eq!(mode.toggled(), EditMode::Viewing);
    }
}
