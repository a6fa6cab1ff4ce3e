//! SnapRecipe Common Library
//!
//! CLIとWeb(WASM)で共有される型と画面状態ロジック

pub mod types;
pub mod error;
pub mod source;
pub mod list_editor;
pub mod card;
pub mod loading;
pub mod notify;
pub mod flows;
pub mod session;
pub mod prompts;
pub mod parser;
pub mod gemini;

pub use types::{
    GenerateRecipeInput, GeneratedRecipe, IdentifyIngredientsInput, IngredientAnalysis,
    RecipeDraft,
};
pub use error::{Error, Result};
pub use source::PhotoSource;
pub use list_editor::EditableList;
pub use card::{EditMode, RecipeCard};
pub use loading::{LoadingFlag, LoadingGuard};
pub use notify::{Toast, ToastVariant, CARD_SUBTITLE, EMPTY_PLACEHOLDER};
pub use flows::{run_pipeline, RecipeFlows};
pub use session::{begin_generation, RecipeSession};
pub use prompts::{build_identify_prompt, build_recipe_prompt};
pub use parser::{extract_json, parse_generated_recipe, parse_ingredient_analysis};
