//! 外部AIフロー（食材識別・レシピ生成）と2段階パイプライン
//!
//! Step1: 食材識別 -> Step2: レシピ生成（Step1の結果と同じ画像参照を使う）
//! 2つ目は1つ目の結果に依存するので常に逐次実行。

use crate::card::RecipeCard;
use crate::error::Result;
use crate::types::{
    GenerateRecipeInput, GeneratedRecipe, IdentifyIngredientsInput, IngredientAnalysis,
};

/// 外部フローの呼び出し口
///
/// WASM(シングルスレッド)でも使うため Send は要求しない
#[allow(async_fn_in_trait)]
pub trait RecipeFlows {
    async fn identify_ingredients(
        &self,
        input: &IdentifyIngredientsInput,
    ) -> Result<IngredientAnalysis>;

    async fn generate_recipe(&self, input: &GenerateRecipeInput) -> Result<GeneratedRecipe>;
}

/// 2段階解析を実行してレシピカードを作る
///
/// どちらかが失敗した場合はカードを作らない（部分的な結果は返さない）
pub async fn run_pipeline<F: RecipeFlows>(flows: &F, photo_url: &str) -> Result<RecipeCard> {
    tracing::debug!(photo_url_len = photo_url.len(), "Step1: 食材識別");
    let analysis = flows
        .identify_ingredients(&IdentifyIngredientsInput {
            photo_url: photo_url.to_string(),
        })
        .await?;
    tracing::debug!(
        dish_type = %analysis.dish_type,
        ingredients = analysis.ingredients.len(),
        "Step1: 完了"
    );

    tracing::debug!("Step2: レシピ生成");
    let recipe = flows
        .generate_recipe(&GenerateRecipeInput::from_analysis(&analysis, photo_url))
        .await?;
    tracing::debug!(
        instructions = recipe.recipe_draft.instructions.len(),
        "Step2: 完了"
    );

    Ok(RecipeCard::new(analysis, recipe))
}


#[cfg(test)]
mod tests {
    use super::mock::MockFlows;
    use super::*;
    use crate::error::Error;
    use futures::executor::block_on;

    #[test]
    fn test_pipeline_runs_in_order() {
        let flows = MockFlows::pasta();
        let card = block_on(run_pipeline(&flows, "https://example.com/p.jpg")).unwrap();

        assert_eq!(
            *flows.calls.borrow(),
            vec![
                "identify:https://example.com/p.jpg".to_string(),
                "recipe:https://example.com/p.jpg".to_string(),
            ]
        );
        assert_eq!(card.dish_type, "Pasta");
        assert_eq!(card.instructions.len(), 2);
    }

    #[test]
    fn test_pipeline_passes_step1_result() {
        let flows = MockFlows::pasta();
        block_on(run_pipeline(&flows, "data:image/png;base64,AAAA")).unwrap();

        let inputs = flows.recipe_inputs.borrow();
        assert_eq!(inputs.len(), 1);
        assert_eq!(inputs[0].dish_type, "Pasta");
        assert_eq!(inputs[0].ingredients, vec!["tomato", "basil"]);
        assert_eq!(inputs[0].photo_url, "data:image/png;base64,AAAA");
    }

    #[test]
    fn test_pipeline_stops_after_identify_failure() {
        let flows = MockFlows {
            identify_error: Some("model unavailable".to_string()),
            ..Default::default()
        };
        let err = block_on(run_pipeline(&flows, "https://example.com/p.jpg")).unwrap_err();

        assert!(matches!(err, Error::Flow(ref m) if m == "model unavailable"));
        assert_eq!(flows.call_count(), 1);
    }

    #[test]
    fn test_pipeline_recipe_failure() {
        let flows = MockFlows {
            recipe_error: Some("quota exceeded".to_string()),
            ..Default::default()
        };
        let err = block_on(run_pipeline(&flows, "https://example.com/p.jpg")).unwrap_err();
        assert_eq!(err.to_string(), "quota exceeded");
        assert_eq!(flows.call_count(), 2);
    }
}
