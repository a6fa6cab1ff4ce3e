//! レシピカードと通知の端末表示

use snap_recipe_common::{PhotoSource, RecipeCard, Toast, CARD_SUBTITLE};

/// 表示モードのカード
pub fn render_card(card: &RecipeCard, source: &PhotoSource) -> String {
    let mut out = Vec::new();
    out.push(format!("🍽  {}", card.dish_type));
    out.push(CARD_SUBTITLE.to_string());
    match source {
        PhotoSource::LocalFile { file_name, .. } => out.push(format!("📷 {}", file_name)),
        PhotoSource::RemoteUrl(url) => out.push(format!("📷 {}", url)),
        PhotoSource::None => {}
    }

    out.push(String::new());
    out.push("Description".to_string());
    out.push(card.description.clone());

    out.push(String::new());
    out.push("Ingredients".to_string());
    out.extend(card.ingredients.iter().map(|i| format!("- {}", i)));

    out.push(String::new());
    out.push("Instructions".to_string());
    out.extend(
        card.instructions
            .iter()
            .enumerate()
            .map(|(n, step)| format!("  {}. {}", n + 1, step)),
    );

    out.join("\n")
}

pub fn render_toast(toast: &Toast) -> String {
    let mark = if toast.is_destructive() { "❌" } else { "✔" };
    format!("{} {}: {}", mark, toast.title, toast.description)
}
