//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"SnapRecipe"</h1>
            <p class="text-muted">"Turn your food photos into delicious recipes!"</p>
        </header>
    }
}
