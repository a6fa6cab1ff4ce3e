//! 生成ボタンコンポーネント

use leptos::prelude::*;
use snap_recipe_common::PhotoSource;

#[component]
pub fn GenerateButton<F>(
    source: RwSignal<PhotoSource>,
    loading: RwSignal<bool>,
    on_generate: F,
) -> impl IntoView
where
    F: Fn(()) + 'static + Clone,
{
    let can_generate = move || !loading.get() && source.with(|s| s.is_present());

    view! {
        <div class="generate-actions">
            <button
                class="btn btn-primary"
                disabled=move || !can_generate()
                on:click={
                    let on_generate = on_generate.clone();
                    move |_| on_generate(())
                }
            >
                {move || if loading.get() { "Generating..." } else { "Generate Recipe" }}
            </button>
        </div>
    }
}
