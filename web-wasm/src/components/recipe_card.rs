//! レシピカードコンポーネント
//!
//! 表示モードでは説明・食材・手順を表示し、編集モードでは入力欄に切り替える。
//! 手順だけは追加・削除できる。

use leptos::prelude::*;
use snap_recipe_common::{
    EditMode, PhotoSource, RecipeCard, Result, CARD_SUBTITLE, EMPTY_PLACEHOLDER,
};

#[component]
pub fn RecipeCardView(
    card: RwSignal<Option<RecipeCard>>,
    mode: RwSignal<EditMode>,
    source: RwSignal<PhotoSource>,
) -> impl IntoView {
    let is_editing = move || mode.get().is_editing();

    view! {
        <Show
            when=move || card.with(|c| c.is_some())
            fallback=|| view! { <p class="text-muted placeholder">{EMPTY_PLACEHOLDER}</p> }
        >
            <div class="recipe-card">
                <div class="recipe-card-header">
                    <div>
                        <h2>{move || field(card, |c| c.dish_type.clone())}</h2>
                        <p class="text-muted">{CARD_SUBTITLE}</p>
                    </div>
                    <button
                        class="btn btn-secondary btn-small"
                        on:click=move |_| mode.update(|m| *m = m.toggled())
                    >
                        {move || mode.get().toggle_label()}
                    </button>
                </div>

                <Show when=move || source.with(|s| s.preview_src().is_some())>
                    <img
                        class="recipe-photo"
                        src=move || source.with(|s| s.preview_src().unwrap_or_default().to_string())
                        alt="Dish photo"
                    />
                </Show>

                <Show when=is_editing fallback=move || view! { <RecipeBody card=card /> }>
                    <RecipeEditor card=card />
                </Show>
            </div>
        </Show>
    }
}

/// 表示モード
#[component]
fn RecipeBody(card: RwSignal<Option<RecipeCard>>) -> impl IntoView {
    view! {
        <section>
            <h3>"Description"</h3>
            <p>{move || field(card, |c| c.description.clone())}</p>
        </section>

        <section>
            <h3>"Ingredients"</h3>
            <ul>
                {move || {
                    field(card, |c| c.ingredients.as_slice().to_vec())
                        .into_iter()
                        .map(|item| view! { <li>{item}</li> })
                        .collect_view()
                }}
            </ul>
        </section>

        <section>
            <h3>"Instructions"</h3>
            <ol>
                {move || {
                    field(card, |c| c.instructions.as_slice().to_vec())
                        .into_iter()
                        .map(|step| view! { <li>{step}</li> })
                        .collect_view()
                }}
            </ol>
        </section>
    }
}

/// 編集モード
#[component]
fn RecipeEditor(card: RwSignal<Option<RecipeCard>>) -> impl IntoView {
    let ingredient_count = move || field(card, |c| c.ingredients.len());
    let instruction_count = move || field(card, |c| c.instructions.len());

    view! {
        <section>
            <h3>"Description"</h3>
            <textarea
                rows="3"
                prop:value=move || field(card, |c| c.description.clone())
                on:input=move |ev| edit(card, |c| {
                    c.set_description(event_target_value(&ev));
                    Ok(())
                })
            />
        </section>

        <section>
            <h3>"Ingredients"</h3>
            <For each=move || 0..ingredient_count() key=|i| *i let:index>
                <input
                    type="text"
                    prop:value=move || ingredient_at(card, index)
                    on:input=move |ev| edit(card, |c| {
                        c.edit_ingredient(index, event_target_value(&ev))
                    })
                />
            </For>
        </section>

        <section>
            <h3>"Instructions"</h3>
            <For each=move || 0..instruction_count() key=|i| *i let:index>
                <div class="instruction-row">
                    <span class="step-number">{index + 1}"."</span>
                    <input
                        type="text"
                        prop:value=move || instruction_at(card, index)
                        on:input=move |ev| edit(card, |c| {
                            c.edit_instruction(index, event_target_value(&ev))
                        })
                    />
                    <button
                        class="btn btn-tertiary btn-small"
                        on:click=move |_| edit(card, |c| {
                            c.delete_instruction(index).map(|_| ())
                        })
                    >
                        "Delete"
                    </button>
                </div>
            </For>
            <button
                class="btn btn-secondary btn-small"
                on:click=move |_| edit(card, |c| {
                    c.add_instruction();
                    Ok(())
                })
            >
                "Add Step"
            </button>
        </section>
    }
}

/// カードの値を読む（カードなしは既定値）
fn field<T: Default>(card: RwSignal<Option<RecipeCard>>, f: impl FnOnce(&RecipeCard) -> T) -> T {
    card.with(|c| c.as_ref().map(f).unwrap_or_default())
}

/// カードがあるときだけ書き換える（範囲外などの失敗はコンソールへ）
fn edit(card: RwSignal<Option<RecipeCard>>, f: impl FnOnce(&mut RecipeCard) -> Result<()>) {
    card.update(|c| {
        if let Some(Err(e)) = c.as_mut().map(f) {
            web_sys::console::error_1(&format!("recipe edit failed: {}", e).into());
        }
    });
}

fn ingredient_at(card: RwSignal<Option<RecipeCard>>, index: usize) -> String {
    field(card, |c| c.ingredients.get(index).unwrap_or_default().to_string())
}

fn instruction_at(card: RwSignal<Option<RecipeCard>>, index: usize) -> String {
    field(card, |c| c.instructions.get(index).unwrap_or_default().to_string())
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use snap_recipe_common::{GeneratedRecipe, IngredientAnalysis, RecipeDraft};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn pasta_card() -> RwSignal<Option<RecipeCard>> {
        RwSignal::new(Some(RecipeCard::new(
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
        )))
    }

    #[wasm_bindgen_test]
    fn wasm_out_of_range_edit_leaves_card_unchanged() {
        let owner = Owner::new();
        owner.set();
        let card = pasta_card();
        let before = card.get_untracked();

        edit(card, |c| c.edit_ingredient(5, "oregano"));
        edit(card, |c| c.delete_instruction(9).map(|_| ()));

        assert_eq!(card.get_untracked(), before);
    }

    #[wasm_bindgen_test]
    fn wasm_edit_by_position() {
        let owner = Owner::new();
        owner.set();
        let card = pasta_card();

        edit(card, |c| c.edit_ingredient(1, "oregano"));
        assert_eq!(ingredient_at(card, 0), "tomato");
        assert_eq!(ingredient_at(card, 1), "oregano");
    }
}
