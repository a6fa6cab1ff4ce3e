//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use leptos::task::spawn_local;
use crate::api::gemini::FetchFlows;
use crate::components::{
    generate_button::GenerateButton,
    header::Header,
    recipe_card::RecipeCardView,
    settings_panel::SettingsPanel,
    source_inputs::SourceInputs,
    toaster::{ToastQueue, Toaster},
};
use snap_recipe_common::gemini::DEFAULT_MODEL;
use snap_recipe_common::{
    begin_generation, run_pipeline, EditMode, LoadingFlag, PhotoSource, RecipeCard, Toast,
};

/// シグナル上のローディングフラグ
#[derive(Clone, Copy)]
struct SignalFlag(RwSignal<bool>);

impl LoadingFlag for SignalFlag {
    fn is_loading(&self) -> bool {
        self.0.get_untracked()
    }

    fn set_loading(&self, loading: bool) {
        let _ = self.0.try_set(loading);
    }
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    // 設定
    let (api_key, set_api_key) = signal(String::new());
    let (model, set_model) = signal(DEFAULT_MODEL.to_string());

    // 画面状態
    let source = RwSignal::new(PhotoSource::default());
    let card = RwSignal::new(None::<RecipeCard>);
    let mode = RwSignal::new(EditMode::default());
    let loading = RwSignal::new(false);
    let toasts = ToastQueue::new();

    // 生成ハンドラ
    let on_generate = move |_| {
        let started = source.with_untracked(|s| begin_generation(s, SignalFlag(loading)));
        let (guard, photo_url) = match started {
            Ok(started) => started,
            Err(e) => {
                toasts.push(Toast::from_error(&e));
                return;
            }
        };
        let flows = FetchFlows::new(api_key.get_untracked(), model.get_untracked());

        spawn_local(async move {
            let _guard = guard;
            match run_pipeline(&flows, &photo_url).await {
                Ok(new_card) => {
                    card.set(Some(new_card));
                    toasts.push(Toast::success());
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("recipe generation failed: {}", e).into());
                    toasts.push(Toast::from_error(&e));
                }
            }
        });
    };

    view! {
        <div class="container">
            <Header />

            <SettingsPanel
                api_key=api_key
                set_api_key=set_api_key
                model=model
                set_model=set_model
            />

            <div class="layout">
                <div class="form-column">
                    <SourceInputs source=source loading=loading />
                    <GenerateButton source=source loading=loading on_generate=on_generate />
                </div>

                <div class="card-column">
                    <RecipeCardView card=card mode=mode source=source />
                </div>
            </div>

            <Toaster queue=toasts />
        </div>
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use snap_recipe_common::{Error, LoadingGuard};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_signal_flag_guard_clears_on_drop() {
        let owner = Owner::new();
        owner.set();
        let loading = RwSignal::new(false);

        let guard = LoadingGuard::acquire(SignalFlag(loading));
        assert!(guard.is_some());
        assert!(loading.get_untracked());
        assert!(LoadingGuard::acquire(SignalFlag(loading)).is_none());

        drop(guard);
        assert!(!loading.get_untracked());
    }

    #[wasm_bindgen_test]
    fn wasm_begin_generation_with_pending_preview() {
        let owner = Owner::new();
        owner.set();
        let loading = RwSignal::new(false);
        let mut source = PhotoSource::default();
        source.select_file("pasta.jpg", None);

        let result = begin_generation(&source, SignalFlag(loading));
        assert!(matches!(result, Err(Error::UnresolvedSource)));
        assert!(!loading.get_untracked());
    }
}
