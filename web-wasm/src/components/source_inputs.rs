//! 写真ソース入力コンポーネント
//!
//! ファイル選択とURL入力は排他。ファイルは FileReader で data URL に読み込み、
//! 読込完了時にプレビュー参照として設定する。

use leptos::html;
use leptos::prelude::*;
use snap_recipe_common::PhotoSource;
use wasm_bindgen::prelude::*;
use web_sys::{File, FileReader, HtmlInputElement};

#[component]
pub fn SourceInputs(
    source: RwSignal<PhotoSource>,
    loading: RwSignal<bool>,
) -> impl IntoView {
    let file_ref: NodeRef<html::Input> = NodeRef::new();

    view! {
        <div class="source-inputs">
            <div class="form-group">
                <label for="photo-file">"Upload a photo"</label>
                <input
                    type="file"
                    id="photo-file"
                    accept="image/*"
                    node_ref=file_ref
                    disabled=move || loading.get()
                    on:change=move |ev| {
                        let input: HtmlInputElement = event_target(&ev);
                        let Some(file) = input.files().and_then(|files| files.get(0)) else {
                            return;
                        };
                        source.update(|s| s.select_file(file.name(), None));
                        read_preview(file, source);
                    }
                />
            </div>

            <div class="form-group">
                <label for="photo-url">"Or enter an image URL"</label>
                <input
                    type="url"
                    id="photo-url"
                    placeholder="https://example.com/food.jpg"
                    disabled=move || loading.get()
                    prop:value=move || source.with(|s| s.url_text().to_string())
                    on:input=move |ev| {
                        let url = event_target_value(&ev);
                        // URLを入力したらファイル選択は解除
                        if let Some(input) = file_ref.get() {
                            input.set_value("");
                        }
                        source.update(|s| s.set_url(url));
                    }
                />
            </div>

            <Show when=move || source.with(|s| s.preview_src().is_some())>
                <div class="photo-preview">
                    <img
                        src=move || source.with(|s| s.preview_src().unwrap_or_default().to_string())
                        alt="Selected food photo"
                    />
                </div>
            </Show>
        </div>
    }
}

/// ファイルを data URL として読み込み、完了時にプレビュー参照を設定
fn read_preview(file: File, source: RwSignal<PhotoSource>) {
    let Ok(reader) = FileReader::new() else {
        return;
    };

    let file_name = file.name();
    let reader_clone = reader.clone();
    let closure = Closure::wrap(Box::new(move |_: web_sys::Event| {
        let Some(data_url) = reader_clone.result().ok().and_then(|r| r.as_string()) else {
            return;
        };
        // 読込中に別のソースが選ばれていれば無視される
        let _ = source.try_update(|s| s.set_preview(&file_name, data_url));
    }) as Box<dyn FnMut(_)>);

    reader.set_onload(Some(closure.as_ref().unchecked_ref()));
    closure.forget();

    let _ = reader.read_as_data_url(&file);
}
