//! レシピ生成セッション（画面状態）
//!
//! 写真ソース・レシピカード・表示モード・ローディングフラグ・通知をまとめて保持する。
//! CLIはこの状態機械をそのまま使い、Web版は begin_generation と run_pipeline を
//! シグナル上で組み合わせる。

use crate::card::{EditMode, RecipeCard};
use crate::error::{Error, Result};
use crate::flows::{run_pipeline, RecipeFlows};
use crate::loading::{LoadingFlag, LoadingGuard};
use crate::notify::Toast;
use crate::source::PhotoSource;
use std::cell::Cell;

/// 生成開始の前処理: ソース確認 → ローディング取得 → 画像参照の解決
///
/// ソースなしは MissingSource（フラグは触らない）、実行中は Busy。
/// 参照が解決できなければガードを捨ててフラグを戻し UnresolvedSource を返す。
pub fn begin_generation<F: LoadingFlag>(
    source: &PhotoSource,
    flag: F,
) -> Result<(LoadingGuard<F>, String)> {
    if !source.is_present() {
        return Err(Error::MissingSource);
    }
    let guard = LoadingGuard::acquire(flag).ok_or(Error::Busy)?;
    let photo_url = source.resolve()?.to_string();
    Ok((guard, photo_url))
}

#[derive(Debug, Default)]
pub struct RecipeSession {
    source: PhotoSource,
    card: Option<RecipeCard>,
    mode: EditMode,
    loading: Cell<bool>,
    toasts: Vec<Toast>,
}

impl RecipeSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn source(&self) -> &PhotoSource {
        &self.source
    }

    pub fn select_file(&mut self, file_name: impl Into<String>, preview: Option<String>) {
        self.source.select_file(file_name, preview);
    }

    pub fn set_url(&mut self, url: impl Into<String>) {
        self.source.set_url(url);
    }

    pub fn card(&self) -> Option<&RecipeCard> {
        self.card.as_ref()
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_loading()
    }

    /// 生成ボタンが押せるか（ローディング中またはソースなしは無効）
    pub fn can_generate(&self) -> bool {
        !self.is_loading() && self.source.is_present()
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    /// 溜まった通知を取り出す
    pub fn drain_toasts(&mut self) -> Vec<Toast> {
        std::mem::take(&mut self.toasts)
    }

    /// 2段階解析を実行してレシピカードを更新する
    ///
    /// 失敗時は通知を積んでエラーを返し、既存のカードには触れない。
    /// ローディングフラグはどの経路でも解除される。
    pub async fn generate<F: RecipeFlows>(&mut self, flows: &F) -> Result<()> {
        let outcome = self.run(flows).await;
        match &outcome {
            Ok(()) => self.toasts.push(Toast::success()),
            Err(e) => {
                tracing::warn!(error = %e, "レシピ生成失敗");
                self.toasts.push(Toast::from_error(e));
            }
        }
        outcome
    }

    async fn run<F: RecipeFlows>(&mut self, flows: &F) -> Result<()> {
        let (_guard, photo_url) = begin_generation(&self.source, &self.loading)?;
        let card = run_pipeline(flows, &photo_url).await?;
        self.card = Some(card);
        Ok(())
    }

    pub fn toggle_editing(&mut self) -> EditMode {
        self.mode = self.mode.toggled();
        self.mode
    }

    fn card_mut(&mut self) -> Result<&mut RecipeCard> {
        self.card.as_mut().ok_or(Error::NoRecipe)
    }

    pub fn edit_ingredient(&mut self, index: usize, value: impl Into<String>) -> Result<()> {
        self.card_mut()?.edit_ingredient(index, value)
    }

    pub fn edit_instruction(&mut self, index: usize, value: impl Into<String>) -> Result<()> {
        self.card_mut()?.edit_instruction(index, value)
    }

    pub fn add_instruction(&mut self) -> Result<usize> {
        Ok(self.card_mut()?.add_instruction())
    }

    pub fn delete_instruction(&mut self, index: usize) -> Result<String> {
        self.card_mut()?.delete_instruction(index)
    }

    pub fn set_description(&mut self, value: impl Into<String>) -> Result<()> {
        self.card_mut()?.set_description(value);
        Ok(())
    }
}
