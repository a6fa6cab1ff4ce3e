//! 写真ソースの選択
//!
//! ローカルファイル（プレビュー参照）とURL入力は排他。どちらかを選ぶと他方はクリアされる。

use crate::error::{Error, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PhotoSource {
    #[default]
    None,
    /// ローカルファイル。preview はプレビュー参照（data URL）で、読込完了まで None
    LocalFile {
        file_name: String,
        preview: Option<String>,
    },
    /// 入力されたURL（形式は検証しない）
    RemoteUrl(String),
}

impl PhotoSource {
    /// ファイル選択（URLはクリアされる）
    pub fn select_file(&mut self, file_name: impl Into<String>, preview: Option<String>) {
        *self = PhotoSource::LocalFile {
            file_name: file_name.into(),
            preview,
        };
    }

    /// ファイルの読込完了時にプレビュー参照を設定
    ///
    /// 読込中に別のソースが選ばれていた場合は何もしない
    pub fn set_preview(&mut self, for_file: &str, preview: String) -> bool {
        match self {
            PhotoSource::LocalFile { file_name, preview: slot } if file_name == for_file => {
                *slot = Some(preview);
                true
            }
            _ => false,
        }
    }

    /// URL入力（ファイルはクリアされる）。空文字はソースなし
    pub fn set_url(&mut self, url: impl Into<String>) {
        let url = url.into();
        *self = if url.is_empty() {
            PhotoSource::None
        } else {
            PhotoSource::RemoteUrl(url)
        };
    }

    pub fn is_present(&self) -> bool {
        !matches!(self, PhotoSource::None)
    }

    /// URL入力欄に表示する値
    pub fn url_text(&self) -> &str {
        match self {
            PhotoSource::RemoteUrl(url) => url,
            _ => "",
        }
    }

    /// 画像プレビューに使う参照
    pub fn preview_src(&self) -> Option<&str> {
        match self {
            PhotoSource::LocalFile { preview: Some(p), .. } if !p.is_empty() => Some(p),
            PhotoSource::RemoteUrl(url) => Some(url),
            _ => None,
        }
    }

    /// フローに渡す画像参照を解決
    ///
    /// ソースなしは MissingSource、参照が得られない場合は UnresolvedSource
    pub fn resolve(&self) -> Result<&str> {
        match self {
            PhotoSource::None => Err(Error::MissingSource),
            _ => self.preview_src().ok_or(Error::UnresolvedSource),
        }
    }
}
