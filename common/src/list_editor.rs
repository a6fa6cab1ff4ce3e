//! 編集可能な順序付きリスト
//!
//! 食材リストと手順リストで共通に使う。
//! 位置指定の置換・末尾への空要素追加・位置指定の削除のみを提供する。

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EditableList {
    items: Vec<String>,
}

impl EditableList {
    pub fn new(items: Vec<String>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    /// 指定位置の値だけを置き換える
    pub fn replace(&mut self, index: usize, value: impl Into<String>) -> Result<()> {
        let len = self.items.len();
        let slot = self
            .items
            .get_mut(index)
            .ok_or(Error::IndexOutOfRange { index, len })?;
        *slot = value.into();
        Ok(())
    }

    /// 末尾に空要素を追加し、その位置を返す
    pub fn append_blank(&mut self) -> usize {
        self.items.push(String::new());
        self.items.len() - 1
    }

    /// 指定位置を削除（後続は前に詰める）
    pub fn remove(&mut self, index: usize) -> Result<String> {
        if index >= self.items.len() {
            return Err(Error::IndexOutOfRange { index, len: self.items.len() });
        }
        Ok(self.items.remove(index))
    }
}

impl From<Vec<String>> for EditableList {
    fn from(items: Vec<String>) -> Self {
        Self::new(items)
    }
}
