//! ローディングフラグのスコープ管理
//!
//! acquire でフラグを立て、ガードの Drop で必ず下ろす。
//! 既に立っている場合は acquire が None を返し、再入を防ぐ。

use std::cell::Cell;

/// ローディングフラグの保持先（Cell, Leptosシグナルなど）
pub trait LoadingFlag {
    fn is_loading(&self) -> bool;
    fn set_loading(&self, loading: bool);
}

impl LoadingFlag for Cell<bool> {
    fn is_loading(&self) -> bool {
        self.get()
    }

    fn set_loading(&self, loading: bool) {
        self.set(loading);
    }
}

impl<T: LoadingFlag + ?Sized> LoadingFlag for &T {
    fn is_loading(&self) -> bool {
        (**self).is_loading()
    }

    fn set_loading(&self, loading: bool) {
        (**self).set_loading(loading);
    }
}

#[must_use = "dropping the guard clears the loading flag immediately"]
pub struct LoadingGuard<F: LoadingFlag> {
    flag: F,
}

impl<F: LoadingFlag> LoadingGuard<F> {
    pub fn acquire(flag: F) -> Option<Self> {
        if flag.is_loading() {
            return None;
        }
        flag.set_loading(true);
        Some(Self { flag })
    }
}

impl<F: LoadingFlag> Drop for LoadingGuard<F> {
    fn drop(&mut self) {
        self.flag.set_loading(false);
    }
}
