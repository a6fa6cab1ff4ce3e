//! トースト通知コンポーネント
//!
//! 5秒で自動的に消える。クリックでもすぐ消せる。

use gloo::timers::callback::Timeout;
use leptos::prelude::*;
use snap_recipe_common::Toast;

pub const TOAST_DURATION_MS: u32 = 5_000;

#[derive(Debug, Clone, PartialEq)]
pub struct ToastEntry {
    pub id: u64,
    pub toast: Toast,
}

/// 表示中のトースト
#[derive(Clone, Copy)]
pub struct ToastQueue {
    entries: RwSignal<Vec<ToastEntry>>,
    next_id: StoredValue<u64>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self {
            entries: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    pub fn push(&self, toast: Toast) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.entries.update(|e| e.push(ToastEntry { id, toast }));

        let queue = *self;
        Timeout::new(TOAST_DURATION_MS, move || queue.dismiss(id)).forget();
    }

    pub fn dismiss(&self, id: u64) {
        let _ = self.entries.try_update(|e| remove_entry(e, id));
    }
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new()
    }
}

fn remove_entry(entries: &mut Vec<ToastEntry>, id: u64) -> bool {
    let before = entries.len();
    entries.retain(|t| t.id != id);
    entries.len() != before
}

#[component]
pub fn Toaster(queue: ToastQueue) -> impl IntoView {
    view! {
        <div class="toaster">
            <For
                each=move || queue.entries.get()
                key=|entry| entry.id
                children=move |entry| {
                    let id = entry.id;
                    let class = if entry.toast.is_destructive() {
                        "toast toast-destructive"
                    } else {
                        "toast"
                    };
                    view! {
                        <div class=class role="status" on:click=move |_| queue.dismiss(id)>
                            <strong>{entry.toast.title}</strong>
                            <p>{entry.toast.description}</p>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: u64) -> ToastEntry {
        ToastEntry { id, toast: Toast::success() }
    }

    #[test]
    fn test_remove_entry_by_id() {
        let mut entries = vec![entry(0), entry(1), entry(2)];
        assert!(remove_entry(&mut entries, 1));
        assert_eq!(entries.iter().map(|e| e.id).collect::<Vec<_>>(), vec![0, 2]);
    }

    #[test]
    fn test_remove_missing_entry() {
        let mut entries = vec![entry(0)];
        assert!(!remove_entry(&mut entries, 7));
        assert_eq!(entries.len(), 1);
    }
}
