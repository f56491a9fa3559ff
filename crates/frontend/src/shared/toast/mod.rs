//! Transient notifications shown in the bottom-right corner.

use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast--success",
            ToastKind::Error => "toast toast--error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Pure list of visible toasts
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastQueue {
    items: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    /// Hard cap; the oldest toast goes first.
    pub const MAX_VISIBLE: usize = 5;

    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        self.items.push(Toast {
            id: self.next_id,
            kind,
            message: message.into(),
        });
        if self.items.len() > Self::MAX_VISIBLE {
            self.items.remove(0);
        }
        self.next_id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }
}

#[derive(Clone, Copy)]
pub struct ToastService {
    queue: RwSignal<ToastQueue>,
    timeout_ms: u32,
}

impl ToastService {
    pub fn new(timeout_ms: u32) -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::default()),
            timeout_ms,
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    fn push(&self, kind: ToastKind, message: String) {
        match kind {
            ToastKind::Success => log::info!("toast: {}", message),
            ToastKind::Error => log::warn!("toast: {}", message),
        }
        let id = self
            .queue
            .try_update(|q| q.push(kind, message))
            .unwrap_or_default();
        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(svc.timeout_ms).await;
            svc.dismiss(id);
        });
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|q| q.dismiss(id));
    }
}

pub fn use_toasts() -> ToastService {
    use_context::<ToastService>().expect("ToastService not found. Provide it in App.")
}

/// Mounted once at the application root
#[component]
pub fn ToastHost() -> impl IntoView {
    let svc = use_toasts();

    view! {
        <div class="toast-host">
            <For
                each=move || svc.queue.with(|q| q.items().to_vec())
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.kind.class() role="status">
                            <span class="toast__message">{toast.message}</span>
                            <button class="toast__close" on:click=move |_| svc.dismiss(id) title="Dismiss">
                                {icon("x")}
                            </button>
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

    #[test]
    fn test_push_and_dismiss() {
        let mut queue = ToastQueue::default();
        let first = queue.push(ToastKind::Success, "Saved");
        let second = queue.push(ToastKind::Error, "Server Error");
        assert_ne!(first, second);
        assert_eq!(queue.items().len(), 2);

        queue.dismiss(first);
        assert_eq!(queue.items().len(), 1);
        assert_eq!(queue.items()[0].message, "Server Error");

        queue.dismiss(first);
        assert_eq!(queue.items().len(), 1);
    }

    #[test]
    fn test_oldest_is_dropped_over_cap() {
        let mut queue = ToastQueue::default();
        for i in 0..ToastQueue::MAX_VISIBLE + 2 {
            queue.push(ToastKind::Success, format!("toast {}", i));
        }
        assert_eq!(queue.items().len(), ToastQueue::MAX_VISIBLE);
        assert_eq!(queue.items()[0].message, "toast 2");
    }
}
