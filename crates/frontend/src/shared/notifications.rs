use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Время показа транзиентного уведомления.
pub const DISMISS_AFTER_MS: u32 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    id: u64,
    pub kind: NotificationKind,
    pub message: String,
}

/// Транзиентные уведомления приложения.
///
/// Активно не более одного: новое вытесняет предыдущее,
/// каждое скрывается автоматически через [`DISMISS_AFTER_MS`].
#[derive(Clone, Copy)]
pub struct NotificationService {
    current: RwSignal<Option<Notification>>,
    next_id: RwSignal<u64>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(None),
            next_id: RwSignal::new(1),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(NotificationKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(NotificationKind::Error, message.into());
    }

    fn show(&self, kind: NotificationKind, message: String) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.current.set(Some(Notification { id, kind, message }));

        let current = self.current;
        spawn_local(async move {
            TimeoutFuture::new(DISMISS_AFTER_MS).await;
            // Скрываем только если за это время не показали новое.
            current.update(|slot| {
                if slot.as_ref().map(|n| n.id) == Some(id) {
                    *slot = None;
                }
            });
        });
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn NotificationHost() -> impl IntoView {
    let svc = use_context::<NotificationService>()
        .expect("NotificationService not found in context");

    view! {
        {move || {
            svc.current.get().map(|n| {
                let class = match n.kind {
                    NotificationKind::Success => "notification notification--success",
                    NotificationKind::Error => "notification notification--error",
                };
                view! { <div class=class>{n.message}</div> }
            })
        }}
    }
}
