//! Transient notices (toasts) shown in a corner of the screen.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// How long a notice stays on screen.
const NOTICE_TTL_MS: u32 = 4_000;

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub title: String,
    pub description: String,
}

#[derive(Clone, Copy)]
pub struct NoticeService {
    items: RwSignal<Vec<Notice>>,
    next_id: StoredValue<u64>,
}

impl NoticeService {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    /// Show a notice; it dismisses itself after a few seconds.
    pub fn show(&self, title: impl Into<String>, description: impl Into<String>) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.items.update(|items| {
            items.push(Notice {
                id,
                title: title.into(),
                description: description.into(),
            })
        });

        let service = *self;
        spawn_local(async move {
            TimeoutFuture::new(NOTICE_TTL_MS).await;
            service.dismiss(id);
        });
    }

    pub fn dismiss(&self, id: u64) {
        self.items.update(|items| items.retain(|n| n.id != id));
    }
}

impl Default for NoticeService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_notices() -> NoticeService {
    use_context::<NoticeService>().expect("NoticeService not provided")
}

#[component]
pub fn NoticeHost() -> impl IntoView {
    let service = use_notices();

    view! {
        <div class="notice-host" role="status" aria-live="polite">
            <For
                each=move || service.items.get()
                key=|notice| notice.id
                children=move |notice| {
                    let id = notice.id;
                    view! {
                        <div class="notice" on:click=move |_| service.dismiss(id)>
                            <div class="notice__title">{notice.title}</div>
                            <div class="notice__description">{notice.description}</div>
                        </div>
                    }
                }
            />
        </div>
    }
}
