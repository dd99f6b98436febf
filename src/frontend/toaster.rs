//! Transient notifications shared by every page through context.

use std::time::Duration;

use leptos::prelude::*;

use crate::frontend::components::ToastCard;
use crate::models::ToastKind;
use crate::services::ToastQueue;

/// How long a toast stays on screen.
pub const TOAST_LIFETIME: Duration = Duration::from_secs(4);

#[derive(Clone, Copy)]
pub struct Toaster {
    queue: RwSignal<ToastQueue>,
}

impl Toaster {
    pub fn provide() -> Self {
        let toaster = Self {
            queue: RwSignal::new(ToastQueue::default()),
        };
        provide_context(toaster);
        toaster
    }

    pub fn show(&self, kind: ToastKind, title: &str, description: Option<&str>) {
        let mut id = 0;
        self.queue.update(|q| {
            id = q.push(kind, title, description.map(str::to_string));
        });
        log::debug!("toast {} ({:?}): {}", id, kind, title);

        let queue = self.queue;
        set_timeout(
            move || {
                queue.update(|q| {
                    q.dismiss(id);
                });
            },
            TOAST_LIFETIME,
        );
    }

    pub fn success(&self, title: &str) {
        self.show(ToastKind::Success, title, None);
    }

    pub fn error(&self, title: &str) {
        self.show(ToastKind::Error, title, None);
    }

    pub fn info(&self, title: &str) {
        self.show(ToastKind::Info, title, None);
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|q| {
            q.dismiss(id);
        });
    }
}

pub fn use_toaster() -> Toaster {
    expect_context::<Toaster>()
}

/// Fixed stack in the bottom-right corner rendering the queued toasts.
#[component]
pub fn ToastViewport() -> impl IntoView {
    let toaster = use_toaster();

    view! {
        <div class="fixed bottom-4 right-4 z-[100] flex flex-col gap-2" aria-live="polite">
            <For
                each=move || toaster.queue.get().toasts().to_vec()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <ToastCard
                            kind=toast.kind
                            title=toast.title
                            description=toast.description
                            on_dismiss=Callback::new(move |_: ()| toaster.dismiss(id))
                        />
                    }
                }
            />
        </div>
    }
}
