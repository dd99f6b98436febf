use leptos::prelude::*;

use crate::models::ToastKind;

/// A single notification inside the toaster stack.
#[component]
pub fn ToastCard(
    kind: ToastKind,
    #[prop(into)] title: String,
    #[prop(default = None)] description: Option<String>,
    on_dismiss: Callback<()>,
) -> impl IntoView {
    let (icon, classes) = match kind {
        ToastKind::Success => (
            "✓",
            "bg-emerald-50 border-emerald-300 text-emerald-800 dark:bg-emerald-500/10 dark:border-emerald-500/30 dark:text-emerald-300",
        ),
        ToastKind::Error => (
            "✕",
            "bg-red-50 border-red-300 text-red-800 dark:bg-red-500/10 dark:border-red-500/30 dark:text-red-300",
        ),
        ToastKind::Info => (
            "ℹ",
            "bg-sky-50 border-sky-300 text-sky-800 dark:bg-sky-500/10 dark:border-sky-500/30 dark:text-sky-300",
        ),
    };

    view! {
        <div role="status" class=format!("w-80 p-4 rounded-lg border shadow-lg text-sm {}", classes)>
            <div class="flex items-start gap-2">
                <span>{icon}</span>
                <div class="flex-1">
                    <p class="font-medium">{title}</p>
                    {description.map(|d| view! { <p class="mt-1 opacity-80">{d}</p> })}
                </div>
                <button
                    type="button"
                    class="opacity-60 hover:opacity-100"
                    aria-label="Dismiss"
                    on:click=move |_| on_dismiss.run(())
                >
                    "×"
                </button>
            </div>
        </div>
    }
}
