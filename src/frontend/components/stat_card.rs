use leptos::prelude::*;

#[component]
pub fn StatCard(
    icon: &'static str,
    label: &'static str,
    #[prop(into)] value: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="p-6 rounded-xl border border-slate-200 dark:border-slate-800 bg-white dark:bg-slate-900">
            <div class="flex items-center justify-between">
                <div>
                    <p class="text-sm font-medium text-slate-500">{label}</p>
                    <p class="text-2xl font-bold">{move || value.get()}</p>
                </div>
                <span class="text-3xl">{icon}</span>
            </div>
        </div>
    }
}
