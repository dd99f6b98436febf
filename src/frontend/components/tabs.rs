use leptos::prelude::*;

/// Row of tab triggers bound to `active`. Labels are re-read on every
/// render so counts in them stay current.
#[component]
pub fn TabList<T>(
    tabs: Vec<T>,
    active: RwSignal<T>,
    label: Callback<T, String>,
    #[prop(optional, into)] class: String,
) -> impl IntoView
where
    T: Copy + PartialEq + Send + Sync + 'static,
{
    let columns = tabs.len();

    view! {
        <div
            role="tablist"
            class=format!("grid gap-1 p-1 rounded-lg bg-slate-100 dark:bg-slate-800 {}", class)
            style=format!("grid-template-columns: repeat({}, minmax(0, 1fr));", columns)
        >
            {tabs
                .into_iter()
                .map(|tab| {
                    view! {
                        <button
                            type="button"
                            role="tab"
                            aria-selected=move || (active.get() == tab).to_string()
                            on:click=move |_| active.set(tab)
                            class=move || format!(
                                "px-3 py-1.5 text-sm font-medium rounded-md transition-all {}",
                                if active.get() == tab {
                                    "bg-white dark:bg-slate-950 shadow-sm"
                                } else {
                                    "text-slate-500 hover:text-slate-900 dark:hover:text-white"
                                }
                            )
                        >
                            {move || label.run(tab)}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
