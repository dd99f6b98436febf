use leptos::prelude::*;
use leptos_router::hooks::use_location;

pub const NAV_LINKS: [(&str, &str, &str); 4] = [
    ("/", "Home", "🏠"),
    ("/my-blogs", "My Blogs", "👤"),
    ("/create", "Create Blog", "✎"),
    ("/admin", "Admin Dashboard", "🛡"),
];

/// Active link is decided by exact path equality.
pub fn is_active(current: &str, to: &str) -> bool {
    current == to
}

#[component]
pub fn Navbar() -> impl IntoView {
    let location = use_location();
    let (menu_open, set_menu_open) = signal(false);
    let pathname = location.pathname;

    view! {
        <nav class="sticky top-0 z-50 w-full border-b border-slate-200 dark:border-slate-800 bg-white/95 dark:bg-slate-950/95 backdrop-blur">
            <div class="container mx-auto px-4 flex h-16 items-center">
                <a href="/" class="flex items-center gap-2">
                    <span class="flex h-8 w-8 items-center justify-center rounded-lg bg-gradient-to-r from-indigo-600 to-violet-500 text-lg font-bold text-white">
                        "D"
                    </span>
                    <span class="hidden sm:inline-block font-bold text-xl text-gradient">"Devnovate"</span>
                </a>

                <div class="mx-6 hidden flex-1 md:flex">
                    <input
                        type="search"
                        placeholder="Search blogs, authors, tags..."
                        class="w-full max-w-sm px-3 py-2 rounded-md border border-slate-300 dark:border-slate-700 bg-transparent text-sm"
                    />
                </div>

                <div class="hidden md:flex md:items-center md:gap-1">
                    {NAV_LINKS
                        .into_iter()
                        .map(|(to, label, icon)| view! {
                            <a
                                href=to
                                class=move || format!(
                                    "flex items-center gap-2 px-3 py-2 text-sm font-medium rounded-md {}",
                                    if is_active(&pathname.get(), to) {
                                        "text-indigo-600"
                                    } else {
                                        "text-slate-500 hover:text-slate-900 dark:hover:text-white"
                                    }
                                )
                            >
                                <span>{icon}</span>
                                <span>{label}</span>
                            </a>
                        })
                        .collect_view()}
                </div>

                <div class="flex items-center gap-2 ml-auto md:ml-4">
                    <button type="button" class="h-10 w-10 rounded-md hover:bg-slate-100 dark:hover:bg-slate-800" aria-label="Help">
                        "?"
                    </button>
                    <a href="/settings" class="inline-flex h-10 w-10 items-center justify-center rounded-md hover:bg-slate-100 dark:hover:bg-slate-800" aria-label="Settings">
                        "⚙"
                    </a>
                    <button
                        type="button"
                        class="md:hidden h-10 w-10 rounded-md hover:bg-slate-100 dark:hover:bg-slate-800"
                        aria-label="Toggle menu"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        {move || if menu_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>

            <Show when=move || menu_open.get()>
                <div class="border-t border-slate-200 dark:border-slate-800 md:hidden">
                    <div class="container mx-auto px-4 py-4 space-y-4">
                        <input
                            type="search"
                            placeholder="Search blogs..."
                            class="w-full px-3 py-2 rounded-md border border-slate-300 dark:border-slate-700 bg-transparent text-sm"
                        />
                        <div class="flex flex-col gap-2">
                            {NAV_LINKS
                                .into_iter()
                                .map(|(to, label, icon)| view! {
                                    <a
                                        href=to
                                        on:click=move |_| set_menu_open.set(false)
                                        class=move || format!(
                                            "flex items-center gap-3 px-3 py-2 text-sm font-medium rounded-md {}",
                                            if is_active(&pathname.get(), to) {
                                                "bg-indigo-600/10 text-indigo-600"
                                            } else {
                                                "text-slate-500 hover:bg-slate-100 dark:hover:bg-slate-800"
                                            }
                                        )
                                    >
                                        <span>{icon}</span>
                                        <span>{label}</span>
                                    </a>
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </Show>
        </nav>
    }
}
