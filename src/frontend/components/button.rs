use leptos::prelude::*;

#[derive(Clone, Copy, Default, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Hero,
    Outline,
    Ghost,
    Destructive,
}

#[derive(Clone, Copy, Default, PartialEq)]
pub enum ButtonSize {
    #[default]
    Default,
    Small,
    Large,
    Icon,
}

#[component]
pub fn Button(
    children: Children,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional, into)] loading: Signal<bool>,
    #[prop(optional, into)] loading_text: String,
    #[prop(optional, into)] href: String,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] on_click: Option<Callback<()>>,
) -> impl IntoView {
    let base_classes = "inline-flex items-center justify-center gap-2 font-medium rounded-md transition-colors duration-200 focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-indigo-500";

    let variant_classes = match variant {
        ButtonVariant::Primary => "bg-indigo-600 text-white hover:bg-indigo-700",
        ButtonVariant::Hero => "btn-hero shadow-lg shadow-indigo-500/25",
        ButtonVariant::Outline => "border border-slate-300 dark:border-slate-700 bg-transparent hover:bg-slate-100 dark:hover:bg-slate-800",
        ButtonVariant::Ghost => "bg-transparent text-slate-600 dark:text-slate-300 hover:bg-slate-100 dark:hover:bg-slate-800",
        ButtonVariant::Destructive => "bg-red-600 text-white hover:bg-red-700",
    };

    let size_classes = match size {
        ButtonSize::Default => "h-10 px-4 py-2 text-sm",
        ButtonSize::Small => "h-9 px-3 text-sm",
        ButtonSize::Large => "h-11 px-8 text-base",
        ButtonSize::Icon => "h-10 w-10",
    };

    let classes = format!(
        "{} {} {} {} disabled:opacity-50 disabled:cursor-not-allowed",
        base_classes, variant_classes, size_classes, class
    );

    let loading_text_display = if loading_text.is_empty() {
        "Loading...".to_string()
    } else {
        loading_text
    };

    if !href.is_empty() {
        return view! {
            <a href=href class=classes>
                {children()}
            </a>
        }
        .into_any();
    }

    let content = children();

    view! {
        <button
            type="button"
            class=classes
            disabled=move || loading.get()
            on:click=move |_| {
                if let Some(cb) = on_click {
                    cb.run(());
                }
            }
        >
            <Show
                when=move || loading.get()
                fallback=|| ()
            >
                <span class="w-4 h-4 border-2 border-white/30 border-t-white rounded-full animate-spin"></span>
                {loading_text_display.clone()}
            </Show>
            <span class=move || if loading.get() { "hidden" } else { "contents" }>
                {content}
            </span>
        </button>
    }
    .into_any()
}
