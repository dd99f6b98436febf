use leptos::prelude::*;

const FIELD_CLASSES: &str = "w-full px-3 py-2 rounded-md bg-white dark:bg-slate-900 border border-slate-300 dark:border-slate-700
                             placeholder-slate-400 focus:outline-none focus:ring-2 focus:ring-indigo-500 focus:border-transparent
                             transition-all";

#[component]
pub fn TextInput(
    #[prop(into)] label: String,
    #[prop(into)] name: String,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional, into)] input_type: String,
    #[prop(optional, into)] hint: String,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
) -> impl IntoView {
    let has_hint = !hint.is_empty();
    let input_type = if input_type.is_empty() {
        "text".to_string()
    } else {
        input_type
    };

    view! {
        <div class="space-y-2">
            <label for=name.clone() class="block text-sm font-medium">
                {label}
            </label>
            <input
                type=input_type
                id=name.clone()
                name=name
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| set_value.set(event_target_value(&ev))
                class=FIELD_CLASSES
            />
            {has_hint.then(|| view! { <p class="text-sm text-slate-500">{hint.clone()}</p> })}
        </div>
    }
}

#[component]
pub fn TextArea(
    #[prop(into)] label: String,
    #[prop(into)] name: String,
    #[prop(optional, into)] placeholder: String,
    #[prop(default = 3)] rows: u32,
    #[prop(optional, into)] hint: Signal<String>,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <div class="space-y-2">
            <label for=name.clone() class="block text-sm font-medium">
                {label}
            </label>
            <textarea
                id=name.clone()
                name=name
                placeholder=placeholder
                rows=rows
                prop:value=move || value.get()
                on:input=move |ev| set_value.set(event_target_value(&ev))
                class=FIELD_CLASSES
            ></textarea>
            <Show when=move || !hint.get().is_empty()>
                <p class="text-sm text-slate-500">{move || hint.get()}</p>
            </Show>
        </div>
    }
}

#[component]
pub fn EmailInput(
    #[prop(into)] label: String,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <TextInput
            label=label
            name="email"
            placeholder="you@example.com"
            input_type="email"
            value=value
            set_value=set_value
        />
    }
}

#[component]
pub fn PasswordInput(
    #[prop(into)] label: String,
    #[prop(into)] name: String,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <TextInput
            label=label
            name=name
            placeholder="••••••••"
            input_type="password"
            value=value
            set_value=set_value
        />
    }
}

/// On/off toggle reporting the new state through `on_toggle`.
#[component]
pub fn Switch(
    #[prop(into)] id: String,
    #[prop(into)] checked: Signal<bool>,
    on_toggle: Callback<bool>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            role="switch"
            id=id
            aria-checked=move || checked.get().to_string()
            on:click=move |_| on_toggle.run(!checked.get_untracked())
            class=move || format!(
                "relative inline-flex h-6 w-11 items-center rounded-full transition-colors {}",
                if checked.get() { "bg-indigo-600" } else { "bg-slate-300 dark:bg-slate-700" }
            )
        >
            <span class=move || format!(
                "inline-block h-5 w-5 transform rounded-full bg-white shadow transition-transform {}",
                if checked.get() { "translate-x-5" } else { "translate-x-0.5" }
            )></span>
        </button>
    }
}
