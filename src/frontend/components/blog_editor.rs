use leptos::ev::KeyboardEvent;
use leptos::prelude::*;

use crate::frontend::components::{
    Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, TextArea, TextInput,
};
use crate::services::{BlogDraft, add_tag, remove_tag, word_count};

/// Form for composing a post. The parent decides what submitting, saving
/// and previewing mean; the editor only assembles the draft.
#[component]
pub fn BlogEditor(
    on_submit: Callback<BlogDraft>,
    on_preview: Callback<BlogDraft>,
    on_save_draft: Callback<BlogDraft>,
    #[prop(optional, into)] submitting: Signal<bool>,
    #[prop(optional)] initial: BlogDraft,
) -> impl IntoView {
    let (title, set_title) = signal(initial.title);
    let (excerpt, set_excerpt) = signal(initial.excerpt);
    let (cover_image, set_cover_image) = signal(initial.cover_image);
    let (content, set_content) = signal(initial.content);
    let tags = RwSignal::new(initial.tags);
    let (tag_input, set_tag_input) = signal(String::new());

    let draft = move || BlogDraft {
        title: title.get(),
        content: content.get(),
        excerpt: excerpt.get(),
        tags: tags.get(),
        cover_image: cover_image.get(),
    };

    let submit_tag = move || {
        let input = tag_input.get_untracked();
        match tags.try_update(|t| add_tag(t, &input)) {
            Some(Ok(_)) => set_tag_input.set(String::new()),
            Some(Err(e)) => log::debug!("tag not added: {}", e),
            None => {}
        }
    };

    let on_tag_key = move |ev: KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            submit_tag();
        }
    };

    let content_hint = Signal::derive(move || format!("{} words", word_count(&content.get())));

    view! {
        <div class="max-w-4xl mx-auto">
            <div class="rounded-xl border border-slate-200 dark:border-slate-800 bg-white dark:bg-slate-900">
                <div class="p-6 border-b border-slate-200 dark:border-slate-800">
                    <h2 class="text-2xl font-semibold">"Create New Blog Post"</h2>
                </div>
                <div class="p-6 space-y-6">
                    <TextInput
                        label="Title"
                        name="title"
                        placeholder="Enter your blog title..."
                        value=title
                        set_value=set_title
                    />

                    <TextArea
                        label="Excerpt"
                        name="excerpt"
                        placeholder="Brief description of your blog post..."
                        rows=3
                        value=excerpt
                        set_value=set_excerpt
                    />

                    <div class="space-y-2">
                        <div class="flex gap-2 items-end">
                            <div class="flex-1">
                                <TextInput
                                    label="Cover Image URL"
                                    name="coverImage"
                                    placeholder="https://example.com/image.jpg"
                                    value=cover_image
                                    set_value=set_cover_image
                                />
                            </div>
                            <Button variant=ButtonVariant::Outline size=ButtonSize::Icon>"⬆"</Button>
                        </div>
                        <Show when=move || !cover_image.get().trim().is_empty()>
                            <img
                                src=move || cover_image.get()
                                alt="Cover preview"
                                class="mt-2 w-full h-48 object-cover rounded-lg"
                            />
                        </Show>
                    </div>

                    <div class="space-y-2">
                        <label for="tags" class="block text-sm font-medium">"Tags"</label>
                        <div class="flex gap-2">
                            <input
                                id="tags"
                                placeholder="Enter tags..."
                                prop:value=move || tag_input.get()
                                on:input=move |ev| set_tag_input.set(event_target_value(&ev))
                                on:keydown=on_tag_key
                                class="flex-1 px-3 py-2 rounded-md border border-slate-300 dark:border-slate-700 bg-transparent"
                            />
                            <Button variant=ButtonVariant::Outline on_click=Callback::new(move |_: ()| submit_tag())>
                                "Add"
                            </Button>
                        </div>
                        <div class="flex flex-wrap gap-2 mt-2">
                            <For
                                each=move || tags.get()
                                key=|tag| tag.clone()
                                children=move |tag| {
                                    let removed = tag.clone();
                                    view! {
                                        <Badge variant=BadgeVariant::Secondary class="gap-1">
                                            <span>{tag}</span>
                                            <button
                                                type="button"
                                                class="ml-1 rounded-full px-1 hover:bg-red-600 hover:text-white"
                                                aria-label="Remove tag"
                                                on:click=move |_| tags.update(|t| remove_tag(t, &removed))
                                            >
                                                "×"
                                            </button>
                                        </Badge>
                                    }
                                }
                            />
                        </div>
                    </div>

                    <TextArea
                        label="Content"
                        name="content"
                        placeholder="Start writing your blog post..."
                        rows=14
                        hint=content_hint
                        value=content
                        set_value=set_content
                    />

                    <div class="flex justify-between pt-4">
                        <Button
                            variant=ButtonVariant::Outline
                            on_click=Callback::new(move |_: ()| on_preview.run(draft()))
                        >
                            "👁 Preview"
                        </Button>
                        <div class="flex gap-2">
                            <Button
                                variant=ButtonVariant::Outline
                                on_click=Callback::new(move |_: ()| on_save_draft.run(draft()))
                            >
                                "Save Draft"
                            </Button>
                            <Button
                                variant=ButtonVariant::Hero
                                size=ButtonSize::Default
                                loading=submitting
                                loading_text="Submitting..."
                                on_click=Callback::new(move |_: ()| on_submit.run(draft()))
                            >
                                "Submit for Review"
                            </Button>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
