//! Post creation page wrapping the editor with the submit-for-review flow.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::frontend::components::BlogEditor;
use crate::frontend::toaster::use_toaster;
use crate::models::ToastKind;
use crate::services::{
    BlogDraft, DRAFT_SAVED, PREVIEW_DESCRIPTION, PREVIEW_TITLE, SUBMIT_DELAY,
    SUBMIT_FAILED_DESCRIPTION, SUBMIT_FAILED_TITLE, SUBMITTED_DESCRIPTION, SUBMITTED_TITLE,
    submit_for_review,
};

#[component]
pub fn CreateBlog() -> impl IntoView {
    let toaster = use_toaster();
    let submitting = RwSignal::new(false);
    let submitted = RwSignal::new(false);

    let on_submit = Callback::new(move |draft: BlogDraft| {
        if submitting.get_untracked() {
            return;
        }
        submitting.set(true);

        set_timeout(
            move || {
                match submit_for_review(&draft) {
                    Ok(_) => {
                        toaster.show(ToastKind::Success, SUBMITTED_TITLE, Some(SUBMITTED_DESCRIPTION));
                        submitted.set(true);
                    }
                    Err(e) => {
                        log::error!("Failed to submit blog: {}", e);
                        toaster.show(ToastKind::Error, SUBMIT_FAILED_TITLE, Some(SUBMIT_FAILED_DESCRIPTION));
                    }
                }
                submitting.set(false);
            },
            SUBMIT_DELAY,
        );
    });

    let on_preview = Callback::new(move |_: BlogDraft| {
        toaster.show(ToastKind::Info, PREVIEW_TITLE, Some(PREVIEW_DESCRIPTION));
    });

    let on_save_draft = Callback::new(move |draft: BlogDraft| {
        log::debug!("draft {:?} kept in memory", draft.title);
        toaster.info(DRAFT_SAVED);
    });

    view! {
        <div class="min-h-screen py-8">
            <div class="container mx-auto px-4 max-w-6xl">
                <div class="mb-8">
                    <h1 class="text-3xl font-bold mb-2">"Create New Blog Post"</h1>
                    <p class="text-slate-500">
                        "Share your knowledge with the Devnovate community. Your post will be reviewed before publication."
                    </p>
                </div>

                <BlogEditor
                    on_submit=on_submit
                    on_preview=on_preview
                    on_save_draft=on_save_draft
                    submitting=submitting
                />

                <Show when=move || submitted.get()>
                    <Redirect path="/my-blogs"/>
                </Show>
            </div>
        </div>
    }
}
