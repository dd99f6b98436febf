//! The signed-in user's posts, grouped by review status.

use leptos::prelude::*;

use crate::common::format_short_date;
use crate::data::user_posts;
use crate::frontend::components::{
    Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, StatusBadge, TabList,
};
use crate::models::{BlogPost, BlogStatus};
use crate::services::{StatusCounts, StatusTab, posts_for};

#[component]
pub fn MyBlogs() -> impl IntoView {
    let posts = StoredValue::new(user_posts());
    let counts = posts.with_value(|p| StatusCounts::from_posts(p));
    let active_tab = RwSignal::new(StatusTab::default());

    view! {
        <div class="min-h-screen py-8">
            <div class="container mx-auto px-4 max-w-6xl">
                <div class="flex items-center justify-between mb-8">
                    <div>
                        <h1 class="text-3xl font-bold mb-2">"My Blog Posts"</h1>
                        <p class="text-slate-500">
                            "Manage your blog posts and track their publication status."
                        </p>
                    </div>
                    <Button variant=ButtonVariant::Hero href="/create">
                        "✎ Create New Post"
                    </Button>
                </div>

                <div class="space-y-6">
                    <TabList
                        tabs=StatusTab::ALL.to_vec()
                        active=active_tab
                        label=Callback::new(move |tab: StatusTab| counts.tab_label(tab))
                    />

                    {move || {
                        let tab = active_tab.get();
                        let visible = posts.with_value(|p| posts_for(p, tab));
                        let empty = visible.is_empty();
                        view! {
                            <div class="grid gap-4 md:grid-cols-2">
                                {visible
                                    .into_iter()
                                    .map(|post| view! { <OwnPostCard post=post/> })
                                    .collect_view()}
                            </div>
                            {tab
                                .empty_message()
                                .filter(|_| empty)
                                .map(|message| view! {
                                    <div class="text-center py-12">
                                        <p class="text-slate-500">{message}</p>
                                    </div>
                                })}
                        }
                    }}
                </div>
            </div>
        </div>
    }
}

#[component]
fn OwnPostCard(post: BlogPost) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    let details = match post.status {
        BlogStatus::Approved => view! {
            <div class="flex items-center gap-4 text-sm text-slate-500">
                <span>"👁 "{post.views}</span>
                <span>"👍 "{post.likes}</span>
                <span>"💬 "{post.comments}</span>
            </div>
        }
        .into_any(),
        BlogStatus::Pending => view! {
            <p class="text-sm text-slate-500">
                "Submitted on "{post.submitted_at.map(format_short_date).unwrap_or_default()}
            </p>
        }
        .into_any(),
        BlogStatus::Rejected => post
            .rejection_reason
            .clone()
            .map(|reason| view! {
                <div class="mt-2 p-2 rounded text-sm bg-red-500/10 border border-red-500/20">
                    <p class="font-medium text-red-600 mb-1">"Rejection Reason:"</p>
                    <p class="text-slate-500">{reason}</p>
                </div>
            })
            .into_any(),
        BlogStatus::Hidden => ().into_any(),
    };

    view! {
        <div class="hover-lift rounded-xl border border-slate-200 dark:border-slate-800 bg-white dark:bg-slate-900">
            <div class="p-6 pb-3 flex items-start justify-between">
                <div class="space-y-1">
                    <h3 class="text-lg font-semibold leading-tight">{post.title.clone()}</h3>
                    <StatusBadge status=post.status/>
                </div>
                <div class="relative">
                    <Button
                        variant=ButtonVariant::Ghost
                        size=ButtonSize::Icon
                        on_click=Callback::new(move |_: ()| set_menu_open.update(|open| *open = !*open))
                    >
                        "⋮"
                    </Button>
                    <Show when=move || menu_open.get()>
                        <div class="absolute right-0 z-10 mt-1 w-36 rounded-md border border-slate-200 dark:border-slate-800 bg-white dark:bg-slate-900 shadow-lg py-1 text-sm">
                            <button type="button" class="w-full px-3 py-2 text-left hover:bg-slate-100 dark:hover:bg-slate-800">"✎ Edit"</button>
                            <button type="button" class="w-full px-3 py-2 text-left hover:bg-slate-100 dark:hover:bg-slate-800">"👁 View"</button>
                            <button type="button" class="w-full px-3 py-2 text-left text-red-600 hover:bg-slate-100 dark:hover:bg-slate-800">"🗑 Delete"</button>
                        </div>
                    </Show>
                </div>
            </div>
            <div class="px-6 pb-6">
                <p class="text-slate-500 text-sm mb-3 line-clamp-2">{post.excerpt.clone()}</p>
                <div class="flex flex-wrap gap-1 mb-3">
                    {post
                        .tags
                        .iter()
                        .cloned()
                        .map(|tag| view! { <Badge variant=BadgeVariant::Outline>{tag}</Badge> })
                        .collect_view()}
                </div>
                {details}
            </div>
        </div>
    }
}
