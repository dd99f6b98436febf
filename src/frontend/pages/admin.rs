//! Admin dashboard: review queue, published posts and platform analytics.

use leptos::prelude::*;

use crate::common::{format_count, format_short_date};
use crate::data::{TOP_CATEGORIES, pending_submissions, platform_stats, published_posts};
use crate::frontend::components::{
    Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, StatCard, TabList,
};
use crate::frontend::toaster::use_toaster;
use crate::models::{BlogPost, ToastKind};
use crate::services::{
    Decision, ModerationQueue, VisibilityChange, VisibilityFlags, category_bar_width,
};

#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
enum AdminTab {
    #[default]
    Pending,
    Published,
    Analytics,
}

#[component]
pub fn AdminDashboard() -> impl IntoView {
    let toaster = use_toaster();
    let queue = RwSignal::new(ModerationQueue::new(pending_submissions()));
    let published = StoredValue::new(published_posts());
    let visibility = RwSignal::new(VisibilityFlags::default());
    let stats = StoredValue::new(platform_stats());
    let active_tab = RwSignal::new(AdminTab::default());

    let decide = Callback::new(move |(id, decision): (String, Decision)| {
        match queue.try_update(|q| q.decide(&id, decision)) {
            Some(Ok(_)) => match decision {
                Decision::Approve => toaster.success(decision.toast_title()),
                Decision::Reject => toaster.error(decision.toast_title()),
            },
            Some(Err(e)) => log::warn!("moderation skipped: {}", e),
            None => {}
        }
    });

    let toggle_visibility = Callback::new(move |id: String| {
        if let Some(change) = visibility.try_update(|v| v.toggle(&id)) {
            match change {
                VisibilityChange::Hidden => toaster.show(ToastKind::Info, change.toast_title(), None),
                VisibilityChange::Visible => toaster.success(change.toast_title()),
            }
        }
    });

    let published_count = published.with_value(|p| p.len());
    let tab_label = Callback::new(move |tab: AdminTab| match tab {
        AdminTab::Pending => format!("◷ Pending Review ({})", queue.with(|q| q.len())),
        AdminTab::Published => format!("👁 Published ({})", published_count),
        AdminTab::Analytics => "📊 Analytics".to_string(),
    });

    let stat = move |f: fn(&crate::models::PlatformStats) -> String| {
        Signal::derive(move || stats.with_value(f))
    };

    view! {
        <div class="min-h-screen py-8">
            <div class="container mx-auto px-4 max-w-7xl">
                <div class="mb-8">
                    <h1 class="text-3xl font-bold mb-2">"Admin Dashboard"</h1>
                    <p class="text-slate-500">
                        "Manage blog content, review submissions, and monitor platform analytics."
                    </p>
                </div>

                <div class="grid gap-6 md:grid-cols-2 lg:grid-cols-4 mb-8">
                    <StatCard icon="📄" label="Total Blogs" value=stat(|s| s.total_blogs.to_string())/>
                    <StatCard icon="◷" label="Pending Review" value=stat(|s| s.pending_review.to_string())/>
                    <StatCard icon="📈" label="Published This Month" value=stat(|s| s.published_this_month.to_string())/>
                    <StatCard icon="👥" label="Total Authors" value=stat(|s| s.total_authors.to_string())/>
                </div>

                <div class="space-y-6">
                    <TabList
                        tabs=vec![AdminTab::Pending, AdminTab::Published, AdminTab::Analytics]
                        active=active_tab
                        label=tab_label
                    />

                    {move || match active_tab.get() {
                        AdminTab::Pending => view! {
                            <Show
                                when=move || !queue.with(|q| q.is_empty())
                                fallback=|| view! {
                                    <div class="rounded-xl border border-slate-200 dark:border-slate-800 p-12 text-center">
                                        <p class="text-4xl mb-4">"✓"</p>
                                        <h3 class="text-lg font-semibold mb-2">"All caught up!"</h3>
                                        <p class="text-slate-500">"No blog posts pending review."</p>
                                    </div>
                                }
                            >
                                <div class="grid gap-6">
                                    <For
                                        each=move || queue.with(|q| q.pending().to_vec())
                                        key=|post| post.id.clone()
                                        children=move |post| view! { <PendingBlogCard post=post on_decide=decide/> }
                                    />
                                </div>
                            </Show>
                        }
                        .into_any(),
                        AdminTab::Published => view! {
                            <div class="grid gap-6">
                                {published
                                    .get_value()
                                    .into_iter()
                                    .map(|post| {
                                        let id = post.id.clone();
                                        let hidden = Signal::derive(move || visibility.with(|v| v.is_hidden(&id)));
                                        view! {
                                            <PublishedBlogCard post=post hidden=hidden on_toggle=toggle_visibility/>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                        .into_any(),
                        AdminTab::Analytics => view! { <Analytics stats=stats.get_value()/> }.into_any(),
                    }}
                </div>
            </div>
        </div>
    }
}

#[component]
fn PendingBlogCard(post: BlogPost, on_decide: Callback<(String, Decision)>) -> impl IntoView {
    let approve_id = post.id.clone();
    let reject_id = post.id.clone();
    let submitted = post.submitted_at.map(format_short_date).unwrap_or_default();

    view! {
        <div class="rounded-xl border border-slate-200 dark:border-slate-800 bg-white dark:bg-slate-900 p-6 space-y-4">
            <div class="flex items-start justify-between">
                <div class="space-y-1">
                    <h3 class="text-lg font-semibold">{post.title}</h3>
                    <div class="flex items-center gap-2 text-sm text-slate-500">
                        <span>"by "{post.author.name}</span>
                        <span>"•"</span>
                        <span>{post.word_count.unwrap_or_default()}" words"</span>
                        <span>"•"</span>
                        <span>{submitted}</span>
                    </div>
                </div>
                <Badge variant=BadgeVariant::Warning>"◷ Pending"</Badge>
            </div>
            <p class="text-slate-500">{post.excerpt}</p>
            <div class="flex flex-wrap gap-1">
                {post
                    .tags
                    .into_iter()
                    .map(|tag| view! { <Badge variant=BadgeVariant::Outline>{tag}</Badge> })
                    .collect_view()}
            </div>
            <div class="flex gap-2">
                <Button
                    size=ButtonSize::Small
                    class="bg-green-600 hover:bg-green-700"
                    on_click=Callback::new(move |_: ()| on_decide.run((approve_id.clone(), Decision::Approve)))
                >
                    "✓ Approve"
                </Button>
                <Button
                    size=ButtonSize::Small
                    variant=ButtonVariant::Destructive
                    on_click=Callback::new(move |_: ()| on_decide.run((reject_id.clone(), Decision::Reject)))
                >
                    "✕ Reject"
                </Button>
                <Button size=ButtonSize::Small variant=ButtonVariant::Outline>
                    "👁 Preview"
                </Button>
            </div>
        </div>
    }
}

#[component]
fn PublishedBlogCard(
    post: BlogPost,
    #[prop(into)] hidden: Signal<bool>,
    on_toggle: Callback<String>,
) -> impl IntoView {
    let id = post.id.clone();
    let published = post.published_at.map(format_short_date).unwrap_or_default();
    let badge_variant = Signal::derive(move || {
        if hidden.get() {
            BadgeVariant::Secondary
        } else {
            BadgeVariant::Success
        }
    });

    view! {
        <div class="rounded-xl border border-slate-200 dark:border-slate-800 bg-white dark:bg-slate-900 p-6 space-y-4">
            <div class="flex items-start justify-between">
                <div class="space-y-1">
                    <h3 class="text-lg font-semibold">{post.title}</h3>
                    <div class="flex items-center gap-2 text-sm text-slate-500">
                        <span>"by "{post.author.name}</span>
                        <span>"•"</span>
                        <span>{published}</span>
                    </div>
                </div>
                <Badge variant=badge_variant>
                    {move || if hidden.get() { "Hidden" } else { "Published" }}
                </Badge>
            </div>
            <div class="flex flex-wrap gap-1">
                {post
                    .tags
                    .into_iter()
                    .map(|tag| view! { <Badge variant=BadgeVariant::Outline>{tag}</Badge> })
                    .collect_view()}
            </div>
            <div class="flex items-center gap-4 text-sm text-slate-500">
                <span>"👁 "{post.views}</span>
                <span>"👍 "{post.likes}</span>
                <span>"💬 "{post.comments}</span>
            </div>
            <div class="flex gap-2">
                {move || {
                    let (variant, label) = if hidden.get() {
                        (ButtonVariant::Primary, "👁 Unhide")
                    } else {
                        (ButtonVariant::Outline, "◌ Hide")
                    };
                    let id = id.clone();
                    view! {
                        <Button
                            size=ButtonSize::Small
                            variant=variant
                            on_click=Callback::new(move |_: ()| on_toggle.run(id.clone()))
                        >
                            {label}
                        </Button>
                    }
                }}
                <Button size=ButtonSize::Small variant=ButtonVariant::Outline>
                    "✎ Edit"
                </Button>
            </div>
        </div>
    }
}

#[component]
fn Analytics(stats: crate::models::PlatformStats) -> impl IntoView {
    view! {
        <div class="grid gap-6 md:grid-cols-2">
            <div class="rounded-xl border border-slate-200 dark:border-slate-800 p-6 space-y-4">
                <h3 class="text-xl font-semibold">"Platform Metrics"</h3>
                <div class="flex justify-between">
                    <span class="text-slate-500">"Total Views"</span>
                    <span class="font-semibold">{format_count(stats.total_views)}</span>
                </div>
                <div class="flex justify-between">
                    <span class="text-slate-500">"Average Read Time"</span>
                    <span class="font-semibold">{stats.average_read_time}</span>
                </div>
                <div class="flex justify-between">
                    <span class="text-slate-500">"Active Authors"</span>
                    <span class="font-semibold">{stats.total_authors}</span>
                </div>
            </div>
            <div class="rounded-xl border border-slate-200 dark:border-slate-800 p-6 space-y-4">
                <h3 class="text-xl font-semibold">"Top Categories"</h3>
                {TOP_CATEGORIES
                    .into_iter()
                    .enumerate()
                    .map(|(index, category)| view! {
                        <div class="flex items-center justify-between">
                            <span>{category}</span>
                            <div class="w-20 h-2 rounded-full bg-slate-200 dark:bg-slate-800">
                                <div
                                    class="h-2 rounded-full bg-indigo-600"
                                    style=format!("width: {}%", category_bar_width(index))
                                ></div>
                            </div>
                        </div>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
