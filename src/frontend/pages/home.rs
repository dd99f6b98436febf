//! Home feed: hero, category filter and the featured/trending/latest tabs.

use leptos::prelude::*;

use crate::data::{ALL_CATEGORIES, CATEGORIES, feed_posts};
use crate::frontend::components::{
    Badge, BadgeVariant, BlogCard, Button, ButtonSize, ButtonVariant, TabList,
};
use crate::models::CardVariant;
use crate::services::{HomeTab, featured, filter_by_category, trending};

#[component]
pub fn HomePage() -> impl IntoView {
    let posts = StoredValue::new(feed_posts());
    let selected_category = RwSignal::new(ALL_CATEGORIES.to_string());
    let active_tab = RwSignal::new(HomeTab::default());

    let filtered = Memo::new(move |_| {
        posts.with_value(|p| filter_by_category(p, &selected_category.get()))
    });

    view! {
        <div class="min-h-screen">
            <section class="relative overflow-hidden bg-gradient-to-br from-indigo-500/10 via-transparent to-violet-500/10 py-16 md:py-24">
                <div class="container mx-auto px-4 text-center space-y-6 max-w-4xl">
                    <h1 class="text-4xl md:text-6xl font-bold tracking-tight">
                        "Welcome to "<span class="text-gradient">"The Writers' Hub"</span>
                    </h1>
                    <p class="text-xl text-slate-500 max-w-2xl mx-auto">
                        "Discover, learn, and share knowledge with our community of developers. "
                        "From tutorials to industry insights, find everything you need to level up your skills."
                    </p>
                    <div class="flex flex-col sm:flex-row gap-4 justify-center">
                        <Button variant=ButtonVariant::Hero size=ButtonSize::Large>"Start Reading"</Button>
                        <Button variant=ButtonVariant::Outline size=ButtonSize::Large>"Join Community"</Button>
                    </div>
                </div>
            </section>

            <section class="py-8 border-b border-slate-200 dark:border-slate-800">
                <div class="container mx-auto px-4 flex flex-wrap gap-2 justify-center">
                    {CATEGORIES
                        .into_iter()
                        .map(|category| {
                            let variant = Signal::derive(move || {
                                if selected_category.get() == category {
                                    BadgeVariant::Default
                                } else {
                                    BadgeVariant::Outline
                                }
                            });
                            view! {
                                <button type="button" on:click=move |_| selected_category.set(category.to_string())>
                                    <Badge variant=variant class="cursor-pointer px-4 py-2">{category}</Badge>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="container mx-auto px-4 py-12 space-y-8">
                <TabList
                    tabs=HomeTab::ALL.to_vec()
                    active=active_tab
                    label=Callback::new(|tab: HomeTab| tab.label().to_string())
                    class="w-full max-w-md mx-auto"
                />

                {move || match active_tab.get() {
                    HomeTab::Featured => {
                        let lead = posts.with_value(|p| featured(p));
                        let more = posts.with_value(|p| trending(p));
                        view! {
                            <SectionHeading title="Featured Article" subtitle="Hand-picked content from our editors"/>
                            <div class="grid gap-6 lg:grid-cols-3">
                                <div class="lg:col-span-2">
                                    {lead.map(|post| view! { <BlogCard post=post variant=CardVariant::Featured/> })}
                                </div>
                                <div class="space-y-4">
                                    <h3 class="text-xl font-semibold">"More Featured"</h3>
                                    {more
                                        .into_iter()
                                        .map(|post| view! { <BlogCard post=post variant=CardVariant::Compact/> })
                                        .collect_view()}
                                </div>
                            </div>
                        }
                        .into_any()
                    }
                    HomeTab::Trending => {
                        let trending_posts = posts.with_value(|p| trending(p));
                        view! {
                            <SectionHeading title="Trending Posts" subtitle="Most popular articles this week"/>
                            <div class="grid gap-6 md:grid-cols-2 lg:grid-cols-3">
                                {trending_posts
                                    .into_iter()
                                    .map(|post| view! { <BlogCard post=post/> })
                                    .collect_view()}
                            </div>
                        }
                        .into_any()
                    }
                    HomeTab::Latest => view! {
                        <SectionHeading title="Latest Articles" subtitle="Fresh content from our community"/>
                        <div class="grid gap-6 md:grid-cols-2 lg:grid-cols-3">
                            <For
                                each=move || filtered.get()
                                key=|post| post.id.clone()
                                children=|post| view! { <BlogCard post=post/> }
                            />
                        </div>
                        <Show when=move || filtered.with(|f| f.is_empty())>
                            <div class="text-center py-12">
                                <p class="text-slate-500">"No articles found for this category."</p>
                                <Button
                                    variant=ButtonVariant::Outline
                                    class="mt-4"
                                    on_click=Callback::new(move |_: ()| selected_category.set(ALL_CATEGORIES.to_string()))
                                >
                                    "Show All Articles"
                                </Button>
                            </div>
                        </Show>
                    }
                    .into_any(),
                }}
            </section>
        </div>
    }
}

#[component]
fn SectionHeading(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <div class="text-center space-y-2">
            <h2 class="text-3xl font-bold">{title}</h2>
            <p class="text-slate-500">{subtitle}</p>
        </div>
    }
}
