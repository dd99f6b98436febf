use leptos::prelude::*;

use crate::common::classes;
use crate::frontend::components::{Badge, BadgeVariant};
use crate::models::{BlogPost, CardVariant};
use crate::services::CardView;

/// Feed card linking to the post page.
#[component]
pub fn BlogCard(post: BlogPost, #[prop(optional)] variant: CardVariant) -> impl IntoView {
    let card = CardView::from_post(&post);
    let featured = variant == CardVariant::Featured;
    let compact = variant == CardVariant::Compact;

    let card_classes = classes([
        "group overflow-hidden rounded-xl border border-slate-200 dark:border-slate-800 bg-white dark:bg-slate-900 flex",
        if compact { "flex-row" } else { "flex-col" },
        if featured { "md:col-span-2 lg:col-span-3" } else { "" },
    ]);
    let image_classes = classes([
        "w-full object-cover transition-transform duration-300 group-hover:scale-105",
        match variant {
            CardVariant::Featured => "h-64 md:h-80",
            CardVariant::Default => "h-48",
            CardVariant::Compact => "h-full w-32 flex-shrink-0",
        },
    ]);
    let title_classes = classes([
        "font-semibold leading-tight mb-2 group-hover:text-indigo-600 transition-colors",
        match variant {
            CardVariant::Featured => "text-xl md:text-2xl",
            CardVariant::Default => "text-lg",
            CardVariant::Compact => "text-base",
        },
    ]);
    let excerpt_classes = classes([
        "text-slate-500 mb-3",
        if featured { "text-base" } else { "text-sm" },
        if compact { "line-clamp-1" } else { "line-clamp-2" },
    ]);

    let link_classes = if compact { "flex flex-1" } else { "block" };
    let cover_classes = if compact { "overflow-hidden w-32" } else { "overflow-hidden w-full" };
    let body_classes = if compact { "p-4 flex-1" } else { "p-4" };
    let footer_classes = if compact {
        "px-2 pb-2 flex items-center justify-between"
    } else {
        "px-4 pb-4 flex items-center justify-between"
    };
    let (like_classes, like_icon) = if post.is_liked {
        ("text-sm text-red-500 hover:text-red-600", "♥ ")
    } else {
        ("text-sm text-slate-500 hover:text-indigo-600", "♡ ")
    };

    let avatar = post.author.avatar.clone();
    let cover = post.cover_image.clone();
    let title = card.title.clone();

    view! {
        <article class=card_classes>
            <a href=card.href class=link_classes>
                {cover.map(|src| view! {
                    <div class=cover_classes>
                        <img src=src alt=title.clone() class=image_classes />
                    </div>
                })}
                <div class=body_classes>
                    {featured.then(|| view! {
                        <Badge variant=BadgeVariant::Secondary class="mb-2">"Featured"</Badge>
                    })}
                    <div class="flex flex-wrap gap-1 mb-2">
                        {card.tags
                            .into_iter()
                            .map(|tag| view! { <Badge variant=BadgeVariant::Outline>{tag}</Badge> })
                            .collect_view()}
                    </div>
                    <h3 class=title_classes>{card.title}</h3>
                    <p class=excerpt_classes>{card.excerpt}</p>
                    <div class="flex items-center gap-2 text-xs text-slate-500">
                        <span class="inline-flex h-6 w-6 items-center justify-center overflow-hidden rounded-full bg-slate-200 dark:bg-slate-700">
                            {match avatar {
                                Some(src) => view! {
                                    <img src=src alt=card.author_name.clone() class="h-full w-full object-cover" />
                                }.into_any(),
                                None => view! { <span>{card.author_initial}</span> }.into_any(),
                            }}
                        </span>
                        <span class="font-medium">{card.author_name}</span>
                        <span>"•"</span>
                        <span>"📅 "{card.date}</span>
                    </div>
                </div>
            </a>
            <footer class=footer_classes>
                <div class="flex items-center gap-4 text-sm text-slate-500">
                    <span>"👁 "{card.views}</span>
                    <span>"💬 "{card.comments}</span>
                </div>
                <button type="button" class=like_classes>
                    {like_icon}
                    {card.likes}
                </button>
            </footer>
        </article>
    }
}
