//! Single post page at `/blog/:id`.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::data::find_feed_post;
use crate::frontend::components::{Badge, BadgeVariant, Button, ButtonVariant};
use crate::frontend::pages::NotFound;
use crate::models::BlogPost;
use crate::services::CardView;

#[component]
pub fn BlogDetail() -> impl IntoView {
    let params = use_params_map();
    let post = Memo::new(move |_| params.with(|p| p.get("id")).and_then(|id| find_feed_post(&id)));

    move || match post.get() {
        Some(post) => view! { <Article post=post/> }.into_any(),
        None => {
            log::debug!("no post for {:?}", params.with_untracked(|p| p.get("id")));
            view! { <NotFound/> }.into_any()
        }
    }
}

#[component]
fn Article(post: BlogPost) -> impl IntoView {
    let card = CardView::from_post(&post);

    view! {
        <article class="container mx-auto px-4 py-8 max-w-3xl space-y-6">
            <Button variant=ButtonVariant::Ghost href="/">"← Back to articles"</Button>

            {post.cover_image.map(|src| view! {
                <img src=src alt=card.title.clone() class="w-full h-72 object-cover rounded-xl"/>
            })}

            <div class="flex flex-wrap gap-1">
                {post
                    .tags
                    .into_iter()
                    .map(|tag| view! { <Badge variant=BadgeVariant::Outline>{tag}</Badge> })
                    .collect_view()}
            </div>

            <h1 class="text-3xl md:text-4xl font-bold leading-tight">{card.title}</h1>

            <div class="flex items-center gap-3 text-sm text-slate-500">
                <span class="inline-flex h-8 w-8 items-center justify-center rounded-full bg-slate-200 dark:bg-slate-700 font-semibold">
                    {card.author_initial}
                </span>
                <span class="font-medium">{card.author_name}</span>
                <span>"•"</span>
                <span>{card.date}</span>
            </div>

            <p class="text-lg text-slate-500">{card.excerpt}</p>

            <div class="prose dark:prose-invert max-w-none whitespace-pre-line">{post.content}</div>

            <footer class="flex items-center gap-6 pt-6 border-t border-slate-200 dark:border-slate-800 text-sm text-slate-500">
                <span>"👁 "{card.views}" views"</span>
                <span>"💬 "{card.comments}" comments"</span>
                <span>{if post.is_liked { "♥ " } else { "♡ " }}{card.likes}" likes"</span>
            </footer>
        </article>
    }
}
