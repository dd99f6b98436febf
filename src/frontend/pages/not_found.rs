use leptos::prelude::*;

use crate::frontend::components::{Button, ButtonVariant};

/// Fallback for unknown routes and missing posts.
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-[70vh] flex items-center justify-center px-6">
            <div class="text-center">
                <h1 class="text-8xl md:text-9xl font-bold text-gradient mb-4">"404"</h1>
                <p class="text-2xl font-semibold mb-2">"Oops! Page not found"</p>
                <p class="text-slate-500 mb-8 max-w-md">
                    "The article or page you're looking for doesn't exist or has been moved."
                </p>
                <Button variant=ButtonVariant::Hero href="/">"Return to Home"</Button>
            </div>
        </div>
    }
}
