pub mod components;
pub mod pages;
pub mod toaster;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use components::Navbar;
use pages::{AdminDashboard, BlogDetail, CreateBlog, HomePage, MyBlogs, NotFound, SettingsPage};
use toaster::{Toaster, ToastViewport};

/// HTML shell for SSR - provides the full document structure
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Main application component with routing
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    Toaster::provide();

    view! {
        <Stylesheet id="leptos" href="/pkg/devnovate.css"/>
        <Title text="Devnovate - The Writers' Hub"/>
        <Meta name="description" content="Discover, learn, and share knowledge with a community of developers"/>

        <Router>
            <div class="min-h-screen bg-white text-slate-900 dark:bg-slate-950 dark:text-slate-100">
                <Navbar/>
                <main>
                    <Routes fallback=|| view! { <NotFound/> }>
                        <Route path=path!("/") view=HomePage/>
                        <Route path=path!("/create") view=CreateBlog/>
                        <Route path=path!("/my-blogs") view=MyBlogs/>
                        <Route path=path!("/admin") view=AdminDashboard/>
                        <Route path=path!("/settings") view=SettingsPage/>
                        <Route path=path!("/blog/:id") view=BlogDetail/>
                    </Routes>
                </main>
            </div>
            <ToastViewport/>
        </Router>
    }
}
