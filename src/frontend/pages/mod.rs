//! Page components for the Devnovate frontend

mod admin;
mod blog_detail;
mod create_blog;
mod home;
mod my_blogs;
mod not_found;
mod settings;

pub use admin::AdminDashboard;
pub use blog_detail::BlogDetail;
pub use create_blog::CreateBlog;
pub use home::HomePage;
pub use my_blogs::MyBlogs;
pub use not_found::NotFound;
pub use settings::SettingsPage;
