pub use author::*;
pub use blog_post::*;
pub use blog_status::*;
pub use settings::*;
pub use stats::*;
pub use toast::*;

mod author;
mod blog_post;
mod blog_status;
mod settings;
mod stats;
mod toast;
