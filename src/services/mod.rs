pub use editor::*;
pub use feed::*;
pub use moderation::*;
pub use my_blogs::*;
pub use settings::*;
pub use toasts::*;

mod editor;
mod feed;
mod moderation;
mod my_blogs;
mod settings;
mod toasts;
