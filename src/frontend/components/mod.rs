//! Reusable UI components for the Devnovate frontend

mod alert;
mod badge;
mod blog_card;
mod blog_editor;
mod button;
mod input;
mod nav;
mod stat_card;
mod tabs;

pub use alert::ToastCard;
pub use badge::{Badge, BadgeVariant, StatusBadge};
pub use blog_card::BlogCard;
pub use blog_editor::BlogEditor;
pub use button::{Button, ButtonSize, ButtonVariant};
pub use input::{EmailInput, PasswordInput, Switch, TextArea, TextInput};
pub use nav::{NAV_LINKS, Navbar, is_active};
pub use stat_card::StatCard;
pub use tabs::TabList;
