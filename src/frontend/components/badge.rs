use leptos::prelude::*;

use crate::models::BlogStatus;

#[derive(Clone, Copy, Default, PartialEq)]
pub enum BadgeVariant {
    #[default]
    Default,
    Secondary,
    Outline,
    Destructive,
    Success,
    Warning,
}

impl BadgeVariant {
    fn classes(&self) -> &'static str {
        match self {
            Self::Default => "bg-indigo-600 text-white border-transparent",
            Self::Secondary => "bg-slate-200 text-slate-800 dark:bg-slate-700 dark:text-slate-100 border-transparent",
            Self::Outline => "border-slate-300 dark:border-slate-600 text-slate-700 dark:text-slate-300",
            Self::Destructive => "bg-red-600 text-white border-transparent",
            Self::Success => "bg-green-100 text-green-800 border-transparent",
            Self::Warning => "text-yellow-600 border-yellow-600",
        }
    }
}

#[component]
pub fn Badge(
    children: Children,
    #[prop(optional, into)] variant: Signal<BadgeVariant>,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    view! {
        <span class=move || format!(
            "inline-flex items-center rounded-full border px-2.5 py-0.5 text-xs font-semibold {} {}",
            variant.get().classes(),
            class
        )>
            {children()}
        </span>
    }
}

/// Badge for a post's review status.
#[component]
pub fn StatusBadge(status: BlogStatus) -> impl IntoView {
    let (icon, variant) = match status {
        BlogStatus::Approved => ("✓", BadgeVariant::Success),
        BlogStatus::Pending => ("◷", BadgeVariant::Warning),
        BlogStatus::Rejected => ("✕", BadgeVariant::Destructive),
        BlogStatus::Hidden => ("◌", BadgeVariant::Secondary),
    };

    view! {
        <Badge variant=variant>
            <span class="mr-1">{icon}</span>
            {status.label()}
        </Badge>
    }
}
