//! Account settings: profile, notification switches, theme and security.

use leptos::prelude::*;

use crate::frontend::components::{
    Button, ButtonVariant, EmailInput, PasswordInput, Switch, TabList, TextArea, TextInput,
};
use crate::frontend::toaster::use_toaster;
use crate::models::{NotificationKind, Theme};
use crate::services::{
    NOTIFICATIONS_UPDATED, PASSWORD_CHANGED, PROFILE_UPDATED, SettingsState, THEME_UPDATED,
    bio_counter,
};

#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
enum SettingsTab {
    #[default]
    Profile,
    Notifications,
    Appearance,
    Security,
}

impl SettingsTab {
    const ALL: [SettingsTab; 4] = [
        Self::Profile,
        Self::Notifications,
        Self::Appearance,
        Self::Security,
    ];

    fn label(&self) -> &'static str {
        match self {
            Self::Profile => "👤 Profile",
            Self::Notifications => "🔔 Notifications",
            Self::Appearance => "🎨 Appearance",
            Self::Security => "🛡 Security",
        }
    }
}

/// Unsaved profile edits. Lives on the page so edits survive tab switches.
#[derive(Clone, Copy)]
struct ProfileForm {
    name: (ReadSignal<String>, WriteSignal<String>),
    email: (ReadSignal<String>, WriteSignal<String>),
    bio: (ReadSignal<String>, WriteSignal<String>),
}

impl ProfileForm {
    fn new(state: &SettingsState) -> Self {
        Self {
            name: signal(state.profile.name.clone()),
            email: signal(state.profile.email.clone()),
            bio: signal(state.profile.bio.clone()),
        }
    }
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let active_tab = RwSignal::new(SettingsTab::default());
    let state = RwSignal::new(SettingsState::default());
    let form = state.with_untracked(ProfileForm::new);

    view! {
        <div class="min-h-screen py-8">
            <div class="container mx-auto px-4 max-w-4xl">
                <div class="mb-8">
                    <h1 class="text-3xl font-bold mb-2">"Settings"</h1>
                    <p class="text-slate-500">"Manage your account settings and preferences."</p>
                </div>

                <div class="space-y-6">
                    <TabList
                        tabs=SettingsTab::ALL.to_vec()
                        active=active_tab
                        label=Callback::new(|tab: SettingsTab| tab.label().to_string())
                    />

                    {move || match active_tab.get() {
                        SettingsTab::Profile => view! { <ProfileSettings state=state form=form/> }.into_any(),
                        SettingsTab::Notifications => view! { <NotificationSettings state=state/> }.into_any(),
                        SettingsTab::Appearance => view! { <AppearanceSettings state=state/> }.into_any(),
                        SettingsTab::Security => view! { <SecuritySettings/> }.into_any(),
                    }}
                </div>
            </div>
        </div>
    }
}

#[component]
fn Panel(title: &'static str, description: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="rounded-xl border border-slate-200 dark:border-slate-800 bg-white dark:bg-slate-900">
            <div class="p-6 pb-2">
                <h2 class="text-xl font-semibold">{title}</h2>
                <p class="text-sm text-slate-500">{description}</p>
            </div>
            <div class="p-6 space-y-6">{children()}</div>
        </div>
    }
}

#[component]
fn ProfileSettings(state: RwSignal<SettingsState>, form: ProfileForm) -> impl IntoView {
    let toaster = use_toaster();
    let (name, set_name) = form.name;
    let (email, set_email) = form.email;
    let (bio, set_bio) = form.bio;
    let bio_hint = Signal::derive(move || bio.with(|b| bio_counter(b)));
    let avatar = state.with_untracked(|s| s.profile.avatar.clone());
    let initial = move || name.with(|n| n.chars().next().map(String::from).unwrap_or_default());

    let save = Callback::new(move |_: ()| {
        state.update(|s| s.save_profile(name.get_untracked(), email.get_untracked(), bio.get_untracked()));
        log::info!("profile saved for {}", name.get_untracked());
        toaster.success(PROFILE_UPDATED);
    });

    view! {
        <Panel title="Profile Information" description="Update your profile information and avatar.">
            <div class="flex items-center gap-6">
                <div class="h-20 w-20 rounded-full overflow-hidden bg-indigo-100 dark:bg-indigo-900 flex items-center justify-center text-2xl font-bold">
                    {match avatar {
                        Some(src) => view! { <img src=src alt="Avatar" class="h-full w-full object-cover"/> }.into_any(),
                        None => view! { <span>{initial}</span> }.into_any(),
                    }}
                </div>
                <div class="space-y-2">
                    <Button variant=ButtonVariant::Outline>"📷 Change Avatar"</Button>
                    <p class="text-sm text-slate-500">"JPG, GIF or PNG. 1MB max."</p>
                </div>
            </div>

            <div class="grid gap-4 md:grid-cols-2">
                <TextInput label="Full Name" name="name" value=name set_value=set_name/>
                <EmailInput label="Email" value=email set_value=set_email/>
            </div>

            <TextArea
                label="Bio"
                name="bio"
                placeholder="Tell us about yourself..."
                rows=4
                hint=bio_hint
                value=bio
                set_value=set_bio
            />

            <Button variant=ButtonVariant::Hero on_click=save>"💾 Update Profile"</Button>
        </Panel>
    }
}

#[component]
fn NotificationSettings(state: RwSignal<SettingsState>) -> impl IntoView {
    let toaster = use_toaster();

    view! {
        <Panel title="Notification Preferences" description="Choose what notifications you want to receive.">
            {NotificationKind::ALL
                .into_iter()
                .map(|kind| {
                    let checked = Signal::derive(move || state.with(|s| s.notifications.get(kind)));
                    let on_toggle = Callback::new(move |value: bool| {
                        state.update(|s| s.set_notification(kind, value));
                        toaster.success(NOTIFICATIONS_UPDATED);
                    });
                    view! {
                        <div class="flex items-center justify-between gap-4">
                            <div class="space-y-0.5">
                                <label for=kind.id() class="font-medium">{kind.title()}</label>
                                <p class="text-sm text-slate-500">{kind.description()}</p>
                            </div>
                            <Switch id=kind.id() checked=checked on_toggle=on_toggle/>
                        </div>
                    }
                })
                .collect_view()}
        </Panel>
    }
}

/// Reads the OS colour-scheme preference.
#[cfg(feature = "hydrate")]
fn system_prefers_dark() -> bool {
    window()
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()
        .map(|query| query.matches())
        .unwrap_or(false)
}

#[cfg(not(feature = "hydrate"))]
fn system_prefers_dark() -> bool {
    false
}

#[cfg(feature = "hydrate")]
fn set_dark_class(theme: Theme, dark: bool) {
    let Some(root) = document().document_element() else {
        return;
    };
    if let Err(e) = root.class_list().toggle_with_force("dark", dark) {
        log::error!("failed to apply {} theme: {:?}", theme, e);
    }
}

#[cfg(not(feature = "hydrate"))]
fn set_dark_class(_theme: Theme, _dark: bool) {}

#[component]
fn AppearanceSettings(state: RwSignal<SettingsState>) -> impl IntoView {
    let toaster = use_toaster();

    let choose = move |choice: Theme| {
        let dark = state
            .try_update(|s| s.choose_theme(choice, system_prefers_dark()))
            .unwrap_or_default();
        set_dark_class(choice, dark);
        log::debug!("theme {} (dark: {})", choice, dark);
        toaster.success(THEME_UPDATED);
    };

    view! {
        <Panel title="Appearance" description="Customize how Devnovate looks on your device.">
            <div class="space-y-2">
                <p class="font-medium">"Theme"</p>
                <div class="grid grid-cols-3 gap-4">
                    {Theme::ALL
                        .into_iter()
                        .map(|option| {
                            let icon = match option {
                                Theme::Light => "☀",
                                Theme::Dark => "☾",
                                Theme::System => "🖥",
                            };
                            view! {
                                <button
                                    type="button"
                                    on:click=move |_| choose(option)
                                    class=move || format!(
                                        "flex flex-col items-center gap-2 p-4 rounded-lg border transition-colors {}",
                                        if state.with(|s| s.theme) == option {
                                            "border-indigo-600 bg-indigo-600/10"
                                        } else {
                                            "border-slate-200 dark:border-slate-800 hover:bg-slate-100 dark:hover:bg-slate-800"
                                        }
                                    )
                                >
                                    <span class="text-2xl">{icon}</span>
                                    <span class="text-sm font-medium">{option.label()}</span>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </Panel>
    }
}

#[component]
fn SecuritySettings() -> impl IntoView {
    let toaster = use_toaster();
    let (current, set_current) = signal(String::new());
    let (new_password, set_new_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());

    let change_password = Callback::new(move |_: ()| {
        toaster.success(PASSWORD_CHANGED);
    });

    view! {
        <Panel title="Security Settings" description="Manage your password and security preferences.">
            <div class="space-y-4">
                <PasswordInput label="Current Password" name="current-password" value=current set_value=set_current/>
                <PasswordInput label="New Password" name="new-password" value=new_password set_value=set_new_password/>
                <PasswordInput label="Confirm New Password" name="confirm-password" value=confirm set_value=set_confirm/>
                <Button variant=ButtonVariant::Hero on_click=change_password>"Change Password"</Button>
            </div>

            <div class="pt-6 border-t border-slate-200 dark:border-slate-800 flex items-center justify-between">
                <div>
                    <h3 class="font-medium">"Two-Factor Authentication"</h3>
                    <p class="text-sm text-slate-500">"Add an extra layer of security to your account."</p>
                </div>
                <Button variant=ButtonVariant::Outline>"Enable 2FA"</Button>
            </div>
        </Panel>
    }
}
