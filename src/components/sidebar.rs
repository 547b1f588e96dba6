//! App sidebar: navigation sections and the sign-out control.
//!
//! The nav model mirrors the guard configuration: entries marked admin-only
//! are hidden from non-admins, matching the routes the permission gate would
//! block anyway.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::i18n::t;
use crate::state::auth::AuthState;
use crate::state::lang::Language;
use crate::storage::{KeyValueStore, LocalStore};

/// One sidebar entry. `href` is relative to the language prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub key: &'static str,
    pub href: &'static str,
    pub admin_only: bool,
}

/// Entries in the general section.
pub const GENERAL_NAV: &[NavItem] = &[
    NavItem { key: "dashboard", href: "/dashboard", admin_only: false },
    NavItem { key: "whatsAppChat", href: "/whatsapp-chat", admin_only: false },
    NavItem { key: "liveChat", href: "/live-chat", admin_only: false },
    NavItem { key: "broadcast", href: "/broadcast", admin_only: false },
    NavItem { key: "contacts", href: "/contacts", admin_only: false },
    NavItem { key: "fileManager", href: "/files", admin_only: false },
];

/// Entries in the workspace section.
pub const WORKSPACE_NAV: &[NavItem] = &[
    NavItem { key: "users", href: "/users", admin_only: true },
    NavItem { key: "teams", href: "/teams", admin_only: true },
];

/// Filter a nav section for the current user.
#[must_use]
pub fn visible_items(items: &'static [NavItem], is_admin: bool) -> Vec<NavItem> {
    items
        .iter()
        .copied()
        .filter(|item| !item.admin_only || is_admin)
        .collect()
}

/// Whether `href` (language-prefixed) is the active route for `path`.
#[must_use]
pub fn is_active(path: &str, href: &str) -> bool {
    path == href || path.starts_with(&format!("{href}/"))
}

/// The app sidebar.
#[component]
pub fn Sidebar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let lang = expect_context::<RwSignal<Language>>();
    let pathname = use_location().pathname;
    let navigate = use_navigate();

    let sign_out = move |_| {
        LocalStore.clear();
        auth.update(AuthState::sign_out);
        let opts = NavigateOptions {
            replace: true,
            ..NavigateOptions::default()
        };
        navigate(&format!("/{}/login", lang.get_untracked().code()), opts);
    };

    let section = move |label_key: &'static str, items: &'static [NavItem]| {
        view! {
            <nav class="sidebar__section">
                <span class="sidebar__label">{move || t(lang.get(), label_key).to_owned()}</span>
                <ul>
                    {move || {
                        let active_lang = lang.get();
                        let path = pathname.get();
                        visible_items(items, auth.get().is_admin)
                            .into_iter()
                            .map(|item| {
                                let href = format!("/{}{}", active_lang.code(), item.href);
                                let active = is_active(&path, &href);
                                view! {
                                    <li class=("sidebar__item--active", active)>
                                        <a href=href.clone()>{t(active_lang, item.key).to_owned()}</a>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </ul>
            </nav>
        }
    };

    view! {
        <aside class="sidebar" dir=move || lang.get().dir()>
            {section("general", GENERAL_NAV)}
            {section("workspace", WORKSPACE_NAV)}
            <footer class="sidebar__footer">
                <span class="sidebar__user">
                    {move || auth.get().user.map(|u| u.name).unwrap_or_default()}
                </span>
                <button class="sidebar__signout" on:click=sign_out>
                    {move || t(lang.get(), "signOut").to_owned()}
                </button>
            </footer>
        </aside>
    }
}
