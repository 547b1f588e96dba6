//! Language switcher.
//!
//! Switching persists the preference and rewrites the current path's
//! language prefix with a history-replacing navigation; the layout effect
//! then follows the URL, keeping the URL the single source of truth.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::routing::path::with_lang_prefix;
use crate::state::lang::Language;
use crate::storage::LocalStore;

/// Row of language buttons, the active one highlighted.
#[component]
pub fn LangSwitch() -> impl IntoView {
    let lang = expect_context::<RwSignal<Language>>();
    let pathname = use_location().pathname;
    let navigate = use_navigate();

    view! {
        <div class="lang-switch">
            {Language::ALL
                .into_iter()
                .map(|candidate| {
                    let navigate = navigate.clone();
                    let on_click = move |_| {
                        if lang.get_untracked() == candidate {
                            return;
                        }
                        candidate.persist(&LocalStore);
                        let target = with_lang_prefix(&pathname.get_untracked(), candidate);
                        let opts = NavigateOptions {
                            replace: true,
                            ..NavigateOptions::default()
                        };
                        navigate(&target, opts);
                    };
                    view! {
                        <button
                            class="lang-switch__button"
                            class=("lang-switch__button--active", move || lang.get() == candidate)
                            on:click=on_click
                        >
                            {candidate.code().to_uppercase()}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
