//! Root application component: routing, context providers, and the layout
//! guard that drives the redirect pipeline.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
    hooks::{use_location, use_navigate},
};
use leptos_router::NavigateOptions;

use crate::components::lang_switch::LangSwitch;
use crate::components::sidebar::Sidebar;
use crate::components::spinner::Spinner;
use crate::pages::dashboard::DashboardPage;
use crate::pages::live_chat::LiveChatPage;
use crate::pages::login::{AdminLoginPage, LoginPage};
use crate::pages::verify_otp::{AdminVerifyOtpPage, VerifyOtpPage};
use crate::routing::config::GuardConfig;
use crate::routing::executor::RedirectExecutor;
use crate::routing::{path, pipeline};
use crate::state::auth::{self, AuthState, SessionBootstrap};
use crate::state::chat::ChatState;
use crate::state::lang::Language;
use crate::state::permissions::PermissionSet;
use crate::storage::LocalStore;

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let lang = RwSignal::new(Language::from_store(&LocalStore));
    let chat = RwSignal::new(ChatState::default());

    provide_context(auth);
    provide_context(lang);
    provide_context(chat);

    view! {
        <Stylesheet id="leptos" href="/pkg/admin-console.css"/>
        <Title text="Admin Console"/>

        <Router>
            <AppLayout/>
        </Router>
    }
}

/// Layout shell hosting the guard pipeline.
///
/// One effect per path change: sync the active language from the URL (the
/// URL is the source of truth), run the gate pipeline once, and hand at
/// most one decision to the loop-safe executor. While the session loads,
/// route content is replaced by a blocking spinner.
#[component]
fn AppLayout() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let lang = expect_context::<RwSignal<Language>>();
    let pathname = use_location().pathname;
    let cfg = StoredValue::new(GuardConfig::default());

    // Session bootstrap: resolve immediately without a credential, fetch
    // the profile otherwise. A duplicate in-flight fetch on rapid remount
    // is tolerated; resolving the same facts twice is idempotent.
    Effect::new(move || {
        if !auth.get_untracked().loading {
            return;
        }
        match auth::bootstrap(&LocalStore) {
            SessionBootstrap::Anonymous => auth.update(|a| a.resolve(None)),
            SessionBootstrap::FetchProfile { admin } => {
                auth.update(|a| a.is_admin = admin);
                #[cfg(feature = "hydrate")]
                leptos::task::spawn_local(async move {
                    let user = crate::net::api::fetch_profile(admin).await;
                    auth.update(|a| a.resolve(user));
                });
                #[cfg(not(feature = "hydrate"))]
                auth.update(|a| a.resolve(None));
            }
        }
    });

    // Guard pipeline, re-run on every path change and session change.
    let navigate = use_navigate();
    let executor = RedirectExecutor::new(move |target: &str| {
        let opts = NavigateOptions {
            replace: true,
            ..NavigateOptions::default()
        };
        navigate(target, opts);
    });
    Effect::new(move || {
        let current = pathname.get();

        // URL is the source of truth for language; persist what it says.
        let info = path::normalize(&current, lang.get_untracked());
        if let Some(url_lang) = info.lang {
            if url_lang != lang.get_untracked() {
                lang.set(url_lang);
            }
            url_lang.persist(&LocalStore);
        }

        let session = auth.get();
        let permissions =
            PermissionSet::from_role(session.user.as_ref().and_then(|u| u.role.as_ref()));
        let decision = cfg.with_value(|cfg| {
            pipeline::evaluate(&session, &current, lang.get_untracked(), &permissions, cfg)
        });
        if let Some(d) = &decision {
            leptos::logging::log!("redirect {:?} -> {}", d.reason, d.target);
        }
        executor.execute(decision, &current);
    });

    let is_auth_route = move || cfg.with_value(|cfg| cfg.is_auth_route(&pathname.get()));

    view! {
        <Show when=move || !auth.get().loading fallback=Spinner>
            <div class="app" dir=move || lang.get().dir()>
                <Show when=move || !is_auth_route()>
                    <Sidebar/>
                </Show>
                <div class="app__main">
                    <Show when=move || !is_auth_route()>
                        <header class="app__header">
                            <LangSwitch/>
                        </header>
                    </Show>
                    <main>
                        <PageRoutes/>
                    </main>
                </div>
            </div>
        </Show>
    }
}

/// Route table. Every page lives under a language prefix; anything else is
/// normalized into one by the guard.
#[component]
fn PageRoutes() -> impl IntoView {
    view! {
        <Routes fallback=Spinner>
            <Route
                path=(ParamSegment("lang"), StaticSegment("login"))
                view=LoginPage
            />
            <Route
                path=(ParamSegment("lang"), StaticSegment("admin"), StaticSegment("login"))
                view=AdminLoginPage
            />
            <Route
                path=(ParamSegment("lang"), StaticSegment("verify-otp"))
                view=VerifyOtpPage
            />
            <Route
                path=(ParamSegment("lang"), StaticSegment("admin"), StaticSegment("verify-otp"))
                view=AdminVerifyOtpPage
            />
            <Route
                path=(ParamSegment("lang"), StaticSegment("dashboard"))
                view=DashboardPage
            />
            <Route
                path=(ParamSegment("lang"), StaticSegment("live-chat"))
                view=LiveChatPage
            />
        </Routes>
    }
}
